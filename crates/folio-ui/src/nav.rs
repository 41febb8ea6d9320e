//! Mobile navigation menu state.

use serde::Serialize;

/// Viewport width at which the desktop layout takes over.
pub const DEFAULT_BREAKPOINT: u32 = 768;

/// Class applied to the menu and hamburger while the menu is open.
pub const ACTIVE_CLASS: &str = "active";

/// An input the navigation menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// The hamburger button was pressed.
    Toggle,
    /// A link inside the menu was followed.
    LinkActivated,
    /// The Escape key was pressed.
    Escape,
    /// The viewport was resized to the given width in pixels.
    Resize(u32),
}

/// The collapsible navigation menu shown on narrow viewports.
///
/// Every operation returns `true` if the open state changed, so callers
/// know when to re-render.
#[derive(Debug, Clone, Serialize)]
pub struct MobileNav {
    open: bool,
    breakpoint: u32,
}

impl MobileNav {
    /// Creates a closed menu with the default breakpoint.
    pub fn new() -> Self {
        Self::with_breakpoint(DEFAULT_BREAKPOINT)
    }

    pub fn with_breakpoint(breakpoint: u32) -> Self {
        Self {
            open: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        true
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Following a link closes the menu so the target section is visible.
    pub fn link_activated(&mut self) -> bool {
        self.close()
    }

    pub fn escape_pressed(&mut self) -> bool {
        self.close()
    }

    /// Closes the menu once the viewport is wide enough for the full nav bar.
    pub fn viewport_resized(&mut self, width: u32) -> bool {
        if width >= self.breakpoint {
            self.close()
        } else {
            false
        }
    }

    /// Dispatches an action to the matching operation.
    pub fn handle(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Toggle => self.toggle(),
            NavAction::LinkActivated => self.link_activated(),
            NavAction::Escape => self.escape_pressed(),
            NavAction::Resize(width) => self.viewport_resized(width),
        }
    }

    /// Value for the hamburger button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Classes for the menu element.
    pub fn menu_classes(&self) -> Vec<&'static str> {
        self.classes("nav-menu")
    }

    /// Classes for the hamburger button.
    pub fn hamburger_classes(&self) -> Vec<&'static str> {
        self.classes("hamburger")
    }

    fn classes(&self, base: &'static str) -> Vec<&'static str> {
        let mut classes = vec![base];
        if self.open {
            classes.push(ACTIVE_CLASS);
        }
        classes
    }
}

impl Default for MobileNav {
    fn default() -> Self {
        Self::new()
    }
}
