//! Click ripple feedback for buttons.

use std::time::Duration;

use serde::Serialize;

/// How long a ripple stays in the DOM before removal.
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

/// A button's box, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A circular ripple positioned inside its button.
///
/// `left` and `top` are relative to the button's corner and place the
/// circle's centre under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    #[serde(skip)]
    pub started: Duration,
}

impl Ripple {
    /// Places a ripple for a click at (`click_x`, `click_y`) on `button`.
    ///
    /// The diameter is the button's larger side so the circle covers it
    /// wherever the click lands.
    pub fn at(button: Rect, click_x: f64, click_y: f64, started: Duration) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            left: click_x - button.x - size / 2.0,
            top: click_y - button.y - size / 2.0,
            started,
        }
    }

    pub fn is_expired(&self, now: Duration, lifetime: Duration) -> bool {
        now.saturating_sub(self.started) >= lifetime
    }

    /// Inline style for the ripple `<span>`.
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}px; top: {top}px;",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

/// Live ripples on a page.
#[derive(Debug, Clone)]
pub struct RippleLayer {
    lifetime: Duration,
    ripples: Vec<Ripple>,
}

impl RippleLayer {
    pub fn new() -> Self {
        Self::with_lifetime(RIPPLE_LIFETIME)
    }

    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            lifetime,
            ripples: Vec::new(),
        }
    }

    /// Adds a ripple for a click and returns it.
    pub fn spawn(&mut self, button: Rect, click_x: f64, click_y: f64, now: Duration) -> Ripple {
        let ripple = Ripple::at(button, click_x, click_y, now);
        self.ripples.push(ripple);
        ripple
    }

    /// Drops ripples whose animation has finished; returns how many.
    pub fn prune(&mut self, now: Duration) -> usize {
        let before = self.ripples.len();
        let lifetime = self.lifetime;
        self.ripples.retain(|r| !r.is_expired(now, lifetime));
        before - self.ripples.len()
    }

    pub fn live(&self) -> &[Ripple] {
        &self.ripples
    }
}

impl Default for RippleLayer {
    fn default() -> Self {
        Self::new()
    }
}
