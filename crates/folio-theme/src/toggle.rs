//! Theme toggle icons and the views that display them.

use serde::Serialize;

use crate::mode::{ColorMode, EffectiveTheme, ThemeMode};

/// What a theme toggle button shows for the current preference.
///
/// Derived on demand from the mode and, for `System`, the OS color mode.
/// Never cached: call [`ToggleIcon::for_mode`] again after a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleIcon {
    /// Icon identifier, usable as a CSS class suffix.
    pub name: &'static str,
    /// Single-character glyph for text renderings.
    pub glyph: &'static str,
    /// Human-readable description of the active preference.
    pub label: String,
    /// Accessible label describing what activating the toggle does.
    pub action: String,
    /// The theme currently shown.
    pub effective: EffectiveTheme,
}

impl ToggleIcon {
    pub fn for_mode(mode: ThemeMode, os: ColorMode) -> Self {
        let effective = mode.resolve(os);
        let (name, glyph, label) = match mode {
            ThemeMode::Light => ("sun", "☀", "Light theme".to_string()),
            ThemeMode::Dark => ("moon", "☾", "Dark theme".to_string()),
            ThemeMode::System => ("auto", "◐", format!("System theme ({})", effective)),
        };

        Self {
            name,
            glyph,
            label,
            action: format!("Switch to {} theme", mode.next()),
            effective,
        }
    }
}

/// A presentation element that redraws when the theme is applied.
///
/// Views are refreshed by the controller before `ThemeChange` observers run.
pub trait ThemeView {
    fn refresh(&self, mode: ThemeMode, icon: &ToggleIcon);
}
