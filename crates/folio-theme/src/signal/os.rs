//! Appearance signal backed by the operating system setting.

use std::cell::Cell;
use std::rc::Rc;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::{AppearanceListener, AppearanceSignal, ListenerId, Listeners};
use crate::mode::ColorMode;

/// Function used to read the current OS color mode.
pub type ColorModeDetector = fn() -> ColorMode;

/// Reads the OS light/dark preference.
///
/// Platforms that report no preference are treated as light.
pub fn os_color_mode() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}

/// The operating system's appearance preference.
///
/// `dark-light` only offers point-in-time detection, so changes are
/// discovered by calling [`poll`](Self::poll) from the host event loop.
/// The last observed value is what [`current`](AppearanceSignal::current)
/// reports between polls. Clones share that value and the listener list, so
/// the host can keep one clone for polling after giving another away.
///
/// # Example
///
/// ```rust
/// use folio_theme::{AppearanceSignal, ColorMode, OsAppearance};
///
/// let signal = OsAppearance::with_detector(|| ColorMode::Dark);
/// assert_eq!(signal.current(), ColorMode::Dark);
/// ```
#[derive(Debug, Clone)]
pub struct OsAppearance {
    detector: ColorModeDetector,
    last: Rc<Cell<ColorMode>>,
    listeners: Listeners,
}

impl OsAppearance {
    /// Creates a signal reading the real OS setting.
    pub fn new() -> Self {
        Self::with_detector(os_color_mode)
    }

    /// Creates a signal that reads the color mode from `detector`.
    ///
    /// This is useful for testing or when you want to force a specific
    /// color mode.
    pub fn with_detector(detector: ColorModeDetector) -> Self {
        Self {
            detector,
            last: Rc::new(Cell::new(detector())),
            listeners: Listeners::default(),
        }
    }

    /// Re-reads the OS setting and notifies listeners if it changed.
    ///
    /// Returns `true` if a change was observed.
    pub fn poll(&self) -> bool {
        let detected = (self.detector)();
        if self.last.replace(detected) == detected {
            return false;
        }
        tracing::debug!("OS appearance changed to {:?}", detected);
        self.listeners.notify(detected);
        true
    }
}

impl Default for OsAppearance {
    fn default() -> Self {
        Self::new()
    }
}

impl AppearanceSignal for OsAppearance {
    fn current(&self) -> ColorMode {
        self.last.get()
    }

    fn subscribe(&self, listener: AppearanceListener) -> ListenerId {
        self.listeners.push(listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}
