//! # Folio Theme - light, dark and system theme preferences
//!
//! `folio-theme` keeps track of a site visitor's theme choice. It persists
//! the choice, follows the operating system's appearance when the visitor
//! has not picked one, marks the document root for stylesheets, and tells
//! interested parts of the page when anything changes.
//!
//! ## Core Concepts
//!
//! - [`ThemeMode`]: The preference, one of `System`, `Light` or `Dark`
//! - [`EffectiveTheme`]: The theme actually shown, derived from the mode and the OS
//! - [`ThemeController`]: Owns the mode and applies it
//! - [`PreferenceStore`]: Where the mode is persisted ([`FileStore`], [`MemoryStore`], [`DisabledStore`])
//! - [`AppearanceSignal`]: The OS light/dark preference ([`OsAppearance`], [`ManualAppearance`])
//! - [`ThemeChange`]: Event broadcast whenever a theme is applied
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use folio_theme::{ColorMode, EffectiveTheme, ManualAppearance, MemoryStore, ThemeController, ThemeMode};
//!
//! let os = ManualAppearance::new(ColorMode::Light);
//! let controller = ThemeController::new(MemoryStore::new(), os.clone());
//!
//! let shown = Rc::new(Cell::new(EffectiveTheme::Light));
//! let sink = shown.clone();
//! controller.subscribe(move |change| sink.set(change.effective));
//!
//! controller.initialize();
//! assert_eq!(controller.theme(), ThemeMode::System);
//!
//! // The OS switching to dark re-applies System mode.
//! os.set(ColorMode::Dark);
//! assert_eq!(shown.get(), EffectiveTheme::Dark);
//! ```
//!
//! ## Failure Model
//!
//! Storage may be missing or broken. Every store error is logged through
//! `tracing` and the controller continues with in-memory state, so theme
//! switching always works for the current session.

mod controller;
mod document;
mod event;
mod mode;
mod render;
mod signal;
mod store;
mod toggle;

pub use controller::{ThemeController, ThemeControllerBuilder};
pub use document::{DocumentRoot, THEME_ATTRIBUTE};
pub use event::{ObserverId, ThemeChange};
pub use mode::{ColorMode, EffectiveTheme, ParseThemeModeError, ThemeMode};
pub use render::{PageRenderer, RenderError};
pub use signal::{
    os_color_mode, AppearanceListener, AppearanceSignal, ColorModeDetector, ListenerId,
    ManualAppearance, OsAppearance,
};
pub use store::{
    DisabledStore, FileStore, MemoryStore, PreferenceStore, StoreError, DEFAULT_THEME_KEY,
};
pub use toggle::{ThemeView, ToggleIcon};
