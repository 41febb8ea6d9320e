//! The theme preference controller.
//!
//! [`ThemeController`] owns the user's [`ThemeMode`], persists it through a
//! [`PreferenceStore`], tracks an [`AppearanceSignal`] for `System` mode,
//! marks the [`DocumentRoot`] and broadcasts [`ThemeChange`] events.
//!
//! # Lifecycle
//!
//! 1. Build the controller once at startup with its store and signal.
//! 2. Call [`initialize`](ThemeController::initialize) to load the stored
//!    preference, apply it and start following the OS signal.
//! 3. Hand clones of the controller to whatever needs theme state. Clones
//!    are cheap handles to the same controller.
//!
//! # Failure Handling
//!
//! No public operation returns an error. Store failures are logged and the
//! controller carries on with in-memory state; unrecognised mode names are
//! ignored.
//!
//! # Example
//!
//! ```rust
//! use folio_theme::{ColorMode, ManualAppearance, MemoryStore, ThemeController, ThemeMode};
//!
//! let store = MemoryStore::new().with_entry("theme", "dark");
//! let controller = ThemeController::new(store, ManualAppearance::new(ColorMode::Light));
//! controller.initialize();
//!
//! assert_eq!(controller.theme(), ThemeMode::Dark);
//! assert_eq!(controller.document().theme_marker(), Some("dark"));
//!
//! controller.cycle_theme();
//! assert_eq!(controller.theme(), ThemeMode::System);
//! assert_eq!(controller.document().theme_marker(), None);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::document::DocumentRoot;
use crate::event::{ObserverId, Observers, ThemeChange};
use crate::mode::{ColorMode, EffectiveTheme, ThemeMode};
use crate::signal::{AppearanceSignal, ListenerId};
use crate::store::{PreferenceStore, DEFAULT_THEME_KEY};
use crate::toggle::{ThemeView, ToggleIcon};

struct Shared {
    key: String,
    mode: Cell<ThemeMode>,
    initialized: Cell<bool>,
    store: RefCell<Box<dyn PreferenceStore>>,
    signal: Box<dyn AppearanceSignal>,
    subscription: Cell<Option<ListenerId>>,
    document: RefCell<DocumentRoot>,
    views: RefCell<Vec<Rc<dyn ThemeView>>>,
    observers: Observers,
}

impl Drop for Shared {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.signal.unsubscribe(id);
        }
    }
}

/// Owns the theme preference and applies it.
///
/// Single-threaded: the controller is a reference-counted handle and is
/// neither `Send` nor `Sync`. All operations complete synchronously, and
/// observers are notified after the state change is finished, so they may
/// call back into the controller.
#[derive(Clone)]
pub struct ThemeController {
    shared: Rc<Shared>,
}

impl ThemeController {
    /// Creates a controller using the default storage key.
    ///
    /// The controller starts in `System` mode and does nothing until
    /// [`initialize`](Self::initialize) is called.
    pub fn new<S, A>(store: S, signal: A) -> Self
    where
        S: PreferenceStore + 'static,
        A: AppearanceSignal + 'static,
    {
        Self::builder(store, signal).build()
    }

    /// Creates a builder for a controller with a custom key or document.
    pub fn builder<S, A>(store: S, signal: A) -> ThemeControllerBuilder
    where
        S: PreferenceStore + 'static,
        A: AppearanceSignal + 'static,
    {
        ThemeControllerBuilder {
            store: Box::new(store),
            signal: Box::new(signal),
            key: DEFAULT_THEME_KEY.to_string(),
            document: DocumentRoot::new(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Loads the stored preference, applies it and subscribes to OS changes.
    ///
    /// A missing, unreadable or unrecognised stored value yields `System`.
    /// Only the first call has any effect.
    pub fn initialize(&self) {
        if self.shared.initialized.replace(true) {
            tracing::debug!("theme controller already initialized");
            return;
        }

        let mode = self.read_persisted();
        self.apply_theme(mode);

        let weak = Rc::downgrade(&self.shared);
        let id = self.shared.signal.subscribe(Box::new(move |os| {
            if let Some(shared) = weak.upgrade() {
                ThemeController { shared }.handle_appearance_change(os);
            }
        }));
        self.shared.subscription.set(Some(id));
    }

    /// Returns `true` once [`initialize`](Self::initialize) has run.
    pub fn is_initialized(&self) -> bool {
        self.shared.initialized.get()
    }

    fn read_persisted(&self) -> ThemeMode {
        let stored = self.shared.store.borrow().get(&self.shared.key);
        match stored {
            Ok(Some(value)) => value.parse::<ThemeMode>().unwrap_or_else(|e| {
                tracing::debug!("ignoring stored theme: {}", e);
                ThemeMode::System
            }),
            Ok(None) => ThemeMode::System,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                ThemeMode::System
            }
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Makes `mode` current without persisting it.
    ///
    /// Updates the document marker, refreshes attached views, then notifies
    /// every observer before returning.
    pub fn apply_theme(&self, mode: ThemeMode) {
        self.shared.mode.set(mode);
        self.shared.document.borrow_mut().mark_theme(mode);

        let icon = self.toggle_icon();
        let views: Vec<_> = self.shared.views.borrow().iter().cloned().collect();
        for view in views {
            view.refresh(mode, &icon);
        }

        self.shared.observers.emit(&ThemeChange {
            theme: mode,
            effective: icon.effective,
        });
    }

    /// Persists `mode` and applies it.
    ///
    /// A failed write is logged; the mode is applied regardless and stays
    /// in effect for the rest of the session.
    pub fn set_theme(&self, mode: ThemeMode) {
        let persisted = self
            .shared
            .store
            .borrow_mut()
            .set(&self.shared.key, mode.as_str());
        if let Err(e) = persisted {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
        self.apply_theme(mode);
    }

    /// Sets the theme from its name.
    ///
    /// Unrecognised names are ignored. Returns `true` if the name was
    /// accepted.
    pub fn set_theme_name(&self, name: &str) -> bool {
        match name.parse::<ThemeMode>() {
            Ok(mode) => {
                self.set_theme(mode);
                true
            }
            Err(e) => {
                tracing::debug!("ignoring theme request: {}", e);
                false
            }
        }
    }

    /// Advances `System -> Light -> Dark -> System` and returns the new mode.
    pub fn cycle_theme(&self) -> ThemeMode {
        let next = self.theme().next();
        self.set_theme(next);
        next
    }

    /// Reacts to an OS appearance change.
    ///
    /// Re-applies `System` so dependants pick up the new effective theme.
    /// An explicit `Light` or `Dark` choice is left alone.
    pub fn handle_appearance_change(&self, os: ColorMode) {
        if self.theme() == ThemeMode::System {
            self.apply_theme(ThemeMode::System);
        } else {
            tracing::debug!(
                "OS appearance now {:?}; keeping explicit {} theme",
                os,
                self.theme()
            );
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns the current preference.
    pub fn theme(&self) -> ThemeMode {
        self.shared.mode.get()
    }

    /// Derives the theme currently shown.
    pub fn effective_theme(&self) -> EffectiveTheme {
        self.theme().resolve(self.shared.signal.current())
    }

    /// Derives the toggle icon for the current state.
    pub fn toggle_icon(&self) -> ToggleIcon {
        ToggleIcon::for_mode(self.theme(), self.shared.signal.current())
    }

    /// Returns a snapshot of the document root.
    pub fn document(&self) -> DocumentRoot {
        self.shared.document.borrow().clone()
    }

    /// Returns the key the preference is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.shared.key
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Registers an observer for [`ThemeChange`] events.
    pub fn subscribe(&self, observer: impl Fn(&ThemeChange) + 'static) -> ObserverId {
        self.shared.observers.subscribe(observer)
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.shared.observers.unsubscribe(id)
    }

    /// Attaches a view and refreshes it with the current state.
    pub fn attach_view(&self, view: Rc<dyn ThemeView>) {
        view.refresh(self.theme(), &self.toggle_icon());
        self.shared.views.borrow_mut().push(view);
    }
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("key", &self.shared.key)
            .field("mode", &self.theme())
            .field("initialized", &self.is_initialized())
            .field("observers", &self.shared.observers.len())
            .finish()
    }
}

/// Builder for [`ThemeController`].
pub struct ThemeControllerBuilder {
    store: Box<dyn PreferenceStore>,
    signal: Box<dyn AppearanceSignal>,
    key: String,
    document: DocumentRoot,
}

impl ThemeControllerBuilder {
    /// Sets the key the preference is stored under.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the document root the theme marker is applied to.
    pub fn document(mut self, document: DocumentRoot) -> Self {
        self.document = document;
        self
    }

    pub fn build(self) -> ThemeController {
        ThemeController {
            shared: Rc::new(Shared {
                key: self.key,
                mode: Cell::new(ThemeMode::System),
                initialized: Cell::new(false),
                store: RefCell::new(self.store),
                signal: self.signal,
                subscription: Cell::new(None),
                document: RefCell::new(self.document),
                views: RefCell::new(Vec::new()),
                observers: Observers::default(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::ManualAppearance;
    use crate::store::{DisabledStore, MemoryStore};

    fn controller_with(store: MemoryStore) -> ThemeController {
        ThemeController::new(store, ManualAppearance::new(ColorMode::Light))
    }

    #[test]
    fn test_starts_in_system_before_initialize() {
        let controller = controller_with(MemoryStore::new());
        assert_eq!(controller.theme(), ThemeMode::System);
        assert!(!controller.is_initialized());
    }

    #[test]
    fn test_initialize_reads_custom_key() {
        let store = MemoryStore::new().with_entry("site-theme", "light");
        let controller = ThemeController::builder(store, ManualAppearance::default())
            .key("site-theme")
            .build();
        controller.initialize();
        assert_eq!(controller.theme(), ThemeMode::Light);
        assert_eq!(controller.storage_key(), "site-theme");
    }

    #[test]
    fn test_initialize_twice_is_noop() {
        let store = MemoryStore::new().with_entry("theme", "dark");
        let signal = ManualAppearance::new(ColorMode::Light);
        let controller = ThemeController::new(store, signal.clone());
        controller.initialize();
        controller.set_theme(ThemeMode::Light);
        controller.initialize();

        assert_eq!(controller.theme(), ThemeMode::Light);
        assert_eq!(signal.listener_count(), 1);
    }

    #[test]
    fn test_set_theme_persists_name() {
        let store = MemoryStore::new();
        let controller = controller_with(store.clone());
        controller.initialize();
        controller.set_theme(ThemeMode::Dark);
        assert_eq!(store.value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_apply_theme_does_not_persist() {
        let store = MemoryStore::new();
        let controller = controller_with(store.clone());
        controller.apply_theme(ThemeMode::Dark);
        assert_eq!(controller.theme(), ThemeMode::Dark);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_theme_name_rejects_unknown() {
        let controller = controller_with(MemoryStore::new());
        controller.set_theme(ThemeMode::Light);
        assert!(!controller.set_theme_name("purple"));
        assert_eq!(controller.theme(), ThemeMode::Light);
        assert!(controller.set_theme_name("dark"));
        assert_eq!(controller.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_disabled_store_still_applies() {
        let controller = ThemeController::new(DisabledStore, ManualAppearance::default());
        controller.initialize();
        assert_eq!(controller.theme(), ThemeMode::System);
        controller.set_theme(ThemeMode::Dark);
        assert_eq!(controller.theme(), ThemeMode::Dark);
        assert_eq!(controller.document().theme_marker(), Some("dark"));
    }

    #[test]
    fn test_document_keeps_existing_attributes() {
        let controller = ThemeController::builder(MemoryStore::new(), ManualAppearance::default())
            .document(DocumentRoot::new().with_attribute("lang", "en"))
            .build();
        controller.set_theme(ThemeMode::Light);
        let doc = controller.document();
        assert_eq!(doc.attribute("lang"), Some("en"));
        assert_eq!(doc.theme_marker(), Some("light"));
    }

    #[test]
    fn test_observer_may_change_theme_during_notification() {
        let controller = controller_with(MemoryStore::new());
        let handle = controller.clone();
        controller.subscribe(move |change| {
            if change.theme == ThemeMode::Light {
                handle.set_theme(ThemeMode::Dark);
            }
        });

        controller.set_theme(ThemeMode::Light);
        assert_eq!(controller.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_dropped_controller_ignores_signal() {
        let signal = ManualAppearance::new(ColorMode::Light);
        let events = Rc::new(Cell::new(0));
        {
            let controller = ThemeController::new(MemoryStore::new(), signal.clone());
            controller.initialize();
            let counter = events.clone();
            controller.subscribe(move |_| counter.set(counter.get() + 1));
            assert_eq!(signal.listener_count(), 1);
        }

        assert_eq!(signal.listener_count(), 0);
        signal.set(ColorMode::Dark);
        assert_eq!(events.get(), 0);
    }

    #[test]
    fn test_controllers_on_shared_signal_release_listeners() {
        let signal = ManualAppearance::new(ColorMode::Light);
        let kept = ThemeController::new(MemoryStore::new(), signal.clone());
        kept.initialize();
        for _ in 0..3 {
            let temporary = ThemeController::new(MemoryStore::new(), signal.clone());
            temporary.initialize();
        }

        assert_eq!(signal.listener_count(), 1);
        signal.set(ColorMode::Dark);
        assert_eq!(kept.effective_theme(), EffectiveTheme::Dark);
    }

    #[test]
    fn test_debug_output_names_mode() {
        let controller = controller_with(MemoryStore::new());
        controller.apply_theme(ThemeMode::Dark);
        let debug = format!("{:?}", controller);
        assert!(debug.contains("Dark"));
    }
}
