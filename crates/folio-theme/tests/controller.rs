//! Behavioral tests for the theme controller.
//!
//! These exercise the controller through its public API with in-memory
//! fakes for the store and the OS signal, plus a real file store for
//! persistence across restarts.

use std::cell::RefCell;
use std::rc::Rc;

use folio_theme::{
    ColorMode, EffectiveTheme, FileStore, ManualAppearance, MemoryStore, PreferenceStore,
    StoreError, ThemeChange, ThemeController, ThemeMode, ThemeView, ToggleIcon,
};
use proptest::prelude::*;
use tempfile::TempDir;

/// Store whose reads succeed but whose writes always fail.
#[derive(Clone, Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

/// Store whose reads fail.
struct BrokenReadStore;

impl PreferenceStore for BrokenReadStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

fn record_changes(controller: &ThemeController) -> Rc<RefCell<Vec<ThemeChange>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    controller.subscribe(move |change| sink.borrow_mut().push(*change));
    log
}

fn setup(stored: Option<&str>, os: ColorMode) -> (ThemeController, ManualAppearance) {
    let store = match stored {
        Some(value) => MemoryStore::new().with_entry("theme", value),
        None => MemoryStore::new(),
    };
    let signal = ManualAppearance::new(os);
    let controller = ThemeController::new(store, signal.clone());
    controller.initialize();
    (controller, signal)
}

#[test]
fn test_set_then_get_for_every_mode() {
    let (controller, _) = setup(None, ColorMode::Light);
    for mode in ThemeMode::ALL {
        controller.set_theme(mode);
        assert_eq!(controller.theme(), mode);
    }
}

#[test]
fn test_invalid_name_leaves_theme_unchanged() {
    let (controller, _) = setup(Some("light"), ColorMode::Light);
    let log = record_changes(&controller);

    assert!(!controller.set_theme_name("blue"));
    assert!(!controller.set_theme_name(""));
    assert_eq!(controller.theme(), ThemeMode::Light);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_stored_dark_initializes_dark() {
    let (controller, _) = setup(Some("dark"), ColorMode::Light);
    assert_eq!(controller.theme(), ThemeMode::Dark);
    assert_eq!(controller.document().theme_marker(), Some("dark"));
    assert_eq!(controller.effective_theme(), EffectiveTheme::Dark);
}

#[test]
fn test_missing_value_initializes_system() {
    let (controller, _) = setup(None, ColorMode::Light);
    assert_eq!(controller.theme(), ThemeMode::System);
    assert_eq!(controller.document().theme_marker(), None);
}

#[test]
fn test_unrecognized_value_initializes_system() {
    for stored in ["sepia", "DARK", "", " light"] {
        let (controller, _) = setup(Some(stored), ColorMode::Light);
        assert_eq!(controller.theme(), ThemeMode::System, "stored {:?}", stored);
        assert_eq!(controller.document().theme_marker(), None);
    }
}

#[test]
fn test_unreadable_store_initializes_system() {
    let controller = ThemeController::new(BrokenReadStore, ManualAppearance::default());
    controller.initialize();
    assert_eq!(controller.theme(), ThemeMode::System);
}

#[test]
fn test_initialize_emits_change() {
    let store = MemoryStore::new().with_entry("theme", "light");
    let controller = ThemeController::new(store, ManualAppearance::default());
    let log = record_changes(&controller);

    controller.initialize();
    assert_eq!(
        *log.borrow(),
        vec![ThemeChange {
            theme: ThemeMode::Light,
            effective: EffectiveTheme::Light,
        }]
    );
}

#[test]
fn test_system_mode_follows_os_change() {
    let (controller, signal) = setup(None, ColorMode::Light);
    let log = record_changes(&controller);
    assert_eq!(controller.effective_theme(), EffectiveTheme::Light);

    signal.set(ColorMode::Dark);

    assert_eq!(
        *log.borrow(),
        vec![ThemeChange {
            theme: ThemeMode::System,
            effective: EffectiveTheme::Dark,
        }]
    );
    assert_eq!(controller.theme(), ThemeMode::System);
    assert_eq!(controller.effective_theme(), EffectiveTheme::Dark);
    assert_eq!(controller.document().theme_marker(), None);
}

#[test]
fn test_explicit_choice_ignores_os_change() {
    let (controller, signal) = setup(Some("dark"), ColorMode::Light);
    let log = record_changes(&controller);

    signal.set(ColorMode::Dark);
    signal.set(ColorMode::Light);

    assert!(log.borrow().is_empty());
    assert_eq!(controller.theme(), ThemeMode::Dark);
}

#[test]
fn test_write_failure_keeps_in_memory_choice() {
    let controller = ThemeController::new(ReadOnlyStore::default(), ManualAppearance::default());
    controller.initialize();

    controller.set_theme(ThemeMode::Light);
    assert_eq!(controller.theme(), ThemeMode::Light);
    assert_eq!(controller.document().theme_marker(), Some("light"));

    controller.cycle_theme();
    assert_eq!(controller.theme(), ThemeMode::Dark);
}

#[test]
fn test_cycle_walks_fixed_order() {
    let (controller, _) = setup(None, ColorMode::Light);
    assert_eq!(controller.cycle_theme(), ThemeMode::Light);
    assert_eq!(controller.cycle_theme(), ThemeMode::Dark);
    assert_eq!(controller.cycle_theme(), ThemeMode::System);
}

#[test]
fn test_cycle_persists_each_step() {
    let store = MemoryStore::new();
    let controller = ThemeController::new(store.clone(), ManualAppearance::default());
    controller.initialize();

    controller.cycle_theme();
    assert_eq!(store.value("theme").as_deref(), Some("light"));
    controller.cycle_theme();
    assert_eq!(store.value("theme").as_deref(), Some("dark"));
    controller.cycle_theme();
    assert_eq!(store.value("theme").as_deref(), Some("system"));
}

#[test]
fn test_every_apply_notifies_even_without_change() {
    let (controller, _) = setup(Some("dark"), ColorMode::Light);
    let log = record_changes(&controller);

    controller.set_theme(ThemeMode::Dark);
    controller.set_theme(ThemeMode::Dark);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn test_unsubscribed_observer_is_not_called() {
    let (controller, _) = setup(None, ColorMode::Light);
    let log = Rc::new(RefCell::new(0));
    let sink = log.clone();
    let id = controller.subscribe(move |_| *sink.borrow_mut() += 1);

    controller.set_theme(ThemeMode::Light);
    assert!(controller.unsubscribe(id));
    controller.set_theme(ThemeMode::Dark);
    assert_eq!(*log.borrow(), 1);
}

#[test]
fn test_preference_survives_restart_with_file_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");

    {
        let controller =
            ThemeController::new(FileStore::new(&path), ManualAppearance::default());
        controller.initialize();
        controller.set_theme(ThemeMode::Dark);
    }

    let controller = ThemeController::new(FileStore::new(&path), ManualAppearance::default());
    controller.initialize();
    assert_eq!(controller.theme(), ThemeMode::Dark);
}

struct RecordingView {
    seen: RefCell<Vec<(ThemeMode, String)>>,
}

impl ThemeView for RecordingView {
    fn refresh(&self, mode: ThemeMode, icon: &ToggleIcon) {
        self.seen.borrow_mut().push((mode, icon.label.clone()));
    }
}

#[test]
fn test_views_refresh_on_apply_and_os_change() {
    let (controller, signal) = setup(None, ColorMode::Light);
    let view = Rc::new(RecordingView {
        seen: RefCell::new(Vec::new()),
    });
    controller.attach_view(view.clone());

    signal.set(ColorMode::Dark);
    controller.set_theme(ThemeMode::Light);

    assert_eq!(
        *view.seen.borrow(),
        vec![
            (ThemeMode::System, "System theme (light)".to_string()),
            (ThemeMode::System, "System theme (dark)".to_string()),
            (ThemeMode::Light, "Light theme".to_string()),
        ]
    );
}

#[test]
fn test_views_refresh_before_observers() {
    let (controller, _) = setup(None, ColorMode::Light);
    let order = Rc::new(RefCell::new(Vec::new()));

    struct OrderView(Rc<RefCell<Vec<&'static str>>>);
    impl ThemeView for OrderView {
        fn refresh(&self, _mode: ThemeMode, _icon: &ToggleIcon) {
            self.0.borrow_mut().push("view");
        }
    }

    controller.attach_view(Rc::new(OrderView(order.clone())));
    let sink = order.clone();
    controller.subscribe(move |_| sink.borrow_mut().push("observer"));
    order.borrow_mut().clear();

    controller.set_theme(ThemeMode::Dark);
    assert_eq!(*order.borrow(), vec!["view", "observer"]);
}

fn any_mode() -> impl Strategy<Value = ThemeMode> {
    prop::sample::select(ThemeMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_three_cycles_return_to_start(start in any_mode()) {
        let (controller, _) = setup(Some(start.as_str()), ColorMode::Light);
        controller.cycle_theme();
        controller.cycle_theme();
        controller.cycle_theme();
        prop_assert_eq!(controller.theme(), start);
    }

    #[test]
    fn prop_set_get_roundtrip(first in any_mode(), second in any_mode()) {
        let (controller, _) = setup(None, ColorMode::Dark);
        controller.set_theme(first);
        controller.set_theme(second);
        prop_assert_eq!(controller.theme(), second);
        let document = controller.document();
        prop_assert_eq!(document.theme_marker(), second.marker());
    }

    #[test]
    fn prop_effective_is_derived(mode in any_mode(), dark in any::<bool>()) {
        let os = if dark { ColorMode::Dark } else { ColorMode::Light };
        let (controller, _) = setup(None, os);
        controller.set_theme(mode);
        prop_assert_eq!(controller.effective_theme(), mode.resolve(os));
    }
}
