//! Theme change notifications.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::Serialize;

use crate::mode::{EffectiveTheme, ThemeMode};

/// Broadcast after every theme application.
///
/// Fired for explicit changes and for OS-driven re-application while the
/// preference is `System`, in which case `theme` is unchanged and only
/// `effective` may differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeChange {
    pub theme: ThemeMode,
    pub effective: EffectiveTheme,
}

/// Handle returned by [`ThemeController::subscribe`](crate::ThemeController::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Rc<dyn Fn(&ThemeChange)>;

/// Subscriber list for [`ThemeChange`] events.
///
/// Observers are called in subscription order from a snapshot of the list,
/// so an observer may subscribe, unsubscribe, or change the theme again
/// while being notified.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(ObserverId, Observer)>>,
}

impl Observers {
    pub(crate) fn subscribe(&self, observer: impl Fn(&ThemeChange) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    pub(crate) fn unsubscribe(&self, id: ObserverId) -> bool {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(entry, _)| *entry != id);
        entries.len() != before
    }

    pub(crate) fn emit(&self, change: &ThemeChange) {
        let snapshot: Vec<Observer> = self
            .entries
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in snapshot {
            observer(change);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}
