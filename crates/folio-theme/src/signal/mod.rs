//! OS appearance signals.
//!
//! An [`AppearanceSignal`] reports whether the operating system prefers a
//! light or dark appearance and notifies listeners when that changes.
//!
//! - [`OsAppearance`]: Detects the real OS setting via `dark-light`
//! - [`ManualAppearance`]: A signal driven by hand, for tests and demos

mod manual;
mod os;

use std::cell::RefCell;
use std::rc::Rc;

use crate::mode::ColorMode;

pub use manual::ManualAppearance;
pub use os::{os_color_mode, ColorModeDetector, OsAppearance};

/// Callback invoked with the new color mode after the signal changes.
pub type AppearanceListener = Box<dyn Fn(ColorMode)>;

/// Handle returned by [`AppearanceSignal::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// An observable source of the OS light/dark preference.
pub trait AppearanceSignal {
    /// Returns the color mode the OS currently reports.
    fn current(&self) -> ColorMode;

    /// Registers a listener called on every subsequent change.
    fn subscribe(&self, listener: AppearanceListener) -> ListenerId;

    /// Removes a listener. Returns `false` if it was not registered.
    fn unsubscribe(&self, id: ListenerId) -> bool;
}

impl<A: AppearanceSignal + ?Sized> AppearanceSignal for Box<A> {
    fn current(&self) -> ColorMode {
        (**self).current()
    }

    fn subscribe(&self, listener: AppearanceListener) -> ListenerId {
        (**self).subscribe(listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        (**self).unsubscribe(id)
    }
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<(ListenerId, Rc<dyn Fn(ColorMode)>)>,
}

/// Listener list shared by the signal implementations.
///
/// Dispatch works from a snapshot so a listener may subscribe further
/// listeners, unsubscribe, or trigger another change, without a borrow
/// conflict.
#[derive(Default, Clone)]
pub(crate) struct Listeners {
    inner: Rc<RefCell<ListenerTable>>,
}

impl Listeners {
    pub(crate) fn push(&self, listener: AppearanceListener) -> ListenerId {
        let mut table = self.inner.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        table.entries.push((id, Rc::from(listener)));
        id
    }

    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let mut table = self.inner.borrow_mut();
        let before = table.entries.len();
        table.entries.retain(|(entry, _)| *entry != id);
        table.entries.len() != before
    }

    pub(crate) fn notify(&self, mode: ColorMode) {
        let snapshot: Vec<_> = self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(mode);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}
