//! Hand-driven appearance signal.

use std::cell::Cell;
use std::rc::Rc;

use super::{AppearanceListener, AppearanceSignal, ListenerId, Listeners};
use crate::mode::ColorMode;

/// An appearance signal whose value is set explicitly.
///
/// Clones share state: keep one clone to flip the value after handing
/// another to a controller.
///
/// # Example
///
/// ```rust
/// use folio_theme::{AppearanceSignal, ColorMode, ManualAppearance};
///
/// let signal = ManualAppearance::new(ColorMode::Light);
/// signal.set(ColorMode::Dark);
/// assert_eq!(signal.current(), ColorMode::Dark);
/// ```
#[derive(Debug, Clone)]
pub struct ManualAppearance {
    mode: Rc<Cell<ColorMode>>,
    listeners: Listeners,
}

impl ManualAppearance {
    /// Creates a signal starting at `mode`.
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode: Rc::new(Cell::new(mode)),
            listeners: Listeners::default(),
        }
    }

    /// Changes the reported mode, notifying listeners if it differs.
    ///
    /// Returns `true` if listeners were notified.
    pub fn set(&self, mode: ColorMode) -> bool {
        if self.mode.replace(mode) == mode {
            return false;
        }
        self.listeners.notify(mode);
        true
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for ManualAppearance {
    fn default() -> Self {
        Self::new(ColorMode::Light)
    }
}

impl AppearanceSignal for ManualAppearance {
    fn current(&self) -> ColorMode {
        self.mode.get()
    }

    fn subscribe(&self, listener: AppearanceListener) -> ListenerId {
        self.listeners.push(listener)
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_set_notifies_on_change() {
        let signal = ManualAppearance::new(ColorMode::Light);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        signal.subscribe(Box::new(move |mode| sink.borrow_mut().push(mode)));

        assert!(signal.set(ColorMode::Dark));
        assert!(signal.set(ColorMode::Light));
        assert_eq!(*seen.borrow(), vec![ColorMode::Dark, ColorMode::Light]);
    }

    #[test]
    fn test_set_same_value_is_silent() {
        let signal = ManualAppearance::new(ColorMode::Dark);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        signal.subscribe(Box::new(move |_| counter.set(counter.get() + 1)));

        assert!(!signal.set(ColorMode::Dark));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_listener_may_read_signal() {
        let signal = ManualAppearance::new(ColorMode::Light);
        let observed = Rc::new(Cell::new(ColorMode::Light));
        let reader = signal.clone();
        let out = observed.clone();
        signal.subscribe(Box::new(move |_| out.set(reader.current())));

        signal.set(ColorMode::Dark);
        assert_eq!(observed.get(), ColorMode::Dark);
    }

    #[test]
    fn test_listener_may_subscribe_during_dispatch() {
        let signal = ManualAppearance::new(ColorMode::Light);
        let inner = signal.clone();
        signal.subscribe(Box::new(move |_| {
            inner.subscribe(Box::new(|_| {}));
        }));

        signal.set(ColorMode::Dark);
        assert_eq!(signal.listener_count(), 2);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let signal = ManualAppearance::new(ColorMode::Light);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let id = signal.subscribe(Box::new(move |_| counter.set(counter.get() + 1)));

        assert!(signal.unsubscribe(id));
        assert!(!signal.unsubscribe(id));
        signal.set(ColorMode::Dark);
        assert_eq!(calls.get(), 0);
        assert_eq!(signal.listener_count(), 0);
    }
}
