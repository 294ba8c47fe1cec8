//! One-shot destruction notifications.
//!
//! Every engine object carries a [`DestroySignal`]. The scene fires it exactly
//! once when the object is torn down, and every subscribed listener runs once
//! with the id of the destroyed object. Listeners are dropped after they run;
//! there is no manual unsubscribe.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::id::ObjectId;

type Listener = Box<dyn FnOnce(ObjectId)>;

struct SignalState {
    object: ObjectId,
    fired: bool,
    listeners: Vec<Listener>,
}

/// A cloneable handle to an object's one-shot destroy event.
///
/// Clones share state: firing through any clone fires for all of them.
#[derive(Clone)]
pub struct DestroySignal {
    state: Rc<RefCell<SignalState>>,
}

impl DestroySignal {
    /// Create an unfired signal for `object`.
    pub(crate) fn new(object: ObjectId) -> Self {
        Self {
            state: Rc::new(RefCell::new(SignalState {
                object,
                fired: false,
                listeners: Vec::new(),
            })),
        }
    }

    /// Returns `true` once the signal has fired.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.state.borrow().fired
    }

    /// Number of listeners still waiting for the signal.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }

    /// Register a listener.
    ///
    /// If the signal has already fired the listener runs immediately, so a
    /// late subscriber still observes the destruction.
    pub fn subscribe(&self, listener: impl FnOnce(ObjectId) + 'static) {
        let object = {
            let mut state = self.state.borrow_mut();
            if !state.fired {
                state.listeners.push(Box::new(listener));
                return;
            }
            state.object
        };
        listener(object);
    }

    /// Fire the signal, running every queued listener in subscription order.
    ///
    /// Returns the number of listeners that ran. Firing an already-fired
    /// signal does nothing and returns 0.
    pub fn fire(&self) -> usize {
        let (object, listeners) = {
            let mut state = self.state.borrow_mut();
            if state.fired {
                return 0;
            }
            state.fired = true;
            (state.object, std::mem::take(&mut state.listeners))
        };

        // No borrow is held here: listeners may subscribe (and run at once)
        // or inspect the signal.
        let count = listeners.len();
        for listener in listeners {
            listener(object);
        }
        count
    }

    /// Returns `true` if both handles refer to the same signal.
    #[must_use]
    pub fn ptr_eq(&self, other: &DestroySignal) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for DestroySignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("DestroySignal")
            .field("object", &state.object)
            .field("fired", &state.fired)
            .field("listeners", &state.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_fire_runs_listeners_once() {
        let signal = DestroySignal::new(ObjectId::next());
        let hits = Rc::new(Cell::new(0));

        for _ in 0..2 {
            let hits = hits.clone();
            signal.subscribe(move |_| hits.set(hits.get() + 1));
        }
        assert_eq!(signal.listener_count(), 2);

        assert_eq!(signal.fire(), 2);
        assert_eq!(hits.get(), 2);
        assert!(signal.has_fired());
        assert_eq!(signal.listener_count(), 0);

        // One-shot: a second fire is a no-op.
        assert_eq!(signal.fire(), 0);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_listener_receives_object_id() {
        let object = ObjectId::next();
        let signal = DestroySignal::new(object);
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        signal.subscribe(move |id| sink.set(Some(id)));
        signal.fire();
        assert_eq!(seen.get(), Some(object));
    }

    #[test]
    fn test_late_subscriber_runs_immediately() {
        let signal = DestroySignal::new(ObjectId::next());
        signal.fire();

        let hit = Rc::new(Cell::new(false));
        let sink = hit.clone();
        signal.subscribe(move |_| sink.set(true));
        assert!(hit.get());
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_subscribe_during_fire() {
        let signal = DestroySignal::new(ObjectId::next());
        let hit = Rc::new(Cell::new(false));

        let inner_signal = signal.clone();
        let sink = hit.clone();
        signal.subscribe(move |_| {
            inner_signal.subscribe(move |_| sink.set(true));
        });

        assert_eq!(signal.fire(), 1);
        assert!(hit.get());
    }

    #[test]
    fn test_clones_share_state() {
        let object = ObjectId::next();
        let signal = DestroySignal::new(object);
        let other = signal.clone();
        assert!(signal.ptr_eq(&other));
        other.fire();
        assert!(signal.has_fired());
        assert!(!signal.ptr_eq(&DestroySignal::new(object)));
    }
}
