//! Per-owner property side-table.
//!
//! A [`PropertyTable`] maps a component [`TypeTag`] to at most one referenced
//! component. Slots hold their value weakly: the scene keeps objects alive,
//! the table only points at them.
//!
//! A slot reads as empty when it was never filled, was cleared, or holds a
//! value that has since been destroyed. Callers cannot tell these apart.
//! Dead slots are dropped the next time a lookup or count runs into them.
//!
//! When a slot is first filled, the table subscribes to the value's destroy
//! signal and clears the slot when it fires. What happens when a previously
//! overwritten value fires later is governed by [`StaleListenerPolicy`].

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use engine_object::{Component, DestroySignal, Object, ObjectId, TypeTag};
use tracing::{debug, trace};

use crate::config::StaleListenerPolicy;

/// One filled slot.
struct Slot {
    /// Id of the referenced value.
    value: ObjectId,
    /// Type-erased weak pointer to the value.
    target: Weak<dyn Any>,
    /// The value's destroy signal, for destroyed-value checks.
    destroyed: DestroySignal,
}

impl Slot {
    fn is_live(&self) -> bool {
        !self.destroyed.has_fired() && self.target.strong_count() > 0
    }
}

pub(crate) struct TableState {
    owner: ObjectId,
    policy: StaleListenerPolicy,
    slots: HashMap<TypeTag, Slot>,
    /// `(slot, value)` pairs with a destroy listener still attached, and a
    /// weak pointer to the value so entries for dropped values can be pruned.
    watched: HashMap<(TypeTag, ObjectId), Weak<dyn Any>>,
}

impl TableState {
    /// The slot for `tag` if its value is live. Finding a dead slot prunes
    /// the whole table.
    fn live_slot(&mut self, tag: &TypeTag) -> Option<&Slot> {
        if self.slots.get(tag).is_some_and(|slot| !slot.is_live()) {
            self.prune();
        }
        self.slots.get(tag)
    }

    /// Drop dead slots, and watch entries whose value is gone without its
    /// signal having fired.
    fn prune(&mut self) {
        self.slots.retain(|_, slot| slot.is_live());
        self.watched.retain(|_, target| target.strong_count() > 0);
    }
}

pub(crate) type WeakTable = Weak<RefCell<TableState>>;

/// Type-keyed references from one owner to other components.
///
/// Cloning the handle shares the same table.
#[derive(Clone)]
pub struct PropertyTable {
    state: Rc<RefCell<TableState>>,
}

impl PropertyTable {
    pub(crate) fn new(owner: ObjectId, policy: StaleListenerPolicy) -> Self {
        Self {
            state: Rc::new(RefCell::new(TableState {
                owner,
                policy,
                slots: HashMap::new(),
                watched: HashMap::new(),
            })),
        }
    }

    pub(crate) fn downgrade(&self) -> WeakTable {
        Rc::downgrade(&self.state)
    }

    /// Returns `true` if `weak` points at this table.
    pub(crate) fn is(&self, weak: &WeakTable) -> bool {
        std::ptr::eq(Rc::as_ptr(&self.state), weak.as_ptr())
    }

    /// The owner this table belongs to.
    #[must_use]
    pub fn owner(&self) -> ObjectId {
        self.state.borrow().owner
    }

    /// Returns `true` if a live value is stored for `T`.
    #[must_use]
    pub fn exists<T: Component>(&self) -> bool {
        self.get::<T>().is_some()
    }

    /// Returns the value stored for `T`, or `None` if there is none.
    #[must_use]
    pub fn get<T: Component>(&self) -> Option<Rc<T>> {
        let target = {
            let mut state = self.state.borrow_mut();
            state.live_slot(&TypeTag::of::<T>())?.target.upgrade()?
        };
        target.downcast::<T>().ok()
    }

    /// Store `value` as the `T` property, replacing whatever was there.
    ///
    /// Storing an already destroyed value clears the slot.
    pub fn set<T: Component>(&self, value: Rc<T>) {
        self.assign(Some(value));
    }

    /// Like [`PropertyTable::set`], but `None` clears the slot.
    pub fn assign<T: Component>(&self, value: Option<Rc<T>>) {
        let tag = TypeTag::of::<T>();
        let owner = self.owner();

        let Some(value) = value else {
            self.state.borrow_mut().slots.remove(&tag);
            trace!(owner = %owner, property = tag.name(), "property cleared");
            return;
        };

        let id = value.object_id();
        if value.is_destroyed() {
            self.state.borrow_mut().slots.remove(&tag);
            debug!(
                owner = %owner,
                property = tag.name(),
                value = %id,
                "value already destroyed; property cleared"
            );
            return;
        }

        let destroyed = value.on_destroy().clone();
        let value: Rc<dyn Any> = value;
        let target = Rc::downgrade(&value);
        let attach = {
            let mut state = self.state.borrow_mut();
            let policy = state.policy;
            let wants_listener = match policy {
                StaleListenerPolicy::Compatible => state.live_slot(&tag).is_none(),
                StaleListenerPolicy::Guarded => true,
            };
            wants_listener && !state.watched.contains_key(&(tag, id))
        };
        if attach {
            self.watch(tag, id, target.clone(), &destroyed);
        }

        self.state.borrow_mut().slots.insert(
            tag,
            Slot {
                value: id,
                target,
                destroyed,
            },
        );
        trace!(owner = %owner, property = tag.name(), value = %id, "property set");
    }

    /// Clear the `T` property.
    ///
    /// Returns `true` if a live value was removed. Removing an absent
    /// property is not an error.
    pub fn remove<T: Component>(&self) -> bool {
        let tag = TypeTag::of::<T>();
        let removed = {
            let mut state = self.state.borrow_mut();
            state.slots.remove(&tag).is_some_and(|slot| slot.is_live())
        };
        if removed {
            trace!(owner = %self.owner(), property = tag.name(), "property removed");
        }
        removed
    }

    /// Returns the number of live properties.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut state = self.state.borrow_mut();
        state.prune();
        state.slots.len()
    }

    /// Returns `true` if no live property is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the tags of all live properties, in no particular order.
    #[must_use]
    pub fn type_tags(&self) -> Vec<TypeTag> {
        let mut state = self.state.borrow_mut();
        state.prune();
        state.slots.keys().copied().collect()
    }

    /// Returns the number of value destroy listeners this table has attached
    /// that can still fire.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        let mut state = self.state.borrow_mut();
        state.prune();
        state.watched.len()
    }

    /// Number of slots held, live or not.
    #[cfg(test)]
    fn slot_count(&self) -> usize {
        self.state.borrow().slots.len()
    }

    fn watch(
        &self,
        tag: TypeTag,
        value: ObjectId,
        target: Weak<dyn Any>,
        signal: &DestroySignal,
    ) {
        self.state.borrow_mut().watched.insert((tag, value), target);

        let table = self.downgrade();
        signal.subscribe(move |value| {
            if let Some(state) = table.upgrade() {
                PropertyTable { state }.release(tag, value);
            }
        });
    }

    /// Destroy listener body: `destroyed` was stored under `tag` at some point.
    fn release(&self, tag: TypeTag, destroyed: ObjectId) {
        let mut state = self.state.borrow_mut();
        state.watched.remove(&(tag, destroyed));

        let Some(current) = state.slots.get(&tag).map(|slot| slot.value) else {
            return;
        };
        let owner = state.owner;

        if current == destroyed {
            state.slots.remove(&tag);
            debug!(
                owner = %owner,
                property = tag.name(),
                value = %destroyed,
                "property value destroyed; slot cleared"
            );
            return;
        }

        match state.policy {
            StaleListenerPolicy::Compatible => {
                state.slots.remove(&tag);
                debug!(
                    owner = %owner,
                    property = tag.name(),
                    destroyed = %destroyed,
                    current = %current,
                    "stale destroy listener cleared a newer value"
                );
            }
            StaleListenerPolicy::Guarded => {
                trace!(
                    owner = %owner,
                    property = tag.name(),
                    destroyed = %destroyed,
                    current = %current,
                    "stale destroy listener ignored"
                );
            }
        }
    }
}

impl fmt::Debug for PropertyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("PropertyTable")
            .field("owner", &state.owner)
            .field("policy", &state.policy)
            .field("slots", &state.slots.len())
            .field("listeners", &state.watched.len())
            .finish()
    }
}
