//! Owner registry: one property table per owner object.
//!
//! The registry hands out an owner's [`PropertyTable`], creating it on first
//! access. At creation it subscribes to the owner's destroy signal and erases
//! the entry when the owner goes away. There is no other way to unregister an
//! owner: if an owner is never destroyed, its table stays for the registry's
//! lifetime.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use engine_object::{Component, Object, ObjectId};
use tracing::{debug, warn};

use crate::config::AccessorConfig;
use crate::table::PropertyTable;

struct RegistryState {
    config: AccessorConfig,
    tables: HashMap<ObjectId, PropertyTable>,
}

/// Maps owner objects to their property tables.
///
/// The registry does not keep owners alive. Tables are looked up by
/// [`ObjectId`], and destroy listeners only hold weak handles back to the
/// registry, so dropping the registry turns any outstanding listener into a
/// no-op.
pub struct PropertyRegistry {
    state: Rc<RefCell<RegistryState>>,
}

impl PropertyRegistry {
    /// Create an empty registry with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AccessorConfig::default())
    }

    /// Create an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: AccessorConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(RegistryState {
                config,
                tables: HashMap::new(),
            })),
        }
    }

    /// Returns the registry configuration.
    #[must_use]
    pub fn config(&self) -> AccessorConfig {
        self.state.borrow().config.clone()
    }

    /// Returns the owner's table, creating it (and its owner destroy
    /// listener) on first access.
    ///
    /// A destroyed owner gets a detached, empty table that is not stored:
    /// its destroy signal will never fire again to reclaim it.
    pub fn get_or_create<O: Object + ?Sized>(&self, owner: &O) -> PropertyTable {
        let id = owner.object_id();
        let policy = {
            let state = self.state.borrow();
            if let Some(table) = state.tables.get(&id) {
                return table.clone();
            }
            state.config.stale_listener_policy
        };

        let table = PropertyTable::new(id, policy);
        if owner.is_destroyed() {
            warn!(owner = %id, "property access on a destroyed owner");
            return table;
        }

        let registry = Rc::downgrade(&self.state);
        let watched = table.downgrade();
        owner.on_destroy().subscribe(move |owner| {
            let Some(state) = registry.upgrade() else {
                return;
            };
            let mut state = state.borrow_mut();
            // A table created after `clear()` has its own listener.
            if state.tables.get(&owner).is_some_and(|table| table.is(&watched))
                && let Some(table) = state.tables.remove(&owner)
            {
                debug!(
                    owner = %owner,
                    properties = table.len(),
                    "owner destroyed; property table erased"
                );
            }
        });

        self.state.borrow_mut().tables.insert(id, table.clone());
        debug!(owner = %id, "created property table");
        table
    }

    /// Returns `true` if the owner has a live `T` property.
    #[must_use]
    pub fn exists<T: Component, O: Object + ?Sized>(&self, owner: &O) -> bool {
        self.get_or_create(owner).exists::<T>()
    }

    /// Returns the owner's `T` property, or `None`.
    #[must_use]
    pub fn get<T: Component, O: Object + ?Sized>(&self, owner: &O) -> Option<Rc<T>> {
        self.get_or_create(owner).get::<T>()
    }

    /// Set the owner's `T` property. See [`PropertyTable::set`].
    pub fn set<T: Component, O: Object + ?Sized>(&self, owner: &O, value: Rc<T>) {
        self.get_or_create(owner).set(value);
    }

    /// Set or clear the owner's `T` property. See [`PropertyTable::assign`].
    pub fn assign<T: Component, O: Object + ?Sized>(&self, owner: &O, value: Option<Rc<T>>) {
        self.get_or_create(owner).assign(value);
    }

    /// Remove the owner's `T` property. Returns `true` if one was removed.
    pub fn remove<T: Component, O: Object + ?Sized>(&self, owner: &O) -> bool {
        self.get_or_create(owner).remove::<T>()
    }

    /// Returns `true` if the owner currently has a table.
    #[must_use]
    pub fn contains_owner<O: Object + ?Sized>(&self, owner: &O) -> bool {
        self.state.borrow().tables.contains_key(&owner.object_id())
    }

    /// Returns the number of owners with a table.
    #[must_use]
    pub fn owner_count(&self) -> usize {
        self.state.borrow().tables.len()
    }

    /// Drop every table.
    ///
    /// Listeners attached before the clear stay subscribed but no longer find
    /// anything to clean up.
    pub fn clear(&self) {
        let tables = std::mem::take(&mut self.state.borrow_mut().tables);
        debug!(owners = tables.len(), "property registry cleared");
    }
}

impl Default for PropertyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("PropertyRegistry")
            .field("config", &state.config)
            .field("owners", &state.tables.len())
            .finish()
    }
}
