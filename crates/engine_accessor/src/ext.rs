//! Property accessors as methods on the owner itself.
//!
//! ```rust
//! use engine_accessor::{PropertyExt, PropertyRegistry};
//! use engine_object::{Component, Object, ObjectCore, Scene};
//!
//! struct Player { core: ObjectCore }
//! impl Object for Player {
//!     fn core(&self) -> &ObjectCore { &self.core }
//! }
//!
//! struct Weapon { core: ObjectCore }
//! impl Object for Weapon {
//!     fn core(&self) -> &ObjectCore { &self.core }
//! }
//! impl Component for Weapon {
//!     fn type_name() -> &'static str { "Weapon" }
//! }
//!
//! let mut scene = Scene::new();
//! let registry = PropertyRegistry::new();
//! let player = scene.spawn(|core| Player { core });
//! let sword = scene.spawn(|core| Weapon { core });
//!
//! player.property_set(&registry, sword.clone());
//! assert!(player.property_exists::<Weapon>(&registry));
//!
//! scene.destroy_immediate(sword.object_id());
//! assert!(player.property_get::<Weapon>(&registry).is_none());
//! ```

use std::rc::Rc;

use engine_object::{Component, Object};

use crate::registry::PropertyRegistry;

/// Extension methods that route through a [`PropertyRegistry`].
pub trait PropertyExt: Object {
    /// See [`PropertyRegistry::exists`].
    fn property_exists<T: Component>(&self, registry: &PropertyRegistry) -> bool {
        registry.exists::<T, Self>(self)
    }

    /// See [`PropertyRegistry::get`].
    fn property_get<T: Component>(&self, registry: &PropertyRegistry) -> Option<Rc<T>> {
        registry.get::<T, Self>(self)
    }

    /// See [`PropertyRegistry::set`].
    fn property_set<T: Component>(&self, registry: &PropertyRegistry, value: Rc<T>) {
        registry.set(self, value);
    }

    /// See [`PropertyRegistry::assign`].
    fn property_assign<T: Component>(&self, registry: &PropertyRegistry, value: Option<Rc<T>>) {
        registry.assign(self, value);
    }

    /// See [`PropertyRegistry::remove`].
    fn property_remove<T: Component>(&self, registry: &PropertyRegistry) -> bool {
        registry.remove::<T, Self>(self)
    }
}

impl<O: Object + ?Sized> PropertyExt for O {}
