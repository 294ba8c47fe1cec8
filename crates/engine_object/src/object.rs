//! Object and component traits.
//!
//! Every scene object embeds an [`ObjectCore`] (its id and destroy signal) and
//! implements [`Object`] by handing it out. Types that may be referenced from
//! another object's property table additionally implement [`Component`].
//!
//! ## Type tags
//!
//! [`TypeTag`] is the key for typed lookups. It wraps [`std::any::TypeId`],
//! so two distinct Rust types never collide even if they report the same
//! [`Component::type_name`]. The name is kept only for logs.

use std::any::TypeId;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::id::ObjectId;
use crate::signal::DestroySignal;

/// Identity and lifecycle state shared by every engine object.
#[derive(Debug)]
pub struct ObjectCore {
    id: ObjectId,
    destroyed: DestroySignal,
}

impl ObjectCore {
    /// Create the core for a new object, taking a fresh process-wide id.
    #[must_use]
    pub fn new() -> Self {
        let id = ObjectId::next();
        Self {
            id,
            destroyed: DestroySignal::new(id),
        }
    }

    /// The object's id.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The object's one-shot destroy signal.
    #[must_use]
    pub fn on_destroy(&self) -> &DestroySignal {
        &self.destroyed
    }
}

impl Default for ObjectCore {
    fn default() -> Self {
        Self::new()
    }
}

/// An engine-managed object with identity and a destroy event.
///
/// # Examples
///
/// ```rust
/// use engine_object::{Object, ObjectCore, Scene};
///
/// struct Player {
///     core: ObjectCore,
/// }
///
/// impl Object for Player {
///     fn core(&self) -> &ObjectCore {
///         &self.core
///     }
/// }
///
/// let mut scene = Scene::new();
/// let player = scene.spawn(|core| Player { core });
/// assert!(!player.is_destroyed());
/// ```
pub trait Object: 'static {
    /// The embedded identity and lifecycle state.
    fn core(&self) -> &ObjectCore;

    /// Returns the object's id.
    fn object_id(&self) -> ObjectId {
        self.core().id()
    }

    /// Returns the object's destroy signal.
    fn on_destroy(&self) -> &DestroySignal {
        self.core().on_destroy()
    }

    /// Returns `true` once the object has been destroyed.
    fn is_destroyed(&self) -> bool {
        self.on_destroy().has_fired()
    }
}

impl<T: Object + ?Sized> Object for Rc<T> {
    fn core(&self) -> &ObjectCore {
        (**self).core()
    }
}

/// An object that can be stored as a typed property of another object.
pub trait Component: Object {
    /// A human-readable name for this component type.
    fn type_name() -> &'static str;

    /// Returns the [`TypeTag`] for this component type.
    fn type_tag() -> TypeTag
    where
        Self: Sized,
    {
        TypeTag::of::<Self>()
    }
}

/// Runtime descriptor of a component type.
///
/// Equality and hashing only consider the underlying [`TypeId`].
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// The tag for component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::type_name(),
        }
    }

    /// The underlying Rust type id.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The component's human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Health {
        core: ObjectCore,
    }

    impl Object for Health {
        fn core(&self) -> &ObjectCore {
            &self.core
        }
    }

    impl Component for Health {
        fn type_name() -> &'static str {
            "Health"
        }
    }

    struct Impostor {
        core: ObjectCore,
    }

    impl Object for Impostor {
        fn core(&self) -> &ObjectCore {
            &self.core
        }
    }

    impl Component for Impostor {
        // Same display name as `Health` on purpose.
        fn type_name() -> &'static str {
            "Health"
        }
    }

    #[test]
    fn test_type_tag_is_stable() {
        assert_eq!(TypeTag::of::<Health>(), Health::type_tag());
        assert_eq!(Health::type_tag().name(), "Health");
        assert_eq!(Health::type_tag().type_id(), TypeId::of::<Health>());
    }

    #[test]
    fn test_type_tag_ignores_name_collisions() {
        assert_ne!(TypeTag::of::<Health>(), TypeTag::of::<Impostor>());
    }

    #[test]
    fn test_object_defaults_delegate_to_core() {
        let core = ObjectCore::new();
        let id = core.id();
        let health = Health { core };
        assert_eq!(health.object_id(), id);
        assert!(!health.is_destroyed());
        health.on_destroy().fire();
        assert!(health.is_destroyed());
    }

    #[test]
    fn test_each_core_gets_its_own_id() {
        let a = ObjectCore::new();
        let b = ObjectCore::default();
        assert_ne!(a.id(), b.id());
        assert!(!a.on_destroy().ptr_eq(b.on_destroy()));
    }

    #[test]
    fn test_rc_forwards_object() {
        let health = Rc::new(Health {
            core: ObjectCore::new(),
        });
        assert_eq!(Object::object_id(&health), health.core.id());
        assert!(Object::on_destroy(&health).ptr_eq(health.core.on_destroy()));
    }
}
