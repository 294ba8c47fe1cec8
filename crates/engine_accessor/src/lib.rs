//! # engine_accessor
//!
//! Typed property side-tables for engine objects.
//!
//! An owner object can point at other components by type ("my
//! `HealthComponent`", "my `InventoryComponent`") without declaring fields for
//! them. The references clean themselves up: an owner's table disappears when
//! the owner is destroyed, and a property disappears when the referenced
//! component is destroyed.
//!
//! This crate provides:
//!
//! - [`PropertyRegistry`]: one [`PropertyTable`] per owner, created on demand.
//! - [`PropertyTable`]: type-keyed slots with `None` for absent properties.
//! - [`PropertyExt`]: the same operations as methods on any owner.
//! - [`AccessorConfig`] / [`StaleListenerPolicy`]: how destroy listeners treat
//!   overwritten slots.
//!
//! ## Usage
//!
//! ```rust
//! use engine_accessor::PropertyRegistry;
//! use engine_object::{Component, Object, ObjectCore, Scene};
//!
//! struct Player { core: ObjectCore }
//! impl Object for Player {
//!     fn core(&self) -> &ObjectCore { &self.core }
//! }
//!
//! struct Health { core: ObjectCore }
//! impl Object for Health {
//!     fn core(&self) -> &ObjectCore { &self.core }
//! }
//! impl Component for Health {
//!     fn type_name() -> &'static str { "Health" }
//! }
//!
//! let mut scene = Scene::new();
//! let registry = PropertyRegistry::new();
//! let player = scene.spawn(|core| Player { core });
//! let health = scene.spawn(|core| Health { core });
//!
//! assert!(!registry.exists::<Health, _>(&player));
//! registry.set(&player, health.clone());
//! assert!(registry.exists::<Health, _>(&player));
//!
//! scene.destroy(player.object_id());
//! scene.end_frame();
//! assert_eq!(registry.owner_count(), 0);
//! ```

pub mod config;
pub mod error;
pub mod ext;
pub mod registry;
pub mod table;

#[cfg(test)]
mod fixtures;

pub use config::{AccessorConfig, StaleListenerPolicy};
pub use error::AccessorError;
pub use ext::PropertyExt;
pub use registry::PropertyRegistry;
pub use table::PropertyTable;
