//! Example scene objects for the property accessor demos.
//!
//! [`Player`] is a plain owner object. [`HealthComponent`] and
//! [`InventoryComponent`] satisfy the [`Component`] trait and can be attached
//! to a player as typed properties. Their state sits behind `Cell`/`RefCell`
//! because components are shared as `Rc`.

use std::cell::{Cell, RefCell};

use engine_object::{Component, Object, ObjectCore};

/// A player-controlled owner object.
#[derive(Debug)]
pub struct Player {
    core: ObjectCore,
    /// Display name.
    pub name: String,
}

impl Player {
    /// Create a named player around a freshly spawned core.
    #[must_use]
    pub fn new(core: ObjectCore, name: impl Into<String>) -> Self {
        Self {
            core,
            name: name.into(),
        }
    }
}

impl Object for Player {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

/// Hit points with a fixed maximum.
#[derive(Debug)]
pub struct HealthComponent {
    core: ObjectCore,
    current: Cell<f32>,
    max: f32,
}

impl HealthComponent {
    /// Create a health component at full HP.
    #[must_use]
    pub fn full(core: ObjectCore, max: f32) -> Self {
        Self {
            core,
            current: Cell::new(max),
            max,
        }
    }

    /// Current hit points.
    #[must_use]
    pub fn current(&self) -> f32 {
        self.current.get()
    }

    /// Maximum hit points.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Returns `true` while HP > 0.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current.get() > 0.0
    }

    /// Apply damage, clamping to zero.
    pub fn damage(&self, amount: f32) {
        self.current.set((self.current.get() - amount).max(0.0));
    }

    /// Heal, clamping to max.
    pub fn heal(&self, amount: f32) {
        self.current.set((self.current.get() + amount).min(self.max));
    }
}

impl Object for HealthComponent {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Component for HealthComponent {
    fn type_name() -> &'static str {
        "HealthComponent"
    }
}

/// A bag of item names.
#[derive(Debug)]
pub struct InventoryComponent {
    core: ObjectCore,
    items: RefCell<Vec<String>>,
}

impl InventoryComponent {
    /// Create an empty inventory.
    #[must_use]
    pub fn new(core: ObjectCore) -> Self {
        Self {
            core,
            items: RefCell::new(Vec::new()),
        }
    }

    /// Add an item.
    pub fn add(&self, item: impl Into<String>) {
        self.items.borrow_mut().push(item.into());
    }

    /// Returns `true` if the inventory holds `item`.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.items.borrow().iter().any(|held| held == item)
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if the inventory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Object for InventoryComponent {
    fn core(&self) -> &ObjectCore {
        &self.core
    }
}

impl Component for InventoryComponent {
    fn type_name() -> &'static str {
        "InventoryComponent"
    }
}

#[cfg(test)]
mod tests {
    use engine_object::{Scene, TypeTag};

    use super::*;

    #[test]
    fn test_health_damage_and_heal() {
        let h = HealthComponent::full(ObjectCore::new(), 100.0);
        assert!(h.is_alive());
        h.damage(60.0);
        assert_eq!(h.current(), 40.0);
        h.heal(30.0);
        assert_eq!(h.current(), 70.0);
        h.heal(100.0);
        assert_eq!(h.current(), h.max());
        h.damage(200.0);
        assert_eq!(h.current(), 0.0);
        assert!(!h.is_alive());
    }

    #[test]
    fn test_inventory_items() {
        let mut scene = Scene::new();
        let inventory = scene.spawn(InventoryComponent::new);
        assert!(inventory.is_empty());
        inventory.add("rope");
        inventory.add("lantern");
        assert_eq!(inventory.len(), 2);
        assert!(inventory.contains("rope"));
        assert!(!inventory.contains("map"));
    }

    #[test]
    fn test_component_tags_are_distinct() {
        assert_ne!(
            TypeTag::of::<HealthComponent>(),
            TypeTag::of::<InventoryComponent>()
        );
        assert_eq!(HealthComponent::type_tag().name(), "HealthComponent");
    }

    #[test]
    fn test_player_properties_scenario() {
        use engine_accessor::PropertyRegistry;

        let mut scene = Scene::new();
        let registry = PropertyRegistry::new();
        let player = scene.spawn(|core| Player::new(core, "Player"));
        let h1 = scene.spawn(|core| HealthComponent::full(core, 100.0));

        registry.set(&player, h1.clone());
        let stored = registry.get::<HealthComponent, _>(&player).unwrap();
        assert!(std::rc::Rc::ptr_eq(&stored, &h1));
        assert!(!registry.exists::<InventoryComponent, _>(&player));

        let inventory = scene.spawn(InventoryComponent::new);
        registry.set(&player, inventory);
        assert!(registry.exists::<InventoryComponent, _>(&player));

        scene.destroy(player.object_id());
        scene.end_frame();
        assert_eq!(registry.owner_count(), 0);
    }

    #[test]
    fn test_player_name() {
        let mut scene = Scene::new();
        let player = scene.spawn(|core| Player::new(core, "Player"));
        assert_eq!(player.name, "Player");
    }
}
