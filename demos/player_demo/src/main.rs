//! Player demo: attaches typed properties to a player and lets the scene
//! tear them down.
//!
//! Over a few frames the demo:
//!
//! 1. Gives the player a [`HealthComponent`] and checks that no
//!    [`InventoryComponent`] is attached yet.
//! 2. Attaches an inventory, then destroys it and watches the property clear.
//! 3. Overwrites the health property and destroys the original value, showing
//!    how the configured [`StaleListenerPolicy`] treats the newer value.
//! 4. Destroys the player and confirms its table is gone.
//!
//! Set `ACCESSOR_CONFIG` to a JSON file to choose the policy, e.g.
//! `{ "stale_listener_policy": "guarded" }`.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use components::{HealthComponent, InventoryComponent, Player};
use engine_accessor::{AccessorConfig, PropertyExt, PropertyRegistry, StaleListenerPolicy};
use engine_object::{Object, Scene};

fn load_config() -> Result<AccessorConfig> {
    match std::env::var("ACCESSOR_CONFIG") {
        Ok(path) => AccessorConfig::from_path(&path)
            .with_context(|| format!("loading accessor config from {path}")),
        Err(_) => Ok(AccessorConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("player_demo=info".parse()?))
        .init();

    let config = load_config()?;
    let policy = config.stale_listener_policy;
    let registry = PropertyRegistry::with_config(config);
    let mut scene = Scene::new();

    info!(?policy, "player demo starting");

    let player = scene.spawn(|core| Player::new(core, "Player"));
    let health = scene.spawn(|core| HealthComponent::full(core, 100.0));

    // Frame 1: health attached, inventory not yet.
    player.property_set(&registry, health.clone());
    let attached = player
        .property_get::<HealthComponent>(&registry)
        .context("health property missing right after set")?;
    attached.damage(25.0);
    let has_inventory = player.property_exists::<InventoryComponent>(&registry);
    info!(
        player = %player.name,
        hp = health.current(),
        has_inventory,
        "health attached"
    );
    scene.end_frame();

    // Frame 2: inventory attached and then destroyed.
    let inventory = scene.spawn(InventoryComponent::new);
    inventory.add("rope");
    player.property_set(&registry, inventory.clone());
    let has_inventory = player.property_exists::<InventoryComponent>(&registry);
    info!(items = inventory.len(), has_inventory, "inventory attached");
    scene.destroy(inventory.object_id());
    scene.end_frame();
    let has_inventory = player.property_exists::<InventoryComponent>(&registry);
    info!(has_inventory, "inventory destroyed");

    // Frame 3: overwrite health, then destroy the original value.
    let replacement = scene.spawn(|core| HealthComponent::full(core, 150.0));
    player.property_set(&registry, replacement);
    scene.destroy(health.object_id());
    scene.end_frame();
    let survived = player.property_exists::<HealthComponent>(&registry);
    match policy {
        StaleListenerPolicy::Compatible => info!(
            survived,
            "original health destroyed; its listener cleared the replacement"
        ),
        StaleListenerPolicy::Guarded => {
            info!(survived, "original health destroyed; replacement kept")
        }
    }

    // Frame 4: the player goes away, and so does its table.
    scene.destroy(player.object_id());
    let destroyed = scene.end_frame();
    let tracked = registry.contains_owner(&player);
    info!(
        destroyed,
        owners = registry.owner_count(),
        tracked,
        "player destroyed"
    );

    let remaining = scene.destroy_all();
    info!(remaining, "player demo finished");
    Ok(())
}
