use bevy_ecs::component::Component;

/// Core identity component present on every game entity: its registered
/// ID in the global namespace and its default display name.
///
/// Stars, systems, and planets keep this as a fallback only — each polity
/// may overlay its own private name (see `PolityNames`).
#[derive(Component, Debug, Clone)]
pub struct GameEntity {
    pub id: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Marker components — one per EntityClass
// ---------------------------------------------------------------------------

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Polity;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct StarSystem;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Star;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Orbit;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Planet;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Deposit;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Colony;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Ship;
