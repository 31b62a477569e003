use std::ops::Deref;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

// ---------------------------------------------------------------------------
// ControlledBy — colony/ship → polity
// ---------------------------------------------------------------------------
// Bevy maintains both sides: re-pointing an asset's ControlledBy removes it
// from the old polity's ControlledAssets and adds it to the new one's, so
// exactly one polity controls each asset at all times.

#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = ControlledAssets)]
pub struct ControlledBy(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = ControlledBy)]
pub struct ControlledAssets(Vec<Entity>);

impl Deref for ControlledAssets {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// HomePort — ship → colony
// ---------------------------------------------------------------------------

#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = HomePortShips)]
pub struct HomePort(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = HomePort)]
pub struct HomePortShips(Vec<Entity>);

impl Deref for HomePortShips {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// ViceroyOf — polity → ruling polity (depth at most 1, enforced in hegemony)
// ---------------------------------------------------------------------------

#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = Viceroys)]
pub struct ViceroyOf(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = ViceroyOf)]
pub struct Viceroys(Vec<Entity>);

impl Deref for Viceroys {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// SitedOn — colony → planet or orbit
// ---------------------------------------------------------------------------

#[derive(Component, Clone, Debug)]
#[relationship(relationship_target = SitedColonies)]
pub struct SitedOn(pub Entity);

#[derive(Component, Default, Debug)]
#[relationship_target(relationship = SitedOn)]
pub struct SitedColonies(Vec<Entity>);

impl Deref for SitedColonies {
    type Target = [Entity];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Star system an asset currently occupies. Plain reference — nothing needs
/// the reverse index, so this is not a tracked relationship.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InSystem(pub Entity);
