//! The hegemony contract: does this polity's command bind this asset?
//!
//! Predicates are side-effect-free; mutators assume callers have already
//! done existence checks and are total over well-formed input.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{GameEntity, PolityDiplomacy};
use crate::ecs::error::OrderError;
use crate::ecs::relationships::{ControlledBy, HomePort, HomePortShips, ViceroyOf};
use crate::ecs::resources::EntityIndex;
use crate::model::{DiplomaticStatus, EntityClass};

/// True iff the asset's controlling polity is `polity`.
pub fn controls(world: &World, polity: Entity, asset: Entity) -> bool {
    world
        .get::<ControlledBy>(asset)
        .is_some_and(|c| c.0 == polity)
}

/// Controlling polity of an asset, if it has one.
pub fn controller(world: &World, asset: Entity) -> Option<Entity> {
    world.get::<ControlledBy>(asset).map(|c| c.0)
}

/// True iff `candidate` is a viceroy of `ruler`.
pub fn is_viceroy_of(world: &World, candidate: Entity, ruler: Entity) -> bool {
    world
        .get::<ViceroyOf>(candidate)
        .is_some_and(|v| v.0 == ruler)
}

/// The status `of` thinks it has with `toward`. Directional.
pub fn diplomatic_status(world: &World, of: Entity, toward: Entity) -> DiplomaticStatus {
    world
        .get::<PolityDiplomacy>(of)
        .map(|d| d.status(toward))
        .unwrap_or_default()
}

/// True iff `a` may transfer assets to `b`: either `a` is a viceroy of `b`
/// (the ruler relationship bypasses the mutual check), or both sides
/// report Ally.
pub fn is_allied_to(world: &World, a: Entity, b: Entity) -> bool {
    is_viceroy_of(world, a, b)
        || (diplomatic_status(world, a, b) == DiplomaticStatus::Ally
            && diplomatic_status(world, b, a) == DiplomaticStatus::Ally)
}

/// Make `viceroy` subordinate to `ruler`.
///
/// The hierarchy is one level deep: a polity that is itself a viceroy
/// cannot take viceroys of its own.
pub fn set_viceroy(world: &mut World, viceroy: Entity, ruler: Entity) -> Result<(), OrderError> {
    if world.get::<ViceroyOf>(ruler).is_some() {
        return Err(OrderError::bad_request(
            "proposed ruler is itself a viceroy",
        ));
    }
    world.entity_mut(viceroy).insert(ViceroyOf(ruler));
    Ok(())
}

/// Transfer control of a colony to another polity. No-op success when the
/// target already controls it.
///
/// Ships home-ported at the colony and controlled by the old polity follow
/// it, in ID order.
pub fn transfer_colony(world: &mut World, colony: Entity, to: Entity) -> Result<(), OrderError> {
    let from = match controller(world, colony) {
        Some(polity) => polity,
        None => return Err(OrderError::bug("colony has no controlling polity")),
    };
    if from == to {
        return Ok(());
    }
    world.entity_mut(colony).insert(ControlledBy(to));

    // Home-ported ships still under the old polity follow the colony.
    let mut followers: Vec<(String, Entity)> = world
        .get::<HomePortShips>(colony)
        .map(|ships| ships.iter().copied().collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .filter(|ship| controls(world, from, *ship))
        .map(|ship| {
            let id = world
                .get::<GameEntity>(ship)
                .map(|g| g.id.clone())
                .unwrap_or_default();
            (id, ship)
        })
        .collect();
    followers.sort();
    for (_, ship) in followers {
        world.entity_mut(ship).insert(ControlledBy(to));
    }
    Ok(())
}

/// Transfer control of a ship to another polity. No-op success when the
/// target already controls it.
pub fn transfer_ship(world: &mut World, ship: Entity, to: Entity) -> Result<(), OrderError> {
    let from = match controller(world, ship) {
        Some(polity) => polity,
        None => return Err(OrderError::bug("ship has no controlling polity")),
    };
    if from == to {
        return Ok(());
    }
    world.entity_mut(ship).insert(ControlledBy(to));
    // The ship leaves its old polity's port registry; its new home port is
    // assigned by a later HomePortChange.
    world.entity_mut(ship).remove::<HomePort>();
    Ok(())
}

/// Transfer control of a polity itself — a new player joining or replacing
/// an existing one. No-op success when `from == to`.
///
/// The outgoing diplomatic map is purged: every known polity drops to
/// Unknown, then `from` and `to` become mutual allies.
pub fn transfer_polity(world: &mut World, from: Entity, to: Entity) -> Result<(), OrderError> {
    if from == to {
        return Ok(());
    }
    let known: Vec<Entity> = world
        .resource::<EntityIndex>()
        .iter_class(EntityClass::Polity)
        .map(|(_, entity)| entity)
        .collect();
    {
        let mut diplomacy = match world.get_mut::<PolityDiplomacy>(from) {
            Some(d) => d,
            None => return Err(OrderError::bug("polity has no diplomacy component")),
        };
        for polity in known {
            diplomacy.set_status(polity, DiplomaticStatus::Unknown);
        }
        diplomacy.set_status(to, DiplomaticStatus::Ally);
    }
    match world.get_mut::<PolityDiplomacy>(to) {
        Some(mut d) => d.set_status(from, DiplomaticStatus::Ally),
        None => return Err(OrderError::bug("polity has no diplomacy component")),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use bevy_ecs::world::World;

    use super::*;
    use crate::ecs::components::astronomy::Coords;
    use crate::ecs::error::ErrorKind;
    use crate::ecs::relationships::ControlledAssets;
    use crate::ecs::spawn;
    use crate::model::{ColonyKind, PlanetKind};

    struct Fixture {
        world: World,
        usagi: Entity,
        tomoe: Entity,
        colony: Entity,
        ship: Entity,
    }

    fn fixture() -> Fixture {
        let mut world = World::new();
        world.insert_resource(EntityIndex::new());
        let usagi = spawn::spawn_polity(&mut world, "usagi", "usagi");
        let tomoe = spawn::spawn_polity(&mut world, "tomoe", "tomoe");
        let system = spawn::spawn_system(&mut world, "mizugame", Coords::new(1, 1, 1));
        let star = spawn::spawn_star(&mut world, "shikoku", system);
        let orbit = spawn::spawn_orbit(&mut world, "shikoku-04", star, 4);
        let planet = spawn::spawn_planet(&mut world, "suisei", orbit, PlanetKind::Terrestrial);
        let colony = spawn::spawn_colony(&mut world, "sanuki", usagi, planet, ColonyKind::Open);
        let ship = spawn::spawn_ship(&mut world, "hayabusa", usagi, system);
        Fixture {
            world,
            usagi,
            tomoe,
            colony,
            ship,
        }
    }

    #[test]
    fn transfer_keeps_both_sides_of_the_controls_relation() {
        let mut f = fixture();
        transfer_colony(&mut f.world, f.colony, f.tomoe).unwrap();
        assert_eq!(controller(&f.world, f.colony), Some(f.tomoe));
        let tomoe_assets = f.world.get::<ControlledAssets>(f.tomoe).unwrap();
        assert!(tomoe_assets.contains(&f.colony));
        let usagi_assets: &[Entity] = f
            .world
            .get::<ControlledAssets>(f.usagi)
            .map(|a| &**a)
            .unwrap_or(&[]);
        assert!(!usagi_assets.contains(&f.colony));
    }

    #[test]
    fn transfer_to_current_controller_is_a_noop() {
        let mut f = fixture();
        transfer_colony(&mut f.world, f.colony, f.usagi).unwrap();
        assert_eq!(controller(&f.world, f.colony), Some(f.usagi));
    }

    #[test]
    fn home_ported_ships_follow_their_colony() {
        let mut f = fixture();
        f.world
            .entity_mut(f.ship)
            .insert(crate::ecs::relationships::HomePort(f.colony));
        transfer_colony(&mut f.world, f.colony, f.tomoe).unwrap();
        assert_eq!(controller(&f.world, f.ship), Some(f.tomoe));
    }

    #[test]
    fn polity_transfer_resets_diplomacy_to_mutual_alliance() {
        let mut f = fixture();
        let koga = spawn::spawn_polity(&mut f.world, "koga", "koga");
        f.world
            .get_mut::<PolityDiplomacy>(f.usagi)
            .unwrap()
            .set_status(koga, DiplomaticStatus::Friend);

        transfer_polity(&mut f.world, f.usagi, f.tomoe).unwrap();

        assert!(is_allied_to(&f.world, f.usagi, f.tomoe));
        assert!(is_allied_to(&f.world, f.tomoe, f.usagi));
        assert!(!is_allied_to(&f.world, f.usagi, koga));
        assert_eq!(
            diplomatic_status(&f.world, f.usagi, koga),
            DiplomaticStatus::Unknown
        );
    }

    #[test]
    fn viceroys_are_allied_without_mutual_status() {
        let mut f = fixture();
        set_viceroy(&mut f.world, f.tomoe, f.usagi).unwrap();
        assert!(is_viceroy_of(&f.world, f.tomoe, f.usagi));
        assert!(is_allied_to(&f.world, f.tomoe, f.usagi));
        // the relation is directional: the ruler is not the viceroy's ally
        assert!(!is_allied_to(&f.world, f.usagi, f.tomoe));
    }

    #[test]
    fn viceroy_chains_stop_at_depth_one() {
        let mut f = fixture();
        let koga = spawn::spawn_polity(&mut f.world, "koga", "koga");
        set_viceroy(&mut f.world, f.tomoe, f.usagi).unwrap();
        // tomoe is a viceroy; it cannot take viceroys of its own
        let err = set_viceroy(&mut f.world, koga, f.tomoe).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}
