use bevy_ecs::world::World;

use super::{resolve_asset, resolve_issuer};
use crate::ecs::components::{ColonyCore, ShipCore, Storage};
use crate::ecs::error::OrderError;
use crate::model::{EntityClass, Unit, UnitKind};

/// Junk — destroy an asset, reclaiming what can be reclaimed.
///
/// 1. Actor and asset must both be colonies or ships controlled by the
///    issuing polity.
/// 2. They must share a star system, and be within transport range of each
///    other.
/// 3. The asset ceases to exist.
///
/// Validation is complete; the range check and the destruction itself are
/// still open, so a valid junk order currently reports NotImplemented.
pub(crate) fn junk(
    world: &mut World,
    issued_by: &str,
    actor_id: &str,
    asset_id: &str,
) -> Result<(), OrderError> {
    let issuer = resolve_issuer(world, issued_by)?;

    let actor = resolve_asset(world, actor_id)
        .ok_or_else(|| OrderError::bad_request(format!("invalid actor {actor_id:?}")))?;
    if actor.polity != issuer {
        return Err(OrderError::forbidden("actor refuses order"));
    }

    let asset = resolve_asset(world, asset_id)
        .ok_or_else(|| OrderError::bad_request(format!("invalid asset {asset_id:?}")))?;
    if asset.polity != issuer {
        return Err(OrderError::forbidden("asset refuses order"));
    }

    if actor.system != asset.system {
        return Err(OrderError::forbidden("actor not in asset's system"));
    }

    // TODO: transport-range check, then destruction and reclamation.
    Err(OrderError::NotImplemented("junk"))
}

/// Kinds that exist as assembled machinery rather than bulk goods. Only
/// these care about the assembled flag when being scrapped.
fn is_assembly(kind: UnitKind) -> bool {
    matches!(
        kind,
        UnitKind::Farm
            | UnitKind::Mine
            | UnitKind::Power
            | UnitKind::Structural
            | UnitKind::LightStructural
    )
}

/// Scrap — disassemble inventory, recycling components into resources.
///
/// 1. The actor must be controlled by the issuing polity.
/// 2. Only unassembled units (or bulk, non-assembly goods) can be scrapped.
/// 3. Quantity may exceed the actor's holdings; the overage is ignored.
/// 4. 30% of the scrapped mass is lost as waste; the remaining 70% of the
///    constituent materials lands in the actor's storage.
pub(crate) fn scrap(
    world: &mut World,
    issued_by: &str,
    actor_id: &str,
    item: &str,
    tech_level: u8,
    quantity: u32,
) -> Result<(), OrderError> {
    let issuer = resolve_issuer(world, issued_by)?;

    let actor = resolve_asset(world, actor_id)
        .ok_or_else(|| OrderError::bad_request(format!("invalid actor {actor_id:?}")))?;
    if actor.polity != issuer {
        return Err(OrderError::forbidden("actor refuses order"));
    }

    let kind = UnitKind::try_from(item.to_string())
        .map_err(|_| OrderError::bad_request(format!("invalid item {item:?}")))?;

    match actor.class {
        EntityClass::Colony => {
            let mut core = world.get_mut::<ColonyCore>(actor.entity).expect("colony core");
            let core = &mut *core;
            scrap_units(&mut core.units, &mut core.storage, kind, tech_level, quantity);
        }
        _ => {
            let mut core = world.get_mut::<ShipCore>(actor.entity).expect("ship core");
            let core = &mut *core;
            scrap_units(&mut core.units, &mut core.storage, kind, tech_level, quantity);
        }
    }
    Ok(())
}

const SCRAP_RECOVERY: f64 = 0.70;

fn scrap_units(
    units: &mut Vec<Unit>,
    storage: &mut Storage,
    kind: UnitKind,
    tech_level: u8,
    quantity: u32,
) {
    let mut remaining = quantity;
    for unit in units.iter_mut() {
        if remaining == 0 {
            break;
        }
        if unit.kind != kind || unit.tech_level != tech_level {
            continue;
        }
        if unit.assembled && is_assembly(kind) {
            continue;
        }
        let take = remaining.min(unit.quantity);
        unit.quantity -= take;
        remaining -= take;
        recover(storage, kind, tech_level, take);
    }
    units.retain(|u| u.quantity > 0);
}

/// Credit the recoverable fraction of `take` scrapped units to storage.
/// Machinery breaks down into its constituent materials; bulk goods
/// recycle into their own stockpile.
fn recover(storage: &mut Storage, kind: UnitKind, tech_level: u8, take: u32) {
    let taken = f64::from(take);
    let (metals, nonmetals) = Unit::new(kind, tech_level, 1).materials();
    if metals > 0.0 || nonmetals > 0.0 {
        storage.metal += (metals * taken * SCRAP_RECOVERY) as i64;
        storage.nonmetal += (nonmetals * taken * SCRAP_RECOVERY) as i64;
        return;
    }
    let recovered = (taken * SCRAP_RECOVERY) as i64;
    match kind {
        UnitKind::Food => storage.food += recovered,
        UnitKind::Fuel => storage.fuel += recovered,
        UnitKind::Gold => storage.gold += recovered,
        UnitKind::Metal => storage.metal += recovered,
        UnitKind::Nonmetal => storage.nonmetal += recovered,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use bevy_ecs::world::World;

    use super::*;
    use crate::ecs::components::astronomy::Coords;
    use crate::ecs::error::ErrorKind;
    use crate::ecs::resources::EntityIndex;
    use crate::ecs::spawn;
    use crate::model::{ColonyKind, PlanetKind};

    fn fixture() -> (World, bevy_ecs::entity::Entity) {
        let mut world = World::new();
        world.insert_resource(EntityIndex::new());
        let usagi = spawn::spawn_polity(&mut world, "usagi", "usagi");
        let system = spawn::spawn_system(&mut world, "mizugame", Coords::new(1, 1, 1));
        let star = spawn::spawn_star(&mut world, "shikoku", system);
        let orbit = spawn::spawn_orbit(&mut world, "shikoku-04", star, 4);
        let planet = spawn::spawn_planet(&mut world, "suisei", orbit, PlanetKind::Terrestrial);
        let colony = spawn::spawn_colony(&mut world, "sanuki", usagi, planet, ColonyKind::Open);
        (world, colony)
    }

    #[test]
    fn scrap_caps_at_inventory_and_recovers_materials() {
        let (mut world, colony) = fixture();
        world.get_mut::<ColonyCore>(colony).unwrap().units =
            vec![Unit::new(UnitKind::Mine, 1, 10)];

        // ask for far more than we have — overage is ignored, not an error
        scrap(&mut world, "usagi", "sanuki", "MINE", 1, 1_000).unwrap();

        let core = world.get::<ColonyCore>(colony).unwrap();
        assert!(core.units.is_empty());
        // MINE-1 needs (6, 6) materials per unit; 10 units at 70% recovery
        assert_eq!(core.storage.metal, 42);
        assert_eq!(core.storage.nonmetal, 42);
    }

    #[test]
    fn scrap_skips_assembled_machinery() {
        let (mut world, colony) = fixture();
        world.get_mut::<ColonyCore>(colony).unwrap().units = vec![
            Unit::assembled(UnitKind::Farm, 1, 5),
            Unit::new(UnitKind::Farm, 1, 3),
        ];

        scrap(&mut world, "usagi", "sanuki", "FARM", 1, 100).unwrap();

        let core = world.get::<ColonyCore>(colony).unwrap();
        // the assembled stack survives untouched
        assert_eq!(core.units.len(), 1);
        assert!(core.units[0].assembled);
        assert_eq!(core.units[0].quantity, 5);
    }

    #[test]
    fn scrap_recycles_bulk_goods_into_their_own_stockpile() {
        let (mut world, colony) = fixture();
        world.get_mut::<ColonyCore>(colony).unwrap().units =
            vec![Unit::new(UnitKind::Fuel, 1, 100)];

        scrap(&mut world, "usagi", "sanuki", "FUEL", 1, 100).unwrap();

        let core = world.get::<ColonyCore>(colony).unwrap();
        assert_eq!(core.storage.fuel, 70);
    }

    #[test]
    fn scrap_rejects_unknown_items() {
        let (mut world, _) = fixture();
        let err = scrap(&mut world, "usagi", "sanuki", "TRACTOR", 1, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn junk_validates_then_reports_unfinished() {
        let (mut world, _) = fixture();
        let err = junk(&mut world, "usagi", "sanuki", "sanuki").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);

        let err = junk(&mut world, "usagi", "sanuki", "nonesuch").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}
