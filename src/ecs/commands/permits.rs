use bevy_ecs::world::World;

use super::{resolve_asset, resolve_issuer};
use crate::ecs::components::{ColonyCore, ShipCore};
use crate::ecs::error::OrderError;
use crate::ecs::hegemony;
use crate::ecs::relationships::{HomePort, SitedColonies};
use crate::ecs::resources::{ColonizationGrants, EntityIndex};
use crate::model::EntityClass;

/// HomePortChange — reassign a ship's home port.
///
/// Both the ship and the destination colony must be controlled by the
/// issuing polity. Already home-ported there is a no-op.
pub(crate) fn home_port_change(
    world: &mut World,
    issued_by: &str,
    ship_id: &str,
    colony_id: &str,
) -> Result<(), OrderError> {
    let issuer = resolve_issuer(world, issued_by)?;

    let index = world.resource::<EntityIndex>();
    let ship = index
        .get(ship_id, EntityClass::Ship)
        .ok_or_else(|| OrderError::bad_request(format!("invalid ship {ship_id:?}")))?;
    let colony = index
        .get(colony_id, EntityClass::Colony)
        .ok_or_else(|| OrderError::bad_request(format!("invalid colony {colony_id:?}")))?;

    if !hegemony::controls(world, issuer, ship) {
        return Err(OrderError::forbidden("ship refuses order"));
    }
    if !hegemony::controls(world, issuer, colony) {
        return Err(OrderError::forbidden("colony refuses order"));
    }

    if world.get::<HomePort>(ship).is_some_and(|p| p.0 == colony) {
        return Ok(()); // already assigned, nothing to do
    }
    world.entity_mut(ship).insert(HomePort(colony));
    Ok(())
}

/// PermissionToColonize — let a ship establish a colony on a planet this
/// turn.
///
/// 1. If the ship's polity already has a colony on the planet, permission
///    is unnecessary — no-op success.
/// 2. Otherwise the issuing polity must control at least one colony on the
///    planet.
/// 3. The grant expires at the end of the current turn.
pub(crate) fn permission_to_colonize(
    world: &mut World,
    issued_by: &str,
    planet_id: &str,
    ship_id: &str,
) -> Result<(), OrderError> {
    let issuer = resolve_issuer(world, issued_by)?;

    let index = world.resource::<EntityIndex>();
    let planet = index
        .get(planet_id, EntityClass::Planet)
        .ok_or_else(|| OrderError::bad_request(format!("invalid planet {planet_id:?}")))?;
    let ship = index
        .get(ship_id, EntityClass::Ship)
        .ok_or_else(|| OrderError::bad_request(format!("invalid ship {ship_id:?}")))?;

    let ship_polity = hegemony::controller(world, ship).expect("ship has a controller");

    let mut issuer_has_colony = false;
    let colonies: Vec<_> = world
        .get::<SitedColonies>(planet)
        .map(|c| c.iter().copied().collect())
        .unwrap_or_default();
    for colony in colonies {
        if hegemony::controls(world, ship_polity, colony) {
            // the ship's polity already holds ground here
            return Ok(());
        }
        if hegemony::controls(world, issuer, colony) {
            issuer_has_colony = true;
        }
    }
    if !issuer_has_colony {
        return Err(OrderError::forbidden("planet refuses orders"));
    }

    world
        .resource_mut::<ColonizationGrants>()
        .grant(ship, planet);
    Ok(())
}

/// Ration — set the fraction of a full food allotment dispersed each turn.
pub(crate) fn ration(
    world: &mut World,
    issued_by: &str,
    source_id: &str,
    amount: f64,
) -> Result<(), OrderError> {
    let issuer = resolve_issuer(world, issued_by)?;

    let source = resolve_asset(world, source_id)
        .ok_or_else(|| OrderError::bad_request(format!("invalid source {source_id:?}")))?;
    if source.polity != issuer {
        return Err(OrderError::forbidden("source refuses order"));
    }
    if !(0.0..=1.0).contains(&amount) {
        return Err(OrderError::bad_request(format!(
            "invalid ration {amount}"
        )));
    }

    match source.class {
        EntityClass::Colony => {
            world
                .get_mut::<ColonyCore>(source.entity)
                .expect("colony core")
                .ration = amount;
        }
        _ => {
            world
                .get_mut::<ShipCore>(source.entity)
                .expect("ship core")
                .ration = amount;
        }
    }
    Ok(())
}
