use bevy_ecs::world::World;

use super::{resolve_asset, resolve_issuer};
use crate::ecs::components::ColonyCore;
use crate::ecs::error::OrderError;
use crate::ecs::hegemony;
use crate::ecs::relationships::InSystem;
use crate::ecs::resources::EntityIndex;
use crate::model::EntityClass;

/// Accept — reclaim an asset from a viceroy.
///
/// 1. The asset must be a ship or a colony.
/// 2. It must be controlled by a viceroy of the issuing polity.
///
/// All of a viceroy's assets are assumed to have been the ruler's
/// originally, so reclamation needs no further pedigree check.
pub(crate) fn accept(world: &mut World, issued_by: &str, asset_id: &str) -> Result<(), OrderError> {
    let issuer = resolve_issuer(world, issued_by)?;

    let asset = resolve_asset(world, asset_id)
        .ok_or_else(|| OrderError::bad_request(format!("invalid asset {asset_id:?}")))?;
    if !hegemony::is_viceroy_of(world, asset.polity, issuer) {
        return Err(OrderError::forbidden("asset refuses order"));
    }
    match asset.class {
        EntityClass::Colony => hegemony::transfer_colony(world, asset.entity, issuer),
        _ => hegemony::transfer_ship(world, asset.entity, issuer),
    }
}

/// Give — transfer control of an asset to an ally.
///
/// 1. The asset must be a colony or ship controlled by the issuer.
/// 2. The target resolves to a polity, or to the controlling polity of a
///    colony or ship; a colony/ship target must share the asset's system.
/// 3. Giving to yourself is a no-op.
/// 4. The receiving polity must be allied to the issuer.
/// 5. A Home Colony may only be returned to its original polity.
pub(crate) fn give(
    world: &mut World,
    issued_by: &str,
    asset_id: &str,
    target_id: &str,
) -> Result<(), OrderError> {
    let issuer = resolve_issuer(world, issued_by)?;

    let asset = resolve_asset(world, asset_id)
        .ok_or_else(|| OrderError::bad_request(format!("invalid asset {asset_id:?}")))?;
    if asset.polity != issuer {
        return Err(OrderError::forbidden("asset refuses order"));
    }

    // Target: a polity directly, or a colony/ship standing in for its
    // controller (in which case co-location binds).
    let index = world.resource::<EntityIndex>();
    let (target_polity, target_system) =
        if let Some(polity) = index.get(target_id, EntityClass::Polity) {
            (polity, None)
        } else {
            let target = resolve_asset(world, target_id)
                .ok_or_else(|| OrderError::bad_request(format!("invalid target {target_id:?}")))?;
            (target.polity, Some(target.system))
        };

    if target_polity == issuer {
        return Ok(()); // nothing to do
    }
    if !hegemony::is_allied_to(world, issuer, target_polity) {
        return Err(OrderError::forbidden("asset refuses order"));
    }
    if let Some(system) = target_system
        && system != asset.system
    {
        return Err(OrderError::forbidden("asset not in target's system"));
    }

    if asset.class == EntityClass::Colony {
        let core = world.get::<ColonyCore>(asset.entity).expect("colony core");
        if core.is_home_colony() && core.original_polity != Some(target_polity) {
            return Err(OrderError::forbidden("asset refuses order"));
        }
        hegemony::transfer_colony(world, asset.entity, target_polity)
    } else {
        hegemony::transfer_ship(world, asset.entity, target_polity)
    }
}
