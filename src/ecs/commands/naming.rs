use bevy_ecs::world::World;

use super::resolve_issuer;
use crate::ecs::components::{ColonyCore, GameEntity, PolityNames, ShipCore};
use crate::ecs::error::OrderError;
use crate::ecs::hegemony;
use crate::ecs::resources::EntityIndex;
use crate::model::{text, EntityClass};

const NAME_MAX: usize = 50;
const NOTE_MAX: usize = 200;

/// Name — assign a name to a ship, colony, polity, star, system, or planet.
///
/// 1. The name is sanitized; it must be 1 to 50 characters afterwards.
/// 2. The `type` parameter guards against accidental renames: it must
///    match the class of the resolved entity exactly.
/// 3. Ship, colony, and polity renames require control of the target.
/// 4. Star, system, and planet names are not ownership-gated: they land in
///    the issuing polity's own naming database, so every polity may keep
///    its own map of the sky.
pub(crate) fn name(
    world: &mut World,
    issued_by: &str,
    entity_id: &str,
    entity_type: &str,
    raw_name: &str,
) -> Result<(), OrderError> {
    let issuer = resolve_issuer(world, issued_by)?;

    let cleaned = text::clean_name(raw_name, NAME_MAX)
        .ok_or_else(|| OrderError::bad_request(format!("invalid name {raw_name:?}")))?;

    let (entity, class) = world
        .resource::<EntityIndex>()
        .lookup(entity_id)
        .filter(|(_, class)| {
            matches!(
                class,
                EntityClass::Colony
                    | EntityClass::Planet
                    | EntityClass::Polity
                    | EntityClass::Ship
                    | EntityClass::Star
                    | EntityClass::System
            )
        })
        .ok_or_else(|| OrderError::bad_request(format!("invalid entity {entity_id:?}")))?;

    if entity_type != class.as_str() {
        return Err(OrderError::bad_request(format!(
            "invalid type {entity_type:?}"
        )));
    }

    match class {
        EntityClass::Colony | EntityClass::Ship => {
            if !hegemony::controls(world, issuer, entity) {
                return Err(OrderError::forbidden(format!("{class} refuses order")));
            }
            world.get_mut::<GameEntity>(entity).expect("identity").name = cleaned;
        }
        EntityClass::Polity => {
            if entity != issuer {
                return Err(OrderError::forbidden("polity refuses order"));
            }
            world.get_mut::<GameEntity>(entity).expect("identity").name = cleaned;
        }
        // Private naming database: visible only on the namer's reports.
        _ => {
            world
                .get_mut::<PolityNames>(issuer)
                .expect("polity names")
                .set(entity, cleaned);
        }
    }
    Ok(())
}

/// Note — attach a brief message to a ship or colony for its owner's
/// reports. Trimmed, at most 200 characters.
pub(crate) fn note(
    world: &mut World,
    issued_by: &str,
    target_id: &str,
    raw_text: &str,
) -> Result<(), OrderError> {
    let issuer = resolve_issuer(world, issued_by)?;

    let trimmed = raw_text.trim();
    if trimmed.chars().count() > NOTE_MAX {
        return Err(OrderError::bad_request("invalid text"));
    }

    let (entity, class) = world
        .resource::<EntityIndex>()
        .lookup(target_id)
        .filter(|(_, class)| matches!(class, EntityClass::Colony | EntityClass::Ship))
        .ok_or_else(|| OrderError::bad_request(format!("invalid target {target_id:?}")))?;
    if !hegemony::controls(world, issuer, entity) {
        return Err(OrderError::forbidden("target refuses order"));
    }

    match class {
        EntityClass::Colony => {
            world.get_mut::<ColonyCore>(entity).expect("colony core").note = trimmed.to_string();
        }
        _ => {
            world.get_mut::<ShipCore>(entity).expect("ship core").note = trimmed.to_string();
        }
    }
    Ok(())
}
