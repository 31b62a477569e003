use bevy_ecs::world::World;

use crate::ecs::components::astronomy::Coords;
use crate::ecs::components::GameEntity;
use crate::ecs::error::OrderError;
use crate::ecs::resources::{AdminRoster, EntityIndex};
use crate::ecs::spawn;
use crate::id;
use crate::model::{text, EntityClass};

fn require_admin(world: &World, issued_by: &str) -> Result<(), OrderError> {
    if !world.resource::<AdminRoster>().is_admin(issued_by) {
        return Err(OrderError::forbidden("engine refused orders"));
    }
    Ok(())
}

/// Validate a caller-supplied entity ID, minting one when it is blank.
/// IDs land in the shared namespace, so the duplicate check spans every
/// entity class.
fn admissible_id(world: &World, id: &str) -> Result<String, OrderError> {
    if id != id.trim() {
        return Err(OrderError::bad_request("invalid characters in id"));
    }
    let id = if id.is_empty() {
        id::generate_id()
    } else {
        id.to_string()
    };
    if world.resource::<EntityIndex>().contains(&id) {
        return Err(OrderError::bad_request("duplicate id"));
    }
    Ok(id)
}

/// CreateAdmin — grant administrator rights to an ID.
///
/// Admin IDs are their own namespace, distinct from game entities.
pub(crate) fn create_admin(world: &mut World, issued_by: &str, id: &str) -> Result<(), OrderError> {
    require_admin(world, issued_by)?;

    let id = {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            id::generate_id()
        } else {
            trimmed.to_string()
        }
    };
    let mut roster = world.resource_mut::<AdminRoster>();
    if roster.contains(&id) {
        return Err(OrderError::bad_request("duplicate id"));
    }
    roster.add(&id);
    Ok(())
}

/// CreatePolity — add a new polity to the game.
///
/// Admin-only. The ID must be unique across the entire entity namespace;
/// the name must be clean and case-insensitively unique among polities.
pub(crate) fn create_polity(
    world: &mut World,
    issued_by: &str,
    id: &str,
    name: &str,
) -> Result<(), OrderError> {
    require_admin(world, issued_by)?;
    let id = admissible_id(world, id)?;

    if name.is_empty() {
        return Err(OrderError::bad_request("missing name"));
    }
    if name != text::sanitize(name).trim() {
        return Err(OrderError::bad_request("invalid characters in name"));
    }
    let upper = name.to_uppercase();
    let clash = world
        .resource::<EntityIndex>()
        .iter_class(EntityClass::Polity)
        .map(|(_, entity)| entity)
        .collect::<Vec<_>>()
        .into_iter()
        .any(|polity| {
            world
                .get::<GameEntity>(polity)
                .is_some_and(|g| g.name.to_uppercase() == upper)
        });
    if clash {
        return Err(OrderError::bad_request(format!("duplicate name {name:?}")));
    }

    spawn::spawn_polity(world, &id, name);
    Ok(())
}

/// CreateSystem — add a new star system at the given coordinates, with a
/// single star and its ten empty orbit slots.
pub(crate) fn create_system(
    world: &mut World,
    issued_by: &str,
    id: &str,
    x: i32,
    y: i32,
    z: i32,
) -> Result<(), OrderError> {
    require_admin(world, issued_by)?;
    let id = admissible_id(world, id)?;

    let system = spawn::spawn_system(world, &id, Coords::new(x, y, z));
    spawn::spawn_star(world, &id::generate_id(), system);
    Ok(())
}

#[cfg(test)]
mod tests {
    use bevy_ecs::world::World;

    use super::*;
    use crate::ecs::components::SystemCore;
    use crate::ecs::error::ErrorKind;

    fn fixture() -> World {
        let mut world = World::new();
        world.insert_resource(EntityIndex::new());
        let mut roster = AdminRoster::default();
        roster.add("admin");
        world.insert_resource(roster);
        world
    }

    #[test]
    fn admin_commands_refuse_non_admins() {
        let mut world = fixture();
        let err = create_polity(&mut world, "nobody", "usagi", "usagi").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    #[test]
    fn create_polity_registers_in_shared_namespace() {
        let mut world = fixture();
        create_polity(&mut world, "admin", "usagi", "Usagi").unwrap();
        assert!(
            world
                .resource::<EntityIndex>()
                .get("usagi", EntityClass::Polity)
                .is_some()
        );
    }

    #[test]
    fn duplicate_ids_rejected_across_classes() {
        let mut world = fixture();
        create_system(&mut world, "admin", "mizugame", 1, 1, 1).unwrap();
        // a polity cannot reuse a system's id
        let err = create_polity(&mut world, "admin", "mizugame", "Mizugame").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn polity_names_unique_case_insensitively() {
        let mut world = fixture();
        create_polity(&mut world, "admin", "usagi", "Usagi").unwrap();
        let err = create_polity(&mut world, "admin", "usagi2", "USAGI").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn blank_ids_are_minted() {
        let mut world = fixture();
        create_polity(&mut world, "admin", "", "Usagi").unwrap();
        assert_eq!(
            world
                .resource::<EntityIndex>()
                .iter_class(EntityClass::Polity)
                .count(),
            1
        );
    }

    #[test]
    fn create_system_seeds_one_star() {
        let mut world = fixture();
        create_system(&mut world, "admin", "mizugame", 3, 4, 5).unwrap();
        let system = world
            .resource::<EntityIndex>()
            .get("mizugame", EntityClass::System)
            .unwrap();
        let core = world.get::<SystemCore>(system).unwrap();
        assert_eq!(core.stars.len(), 1);
        assert_eq!(world.get::<GameEntity>(system).unwrap().name, "03-04-05");
    }

    #[test]
    fn create_admin_extends_roster() {
        let mut world = fixture();
        create_admin(&mut world, "admin", "ops").unwrap();
        assert!(world.resource::<AdminRoster>().is_admin("ops"));
        let err = create_admin(&mut world, "admin", "ops").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
}
