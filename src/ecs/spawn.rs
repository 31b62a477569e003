//! Typed spawn helpers. Each spawns the component bundle for one entity
//! class and claims the ID in the global index. Callers are responsible
//! for uniqueness checks; the index panics on a collision.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::astronomy::{Coords, MAX_STARS_PER_SYSTEM};
use crate::ecs::components::{
    Colony, ColonyCore, Deposit, DepositCore, GameEntity, Orbit, OrbitCore, Planet, PlanetCore,
    Polity, PolityCore, PolityDiplomacy, PolityNames, Ship, ShipCore, Star, StarCore, StarSystem,
    SystemCore,
};
use crate::ecs::relationships::{ControlledBy, InSystem, SitedOn};
use crate::ecs::resources::EntityIndex;
use crate::model::{ColonyKind, EntityClass, PlanetKind, ResourceKind};

fn register(world: &mut World, id: &str, entity: Entity, class: EntityClass) {
    world
        .resource_mut::<EntityIndex>()
        .register(id, entity, class);
}

pub fn spawn_polity(world: &mut World, id: &str, name: &str) -> Entity {
    let entity = world
        .spawn((
            GameEntity {
                id: id.to_string(),
                name: name.to_string(),
            },
            Polity,
            PolityCore::default(),
            PolityDiplomacy::default(),
            PolityNames::default(),
        ))
        .id();
    register(world, id, entity, EntityClass::Polity);
    entity
}

pub fn spawn_system(world: &mut World, id: &str, coords: Coords) -> Entity {
    let name = format!("{:02}-{:02}-{:02}", coords.x, coords.y, coords.z);
    let entity = world
        .spawn((
            GameEntity {
                id: id.to_string(),
                name,
            },
            StarSystem,
            SystemCore::new(coords),
        ))
        .id();
    register(world, id, entity, EntityClass::System);
    entity
}

/// Add a star to a system. The first star takes the system's name bare;
/// adding a second retroactively renames the first to "...A" and so on
/// through "H".
pub fn spawn_star(world: &mut World, id: &str, system: Entity) -> Entity {
    let (system_name, star_count) = {
        let name = world.get::<GameEntity>(system).expect("system identity").name.clone();
        let count = world.get::<SystemCore>(system).expect("system core").stars.len();
        (name, count)
    };
    assert!(star_count < MAX_STARS_PER_SYSTEM, "system is full of stars");

    let star_name = match star_count {
        0 => system_name.clone(),
        1 => {
            let first = world.get::<SystemCore>(system).expect("system core").stars[0];
            world.get_mut::<GameEntity>(first).expect("star identity").name =
                format!("{system_name}A");
            format!("{system_name}B")
        }
        n => {
            let suffix = (b'A' + n as u8) as char;
            format!("{system_name}{suffix}")
        }
    };

    let entity = world
        .spawn((
            GameEntity {
                id: id.to_string(),
                name: star_name,
            },
            Star,
            StarCore::new(system),
        ))
        .id();
    world
        .get_mut::<SystemCore>(system)
        .expect("system core")
        .stars
        .push(entity);
    register(world, id, entity, EntityClass::Star);
    entity
}

/// Occupy one of a star's orbit slots. Panics if the ring is out of range
/// or already occupied.
pub fn spawn_orbit(world: &mut World, id: &str, star: Entity, ring: u8) -> Entity {
    let name = {
        let star_name = &world.get::<GameEntity>(star).expect("star identity").name;
        format!("{star_name}-{ring:02}")
    };
    let entity = world
        .spawn((
            GameEntity {
                id: id.to_string(),
                name,
            },
            Orbit,
            OrbitCore::new(star, ring),
        ))
        .id();
    let mut core = world.get_mut::<StarCore>(star).expect("star core");
    let slot = &mut core.orbits[usize::from(ring)];
    assert!(slot.is_none(), "orbit ring {ring} already occupied");
    *slot = Some(entity);
    register(world, id, entity, EntityClass::Orbit);
    entity
}

pub fn spawn_planet(world: &mut World, id: &str, orbit: Entity, kind: PlanetKind) -> Entity {
    let name = world.get::<GameEntity>(orbit).expect("orbit identity").name.clone();
    let entity = world
        .spawn((
            GameEntity {
                id: id.to_string(),
                name,
            },
            Planet,
            PlanetCore::new(orbit, kind),
        ))
        .id();
    world.get_mut::<OrbitCore>(orbit).expect("orbit core").planet = Some(entity);
    register(world, id, entity, EntityClass::Planet);
    entity
}

pub fn spawn_deposit(
    world: &mut World,
    id: &str,
    kind: ResourceKind,
    unlimited: bool,
) -> Entity {
    let entity = world
        .spawn((
            GameEntity {
                id: id.to_string(),
                name: kind.as_str().to_string(),
            },
            Deposit,
            DepositCore::standard(kind, unlimited),
        ))
        .id();
    register(world, id, entity, EntityClass::Deposit);
    entity
}

/// Spawn a colony anchored to a planet or orbit, controlled by `polity`.
/// The hull number comes off the polity's colony sequence.
pub fn spawn_colony(
    world: &mut World,
    id: &str,
    polity: Entity,
    site: Entity,
    kind: ColonyKind,
) -> Entity {
    let hull_number = world
        .get_mut::<PolityCore>(polity)
        .expect("polity core")
        .next_colony_number();
    let system = system_of_site(world, site);
    let entity = world
        .spawn((
            GameEntity {
                id: id.to_string(),
                name: id.to_string(),
            },
            Colony,
            ColonyCore::new(kind, hull_number),
            ControlledBy(polity),
            SitedOn(site),
            InSystem(system),
        ))
        .id();
    register(world, id, entity, EntityClass::Colony);
    entity
}

/// Spawn a ship in a system, controlled by `polity`. The hull number comes
/// off the polity's ship sequence.
pub fn spawn_ship(world: &mut World, id: &str, polity: Entity, system: Entity) -> Entity {
    let hull_number = world
        .get_mut::<PolityCore>(polity)
        .expect("polity core")
        .next_ship_number();
    let entity = world
        .spawn((
            GameEntity {
                id: id.to_string(),
                name: id.to_string(),
            },
            Ship,
            ShipCore::new(hull_number),
            ControlledBy(polity),
            InSystem(system),
        ))
        .id();
    register(world, id, entity, EntityClass::Ship);
    entity
}

/// Walk a colony site (planet or orbit) up to its star system.
fn system_of_site(world: &World, site: Entity) -> Entity {
    let orbit = match world.get::<PlanetCore>(site) {
        Some(planet) => planet.orbit,
        None => site,
    };
    let star = world.get::<OrbitCore>(orbit).expect("orbit core").star;
    world.get::<StarCore>(star).expect("star core").system
}
