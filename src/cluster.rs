//! Starting-cluster generation: one home system per founding polity, with
//! a habitable world, an open home colony, and an enclosed colony working
//! an outer ring. Deterministic for a given seed.

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ecs::components::astronomy::Coords;
use crate::ecs::components::{ColonyCore, OrbitCore, PlanetCore, PolityCore};
use crate::ecs::spawn;
use crate::model::{ColonyKind, PlanetKind, Population, ResourceKind, Unit, UnitKind};

const HOME_ORBIT: u8 = 4;
const OUTER_ORBIT: u8 = 9;
const HOME_HABITABILITY: u8 = 25;

/// One founding polity of the cluster.
#[derive(Debug, Clone)]
pub struct PolitySeed {
    pub id: String,
    pub name: String,
    /// Fraction of full starting stockpiles, clamped to 0.25 ..= 1.00.
    /// Anything below 1.0 starts the colony on reduced rations.
    pub scarcity: f64,
}

impl PolitySeed {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            scarcity: 1.0,
        }
    }
}

/// Cluster generation parameters.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    pub seed: u64,
    pub polities: Vec<PolitySeed>,
}

impl ClusterConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            polities: Vec::new(),
        }
    }

    pub fn with_polity(mut self, polity: PolitySeed) -> Self {
        self.polities.push(polity);
        self
    }
}

/// Populate the world with a starting cluster. Returns the founded
/// polities in configuration order.
pub fn seed_cluster(world: &mut World, config: &ClusterConfig) -> Vec<Entity> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut founded = Vec::with_capacity(config.polities.len());

    for seed in &config.polities {
        let scarcity = seed.scarcity.clamp(0.25, 1.0);
        let polity = spawn::spawn_polity(world, &seed.id, &seed.name);

        let coords = Coords::new(
            rng.random_range(1..=20),
            rng.random_range(1..=20),
            rng.random_range(1..=20),
        );
        let system = spawn::spawn_system(world, &format!("{}-system", seed.id), coords);
        let star = spawn::spawn_star(world, &format!("{}-star", seed.id), system);

        // Habitable world in the fifth orbit.
        let orbit = spawn::spawn_orbit(
            world,
            &format!("{}-orbit-{HOME_ORBIT:02}", seed.id),
            star,
            HOME_ORBIT,
        );
        let planet = spawn::spawn_planet(
            world,
            &format!("{}-home-world", seed.id),
            orbit,
            PlanetKind::Terrestrial,
        );
        world
            .get_mut::<PlanetCore>(planet)
            .expect("planet core")
            .habitability = HOME_HABITABILITY;
        for (j, kind) in [
            ResourceKind::Fuel,
            ResourceKind::Gold,
            ResourceKind::Metal,
            ResourceKind::Nonmetal,
        ]
        .into_iter()
        .enumerate()
        {
            let deposit = spawn::spawn_deposit(
                world,
                &format!("{}-home-world-{}-{:02}", seed.id, kind, j + 1),
                kind,
                true,
            );
            world
                .get_mut::<PlanetCore>(planet)
                .expect("planet core")
                .deposits
                .push(deposit);
        }

        let home_colony = spawn::spawn_colony(
            world,
            &format!("{}-home", seed.id),
            polity,
            planet,
            ColonyKind::Open,
        );
        outfit_home_colony(world, home_colony, polity, scarcity);

        // Enclosed colony working the tenth ring.
        let outer_orbit = spawn::spawn_orbit(
            world,
            &format!("{}-orbit-{OUTER_ORBIT:02}", seed.id),
            star,
            OUTER_ORBIT,
        );
        for (j, kind) in [
            ResourceKind::Fuel,
            ResourceKind::Gold,
            ResourceKind::Metal,
            ResourceKind::Nonmetal,
        ]
        .into_iter()
        .enumerate()
        {
            let deposit = spawn::spawn_deposit(
                world,
                &format!("{}-orbital-rsrc-{:02}", seed.id, j + 1),
                kind,
                true,
            );
            world
                .get_mut::<OrbitCore>(outer_orbit)
                .expect("orbit core")
                .deposits
                .push(deposit);
        }
        let orbital = spawn::spawn_colony(
            world,
            &format!("{}-orbital", seed.id),
            polity,
            outer_orbit,
            ColonyKind::Enclosed,
        );
        outfit_orbital_colony(world, orbital, scarcity);

        // Home references
        {
            let mut core = world.get_mut::<PolityCore>(polity).expect("polity core");
            core.home.system = Some(system);
            core.home.star = Some(star);
            core.home.planet = Some(planet);
            core.home.colony = Some(home_colony);
        }

        founded.push(polity);
    }
    founded
}

fn outfit_home_colony(world: &mut World, colony: Entity, polity: Entity, scarcity: f64) {
    let mut core = world.get_mut::<ColonyCore>(colony).expect("colony core");
    core.original_polity = Some(polity);
    core.population = Population::home_colony();
    core.ration = scarcity;

    core.units = vec![
        Unit::assembled(UnitKind::Farm, 1, 500_000),
        Unit::assembled(UnitKind::Power, 1, 1_000_000),
        Unit::assembled(UnitKind::Mine, 1, 250_000),
        Unit::assembled(UnitKind::Mine, 1, 250_000),
        Unit::assembled(UnitKind::Mine, 1, 250_000),
        Unit::assembled(UnitKind::Mine, 1, 250_000),
    ];

    let (food_min, food_full) = core.population.food_needed_per_turn();
    core.storage.food = if scarcity < 1.0 { food_min } else { food_full };
    core.storage.fuel = 2_000_000;
    core.storage.gold = 50_000;
    core.storage.metal = 4_000_000;
    core.storage.nonmetal = 4_000_000;
}

fn outfit_orbital_colony(world: &mut World, colony: Entity, scarcity: f64) {
    let mut core = world.get_mut::<ColonyCore>(colony).expect("colony core");
    core.population = Population::orbiting_colony();
    core.ration = scarcity;

    let (food_min, food_full) = core.population.food_needed_per_turn();
    core.storage.food = if scarcity < 1.0 { food_min } else { food_full };
    core.storage.fuel = 200_000;
    core.storage.gold = 5_000;
    core.storage.metal = 400_000;
    core.storage.nonmetal = 400_000;
}

#[cfg(test)]
mod tests {
    use bevy_ecs::world::World;

    use super::*;
    use crate::ecs::resources::EntityIndex;
    use crate::model::EntityClass;

    fn seeded_world(seed: u64) -> World {
        let mut world = World::new();
        world.insert_resource(EntityIndex::new());
        let config = ClusterConfig::new(seed)
            .with_polity(PolitySeed::new("usagi", "usagi"))
            .with_polity(PolitySeed {
                id: "tomoe".to_string(),
                name: "tomoe".to_string(),
                scarcity: 0.25,
            });
        seed_cluster(&mut world, &config);
        world
    }

    #[test]
    fn every_polity_gets_a_home() {
        let world = seeded_world(42);
        let index = world.resource::<EntityIndex>();
        assert_eq!(index.iter_class(EntityClass::Polity).count(), 2);
        assert_eq!(index.iter_class(EntityClass::Colony).count(), 4);
        assert_eq!(index.iter_class(EntityClass::System).count(), 2);

        let usagi = index.get("usagi", EntityClass::Polity).unwrap();
        let home = world.get::<PolityCore>(usagi).unwrap().home.colony.unwrap();
        let core = world.get::<ColonyCore>(home).unwrap();
        assert_eq!(core.original_polity, Some(usagi));
        assert!(core.is_home_colony());
    }

    #[test]
    fn scarcity_cuts_rations_and_stockpiles() {
        let world = seeded_world(42);
        let index = world.resource::<EntityIndex>();
        let rich = index.get("usagi-home", EntityClass::Colony).unwrap();
        let poor = index.get("tomoe-home", EntityClass::Colony).unwrap();
        let rich = world.get::<ColonyCore>(rich).unwrap();
        let poor = world.get::<ColonyCore>(poor).unwrap();
        assert_eq!(rich.ration, 1.0);
        assert_eq!(poor.ration, 0.25);
        assert!(poor.storage.food < rich.storage.food);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = seeded_world(7);
        let b = seeded_world(7);
        let report_a = crate::report::state_sexpr(&a);
        let report_b = crate::report::state_sexpr(&b);
        assert_eq!(report_a, report_b);
    }
}
