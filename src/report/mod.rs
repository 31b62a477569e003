//! Read-only projections of world state for external consumers.
//!
//! Lookups return entities for the reporting layer to project; the
//! s-expression dump is a diagnostic rendering of the full world,
//! reproducible for identical state but with no wire-format stability
//! promise. Readers must only observe between turns.

use std::fmt::Write as _;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::{ColonyCore, GameEntity, OrbitCore, PolityCore, StarCore};
use crate::ecs::relationships::{ControlledAssets, SitedColonies};
use crate::ecs::resources::{EntityIndex, TurnClock};
use crate::model::EntityClass;

pub fn polity(world: &World, id: &str) -> Option<Entity> {
    world.resource::<EntityIndex>().get(id, EntityClass::Polity)
}

pub fn colony(world: &World, id: &str) -> Option<Entity> {
    world.resource::<EntityIndex>().get(id, EntityClass::Colony)
}

pub fn ship(world: &World, id: &str) -> Option<Entity> {
    world.resource::<EntityIndex>().get(id, EntityClass::Ship)
}

pub fn planet(world: &World, id: &str) -> Option<Entity> {
    world.resource::<EntityIndex>().get(id, EntityClass::Planet)
}

pub fn star(world: &World, id: &str) -> Option<Entity> {
    world.resource::<EntityIndex>().get(id, EntityClass::Star)
}

pub fn system(world: &World, id: &str) -> Option<Entity> {
    world.resource::<EntityIndex>().get(id, EntityClass::System)
}

fn identity<'a>(world: &'a World, entity: Entity) -> &'a GameEntity {
    world.get::<GameEntity>(entity).expect("entity identity")
}

fn percentage(r: f64) -> String {
    format!("{:.0}%", r * 100.0)
}

/// Nested parenthesized dump of full world state.
///
/// Iteration goes through the ID index, so identical state always renders
/// identically.
pub fn state_sexpr(world: &World) -> String {
    let turn = world
        .get_resource::<TurnClock>()
        .map(|clock| clock.turn)
        .unwrap_or(0);
    let index = world.resource::<EntityIndex>();
    let mut w = String::with_capacity(10 * 1024);

    let _ = writeln!(w, "(state (turn {turn})");

    for (id, polity) in index.iter_class(EntityClass::Polity) {
        let _ = writeln!(w, "  (polity (id {id:?})");
        let _ = writeln!(w, "    (name {:?})", identity(world, polity).name);
        let home = &world.get::<PolityCore>(polity).expect("polity core").home;
        if let (Some(system), Some(planet), Some(colony)) = (home.system, home.planet, home.colony)
        {
            let _ = writeln!(w, "    (home (system {:?})", identity(world, system).id);
            let _ = writeln!(w, "          (planet {:?})", identity(world, planet).id);
            let _ = writeln!(w, "          (colony {:?}))", identity(world, colony).id);
        }
        if let Some(assets) = world.get::<ControlledAssets>(polity) {
            let mut controlled: Vec<(String, Entity)> = assets
                .iter()
                .map(|a| (identity(world, *a).id.clone(), *a))
                .collect();
            controlled.sort();
            for (asset_id, asset) in controlled {
                if let Some(colony) = world.get::<ColonyCore>(asset) {
                    let _ = writeln!(w, "    (colony (id {asset_id:?})");
                    let _ = writeln!(w, "      (hull-number {:?})", colony.hull_number);
                    let _ = writeln!(w, "      (kind        {})", colony.kind);
                    let _ = writeln!(w, "      (ration      {:>7})", percentage(colony.ration));
                    let _ = writeln!(w, "    ) ;; colony {asset_id}");
                }
            }
        }
        let _ = writeln!(w, "  ) ;; polity {id}");
    }

    if index.iter_class(EntityClass::System).next().is_some() {
        let _ = writeln!(w, "  (systems");
        for (id, _) in index.iter_class(EntityClass::System) {
            let _ = writeln!(w, "    (system (id {id:?}))");
        }
        let _ = writeln!(w, "  ) ;; systems");
    }

    if index.iter_class(EntityClass::Star).next().is_some() {
        let _ = writeln!(w, "  (stars");
        for (id, star) in index.iter_class(EntityClass::Star) {
            let _ = writeln!(w, "    (star (id {id:?})");
            let _ = writeln!(w, "      (orbits");
            let orbits = world.get::<StarCore>(star).expect("star core").orbits;
            for (ring, slot) in orbits.iter().enumerate() {
                let Some(orbit) = slot else { continue };
                let _ = writeln!(w, "        (ring {}", ring + 1);
                let core = world.get::<OrbitCore>(*orbit).expect("orbit core");
                if let Some(planet) = core.planet {
                    let _ = writeln!(w, "          (planet  (id {:?}))", identity(world, planet).id);
                }
                for deposit in &core.deposits {
                    let _ =
                        writeln!(w, "          (deposit (id {:?}))", identity(world, *deposit).id);
                }
                if let Some(colonies) = world.get::<SitedColonies>(*orbit) {
                    for colony in colonies.iter() {
                        let _ = writeln!(
                            w,
                            "          (colony  (id {:?}))",
                            identity(world, *colony).id
                        );
                    }
                }
                let _ = writeln!(w, "        )");
            }
            let _ = writeln!(w, "      ) ;; orbits");
            let _ = writeln!(w, "    ) ;; star {id}");
        }
        let _ = writeln!(w, "  ) ;; stars");
    }

    if index.iter_class(EntityClass::Planet).next().is_some() {
        let _ = writeln!(w, "  (planets");
        for (id, planet) in index.iter_class(EntityClass::Planet) {
            let _ = writeln!(w, "    (planet (id {id:?})");
            let _ = writeln!(w, "      (name {:?})", identity(world, planet).name);
            if let Some(colonies) = world.get::<SitedColonies>(planet) {
                for colony in colonies.iter() {
                    let _ = writeln!(w, "      (colony (id {:?}))", identity(world, *colony).id);
                }
            }
            let _ = writeln!(w, "    ) ;; planet {id}");
        }
        let _ = writeln!(w, "  ) ;; planets");
    }

    if index.iter_class(EntityClass::Colony).next().is_some() {
        let _ = writeln!(w, "  (colonies");
        for (id, colony) in index.iter_class(EntityClass::Colony) {
            let core = world.get::<ColonyCore>(colony).expect("colony core");
            let _ = writeln!(w, "    (colony (id {id:?})");
            let _ = writeln!(w, "      (kind        {})", core.kind);
            let _ = writeln!(w, "      (hull-number {:?})", core.hull_number);
            let _ = writeln!(w, "      (name        {:?})", identity(world, colony).name);
            let _ = writeln!(w, "      (ration      {:>7})", percentage(core.ration));
            let _ = writeln!(
                w,
                "      (batteries   (charged {}) (used {}))",
                core.batteries.charged, core.batteries.used
            );
            if !core.units.is_empty() {
                let _ = writeln!(w, "      (units");
                for unit in &core.units {
                    let _ = writeln!(w, "        {}", unit.sexpr());
                }
                let _ = writeln!(w, "      ) ;; units");
            }
            let storage = &core.storage;
            if storage.food != 0
                || storage.fuel != 0
                || storage.gold != 0
                || storage.metal != 0
                || storage.nonmetal != 0
            {
                let _ = writeln!(w, "      (storage");
                for (label, amount) in [
                    ("food", storage.food),
                    ("fuel", storage.fuel),
                    ("gold", storage.gold),
                    ("metal", storage.metal),
                    ("nonmetal", storage.nonmetal),
                ] {
                    if amount != 0 {
                        let _ = writeln!(w, "        ({label} {amount})");
                    }
                }
                let _ = writeln!(w, "      ) ;; storage");
            }
            let _ = writeln!(w, "    ) ;; colony {id}");
        }
        let _ = writeln!(w, "  ) ;; colonies");
    }

    let _ = writeln!(w, ") ;; turn {turn}");
    w
}
