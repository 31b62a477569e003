use astropolity::cluster::{ClusterConfig, PolitySeed};
use astropolity::ecs::spawn;
use astropolity::model::EntityClass;
use bevy_app::App;
use bevy_ecs::entity::Entity;

/// Build a game with one admin and two seeded polities, each with a home
/// system, home colony, and orbital colony.
pub fn build_test_game() -> App {
    let mut app = astropolity::build_game_app(&["admin"]).unwrap();
    let config = ClusterConfig::new(42)
        .with_polity(PolitySeed::new("usagi", "usagi"))
        .with_polity(PolitySeed::new("tomoe", "tomoe"));
    astropolity::cluster::seed_cluster(app.world_mut(), &config);
    app
}

/// Add a ship for `polity_id`, placed in that polity's home system.
pub fn add_ship(app: &mut App, polity_id: &str, ship_id: &str) -> Entity {
    let world = app.world_mut();
    let polity = astropolity::report::polity(world, polity_id).unwrap();
    let system =
        astropolity::report::system(world, &format!("{polity_id}-system")).unwrap();
    spawn::spawn_ship(world, ship_id, polity, system)
}

pub fn lookup(app: &App, id: &str, class: EntityClass) -> Entity {
    app.world()
        .resource::<astropolity::ecs::resources::EntityIndex>()
        .get(id, class)
        .unwrap_or_else(|| panic!("no {class} with id {id}"))
}
