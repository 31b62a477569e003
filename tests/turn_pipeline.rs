mod common;

use astropolity::ecs::components::{ColonyCore, GameEntity};
use astropolity::ecs::hegemony;
use astropolity::ecs::relationships::ControlledAssets;
use astropolity::ecs::resources::{ColonizationGrants, EntityIndex, TurnClock};
use astropolity::model::{DiplomaticStatus, EntityClass, Unit, UnitKind};
use astropolity::{process_orders, ErrorKind, Order, OrderKind};
use common::{add_ship, build_test_game, lookup};

fn give(issued_by: &str, priority: i64, asset_id: &str, target_id: &str) -> Order {
    Order::new(
        issued_by,
        priority,
        OrderKind::Give {
            asset_id: asset_id.to_string(),
            target_id: target_id.to_string(),
        },
    )
}

fn note(issued_by: &str, priority: i64, target_id: &str, text: &str) -> Order {
    Order::new(
        issued_by,
        priority,
        OrderKind::Note {
            target_id: target_id.to_string(),
            text: text.to_string(),
        },
    )
}

fn ally(app: &mut bevy_app::App, a: &str, b: &str) {
    use astropolity::ecs::components::PolityDiplomacy;
    let pa = lookup(app, a, EntityClass::Polity);
    let pb = lookup(app, b, EntityClass::Polity);
    let world = app.world_mut();
    world
        .get_mut::<PolityDiplomacy>(pa)
        .unwrap()
        .set_status(pb, DiplomaticStatus::Ally);
    world
        .get_mut::<PolityDiplomacy>(pb)
        .unwrap()
        .set_status(pa, DiplomaticStatus::Ally);
}

#[test]
fn clean_turn_returns_no_errors_and_advances_once() {
    let mut app = build_test_game();
    let errors = process_orders(&mut app, vec![note("usagi", 1, "usagi-home", "hello")]);
    assert_eq!(errors, vec![]);
    assert_eq!(app.world().resource::<TurnClock>().turn, 1);
}

#[test]
fn ownership_invariant_holds_between_turns() {
    let mut app = build_test_game();
    add_ship(&mut app, "usagi", "hayabusa");
    ally(&mut app, "usagi", "tomoe");

    let errors = process_orders(&mut app, vec![give("usagi", 1, "usagi-orbital", "tomoe")]);
    assert_eq!(errors, vec![]);

    // every colony and ship has exactly one controller, and that
    // controller's asset set contains it
    let world = app.world();
    let index = world.resource::<EntityIndex>();
    let assets: Vec<_> = index
        .iter_class(EntityClass::Colony)
        .chain(index.iter_class(EntityClass::Ship))
        .map(|(_, e)| e)
        .collect();
    for asset in assets {
        let polity = hegemony::controller(world, asset)
            .expect("asset must have exactly one controller");
        let owned = world.get::<ControlledAssets>(polity).unwrap();
        assert!(owned.contains(&asset));
    }
    let tomoe = lookup(&app, "tomoe", EntityClass::Polity);
    let orbital = lookup(&app, "usagi-orbital", EntityClass::Colony);
    assert_eq!(hegemony::controller(app.world(), orbital), Some(tomoe));
}

#[test]
fn equal_priorities_keep_submission_order() {
    let mut app = build_test_game();
    let errors = process_orders(
        &mut app,
        vec![
            note("usagi", 5, "usagi-home", "first"),
            note("usagi", 5, "usagi-home", "second"),
        ],
    );
    assert_eq!(errors, vec![]);
    let home = lookup(&app, "usagi-home", EntityClass::Colony);
    assert_eq!(app.world().get::<ColonyCore>(home).unwrap().note, "second");
}

#[test]
fn lower_priority_runs_first() {
    let mut app = build_test_game();
    let errors = process_orders(
        &mut app,
        vec![
            note("usagi", 9, "usagi-home", "late"),
            note("usagi", 1, "usagi-home", "early"),
        ],
    );
    assert_eq!(errors, vec![]);
    let home = lookup(&app, "usagi-home", EntityClass::Colony);
    // the priority-9 note executes after the priority-1 note
    assert_eq!(app.world().get::<ColonyCore>(home).unwrap().note, "late");
}

#[test]
fn one_bad_order_does_not_block_nine_good_ones() {
    let mut app = build_test_game();
    add_ship(&mut app, "usagi", "hayabusa");
    let metal_before = {
        let home = lookup(&app, "usagi-home", EntityClass::Colony);
        let mut core = app.world_mut().get_mut::<ColonyCore>(home).unwrap();
        core.units.push(Unit::new(UnitKind::Metal, 1, 100));
        core.storage.metal
    };

    let orders = vec![
        Order::new(
            "admin",
            1,
            OrderKind::CreateAdmin {
                id: "ops".to_string(),
            },
        ),
        Order::new(
            "admin",
            2,
            OrderKind::CreatePolity {
                id: "koga".to_string(),
                name: "Koga".to_string(),
            },
        ),
        Order::new(
            "admin",
            3,
            OrderKind::CreateSystem {
                id: "wakasa".to_string(),
                x: 9,
                y: 9,
                z: 9,
            },
        ),
        note("usagi", 4, "nonesuch", "this one is invalid"),
        Order::new(
            "usagi",
            5,
            OrderKind::HomePortChange {
                ship_id: "hayabusa".to_string(),
                colony_id: "usagi-home".to_string(),
            },
        ),
        Order::new(
            "usagi",
            6,
            OrderKind::Ration {
                source_id: "usagi-home".to_string(),
                amount: 0.5,
            },
        ),
        Order::new(
            "usagi",
            7,
            OrderKind::Name {
                entity_id: "usagi-home".to_string(),
                entity_type: "colony".to_string(),
                name: "Breadbasket".to_string(),
            },
        ),
        note("usagi", 8, "usagi-orbital", "high orbit"),
        Order::new(
            "usagi",
            9,
            OrderKind::Scrap {
                actor_id: "usagi-home".to_string(),
                item: "METAL".to_string(),
                tech_level: 1,
                quantity: 100,
            },
        ),
        give("usagi", 10, "hayabusa", "usagi"),
    ];
    let errors = process_orders(&mut app, orders);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::BadRequest);

    // the nine valid mutations all applied
    let world = app.world();
    assert!(world.resource::<astropolity::ecs::resources::AdminRoster>().is_admin("ops"));
    assert!(astropolity::report::polity(world, "koga").is_some());
    assert!(astropolity::report::system(world, "wakasa").is_some());
    let home = lookup(&app, "usagi-home", EntityClass::Colony);
    let core = app.world().get::<ColonyCore>(home).unwrap();
    assert_eq!(core.ration, 0.5);
    assert_eq!(core.storage.metal, metal_before + 70);
    assert_eq!(app.world().get::<GameEntity>(home).unwrap().name, "Breadbasket");
}

#[test]
fn give_to_own_polity_is_a_clean_noop() {
    let mut app = build_test_game();
    let errors = process_orders(&mut app, vec![give("usagi", 1, "usagi-home", "usagi")]);
    assert_eq!(errors, vec![]);
    let usagi = lookup(&app, "usagi", EntityClass::Polity);
    let home = lookup(&app, "usagi-home", EntityClass::Colony);
    assert_eq!(hegemony::controller(app.world(), home), Some(usagi));
}

#[test]
fn name_round_trips_with_sanitization() {
    let mut app = build_test_game();
    let orders = vec![
        Order::new(
            "usagi",
            1,
            OrderKind::Name {
                entity_id: "usagi-home".to_string(),
                entity_type: "colony".to_string(),
                name: "Foo".to_string(),
            },
        ),
        Order::new(
            "usagi",
            2,
            OrderKind::Name {
                entity_id: "usagi-orbital".to_string(),
                entity_type: "colony".to_string(),
                name: "Foo\\<>%".to_string(),
            },
        ),
    ];
    let errors = process_orders(&mut app, orders);
    assert_eq!(errors, vec![]);

    let home = lookup(&app, "usagi-home", EntityClass::Colony);
    let orbital = lookup(&app, "usagi-orbital", EntityClass::Colony);
    assert_eq!(app.world().get::<GameEntity>(home).unwrap().name, "Foo");
    // the denylist run collapses into a single underscore
    assert_eq!(app.world().get::<GameEntity>(orbital).unwrap().name, "Foo_");
}

#[test]
fn duplicate_ids_rejected_across_the_whole_namespace() {
    let mut app = build_test_game();
    let errors = process_orders(
        &mut app,
        vec![Order::new(
            "admin",
            1,
            OrderKind::CreatePolity {
                id: "usagi-home".to_string(), // an existing colony's id
                name: "Imposter".to_string(),
            },
        )],
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::BadRequest);
    assert!(astropolity::report::polity(app.world(), "usagi-home").is_none());
}

#[test]
fn viceroy_reclamation_through_the_pipeline() {
    let mut app = build_test_game();
    {
        let usagi = lookup(&app, "usagi", EntityClass::Polity);
        let tomoe = lookup(&app, "tomoe", EntityClass::Polity);
        let orbital = lookup(&app, "usagi-orbital", EntityClass::Colony);
        let world = app.world_mut();
        astropolity::ecs::spawn::spawn_polity(world, "koga", "koga");
        hegemony::set_viceroy(world, tomoe, usagi).unwrap();
        hegemony::transfer_colony(world, orbital, tomoe).unwrap();
    }

    // an unresolvable stamp is a pipeline defect, not a user error
    let errors = process_orders(
        &mut app,
        vec![Order::new(
            "nonesuch",
            1,
            OrderKind::Accept {
                asset_id: "usagi-orbital".to_string(),
            },
        )],
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::Bug);

    // an unrelated polity gets refused
    let errors = process_orders(
        &mut app,
        vec![Order::new(
            "koga",
            1,
            OrderKind::Accept {
                asset_id: "usagi-orbital".to_string(),
            },
        )],
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::Forbidden);

    let errors = process_orders(
        &mut app,
        vec![Order::new(
            "tomoe",
            1,
            OrderKind::Accept {
                asset_id: "usagi-orbital".to_string(),
            },
        )],
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), ErrorKind::Forbidden);

    // the ruler reclaims
    let errors = process_orders(
        &mut app,
        vec![Order::new(
            "usagi",
            1,
            OrderKind::Accept {
                asset_id: "usagi-orbital".to_string(),
            },
        )],
    );
    assert_eq!(errors, vec![]);
    let usagi = lookup(&app, "usagi", EntityClass::Polity);
    let orbital = lookup(&app, "usagi-orbital", EntityClass::Colony);
    assert_eq!(hegemony::controller(app.world(), orbital), Some(usagi));
}

#[test]
fn admin_created_ids_resolve_later_in_the_same_turn() {
    let mut app = build_test_game();
    let orders = vec![
        Order::new(
            "admin",
            1,
            OrderKind::CreatePolity {
                id: "koga".to_string(),
                name: "Koga".to_string(),
            },
        ),
        // stamped by the polity that only exists once the admin stage ran
        Order::new(
            "koga",
            2,
            OrderKind::Name {
                entity_id: "koga".to_string(),
                entity_type: "polity".to_string(),
                name: "Koga Ascendant".to_string(),
            },
        ),
    ];
    let errors = process_orders(&mut app, orders);
    assert_eq!(errors, vec![]);
    let koga = lookup(&app, "koga", EntityClass::Polity);
    assert_eq!(
        app.world().get::<GameEntity>(koga).unwrap().name,
        "Koga Ascendant"
    );
}

#[test]
fn colonization_grants_expire_at_end_of_turn() {
    let mut app = build_test_game();
    add_ship(&mut app, "tomoe", "kaiyo");
    let errors = process_orders(
        &mut app,
        vec![Order::new(
            "usagi",
            1,
            OrderKind::PermissionToColonize {
                planet_id: "usagi-home-world".to_string(),
                ship_id: "kaiyo".to_string(),
            },
        )],
    );
    assert_eq!(errors, vec![]);
    // the reset stage cleared the token on the way out
    assert!(app.world().resource::<ColonizationGrants>().is_empty());
}

#[test]
fn unfinished_stages_report_each_dropped_order() {
    let mut app = build_test_game();
    add_ship(&mut app, "usagi", "hayabusa");
    let orders = vec![
        Order::new(
            "usagi",
            1,
            OrderKind::Jump {
                ship_id: "hayabusa".to_string(),
                coords: astropolity::ecs::components::astronomy::Coords::new(2, 2, 2),
                offset: 0,
            },
        ),
        Order::new(
            "usagi",
            2,
            OrderKind::Survey {
                source_id: "hayabusa".to_string(),
                planet_id: "usagi-home-world".to_string(),
            },
        ),
        note("usagi", 3, "usagi-home", "still fine"),
    ];
    let errors = process_orders(&mut app, orders);
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|e| e.kind() == ErrorKind::NotImplemented));
    let home = lookup(&app, "usagi-home", EntityClass::Colony);
    assert_eq!(
        app.world().get::<ColonyCore>(home).unwrap().note,
        "still fine"
    );
    assert_eq!(app.world().resource::<TurnClock>().turn, 1);
}

#[test]
fn production_stage_grows_food_from_farms() {
    let mut app = build_test_game();
    let home = lookup(&app, "usagi-home", EntityClass::Colony);
    let before = app.world().get::<ColonyCore>(home).unwrap().storage.food;

    let errors = process_orders(&mut app, Vec::new());
    assert_eq!(errors, vec![]);

    let core = app.world().get::<ColonyCore>(home).unwrap();
    // 500k FARM-1 units at 25 food apiece
    assert_eq!(core.storage.food, before + 12_500_000);
    // power plants charged the batteries, and reset left the charge standing
    // with no usage recorded
    assert_eq!(core.batteries.charged, 1_000_000);
    assert_eq!(core.batteries.used, 0);
}
