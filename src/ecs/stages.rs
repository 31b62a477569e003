//! The turn pipeline's stages, one exclusive system apiece.
//!
//! Every stage receives the full prioritized batch and filters to the
//! order kinds it understands. Stage failures never abort the turn: each
//! error joins the turn-wide list and the pipeline runs on. Stages whose
//! game content is unfinished report NotImplemented once per matching
//! order they receive — a batch with none of their kinds contributes
//! nothing, so a clean batch yields a clean turn.

use bevy_ecs::world::World;

use crate::ecs::commands;
use crate::ecs::components::{ColonyCore, ShipCore};
use crate::ecs::error::OrderError;
use crate::ecs::orders::OrderKind;
use crate::ecs::resources::{ColonizationGrants, EntityIndex, OrderBatch, TurnErrors};
use crate::model::{EntityClass, UnitKind};

/// Pull the batch out of the world for the duration of one stage so the
/// stage can mutate freely, then put it back and bank the errors.
fn run_stage<F>(world: &mut World, stage: &'static str, body: F)
where
    F: FnOnce(&mut World, &OrderBatch, &mut Vec<OrderError>),
{
    let batch = world
        .remove_resource::<OrderBatch>()
        .expect("order batch in place for the turn");
    let mut errs = Vec::new();
    body(world, &batch, &mut errs);
    world.insert_resource(batch);
    if !errs.is_empty() {
        tracing::debug!(stage, errors = errs.len(), "stage completed with errors");
    }
    world.resource_mut::<TurnErrors>().extend(errs);
}

/// Report NotImplemented for every order matching an unfinished kind.
fn unimplemented_pass(
    batch: &OrderBatch,
    errs: &mut Vec<OrderError>,
    what: &'static str,
    matches: impl Fn(&OrderKind) -> bool,
) {
    for order in batch.iter().filter(|o| matches(o.kind())) {
        tracing::warn!(
            stage = what,
            issued_by = order.issued_by(),
            "order kind not implemented"
        );
        errs.push(OrderError::NotImplemented(what));
    }
}

fn colonies(world: &World) -> Vec<bevy_ecs::entity::Entity> {
    world
        .resource::<EntityIndex>()
        .iter_class(EntityClass::Colony)
        .map(|(_, entity)| entity)
        .collect()
}

fn ships(world: &World) -> Vec<bevy_ecs::entity::Entity> {
    world
        .resource::<EntityIndex>()
        .iter_class(EntityClass::Ship)
        .map(|(_, entity)| entity)
        .collect()
}

/// Start-of-turn housekeeping: zero out the per-turn battery counters.
pub(crate) fn game_data_cleanup_stage(world: &mut World) {
    for colony in colonies(world) {
        let mut core = world.get_mut::<ColonyCore>(colony).expect("colony core");
        core.batteries.charged = 0;
        core.batteries.used = 0;
    }
}

/// Admin orders run first so IDs they create resolve in every later stage
/// of the same turn.
pub(crate) fn admin_stage(world: &mut World) {
    run_stage(world, "admin", |world, batch, errs| {
        for order in batch.iter() {
            let issued_by = order.issued_by();
            let result = match order.kind() {
                OrderKind::CreateAdmin { id } => {
                    tracing::debug!(stage = "admin", issued_by, id, "createAdmin");
                    commands::create_admin(world, issued_by, id)
                }
                OrderKind::CreatePolity { id, name } => {
                    tracing::debug!(stage = "admin", issued_by, id, name, "createPolity");
                    commands::create_polity(world, issued_by, id, name)
                }
                OrderKind::CreateSystem { id, x, y, z } => {
                    tracing::debug!(stage = "admin", issued_by, id, x, y, z, "createSystem");
                    commands::create_system(world, issued_by, id, *x, *y, *z)
                }
                _ => continue,
            };
            if let Err(err) = result {
                errs.push(err);
            }
        }
    });
}

pub(crate) fn combat_orders_stage(world: &mut World) {
    run_stage(world, "combatOrders", |_, batch, errs| {
        unimplemented_pass(batch, errs, "combatOrders", |k| {
            matches!(
                k,
                OrderKind::Dodge { .. }
                    | OrderKind::AutoReturnFire { .. }
                    | OrderKind::CloseProximityTargeting { .. }
                    | OrderKind::PreManeuverEnergyWeaponFire { .. }
                    | OrderKind::PreManeuverMissileFire { .. }
                    | OrderKind::AfterManeuverEnergyWeaponFire { .. }
                    | OrderKind::AfterManeuverMissileFire { .. }
                    | OrderKind::Undock { .. }
                    | OrderKind::Run { .. }
                    | OrderKind::TacticalManeuver { .. }
                    | OrderKind::Close { .. }
                    | OrderKind::Dock { .. }
                    | OrderKind::Withdraw { .. }
                    | OrderKind::DefensiveSupport { .. }
                    | OrderKind::OffensiveSupport { .. }
                    | OrderKind::Invade { .. }
            )
        });
    });
}

/// Permission to colonize, home port changes, diplomacy.
pub(crate) fn permission_orders_stage(world: &mut World) {
    run_stage(world, "permissionOrders", |world, batch, errs| {
        for order in batch.iter() {
            let issued_by = order.issued_by();
            let result = match order.kind() {
                OrderKind::PermissionToColonize { planet_id, ship_id } => {
                    tracing::debug!(
                        stage = "permissionOrders",
                        issued_by,
                        planet_id,
                        ship_id,
                        "permissionToColonize"
                    );
                    commands::permission_to_colonize(world, issued_by, planet_id, ship_id)
                }
                OrderKind::HomePortChange { ship_id, colony_id } => {
                    tracing::debug!(
                        stage = "permissionOrders",
                        issued_by,
                        ship_id,
                        colony_id,
                        "homePortChange"
                    );
                    commands::home_port_change(world, issued_by, ship_id, colony_id)
                }
                _ => continue,
            };
            if let Err(err) = result {
                errs.push(err);
            }
        }
    });
}

/// Disassemble → Scrap → Junk → Merge → CombineFactoryGroup.
pub(crate) fn disassembly_stage(world: &mut World) {
    run_stage(world, "disassembly", |world, batch, errs| {
        unimplemented_pass(batch, errs, "disassemble", |k| {
            matches!(k, OrderKind::Disassemble { .. })
        });
        for order in batch.iter() {
            if let OrderKind::Scrap {
                actor_id,
                item,
                tech_level,
                quantity,
            } = order.kind()
            {
                let issued_by = order.issued_by();
                tracing::debug!(stage = "scrap", issued_by, actor_id, item, "scrap");
                if let Err(err) =
                    commands::scrap(world, issued_by, actor_id, item, *tech_level, *quantity)
                {
                    errs.push(err);
                }
            }
        }
        for order in batch.iter() {
            if let OrderKind::Junk { actor_id, asset_id } = order.kind() {
                let issued_by = order.issued_by();
                tracing::debug!(stage = "junk", issued_by, actor_id, asset_id, "junk");
                if let Err(err) = commands::junk(world, issued_by, actor_id, asset_id) {
                    errs.push(err);
                }
            }
        }
        unimplemented_pass(batch, errs, "merge", |k| matches!(k, OrderKind::Merge { .. }));
        unimplemented_pass(batch, errs, "combineFactoryGroup", |k| {
            matches!(k, OrderKind::CombineFactoryGroup { .. })
        });
    });
}

pub(crate) fn setup_stage(world: &mut World) {
    run_stage(world, "setup", |_, batch, errs| {
        unimplemented_pass(batch, errs, "setup", |k| {
            matches!(
                k,
                OrderKind::SetUp { .. }
                    | OrderKind::AddOn { .. }
                    | OrderKind::DefineCargoHold { .. }
            )
        });
    });
}

/// UnloadCargo → TransferUnits → PickUp → LoadCargo.
pub(crate) fn transfer_stage(world: &mut World) {
    run_stage(world, "transfer", |_, batch, errs| {
        unimplemented_pass(batch, errs, "unloadCargo", |k| {
            matches!(k, OrderKind::UnloadCargo { .. })
        });
        unimplemented_pass(batch, errs, "transferUnits", |k| {
            matches!(k, OrderKind::Transfer { .. })
        });
        unimplemented_pass(batch, errs, "pickup", |k| {
            matches!(
                k,
                OrderKind::PickUpItem { .. } | OrderKind::PickUpPopulation { .. }
            )
        });
        unimplemented_pass(batch, errs, "loadCargo", |k| {
            matches!(k, OrderKind::LoadCargo { .. })
        });
    });
}

/// Draft → Disband.
pub(crate) fn draft_orders_stage(world: &mut World) {
    run_stage(world, "draftOrders", |_, batch, errs| {
        unimplemented_pass(batch, errs, "draft", |k| matches!(k, OrderKind::Draft { .. }));
        unimplemented_pass(batch, errs, "disband", |k| {
            matches!(k, OrderKind::Disband { .. })
        });
    });
}

pub(crate) fn assembly_stage(world: &mut World) {
    run_stage(world, "assembly", |_, batch, errs| {
        unimplemented_pass(batch, errs, "assembly", |k| {
            matches!(
                k,
                OrderKind::AssembleItem { .. }
                    | OrderKind::AssembleFactory { .. }
                    | OrderKind::AssembleFactoryGroup { .. }
                    | OrderKind::AssembleMine { .. }
                    | OrderKind::AssembleMineGroup { .. }
                    | OrderKind::ExpendResearchPointsOnly { .. }
                    | OrderKind::ExpendPrototype { .. }
                    | OrderKind::ExpendCommittedBufferResearchPoints { .. }
                    | OrderKind::FactoryGroupChange { .. }
                    | OrderKind::MineChange { .. }
                    | OrderKind::MineShutDown { .. }
                    | OrderKind::MineStartUp { .. }
                    | OrderKind::ShutDown { .. }
                    | OrderKind::StartUp { .. }
            )
        });
    });
}

pub(crate) fn build_change_stage(world: &mut World) {
    run_stage(world, "buildChange", |_, batch, errs| {
        unimplemented_pass(batch, errs, "buildChange", |k| {
            matches!(k, OrderKind::BuildChange { .. })
        });
    });
}

pub(crate) fn surveys_and_probes_stage(world: &mut World) {
    run_stage(world, "surveysAndProbes", |_, batch, errs| {
        unimplemented_pass(batch, errs, "surveysAndProbes", |k| {
            matches!(
                k,
                OrderKind::Survey { .. } | OrderKind::LaunchRobotProbe { .. }
            )
        });
    });
}

/// Pay → Ration.
pub(crate) fn pay_change_stage(world: &mut World) {
    run_stage(world, "payChange", |world, batch, errs| {
        unimplemented_pass(batch, errs, "pay", |k| matches!(k, OrderKind::Pay { .. }));
        for order in batch.iter() {
            if let OrderKind::Ration { source_id, amount } = order.kind() {
                let issued_by = order.issued_by();
                tracing::debug!(stage = "ration", issued_by, source_id, amount, "ration");
                if let Err(err) = commands::ration(world, issued_by, source_id, *amount) {
                    errs.push(err);
                }
            }
        }
    });
}

/// Name, Note, planet control, messages.
pub(crate) fn naming_orders_stage(world: &mut World) {
    run_stage(world, "namingOrders", |world, batch, errs| {
        for order in batch.iter() {
            let issued_by = order.issued_by();
            let result = match order.kind() {
                OrderKind::Name {
                    entity_id,
                    entity_type,
                    name,
                } => {
                    tracing::debug!(stage = "namingOrders", issued_by, entity_id, "name");
                    commands::name(world, issued_by, entity_id, entity_type, name)
                }
                OrderKind::Note { target_id, text } => {
                    tracing::debug!(stage = "namingOrders", issued_by, target_id, "note");
                    commands::note(world, issued_by, target_id, text)
                }
                _ => continue,
            };
            if let Err(err) = result {
                errs.push(err);
            }
        }
        unimplemented_pass(batch, errs, "controlPlanet", |k| {
            matches!(
                k,
                OrderKind::ControlPlanet { .. } | OrderKind::UncontrolPlanet { .. }
            )
        });
        unimplemented_pass(batch, errs, "message", |k| {
            matches!(k, OrderKind::Message { .. })
        });
    });
}

/// Jump → Move.
pub(crate) fn ship_travel_stage(world: &mut World) {
    run_stage(world, "shipTravel", |_, batch, errs| {
        unimplemented_pass(batch, errs, "jump", |k| matches!(k, OrderKind::Jump { .. }));
        unimplemented_pass(batch, errs, "move", |k| matches!(k, OrderKind::Move { .. }));
    });
}

pub(crate) fn probe_stage(world: &mut World) {
    run_stage(world, "probe", |_, batch, errs| {
        unimplemented_pass(batch, errs, "probe", |k| {
            matches!(
                k,
                OrderKind::Probe { .. }
                    | OrderKind::ProbeOrbit { .. }
                    | OrderKind::ProbeSystem { .. }
            )
        });
    });
}

/// Control transfers: Give, and viceroy reclamation via Accept.
pub(crate) fn give_stage(world: &mut World) {
    run_stage(world, "give", |world, batch, errs| {
        for order in batch.iter() {
            let issued_by = order.issued_by();
            let result = match order.kind() {
                OrderKind::Give {
                    asset_id,
                    target_id,
                } => {
                    tracing::debug!(stage = "give", issued_by, asset_id, target_id, "give");
                    commands::give(world, issued_by, asset_id, target_id)
                }
                OrderKind::Accept { asset_id } => {
                    tracing::debug!(stage = "give", issued_by, asset_id, "accept");
                    commands::accept(world, issued_by, asset_id)
                }
                _ => continue,
            };
            if let Err(err) = result {
                errs.push(err);
            }
        }
    });
}

/// The implemented slice of production: assembled farms grow food into
/// storage, assembled power plants charge the turn's batteries. The rest
/// of the production ledger (consumption, rebellion, demographics) is
/// out of scope for now.
pub(crate) fn production_stage(world: &mut World) {
    for colony in colonies(world) {
        let mut core = world.get_mut::<ColonyCore>(colony).expect("colony core");
        let core = &mut *core;
        for unit in &core.units {
            if let Some(output) = unit.produce() {
                match output.kind {
                    UnitKind::Food => core.storage.food += i64::from(output.quantity),
                    UnitKind::Fuel => core.batteries.charged += i64::from(output.quantity),
                    _ => {}
                }
            }
        }
    }
    for ship in ships(world) {
        let mut core = world.get_mut::<ShipCore>(ship).expect("ship core");
        let core = &mut *core;
        for unit in &core.units {
            if let Some(output) = unit.produce()
                && output.kind == UnitKind::Food
            {
                core.storage.food += i64::from(output.quantity);
            }
        }
    }
}

/// Report assembly — not wired to an output surface yet.
pub(crate) fn produce_output_stage(_world: &mut World) {}

pub(crate) fn send_output_stage(world: &mut World) {
    let turn = world.resource::<crate::ecs::resources::TurnClock>().turn;
    tracing::debug!(turn, "turn resolution complete, reports pending");
}

/// End-of-turn cleanup: colonization grants expire, spent battery charge
/// drains away.
pub(crate) fn reset_stage(world: &mut World) {
    world.resource_mut::<ColonizationGrants>().clear();
    for colony in colonies(world) {
        let mut core = world.get_mut::<ColonyCore>(colony).expect("colony core");
        core.batteries.used = 0;
    }
}
