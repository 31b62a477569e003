use bevy_ecs::schedule::{
    ExecutorKind, IntoScheduleConfigs, Schedule, ScheduleLabel, SystemSet,
};

use super::stages;

/// Schedule label for one full turn resolution. Run manually per batch via
/// `app.world_mut().run_schedule(TurnResolve)`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TurnResolve;

/// The canonical stage sequence. Stages run strictly in declaration
/// order; later stages may rely on earlier ones having committed their
/// mutations (admin-created IDs resolve everywhere downstream).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TurnStage {
    GameDataCleanup,
    Admin,
    CombatOrders,
    PermissionOrders,
    Disassembly,
    Setup,
    Transfer,
    DraftOrders,
    Assembly,
    BuildChange,
    SurveysAndProbes,
    PayChange,
    NamingOrders,
    ShipTravel,
    Probe,
    Give,
    Production,
    ProduceOutput,
    SendOutput,
    Reset,
}

const STAGE_ORDER: [TurnStage; 20] = [
    TurnStage::GameDataCleanup,
    TurnStage::Admin,
    TurnStage::CombatOrders,
    TurnStage::PermissionOrders,
    TurnStage::Disassembly,
    TurnStage::Setup,
    TurnStage::Transfer,
    TurnStage::DraftOrders,
    TurnStage::Assembly,
    TurnStage::BuildChange,
    TurnStage::SurveysAndProbes,
    TurnStage::PayChange,
    TurnStage::NamingOrders,
    TurnStage::ShipTravel,
    TurnStage::Probe,
    TurnStage::Give,
    TurnStage::Production,
    TurnStage::ProduceOutput,
    TurnStage::SendOutput,
    TurnStage::Reset,
];

/// Build the turn schedule: every stage system in its set, sets chained in
/// canonical order, single-threaded — one turn runs start to finish with
/// exclusive ownership of the world.
pub fn build_turn_schedule() -> Schedule {
    let mut schedule = Schedule::new(TurnResolve);
    schedule.set_executor_kind(ExecutorKind::SingleThreaded);

    for pair in STAGE_ORDER.windows(2) {
        schedule.configure_sets(pair[1].clone().after(pair[0].clone()));
    }

    schedule.add_systems(stages::game_data_cleanup_stage.in_set(TurnStage::GameDataCleanup));
    schedule.add_systems(stages::admin_stage.in_set(TurnStage::Admin));
    schedule.add_systems(stages::combat_orders_stage.in_set(TurnStage::CombatOrders));
    schedule.add_systems(stages::permission_orders_stage.in_set(TurnStage::PermissionOrders));
    schedule.add_systems(stages::disassembly_stage.in_set(TurnStage::Disassembly));
    schedule.add_systems(stages::setup_stage.in_set(TurnStage::Setup));
    schedule.add_systems(stages::transfer_stage.in_set(TurnStage::Transfer));
    schedule.add_systems(stages::draft_orders_stage.in_set(TurnStage::DraftOrders));
    schedule.add_systems(stages::assembly_stage.in_set(TurnStage::Assembly));
    schedule.add_systems(stages::build_change_stage.in_set(TurnStage::BuildChange));
    schedule.add_systems(stages::surveys_and_probes_stage.in_set(TurnStage::SurveysAndProbes));
    schedule.add_systems(stages::pay_change_stage.in_set(TurnStage::PayChange));
    schedule.add_systems(stages::naming_orders_stage.in_set(TurnStage::NamingOrders));
    schedule.add_systems(stages::ship_travel_stage.in_set(TurnStage::ShipTravel));
    schedule.add_systems(stages::probe_stage.in_set(TurnStage::Probe));
    schedule.add_systems(stages::give_stage.in_set(TurnStage::Give));
    schedule.add_systems(stages::production_stage.in_set(TurnStage::Production));
    schedule.add_systems(stages::produce_output_stage.in_set(TurnStage::ProduceOutput));
    schedule.add_systems(stages::send_output_stage.in_set(TurnStage::SendOutput));
    schedule.add_systems(stages::reset_stage.in_set(TurnStage::Reset));

    schedule
}
