use serde::{Deserialize, Serialize};

use crate::ecs::components::astronomy::Coords;

/// A single item line inside a compound order (support, invasion, set-up).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLine {
    pub item: String,
    pub tech_level: u8,
    pub quantity: u32,
}

/// One player-submitted instruction for the current turn.
///
/// Orders are stamped at construction with the ID of the polity or admin
/// that submitted them and are immutable afterwards. `priority` is the sort
/// key for the turn's stable ordering; ties keep submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    priority: i64,
    issued_by: String,
    kind: OrderKind,
}

impl Order {
    pub fn new(issued_by: impl Into<String>, priority: i64, kind: OrderKind) -> Self {
        Self {
            priority,
            issued_by: issued_by.into(),
            kind,
        }
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn issued_by(&self) -> &str {
        &self.issued_by
    }

    pub fn kind(&self) -> &OrderKind {
        &self.kind
    }
}

/// The full order vocabulary, one variant per order kind.
///
/// Every kind the game recognizes is defined up front — variants are cheap.
/// Kinds whose stage content is unfinished resolve to a NotImplemented
/// error in that stage rather than being rejected at the boundary, so
/// players and tests can see exactly which instruction was dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKind {
    // -- Control transfers --
    Accept {
        asset_id: String,
    },
    Give {
        asset_id: String,
        target_id: String,
    },

    // -- Administration --
    CreateAdmin {
        id: String,
    },
    CreatePolity {
        id: String,
        name: String,
    },
    CreateSystem {
        id: String,
        x: i32,
        y: i32,
        z: i32,
    },

    // -- Permissions --
    PermissionToColonize {
        planet_id: String,
        ship_id: String,
    },
    HomePortChange {
        ship_id: String,
        colony_id: String,
    },

    // -- Naming --
    Name {
        entity_id: String,
        entity_type: String,
        name: String,
    },
    Note {
        target_id: String,
        text: String,
    },
    ControlPlanet {
        colony_id: String,
    },
    UncontrolPlanet {
        colony_id: String,
    },
    Message {
        source_id: String,
        target_id: String,
        text: String,
    },

    // -- Disassembly --
    Disassemble {
        source_id: String,
        item: String,
        tech_level: u8,
        group_id: String,
        quantity: u32,
    },
    Scrap {
        actor_id: String,
        item: String,
        tech_level: u8,
        quantity: u32,
    },
    Junk {
        actor_id: String,
        asset_id: String,
    },
    Merge {
        source_id: String,
        target_id: String,
    },
    CombineFactoryGroup {
        source_id: String,
        from_group_id: String,
        to_group_id: String,
    },

    // -- Set up --
    SetUp {
        source_id: String,
        colony_kind: String,
        quantity: u32,
        items: Vec<ItemLine>,
    },
    AddOn {
        source_id: String,
        target_id: String,
        item: String,
        tech_level: u8,
        quantity: u32,
        do_not_assemble: bool,
    },
    DefineCargoHold {
        ship_id: String,
        quantity: u32,
    },

    // -- Transfers and cargo --
    UnloadCargo {
        colony_id: String,
        ship_id: String,
        item: String,
        tech_level: u8,
        quantity: u32,
    },
    Transfer {
        source_id: String,
        to_id: String,
        item: String,
        tech_level: u8,
        quantity: u32,
    },
    PickUpItem {
        source_id: String,
        to_id: String,
        item: String,
        tech_level: u8,
        quantity: u32,
    },
    PickUpPopulation {
        source_id: String,
        to_id: String,
        population_type: String,
        quantity: u32,
    },
    LoadCargo {
        colony_id: String,
        to_id: String,
        item: String,
        tech_level: u8,
        quantity: u32,
    },

    // -- Drafting --
    Draft {
        source_id: String,
        population_type: String,
        quantity: u32,
    },
    Disband {
        source_id: String,
        population_type: String,
        quantity: u32,
    },

    // -- Assembly and industry --
    AssembleItem {
        source_id: String,
        item: String,
        tech_level: u8,
        quantity: u32,
    },
    AssembleFactory {
        source_id: String,
        quantity: u32,
        item: String,
        tech_level: u8,
    },
    AssembleFactoryGroup {
        source_id: String,
        quantity: u32,
        group_id: String,
    },
    AssembleMine {
        source_id: String,
        quantity: u32,
        tech_level: u8,
    },
    AssembleMineGroup {
        source_id: String,
        quantity: u32,
        deposit_id: String,
    },
    ExpendResearchPointsOnly {
        colony_id: String,
        quantity: u32,
        item: String,
    },
    ExpendPrototype {
        colony_id: String,
        quantity: u32,
        item: String,
        tech_level: u8,
    },
    ExpendCommittedBufferResearchPoints {
        colony_id: String,
        quantity: u32,
        item: String,
    },
    FactoryGroupChange {
        colony_id: String,
        from_id: String,
        to_id: String,
        quantity: u32,
    },
    MineChange {
        source_id: String,
        group_id: String,
        deposit_id: String,
        quantity: u32,
    },
    MineShutDown {
        source_id: String,
        group_id: String,
        quantity: u32,
    },
    MineStartUp {
        source_id: String,
        group_id: String,
        quantity: u32,
    },
    ShutDown {
        source_id: String,
        item_id: String,
        tech_level: u8,
        quantity: u32,
    },
    StartUp {
        source_id: String,
        item_id: String,
        tech_level: u8,
        quantity: u32,
    },
    BuildChange {
        source_id: String,
        group_id: String,
        item: String,
        tech_level: u8,
    },

    // -- Surveys and probes --
    Survey {
        source_id: String,
        planet_id: String,
    },
    LaunchRobotProbe {
        source_id: String,
        probe_type: String,
        coords: Coords,
        orbit: u8,
    },
    Probe {
        source_id: String,
        target_id: String,
    },
    ProbeOrbit {
        source_id: String,
        target_id: String,
        orbit: u8,
    },
    ProbeSystem {
        source_id: String,
        target_id: String,
        magnitude: u32,
    },

    // -- Pay and rations --
    Pay {
        colony_id: String,
        amount: f64,
        population_type: String,
    },
    Ration {
        source_id: String,
        amount: f64,
    },

    // -- Ship travel --
    Jump {
        ship_id: String,
        coords: Coords,
        offset: i32,
    },
    Move {
        ship_id: String,
        orbit: u8,
        offset: i32,
    },

    // -- Combat --
    Dodge {
        ship_id: String,
        percentage: f64,
    },
    AutoReturnFire {
        source_id: String,
        percentage: f64,
    },
    CloseProximityTargeting {
        source_id: String,
        percentage: f64,
    },
    PreManeuverEnergyWeaponFire {
        source_id: String,
        target_id: String,
        percentage: f64,
    },
    PreManeuverMissileFire {
        source_id: String,
        target_id: String,
        percentage: f64,
    },
    AfterManeuverEnergyWeaponFire {
        source_id: String,
        target_id: String,
        percentage: f64,
    },
    AfterManeuverMissileFire {
        source_id: String,
        target_id: String,
        percentage: f64,
    },
    Undock {
        ship_id: String,
    },
    Run {
        ship_id: String,
        target_id: String,
    },
    TacticalManeuver {
        ship_id: String,
        to: Coords,
    },
    Close {
        ship_id: String,
        target_id: String,
    },
    Dock {
        ship_id: String,
        target_id: String,
    },
    Withdraw {
        source_id: String,
        target_id: String,
    },
    DefensiveSupport {
        source_id: String,
        target_id: String,
        items: Vec<ItemLine>,
    },
    OffensiveSupport {
        source_id: String,
        target_id: String,
        items: Vec<ItemLine>,
    },
    Invade {
        source_id: String,
        target_id: String,
        items: Vec<ItemLine>,
    },
}
