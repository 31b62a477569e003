use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;
use serde::{Deserialize, Serialize};

use crate::model::{ColonyKind, Population, Unit};

/// Stockpiled raw resources, shared by colonies and ships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storage {
    pub food: i64,
    pub fuel: i64,
    pub gold: i64,
    pub metal: i64,
    pub nonmetal: i64,
}

/// Power-plant output that expires at the end of the turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Batteries {
    pub charged: i64,
    pub used: i64,
}

/// Per-colony state beyond identity and relationships.
#[derive(Component, Debug, Clone)]
pub struct ColonyCore {
    pub kind: ColonyKind,
    /// Hull number, unique within the controlling polity (not globally).
    pub hull_number: String,
    /// Set only for a Home Colony — the polity whose point of origin this
    /// marks. Restricts who the colony may be given to.
    pub original_polity: Option<Entity>,
    pub population: Population,
    pub storage: Storage,
    pub units: Vec<Unit>,
    pub note: String,
    /// Fraction of a full food allotment dispersed each turn, 0.0 to 1.0.
    pub ration: f64,
    pub batteries: Batteries,
}

impl ColonyCore {
    pub fn new(kind: ColonyKind, hull_number: String) -> Self {
        Self {
            kind,
            hull_number,
            original_polity: None,
            population: Population::default(),
            storage: Storage::default(),
            units: Vec::new(),
            note: String::new(),
            ration: 1.0,
            batteries: Batteries::default(),
        }
    }

    pub fn is_home_colony(&self) -> bool {
        self.original_polity.is_some()
    }
}
