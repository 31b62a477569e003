use bevy_ecs::component::Component;

use super::colony::Storage;
use crate::model::{Population, Unit};

/// Per-ship state beyond identity and relationships. Ships carry the same
/// storage block as colonies so disassembly recovery and cargo work have
/// somewhere to land.
#[derive(Component, Debug, Clone)]
pub struct ShipCore {
    /// Hull number, unique within the controlling polity.
    pub hull_number: String,
    pub population: Population,
    pub storage: Storage,
    pub units: Vec<Unit>,
    pub note: String,
    /// Fraction of a full food allotment dispersed each turn, 0.0 to 1.0.
    pub ration: f64,
}

impl ShipCore {
    pub fn new(hull_number: String) -> Self {
        Self {
            hull_number,
            population: Population::default(),
            storage: Storage::default(),
            units: Vec::new(),
            note: String::new(),
            ration: 1.0,
        }
    }
}
