use std::collections::BTreeMap;

use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;

use crate::model::DiplomaticStatus;

/// Home-world references for a polity, filled in when its starting cluster
/// is generated. A polity created mid-game by an admin has no home until
/// one is assigned.
#[derive(Debug, Clone, Default)]
pub struct HomeRefs {
    pub system: Option<Entity>,
    pub star: Option<Entity>,
    pub planet: Option<Entity>,
    pub colony: Option<Entity>,
}

/// Core polity state: home references and the hull-number sequences for
/// assets it commissions.
#[derive(Component, Debug, Clone, Default)]
pub struct PolityCore {
    pub home: HomeRefs,
    seq_colony: u32,
    seq_ship: u32,
}

impl PolityCore {
    /// Next colony hull number, unique within this polity.
    pub fn next_colony_number(&mut self) -> String {
        self.seq_colony += 1;
        format!("C{}", self.seq_colony)
    }

    /// Next ship hull number, unique within this polity.
    pub fn next_ship_number(&mut self) -> String {
        self.seq_ship += 1;
        format!("S{}", self.seq_ship)
    }
}

/// Directional diplomatic standing this polity holds toward others.
/// The other side's view lives on the other polity; the two need not agree.
#[derive(Component, Debug, Clone, Default)]
pub struct PolityDiplomacy {
    status: BTreeMap<Entity, DiplomaticStatus>,
}

impl PolityDiplomacy {
    /// The status this polity thinks it has with the target.
    pub fn status(&self, toward: Entity) -> DiplomaticStatus {
        self.status.get(&toward).copied().unwrap_or_default()
    }

    pub fn set_status(&mut self, toward: Entity, status: DiplomaticStatus) {
        self.status.insert(toward, status);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, DiplomaticStatus)> + '_ {
        self.status.iter().map(|(e, s)| (*e, *s))
    }
}

/// A polity's private naming database for stars, systems, and planets.
/// Two polities may know the same star by different names.
#[derive(Component, Debug, Clone, Default)]
pub struct PolityNames(BTreeMap<Entity, String>);

impl PolityNames {
    pub fn get(&self, entity: Entity) -> Option<&str> {
        self.0.get(&entity).map(String::as_str)
    }

    pub fn set(&mut self, entity: Entity, name: String) {
        self.0.insert(entity, name);
    }
}
