use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::model::EntityClass;

/// The single global identifier namespace.
///
/// Every registered entity — polity, system, star, orbit, planet, deposit,
/// colony, ship — claims its ID here, so a duplicate check is one lookup
/// regardless of kind. Typed access goes through the class tag.
/// BTreeMap for deterministic iteration.
#[derive(Resource, Debug, Clone, Default)]
pub struct EntityIndex {
    by_id: BTreeMap<String, (Entity, EntityClass)>,
}

impl EntityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an ID. Panics on a duplicate — callers validate uniqueness
    /// before spawning, so a collision here is a defect, not user error.
    pub fn register(&mut self, id: &str, entity: Entity, class: EntityClass) {
        let prev = self.by_id.insert(id.to_string(), (entity, class));
        assert!(prev.is_none(), "duplicate id {id} in EntityIndex");
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Look up an ID of any class.
    pub fn lookup(&self, id: &str) -> Option<(Entity, EntityClass)> {
        self.by_id.get(id).copied()
    }

    /// Look up an ID, requiring a specific class.
    pub fn get(&self, id: &str, class: EntityClass) -> Option<Entity> {
        match self.by_id.get(id) {
            Some((entity, c)) if *c == class => Some(*entity),
            _ => None,
        }
    }

    /// All registered entities of one class, in ID order.
    pub fn iter_class(&self, class: EntityClass) -> impl Iterator<Item = (&str, Entity)> {
        self.by_id
            .iter()
            .filter(move |(_, (_, c))| *c == class)
            .map(|(id, (entity, _))| (id.as_str(), *entity))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
