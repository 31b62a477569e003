use std::collections::BTreeSet;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::ecs::error::OrderError;
use crate::ecs::orders::Order;

/// Turn counter. Advances exactly once per `process_orders` call, after the
/// full stage sequence has run.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct TurnClock {
    pub turn: u64,
}

impl TurnClock {
    pub fn advance(&mut self) {
        self.turn += 1;
    }
}

/// The orders submitted for the turn in progress, already stable-sorted by
/// priority. Stages read the full batch and filter to the kinds they
/// understand; no stage mutates it.
#[derive(Resource, Debug, Clone, Default)]
pub struct OrderBatch(pub Vec<Order>);

impl OrderBatch {
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.0.iter()
    }
}

/// Errors collected across all stages of the turn. Never aborts anything:
/// the pipeline runs every stage to completion and hands this back.
#[derive(Resource, Debug, Clone, Default)]
pub struct TurnErrors(pub Vec<OrderError>);

impl TurnErrors {
    pub fn extend(&mut self, errs: impl IntoIterator<Item = OrderError>) {
        self.0.extend(errs);
    }
}

/// IDs holding administrator rights. A namespace of its own — admin IDs are
/// not polities and never collide with the entity index.
#[derive(Resource, Debug, Clone, Default)]
pub struct AdminRoster(BTreeSet<String>);

impl AdminRoster {
    pub fn is_admin(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn add(&mut self, id: &str) {
        self.0.insert(id.to_string());
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Same-turn permission tokens letting a ship establish a colony on a
/// planet. Granted during the permission stage, consulted by (future)
/// setup handling, and cleared by the reset stage — permission expires at
/// the end of the turn it was granted in.
#[derive(Resource, Debug, Clone, Default)]
pub struct ColonizationGrants(BTreeSet<(Entity, Entity)>);

impl ColonizationGrants {
    pub fn grant(&mut self, ship: Entity, planet: Entity) {
        self.0.insert((ship, planet));
    }

    pub fn is_granted(&self, ship: Entity, planet: Entity) -> bool {
        self.0.contains(&(ship, planet))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
