//! Order command handlers: validate-then-mutate functions, one per
//! implemented order kind.
//!
//! Shared validation order, short-circuiting on the first failure:
//! resolve the issuer (Bug if the stamp is unresolvable — a pipeline
//! defect, not user error), resolve referenced entities (BadRequest),
//! check authorization through the hegemony model (Forbidden), apply
//! structural rules, then mutate.

mod admin;
mod disassembly;
mod naming;
mod permits;
mod transfer;

pub(crate) use admin::{create_admin, create_polity, create_system};
pub(crate) use disassembly::{junk, scrap};
pub(crate) use naming::{name, note};
pub(crate) use permits::{home_port_change, permission_to_colonize, ration};
pub(crate) use transfer::{accept, give};

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::error::OrderError;
use crate::ecs::hegemony;
use crate::ecs::relationships::InSystem;
use crate::ecs::resources::EntityIndex;
use crate::model::EntityClass;

/// A resolved colony or ship, with the context every command needs.
pub(crate) struct Asset {
    pub entity: Entity,
    pub class: EntityClass,
    pub polity: Entity,
    pub system: Entity,
}

/// Resolve an order's `issuedBy` stamp to a polity. Failure here is a
/// caller defect: the transport layer stamps orders after authentication.
pub(crate) fn resolve_issuer(world: &World, issued_by: &str) -> Result<Entity, OrderError> {
    world
        .resource::<EntityIndex>()
        .get(issued_by, EntityClass::Polity)
        .ok_or_else(|| OrderError::bug(format!("issuedBy {issued_by:?} is not a polity")))
}

/// Resolve an ID to a controllable asset (colony or ship).
pub(crate) fn resolve_asset(world: &World, id: &str) -> Option<Asset> {
    let index = world.resource::<EntityIndex>();
    let (entity, class) = index.lookup(id)?;
    if !matches!(class, EntityClass::Colony | EntityClass::Ship) {
        return None;
    }
    let polity = hegemony::controller(world, entity).expect("asset has a controller");
    let system = world.get::<InSystem>(entity).expect("asset has a system").0;
    Some(Asset {
        entity,
        class,
        polity,
        system,
    })
}
