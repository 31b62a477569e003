use bevy_ecs::component::Component;
use bevy_ecs::entity::Entity;
use serde::{Deserialize, Serialize};

use crate::model::{PlanetKind, ResourceKind};

pub const ORBITS_PER_STAR: usize = 10;
pub const MAX_STARS_PER_SYSTEM: usize = 8;

/// Stellar coordinates of a system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coords {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coords {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A star system: coordinates plus 1 to 8 member stars.
#[derive(Component, Debug, Clone)]
pub struct SystemCore {
    pub coords: Coords,
    pub stars: Vec<Entity>,
}

impl SystemCore {
    pub fn new(coords: Coords) -> Self {
        Self {
            coords,
            stars: Vec::new(),
        }
    }
}

/// A single star within a system, with its fixed orbit slots.
#[derive(Component, Debug, Clone)]
pub struct StarCore {
    pub system: Entity,
    pub orbits: [Option<Entity>; ORBITS_PER_STAR],
}

impl StarCore {
    pub fn new(system: Entity) -> Self {
        Self {
            system,
            orbits: [None; ORBITS_PER_STAR],
        }
    }
}

/// An occupied orbit slot. May hold a planet, or bare deposits (a ring
/// worth mining); colonies anchor here via the SitedOn relationship.
#[derive(Component, Debug, Clone)]
pub struct OrbitCore {
    pub star: Entity,
    pub ring: u8,
    pub planet: Option<Entity>,
    pub deposits: Vec<Entity>,
}

impl OrbitCore {
    pub fn new(star: Entity, ring: u8) -> Self {
        Self {
            star,
            ring,
            planet: None,
            deposits: Vec::new(),
        }
    }
}

/// A planet in an orbit: kind, habitability, and its resource deposits.
#[derive(Component, Debug, Clone)]
pub struct PlanetCore {
    pub orbit: Entity,
    pub kind: PlanetKind,
    /// 0 to 25, in tens of millions of people supportable.
    pub habitability: u8,
    pub deposits: Vec<Entity>,
}

impl PlanetCore {
    pub fn new(orbit: Entity, kind: PlanetKind) -> Self {
        Self {
            orbit,
            kind,
            habitability: 0,
            deposits: Vec::new(),
        }
    }
}

/// A mineable resource deposit.
#[derive(Component, Debug, Clone)]
pub struct DepositCore {
    pub kind: ResourceKind,
    pub unlimited: bool,
    pub yield_pct: f64,
    pub initial_amount: i64,
    pub amount_remaining: i64,
}

impl DepositCore {
    /// Standard deposit parameters: gold runs a tenth the size and yield of
    /// bulk resources, and unlimited deposits trade quantity caps for a
    /// third of the yield.
    pub fn standard(kind: ResourceKind, unlimited: bool) -> Self {
        let mut yield_pct = 0.90;
        let mut initial_amount: i64 = 55_000_000_000;
        if kind == ResourceKind::Gold {
            yield_pct /= 10.0;
            initial_amount /= 10;
        }
        if unlimited {
            yield_pct /= 3.0;
        }
        Self {
            kind,
            unlimited,
            yield_pct,
            initial_amount,
            amount_remaining: initial_amount,
        }
    }
}
