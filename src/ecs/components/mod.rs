pub mod astronomy;
pub mod colony;
pub mod common;
pub mod polity;
pub mod ship;

pub use astronomy::{DepositCore, OrbitCore, PlanetCore, StarCore, SystemCore};
pub use colony::{Batteries, ColonyCore, Storage};
pub use common::{
    Colony, Deposit, GameEntity, Orbit, Planet, Polity, Ship, Star, StarSystem,
};
pub use polity::{PolityCore, PolityDiplomacy, PolityNames};
pub use ship::ShipCore;
