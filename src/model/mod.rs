#[macro_use]
mod macros;

pub mod enums;
pub mod population;
pub mod text;
pub mod units;

pub use enums::{
    ColonyKind, DiplomaticStatus, EntityClass, PlanetKind, PopulationKind, ResourceKind, UnitKind,
};
pub use population::Population;
pub use units::Unit;
