pub mod cluster;
pub mod ecs;
pub mod id;
pub mod model;
pub mod report;

pub use ecs::app::{build_game_app, process_orders};
pub use ecs::error::{ErrorKind, OrderError};
pub use ecs::orders::{Order, OrderKind};
