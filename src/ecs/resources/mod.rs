pub mod entity_index;
pub mod turn;

pub use entity_index::EntityIndex;
pub use turn::{AdminRoster, ColonizationGrants, OrderBatch, TurnClock, TurnErrors};
