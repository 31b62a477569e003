use bevy_app::App;

use super::error::OrderError;
use super::orders::Order;
use super::resources::{
    AdminRoster, ColonizationGrants, EntityIndex, OrderBatch, TurnClock, TurnErrors,
};
use super::schedule::{build_turn_schedule, TurnResolve};
use crate::id;

/// Build a headless app with the turn pipeline and an administrator set.
///
/// With no admins given, a single generated administrator is seeded (read
/// it back from the `AdminRoster` resource). Caller-supplied admin IDs
/// must already be in clean, trimmed form.
pub fn build_game_app(admins: &[&str]) -> Result<App, OrderError> {
    let mut app = App::empty();

    app.insert_resource(TurnClock::default())
        .insert_resource(EntityIndex::new())
        .insert_resource(OrderBatch::default())
        .insert_resource(TurnErrors::default())
        .insert_resource(ColonizationGrants::default());

    let mut roster = AdminRoster::default();
    if admins.is_empty() {
        roster.add(&id::generate_id());
    } else {
        for admin in admins {
            if !id::is_well_formed(admin) {
                return Err(OrderError::bad_request(format!(
                    "invalid characters in admin {admin:?}"
                )));
            }
            roster.add(admin);
        }
    }
    app.insert_resource(roster);

    app.add_schedule(build_turn_schedule());
    Ok(app)
}

/// Resolve one turn: stable-sort the submitted orders by priority, run
/// every stage to completion, advance the turn counter once, and hand back
/// the aggregated non-fatal error list (empty = clean turn).
///
/// Calls must be serialized by the host — the world is exclusively owned
/// for the duration, and readers may only look between turns.
pub fn process_orders(app: &mut App, mut orders: Vec<Order>) -> Vec<OrderError> {
    // Stable: equal priorities keep submission order, which position-
    // sensitive kinds within a stage depend on.
    orders.sort_by_key(|order| order.priority());

    let world = app.world_mut();
    world.insert_resource(OrderBatch(orders));
    world.run_schedule(TurnResolve);
    world.insert_resource(OrderBatch::default());

    world.resource_mut::<TurnClock>().advance();
    std::mem::take(&mut world.resource_mut::<TurnErrors>().0)
}
