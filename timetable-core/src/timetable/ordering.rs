//! Ordering trips within a direction.
//!
//! There may be no single stop every trip serves, so no one column can act
//! as the sort key. Instead each pair of trips is compared at the first stop
//! they share, every "earlier than" result becomes an edge, and the rows are
//! read off a topological sort of the resulting graph.

use tracing::trace;

use super::TimetableError;
use super::graph::OrderGraph;
use super::timepoints::TripTimepoints;

/// Returns indices into `trips` in display order.
///
/// For each trip, every other trip is compared once, at the first of this
/// trip's timepoints the other also serves. An edge is only added when it
/// keeps the graph acyclic, so contradictory evidence is dropped in favour
/// of what was seen first. Trips with nothing to compare keep their input
/// order relative to each other.
pub fn order_trips(trips: &[TripTimepoints<'_>]) -> Result<Vec<usize>, TimetableError> {
    let mut graph = OrderGraph::with_nodes(trips.len());

    for (this, this_trip) in trips.iter().enumerate() {
        let mut unmatched: Vec<usize> = (0..trips.len()).collect();
        for stop_time in &this_trip.stop_times {
            unmatched.retain(|&other| {
                let Some(other_time) = trips[other].find(&stop_time.stop) else {
                    return true;
                };
                if let (Some(a), Some(b)) = (stop_time.display_time(), other_time.display_time()) {
                    if a < b && !graph.has_path(other, this) && !graph.has_edge(this, other) {
                        graph.add_edge(this, other);
                    }
                }
                false
            });
            if unmatched.is_empty() {
                break;
            }
        }
    }

    let order = graph.topological_order()?;
    trace!(trips = order.len(), "ordered trips");
    Ok(order)
}
