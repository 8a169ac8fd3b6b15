//! Timetable construction errors.
//!
//! These are structural data errors. Nothing here is transient, so callers
//! should report them against the route being built rather than retry.

use crate::domain::{Stop, TripId};

/// Errors that abort building a timetable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// The accumulated ordering constraints contain a cycle
    #[error("ordering conflict: {unresolved} items could not be placed")]
    OrderingConflict { unresolved: usize },

    /// A trip's timepoint has no matching column in its timetable header
    #[error("trip {trip} stops at {stop} which is missing from the timetable header")]
    StopNotInHeader { trip: TripId, stop: Stop },
}
