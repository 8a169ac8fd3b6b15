//! Timetable construction.
//!
//! Turns a route's trips into rider-facing tables: a few timepoints are
//! chosen per trip, trips are clustered into directions of travel, each
//! direction gets one merged header of stops and one row per trip, and days
//! of the week with identical tables are consolidated.
//!
//! Stop sequences are merged with [`unite`], which keeps loops and repeated
//! visits intact instead of collapsing them.

mod builder;
mod config;
mod directions;
mod error;
mod graph;
mod ordering;
mod schedule;
mod sequence;
mod timepoints;

pub use builder::{Cell, Timetable};
pub use config::TimetableConfig;
pub use directions::{DirectionCluster, separate_directions};
pub use error::TimetableError;
pub use ordering::order_trips;
pub use schedule::{Direction, RouteSchedule, ServiceDays, build_directions, build_schedules};
pub use sequence::unite;
pub use timepoints::{TripTimepoints, timepoint_stop_times};
