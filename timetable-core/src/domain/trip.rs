//! Trip and stop-time records.
//!
//! A `Trip` is one vehicle run along a route. Its `StopTime`s are kept in
//! stop-sequence order, which is authoritative even when the times
//! themselves are missing or out of order.

use serde::{Deserialize, Serialize};

use super::{RouteId, ScheduleTime, ServiceId, Stop, TripId};

/// A scheduled call at a stop within a trip.
///
/// # Time Semantics
///
/// - Either time may be absent for stops whose times the feed leaves to be
///   interpolated
/// - `timepoint` is the feed's own "exact time" flag, when it provides one
/// - `sequence` orders the calls within the trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopTime {
    /// The stop being called at
    pub stop: Stop,
    /// Scheduled arrival time
    pub arrival: Option<ScheduleTime>,
    /// Scheduled departure time
    pub departure: Option<ScheduleTime>,
    /// Explicit timepoint flag (`Some(true)` means exact time)
    pub timepoint: Option<bool>,
    /// Position within the trip
    pub sequence: u32,
}

impl StopTime {
    /// Creates a stop time with no times and no timepoint flag.
    pub fn new(stop: Stop, sequence: u32) -> Self {
        Self {
            stop,
            arrival: None,
            departure: None,
            timepoint: None,
            sequence,
        }
    }

    /// Returns the time to print for this call: departure if known, else arrival.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_core::domain::{ScheduleTime, Stop, StopTime};
    ///
    /// let mut st = StopTime::new(Stop::new("s1", "Depot"), 1);
    /// assert_eq!(st.display_time(), None);
    ///
    /// st.arrival = Some(ScheduleTime::from_hms(8, 0, 0));
    /// assert_eq!(st.display_time(), Some(ScheduleTime::from_hms(8, 0, 0)));
    ///
    /// st.departure = Some(ScheduleTime::from_hms(8, 2, 0));
    /// assert_eq!(st.display_time(), Some(ScheduleTime::from_hms(8, 2, 0)));
    /// ```
    pub fn display_time(&self) -> Option<ScheduleTime> {
        self.departure.or(self.arrival)
    }

    /// True when the feed gives at least one of arrival or departure.
    pub fn has_time(&self) -> bool {
        self.arrival.is_some() || self.departure.is_some()
    }
}

/// One scheduled run of a vehicle along a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub route_id: RouteId,
    pub service_id: ServiceId,
    /// Rider-facing destination text
    pub headsign: Option<String>,
    /// Calls in stop-sequence order
    pub stop_times: Vec<StopTime>,
}

impl Trip {
    /// Returns the last stop this trip calls at.
    pub fn terminal_stop(&self) -> Option<&Stop> {
        self.stop_times.last().map(|st| &st.stop)
    }

    /// Returns the headsign if set and non-blank, else the terminal stop's name.
    ///
    /// The headsign is trimmed, so a whitespace-only headsign counts as
    /// missing, matching how stop names are compared.
    pub fn destination_label(&self) -> Option<&str> {
        self.headsign
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .or_else(|| self.terminal_stop().map(Stop::normalized_name))
    }
}
