//! Selecting the schedule-significant stops of a trip.
//!
//! Printed timetables show only the stops whose times are authoritative.
//! Feeds mark these in different ways, so several strategies are tried in
//! priority order and the first that finds enough timepoints wins.

use tracing::trace;

use crate::domain::{Stop, StopTime, Trip};

use super::TimetableConfig;

/// A trip together with its selected timepoints.
#[derive(Debug, Clone)]
pub struct TripTimepoints<'a> {
    pub trip: &'a Trip,
    /// Selected stop times, in stop-sequence order
    pub stop_times: Vec<&'a StopTime>,
}

impl<'a> TripTimepoints<'a> {
    /// Select the timepoints of `trip`.
    pub fn select(trip: &'a Trip, config: &TimetableConfig) -> Self {
        Self {
            trip,
            stop_times: timepoint_stop_times(&trip.stop_times, config),
        }
    }

    /// Returns the stops of the selected timepoints.
    pub fn stops(&self) -> Vec<Stop> {
        self.stop_times.iter().map(|st| st.stop.clone()).collect()
    }

    /// Returns the first selected call at `stop`.
    pub fn find(&self, stop: &Stop) -> Option<&'a StopTime> {
        self.stop_times.iter().copied().find(|st| &st.stop == stop)
    }
}

/// Returns the schedule-significant subset of a trip's stop times.
///
/// Strategies, first success wins:
/// 1. Every stop time carries an explicit timepoint flag and at least
///    `min_timepoints` are set: use the flagged ones.
/// 2. Some stop time has neither arrival nor departure: use the ones that
///    have a time, since the rest are left for interpolation.
/// 3. Use the stop times whose arrival or departure lands on a whole
///    minute, if there are at least `min_timepoints` of them.
///
/// When nothing qualifies every stop time is returned, so a non-empty trip
/// always yields at least one timepoint.
pub fn timepoint_stop_times<'a>(
    stop_times: &'a [StopTime],
    config: &TimetableConfig,
) -> Vec<&'a StopTime> {
    let all = || stop_times.iter().collect::<Vec<_>>();
    // An empty subset never counts as enough
    let min_timepoints = config.min_timepoints.max(1);

    if stop_times.iter().all(|st| st.timepoint.is_some()) {
        let flagged: Vec<&StopTime> = stop_times
            .iter()
            .filter(|st| st.timepoint == Some(true))
            .collect();
        if flagged.len() >= min_timepoints {
            trace!(selected = flagged.len(), "timepoints from explicit flags");
            return flagged;
        }
    }

    if stop_times.iter().any(|st| !st.has_time()) {
        let timed: Vec<&StopTime> = stop_times.iter().filter(|st| st.has_time()).collect();
        if timed.is_empty() {
            return all();
        }
        trace!(selected = timed.len(), "timepoints from present times");
        return timed;
    }

    let whole_minutes: Vec<&StopTime> = stop_times
        .iter()
        .filter(|st| {
            st.arrival.is_some_and(|t| t.is_whole_minute())
                || st.departure.is_some_and(|t| t.is_whole_minute())
        })
        .collect();
    if whole_minutes.len() >= min_timepoints {
        trace!(
            selected = whole_minutes.len(),
            "timepoints from whole-minute times"
        );
        return whole_minutes;
    }

    all()
}
