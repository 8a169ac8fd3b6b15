//! Weekly schedules per route.
//!
//! A route's trips are split by day of week, each day is turned into
//! directions and timetables, and days whose results are identical are
//! merged under one day-range label such as "Mon - Fri".

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Agency, DaysOfWeek, Feed, Route, RouteId, ServicePeriod, Trip};

use super::builder::Timetable;
use super::directions::separate_directions;
use super::timepoints::TripTimepoints;
use super::{TimetableConfig, TimetableError};

/// One direction of travel and its timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Direction {
    /// Sorted destinations joined by the configured separator
    pub label: String,
    pub timetable: Timetable,
}

/// The directions running on a group of days with identical service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDays {
    /// Compressed day range, e.g. "Mon - Fri" or "Mon, Wed"
    pub label: String,
    /// The label with everything but ASCII letters removed
    pub slug: String,
    pub days: DaysOfWeek,
    /// Directions sorted by label
    pub directions: Vec<Direction>,
}

/// A route's consolidated weekly schedule.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSchedule {
    pub route: Route,
    pub agency: Option<Agency>,
    /// Entries in order of their first day
    pub service_days: Vec<ServiceDays>,
}

impl RouteSchedule {
    /// Build the schedule for `route` from the given service periods.
    ///
    /// Days with no trips are left out. Wildcard service periods count for
    /// every day.
    pub fn build(
        feed: &Feed,
        route: &Route,
        services: &[&ServicePeriod],
        config: &TimetableConfig,
    ) -> Result<Self, TimetableError> {
        let route_trips: Vec<&Trip> = feed
            .trips_for_route(&route.id)
            .filter(|trip| {
                if trip.stop_times.is_empty() {
                    warn!(trip = %trip.id, route = %route.id, "skipping trip with no stop times");
                    return false;
                }
                true
            })
            .collect();

        let mut daily: Vec<(usize, Vec<Direction>)> = Vec::new();
        for day in 0..7 {
            let trips: Vec<&Trip> = route_trips
                .iter()
                .copied()
                .filter(|trip| {
                    services
                        .iter()
                        .any(|s| s.id == trip.service_id && s.runs_on(day))
                })
                .collect();
            if trips.is_empty() {
                continue;
            }
            debug!(route = %route.id, day, trips = trips.len(), "building day");
            daily.push((day, build_directions(&trips, config)?));
        }

        let service_days = consolidate(daily);
        debug!(
            route = %route.id,
            groups = service_days.len(),
            "consolidated service days"
        );

        Ok(Self {
            route: route.clone(),
            agency: feed.agency_for(route).cloned(),
            service_days,
        })
    }
}

/// Build the directions for one day's trips, sorted by label.
pub fn build_directions(
    trips: &[&Trip],
    config: &TimetableConfig,
) -> Result<Vec<Direction>, TimetableError> {
    let timepoints = trips
        .iter()
        .map(|&trip| TripTimepoints::select(trip, config))
        .collect();

    let mut directions = Vec::new();
    for cluster in separate_directions(timepoints)? {
        directions.push(Direction {
            label: cluster.label(&config.label_separator),
            timetable: Timetable::build(&cluster.trips)?,
        });
    }
    directions.sort_by(|a, b| a.label.cmp(&b.label));
    Ok(directions)
}

/// Merge days whose directions are identical.
///
/// Each remaining day is grouped with every later day that matches it
/// exactly, so groups come out in order of their first day.
fn consolidate(mut daily: Vec<(usize, Vec<Direction>)>) -> Vec<ServiceDays> {
    let mut result = Vec::new();
    while !daily.is_empty() {
        let (day, directions) = daily.remove(0);
        let mut days = DaysOfWeek::single(day);
        daily.retain(|(other_day, other)| {
            if *other == directions {
                days.insert(*other_day);
                false
            } else {
                true
            }
        });

        let label = days.range_label();
        let slug = label.chars().filter(char::is_ascii_alphabetic).collect();
        result.push(ServiceDays {
            label,
            slug,
            days,
            directions,
        });
    }
    result
}

/// Build every route's schedule from the services in force on `date`.
///
/// When no service is in force the routes are skipped with a warning. Each
/// route's result is returned separately so one malformed route does not
/// hide the others.
pub fn build_schedules(
    feed: &Feed,
    date: NaiveDate,
    config: &TimetableConfig,
) -> Vec<(RouteId, Result<RouteSchedule, TimetableError>)> {
    let services = feed.effective_services(date);
    let mut schedules = Vec::new();
    for route in &feed.routes {
        if services.is_empty() {
            warn!(route = %route.display_name(), %date, "no service scheduled");
            continue;
        }
        debug!(route = %route.display_name(), "processing route");
        schedules.push((
            route.id.clone(),
            RouteSchedule::build(feed, route, &services, config),
        ));
    }
    schedules
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;
