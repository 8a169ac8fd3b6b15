//! Domain types for the timetable engine.
//!
//! This module contains the feed records the engine consumes: stops, trips
//! and their stop times, weekly service calendars, routes and agencies.
//! They arrive already parsed; the engine reads them and never mutates them.

mod calendar;
mod feed;
mod ids;
mod route;
mod stop;
mod time;
mod trip;

pub use calendar::{DAY_NAMES, DaysOfWeek, ServicePeriod};
pub use feed::Feed;
pub use ids::{AgencyId, RouteId, ServiceId, StopId, TripId};
pub use route::{Agency, Route};
pub use stop::Stop;
pub use time::{ScheduleTime, TimeError};
pub use trip::{StopTime, Trip};
