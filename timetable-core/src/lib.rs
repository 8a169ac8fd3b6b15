//! Printed-style transit timetables from parsed feed records.
//!
//! Given a feed's routes, trips and service calendars, builds for each route
//! a weekly schedule: days with identical service grouped under labels like
//! "Mon - Fri", each holding one timetable per direction of travel.

pub mod domain;
pub mod timetable;
