//! Building the timetable grid for one direction.
//!
//! The header is the merge of every trip's timepoint sequence. Each trip
//! becomes one row with exactly one cell per header stop.

use serde::Serialize;

use crate::domain::{ScheduleTime, Stop, TripId};

use super::TimetableError;
use super::ordering::order_trips;
use super::sequence::unite;
use super::timepoints::TripTimepoints;

/// One cell of a timetable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// The trip's time at this stop, in raw seconds since midnight
    Time(ScheduleTime),
    /// The trip passes this stop but it is not one of its timepoints
    Skip,
    /// The trip does not cover this part of the route
    NoService,
}

impl Cell {
    pub fn time(&self) -> Option<ScheduleTime> {
        match self {
            Cell::Time(t) => Some(*t),
            _ => None,
        }
    }
}

/// A direction's timetable: stop columns and one row per trip.
///
/// Two timetables are equal when their headers and cells are; the trip ids
/// behind the rows are not compared.
#[derive(Debug, Clone, Serialize)]
pub struct Timetable {
    header: Vec<Stop>,
    /// Trip shown in each row
    trips: Vec<TripId>,
    rows: Vec<Vec<Cell>>,
}

impl Timetable {
    /// Build the timetable for the trips of one direction.
    ///
    /// The header merges the trips' timepoint sequences in the order given;
    /// rows follow [`order_trips`].
    pub fn build(trips: &[TripTimepoints<'_>]) -> Result<Self, TimetableError> {
        let sequences: Vec<Vec<Stop>> = trips.iter().map(TripTimepoints::stops).collect();
        let header = unite(&sequences)?;

        let order = order_trips(trips)?;
        let mut trip_ids = Vec::with_capacity(order.len());
        let mut rows = Vec::with_capacity(order.len());
        for idx in order {
            let trip = &trips[idx];
            rows.push(build_row(&header, trip)?);
            trip_ids.push(trip.trip.id.clone());
        }

        Ok(Self {
            header,
            trips: trip_ids,
            rows,
        })
    }

    /// Returns the stop columns.
    pub fn header(&self) -> &[Stop] {
        &self.header
    }

    /// Returns the trip behind each row.
    pub fn trips(&self) -> &[TripId] {
        &self.trips
    }

    /// Returns the rows, each exactly as long as the header.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}

impl PartialEq for Timetable {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.rows == other.rows
    }
}

impl Eq for Timetable {}

/// Lay one trip's timepoints out against the header.
///
/// Each timepoint takes the next matching header column at or after the
/// previous one. Columns passed over before the trip's first time are
/// `NoService`; those between two of its times are `Skip`. Everything after
/// its last time is `NoService`.
fn build_row(header: &[Stop], trip: &TripTimepoints<'_>) -> Result<Vec<Cell>, TimetableError> {
    let mut row: Vec<Cell> = Vec::with_capacity(header.len());
    let mut started = false;

    for stop_time in &trip.stop_times {
        let cursor = row.len();
        let offset = header[cursor..]
            .iter()
            .position(|stop| stop == &stop_time.stop)
            .ok_or_else(|| TimetableError::StopNotInHeader {
                trip: trip.trip.id.clone(),
                stop: stop_time.stop.clone(),
            })?;

        let filler = if started { Cell::Skip } else { Cell::NoService };
        row.extend(std::iter::repeat_n(filler, offset));
        match stop_time.display_time() {
            Some(time) => {
                row.push(Cell::Time(time));
                started = true;
            }
            None => row.push(filler),
        }
    }

    // A timepoint without a time may leave Skips past the last real value
    let end = row
        .iter()
        .rposition(|cell| matches!(cell, Cell::Time(_)))
        .map_or(0, |last| last + 1);
    row.truncate(end);
    row.resize(header.len(), Cell::NoService);
    Ok(row)
}
