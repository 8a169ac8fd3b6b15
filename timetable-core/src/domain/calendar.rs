//! Weekly service calendars.
//!
//! A `ServicePeriod` says which days of the week a set of trips runs on,
//! optionally bounded by a validity date range. Days are indexed Monday = 0
//! through Sunday = 6 throughout the crate.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ServiceId;

/// Short day names, Monday first.
pub const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Which days of the week something applies to, Monday first.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaysOfWeek([bool; 7]);

impl DaysOfWeek {
    /// Creates a set from seven Monday-first flags.
    pub fn from_flags(flags: [bool; 7]) -> Self {
        Self(flags)
    }

    /// No days at all.
    pub fn none() -> Self {
        Self([false; 7])
    }

    /// Every day of the week.
    pub fn all() -> Self {
        Self([true; 7])
    }

    /// Just one day.
    pub fn single(day: usize) -> Self {
        let mut days = Self::none();
        days.insert(day);
        days
    }

    /// Adds a day. Indices past Sunday are ignored.
    pub fn insert(&mut self, day: usize) {
        if let Some(flag) = self.0.get_mut(day) {
            *flag = true;
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|d| *d)
    }

    pub fn contains(&self, day: usize) -> bool {
        self.0.get(day).copied().unwrap_or(false)
    }

    /// Returns the indices of the days in the set, ascending.
    pub fn days(&self) -> Vec<usize> {
        (0..7).filter(|d| self.0[*d]).collect()
    }

    /// Compresses the set into contiguous day ranges.
    ///
    /// Runs of two or more days become "First - Last"; separate runs are
    /// joined with ", ". An empty set gives an empty label.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_core::domain::DaysOfWeek;
    ///
    /// let weekdays = DaysOfWeek::from_flags([true, true, true, true, true, false, false]);
    /// assert_eq!(weekdays.range_label(), "Mon - Fri");
    ///
    /// let split = DaysOfWeek::from_flags([true, false, true, true, false, false, true]);
    /// assert_eq!(split.range_label(), "Mon, Wed - Thu, Sun");
    /// ```
    pub fn range_label(&self) -> String {
        let mut ranges: Vec<(usize, usize)> = Vec::new();
        let mut range_begin: Option<usize> = None;
        for (day, &applies) in self.0.iter().enumerate() {
            match (applies, range_begin) {
                (true, None) => range_begin = Some(day),
                (false, Some(begin)) => {
                    ranges.push((begin, day - 1));
                    range_begin = None;
                }
                _ => {}
            }
        }
        if let Some(begin) = range_begin {
            ranges.push((begin, 6));
        }

        ranges
            .into_iter()
            .map(|(begin, end)| {
                if begin == end {
                    DAY_NAMES[begin].to_string()
                } else {
                    format!("{} - {}", DAY_NAMES[begin], DAY_NAMES[end])
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Debug for DaysOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DaysOfWeek({})", self.range_label())
    }
}

/// A weekly service calendar.
///
/// An all-zero day vector is a wildcard: some feeds describe services that
/// are defined purely by calendar exceptions that way, and those trips are
/// shown on every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePeriod {
    pub id: ServiceId,
    pub days: DaysOfWeek,
    /// Inclusive first and last date the calendar is in force
    pub validity: Option<(NaiveDate, NaiveDate)>,
}

impl ServicePeriod {
    /// Creates a service period with no validity bounds.
    pub fn new(id: impl Into<String>, days: DaysOfWeek) -> Self {
        Self {
            id: ServiceId::new(id),
            days,
            validity: None,
        }
    }

    /// True when the day vector is all zero.
    pub fn is_wildcard(&self) -> bool {
        self.days.is_empty()
    }

    /// True when trips on this calendar run on the given day (Monday = 0).
    pub fn runs_on(&self, day: usize) -> bool {
        self.is_wildcard() || self.days.contains(day)
    }

    /// True when `date` is within the validity range, or there is none.
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        match self.validity {
            None => true,
            Some((start, end)) => start <= date && date <= end,
        }
    }
}
