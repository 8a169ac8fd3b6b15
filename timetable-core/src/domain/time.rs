//! Schedule time handling.
//!
//! Feeds give stop times as "HH:MM:SS" strings measured from local midnight
//! of the service day. Trips that run past midnight keep counting upwards,
//! so "25:10:00" is ten past one the following morning. `ScheduleTime`
//! stores the raw second count and never wraps it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Seconds since local midnight of the service day.
///
/// Values of 86400 and above denote service after midnight and are kept
/// as-is, so a trip leaving at 23:50 and arriving at 24:20 still sorts
/// correctly.
///
/// # Examples
///
/// ```
/// use timetable_core::domain::ScheduleTime;
///
/// let t = ScheduleTime::parse("25:10:00").unwrap();
/// assert_eq!(t.seconds(), 25 * 3600 + 10 * 60);
/// assert_eq!(t.to_string(), "25:10:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleTime(u32);

impl ScheduleTime {
    /// Create a time from a raw second count.
    pub fn from_seconds(seconds: u32) -> Self {
        Self(seconds)
    }

    /// Create a time from hour, minute and second components.
    ///
    /// Hours are not limited to 0-23.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self(hours * 3600 + minutes * 60 + seconds)
    }

    /// Parse a time from "H:MM:SS" or "HH:MM:SS" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_core::domain::ScheduleTime;
    ///
    /// assert!(ScheduleTime::parse("8:05:00").is_ok());
    /// assert!(ScheduleTime::parse("08:05:00").is_ok());
    /// assert!(ScheduleTime::parse("24:30:15").is_ok());
    ///
    /// assert!(ScheduleTime::parse("08:05").is_err());
    /// assert!(ScheduleTime::parse("08:65:00").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        let mut parts = s.split(':');
        let (Some(h), Some(m), Some(sec), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TimeError::new("expected HH:MM:SS format"));
        };

        if h.is_empty() || h.len() > 3 || !h.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeError::new("invalid hour digits"));
        }
        let hours: u32 = h
            .parse()
            .map_err(|_| TimeError::new("invalid hour digits"))?;

        let minutes =
            parse_two_digits(m.as_bytes()).ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minutes > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let seconds = parse_two_digits(sec.as_bytes())
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if seconds > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        Ok(Self::from_hms(hours, minutes, seconds))
    }

    /// Returns the raw number of seconds since midnight.
    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// Returns the hour, which may be 24 or more.
    pub fn hours(&self) -> u32 {
        self.0 / 3600
    }

    /// Returns the minute (0-59).
    pub fn minutes(&self) -> u32 {
        self.0 / 60 % 60
    }

    /// Returns the second (0-59).
    pub fn secs(&self) -> u32 {
        self.0 % 60
    }

    /// True when the seconds field is zero.
    ///
    /// Hand-entered schedule times land on whole minutes; interpolated ones
    /// usually don't.
    pub fn is_whole_minute(&self) -> bool {
        self.secs() == 0
    }

    /// True when this time falls on the following calendar day.
    pub fn is_after_midnight(&self) -> bool {
        self.0 >= 24 * 3600
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleTime({self})")
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.secs()
        )
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
