//! Configuration for timetable construction.

/// Tunable parameters for building timetables.
#[derive(Debug, Clone)]
pub struct TimetableConfig {
    /// Fewest significant stops a selection strategy must find before its
    /// subset is used. Strategies that find fewer fall through. Values
    /// below 1 behave as 1.
    pub min_timepoints: usize,

    /// Joins the destination names that make up a direction label.
    pub label_separator: String,
}

impl TimetableConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(min_timepoints: usize, label_separator: impl Into<String>) -> Self {
        Self {
            min_timepoints,
            label_separator: label_separator.into(),
        }
    }
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            min_timepoints: 2,
            label_separator: "/".to_string(),
        }
    }
}
