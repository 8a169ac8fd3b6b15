//! Stop records.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::StopId;

/// A place where trips call.
///
/// Feeds often model one physical platform as several stop records that
/// differ only in id or stray whitespace, so two stops are equal when their
/// trimmed names are equal. The id is carried along for the presentation
/// layer but takes no part in comparisons.
///
/// # Examples
///
/// ```
/// use timetable_core::domain::Stop;
///
/// let a = Stop::new("s1", "Main St");
/// let b = Stop::new("s1-north", " Main St ");
/// assert_eq!(a, b);
/// assert_ne!(a, Stop::new("s2", "Elm Ave"));
/// ```
#[derive(Clone, Serialize, Deserialize)]
pub struct Stop {
    /// Feed identifier
    pub id: StopId,
    /// Rider-facing display name
    pub name: String,
}

impl Stop {
    /// Creates a stop with the given id and display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: StopId::new(id),
            name: name.into(),
        }
    }

    /// Returns the name used for comparisons.
    pub fn normalized_name(&self) -> &str {
        self.name.trim()
    }
}

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_name() == other.normalized_name()
    }
}

impl Eq for Stop {}

impl Hash for Stop {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_name().hash(state);
    }
}

impl fmt::Debug for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop({}: {})", self.id, self.normalized_name())
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.normalized_name())
    }
}
