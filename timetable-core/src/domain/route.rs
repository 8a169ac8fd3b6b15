//! Route and agency records.
//!
//! These carry identity and display metadata only; nothing in the timetable
//! engine changes them.

use serde::{Deserialize, Serialize};

use super::{AgencyId, RouteId};

/// A transit operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    pub id: AgencyId,
    pub name: String,
}

impl Agency {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: AgencyId::new(id),
            name: name.into(),
        }
    }
}

/// A named line operated by an agency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    /// Owning agency; feeds with a single agency often leave this blank
    pub agency_id: Option<AgencyId>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    /// Hex colour without the leading '#'
    pub color: Option<String>,
    /// Hex text colour without the leading '#'
    pub text_color: Option<String>,
}

impl Route {
    /// Creates a route with only an id set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: RouteId::new(id),
            agency_id: None,
            short_name: None,
            long_name: None,
            color: None,
            text_color: None,
        }
    }

    /// Returns "short long", whichever parts are present, or the id.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_core::domain::Route;
    ///
    /// let mut route = Route::new("r7");
    /// assert_eq!(route.display_name(), "r7");
    ///
    /// route.short_name = Some("7".into());
    /// route.long_name = Some("Crosstown".into());
    /// assert_eq!(route.display_name(), "7 Crosstown");
    /// ```
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.short_name.as_deref(), self.long_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            self.id.to_string()
        } else {
            parts.join(" ")
        }
    }
}
