//! The already-parsed record set handed to the timetable engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Agency, Route, RouteId, ServicePeriod, Trip};

/// All records of one transit feed, in feed order.
///
/// Stop times inside each trip are expected to be sorted by stop sequence
/// already.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Feed {
    pub agencies: Vec<Agency>,
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub services: Vec<ServicePeriod>,
}

impl Feed {
    /// Returns the agency listed first, which owns routes that name none.
    pub fn default_agency(&self) -> Option<&Agency> {
        self.agencies.first()
    }

    /// Returns the agency operating `route`.
    ///
    /// Falls back to the default agency when the route has no agency id or
    /// names one the feed doesn't define.
    pub fn agency_for(&self, route: &Route) -> Option<&Agency> {
        route
            .agency_id
            .as_ref()
            .and_then(|id| self.agencies.iter().find(|a| &a.id == id))
            .or_else(|| self.default_agency())
    }

    /// Returns the routes operated by `agency`, sorted by route id.
    ///
    /// Routes without an agency id belong to the default agency.
    pub fn routes_for_agency(&self, agency: &Agency) -> Vec<&Route> {
        let is_default = self.default_agency().is_some_and(|d| d.id == agency.id);
        let mut routes: Vec<&Route> = self
            .routes
            .iter()
            .filter(|r| match &r.agency_id {
                Some(id) => id == &agency.id,
                None => is_default,
            })
            .collect();
        routes.sort_by(|a, b| a.id.cmp(&b.id));
        routes
    }

    /// Returns the route's trips in feed order.
    pub fn trips_for_route<'a>(&'a self, route_id: &'a RouteId) -> impl Iterator<Item = &'a Trip> {
        self.trips.iter().filter(move |t| &t.route_id == route_id)
    }

    /// Returns the service periods in force on `date`.
    pub fn effective_services(&self, date: NaiveDate) -> Vec<&ServicePeriod> {
        self.services
            .iter()
            .filter(|s| s.is_effective_on(date))
            .collect()
    }
}
