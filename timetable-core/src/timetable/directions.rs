//! Clustering a route's trips into directions of travel.
//!
//! Feeds often get the direction flag wrong, so trips are grouped by the
//! stops they actually serve. A trip joins the cluster whose merged stop
//! sequence it extends the least; if it would share fewer than two stops
//! with every cluster, it starts a new one.
//!
//! The result depends on trip order, so trips are processed exactly in the
//! order given.

use std::collections::BTreeSet;

use tracing::trace;

use crate::domain::Stop;

use super::sequence::unite;
use super::timepoints::TripTimepoints;
use super::TimetableError;

/// A group of trips judged to travel a common path.
#[derive(Debug, Clone)]
pub struct DirectionCluster<'a> {
    /// Merged timepoint sequence of every trip in the cluster
    pub sequence: Vec<Stop>,
    /// Member trips, in the order they were assigned
    pub trips: Vec<TripTimepoints<'a>>,
}

impl DirectionCluster<'_> {
    /// Returns the distinct destinations of the member trips, sorted and joined.
    ///
    /// A trip's destination is its headsign, or its terminal stop's name when
    /// it has none.
    pub fn label(&self, separator: &str) -> String {
        let destinations: BTreeSet<&str> = self
            .trips
            .iter()
            .filter_map(|tp| tp.trip.destination_label())
            .collect();
        destinations.into_iter().collect::<Vec<_>>().join(separator)
    }
}

/// Group trips into direction clusters.
///
/// Returns no clusters for no trips. Fails only if merging stop sequences
/// hits an ordering conflict.
pub fn separate_directions(
    trips: Vec<TripTimepoints<'_>>,
) -> Result<Vec<DirectionCluster<'_>>, TimetableError> {
    let mut clusters: Vec<DirectionCluster<'_>> = Vec::new();

    for trip in trips {
        let sequence = trip.stops();

        // (cluster index, merged sequence, stops added)
        let mut best: Option<(usize, Vec<Stop>, usize)> = None;
        for (idx, cluster) in clusters.iter().enumerate() {
            let merged = unite([cluster.sequence.as_slice(), sequence.as_slice()])?;
            let added = merged.len().saturating_sub(cluster.sequence.len());
            if best.as_ref().is_none_or(|(_, _, min)| added < *min) {
                best = Some((idx, merged, added));
            }
        }

        match best {
            // Shares at least two stops with the closest cluster
            Some((idx, merged, added)) if added + 1 < sequence.len() => {
                trace!(
                    trip = %trip.trip.id,
                    cluster = idx,
                    added,
                    "trip joins direction"
                );
                clusters[idx].sequence = merged;
                clusters[idx].trips.push(trip);
            }
            _ => {
                trace!(
                    trip = %trip.trip.id,
                    cluster = clusters.len(),
                    "trip starts new direction"
                );
                clusters.push(DirectionCluster {
                    sequence,
                    trips: vec![trip],
                });
            }
        }
    }

    Ok(clusters)
}
