//! Merging ordered sequences into one consistent ordering.
//!
//! Every trip lists its stops in order, but no single trip visits them all.
//! `unite` combines any number of such sequences into one that keeps each
//! input's relative order, adding as few extra occurrences as possible.
//!
//! The graph is built over occurrences, not values. A loop route that
//! passes the same stop twice needs two columns for it, and a plain
//! value-keyed graph would collapse them into a cycle.

use super::TimetableError;
use super::graph::OrderGraph;

/// Merge sequences into one ordering consistent with all of them.
///
/// Sequences are folded in the order given. For each item after the first,
/// the lowest-id existing occurrence of that value is reused unless it
/// already precedes (or is) the previous item's occurrence, in which case
/// the next candidate is tried, and a new occurrence is created when none
/// fits. Empty sequences are ignored.
///
/// Where no input fixes the relative order of two items, the one whose
/// occurrence was created first comes first.
///
/// # Examples
///
/// ```
/// use timetable_core::timetable::unite;
///
/// assert_eq!(unite([vec![1, 2, 4], vec![1, 2, 3, 4]]).unwrap(), vec![1, 2, 3, 4]);
///
/// // A repeated value splits into two occurrences when order demands it
/// assert_eq!(unite([vec![1, 2, 1], vec![1, 2]]).unwrap(), vec![1, 2, 1]);
/// ```
pub fn unite<T, S>(sequences: impl IntoIterator<Item = S>) -> Result<Vec<T>, TimetableError>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let mut graph = OrderGraph::new();
    // Value of each occurrence, indexed by node id
    let mut occurrences: Vec<T> = Vec::new();

    for sequence in sequences {
        let mut items = sequence.as_ref().iter();
        let Some(first) = items.next() else {
            continue;
        };

        let mut last = match occurrences.iter().position(|v| v == first) {
            Some(node) => node,
            None => {
                occurrences.push(first.clone());
                graph.add_node()
            }
        };

        for item in items {
            let reusable = (0..occurrences.len())
                .find(|&node| occurrences[node] == *item && !graph.has_path(node, last));
            let node = match reusable {
                Some(node) => node,
                None => {
                    occurrences.push(item.clone());
                    graph.add_node()
                }
            };
            graph.add_edge(last, node);
            last = node;
        }
    }

    let order = graph.topological_order()?;
    Ok(order.into_iter().map(|node| occurrences[node].clone()).collect())
}
