//! Directed ordering graph with explicit node ids.
//!
//! Both the sequence merger and the trip orderer accumulate "A comes before
//! B" evidence as edges and then read off one total order. Node ids are
//! plain indices handed out in creation order, and the topological sort
//! always emits the lowest ready id first, so the result is deterministic.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use super::TimetableError;

#[derive(Debug, Clone, Default)]
pub(crate) struct OrderGraph {
    successors: Vec<Vec<usize>>,
}

impl OrderGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create a graph with nodes `0..count` and no edges.
    pub(crate) fn with_nodes(count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); count],
        }
    }

    /// Add a node and return its id.
    pub(crate) fn add_node(&mut self) -> usize {
        self.successors.push(Vec::new());
        self.successors.len() - 1
    }

    pub(crate) fn len(&self) -> usize {
        self.successors.len()
    }

    pub(crate) fn has_edge(&self, from: usize, to: usize) -> bool {
        self.successors[from].contains(&to)
    }

    /// Add `from -> to` unless it already exists.
    pub(crate) fn add_edge(&mut self, from: usize, to: usize) {
        if !self.has_edge(from, to) {
            self.successors[from].push(to);
        }
    }

    /// True if `to` is reachable from `from`. Every node reaches itself.
    pub(crate) fn has_path(&self, from: usize, to: usize) -> bool {
        if from == to {
            return true;
        }
        let mut visited = vec![false; self.len()];
        let mut queue = VecDeque::from([from]);
        visited[from] = true;
        while let Some(node) = queue.pop_front() {
            for &next in &self.successors[node] {
                if next == to {
                    return true;
                }
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        false
    }

    /// Kahn's algorithm, emitting the lowest-id ready node each step.
    ///
    /// Fails if a cycle leaves nodes that can never become ready.
    pub(crate) fn topological_order(&self) -> Result<Vec<usize>, TimetableError> {
        let mut in_degree = vec![0usize; self.len()];
        for targets in &self.successors {
            for &to in targets {
                in_degree[to] += 1;
            }
        }

        let mut ready: BinaryHeap<Reverse<usize>> = in_degree
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == 0)
            .map(|(node, _)| Reverse(node))
            .collect();

        let mut order = Vec::with_capacity(self.len());
        while let Some(Reverse(node)) = ready.pop() {
            order.push(node);
            for &next in &self.successors[node] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.push(Reverse(next));
                }
            }
        }

        if order.len() < self.len() {
            return Err(TimetableError::OrderingConflict {
                unresolved: self.len() - order.len(),
            });
        }
        Ok(order)
    }
}
