//! PageRank simulation
//!
//! [`state::RankState`] holds the per-run mutable state and applies single
//! rounds; [`engine::PageRankSimulator`] drives rounds to convergence;
//! [`batch`] ranks independent graphs in parallel.

pub mod batch;
pub mod engine;
pub mod observer;
pub mod state;

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Result of a simulation
#[derive(Debug, Clone)]
pub struct RankOutcome<N> {
    /// Node identifiers in graph index order
    pub nodes: Vec<N>,
    /// Final rank for each node, aligned with `nodes`
    pub scores: Vec<f64>,
    /// Number of rounds performed
    pub iterations: usize,
    /// Delta of the last round
    pub delta: f64,
    /// Whether the delta fell to the limit before the round budget ran out
    pub converged: bool,
}

impl<N: Clone + Eq + Hash> RankOutcome<N> {
    /// Get the score for a specific node (linear search - use sparingly)
    pub fn score(&self, node: &N) -> Option<f64> {
        self.nodes
            .iter()
            .position(|n| n == node)
            .map(|i| self.scores[i])
    }

    /// Get top N nodes by score, highest first
    ///
    /// Ties keep graph index order.
    pub fn top_n(&self, n: usize) -> Vec<(N, f64)> {
        let mut indexed: Vec<_> = self.scores.iter().copied().enumerate().collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
            .into_iter()
            .map(|(i, s)| (self.nodes[i].clone(), s))
            .collect()
    }

    /// Iterate over `(node, score)` pairs in graph index order
    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> {
        self.nodes.iter().zip(self.scores.iter().copied())
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Convert into a `{node -> rank}` map
    pub fn into_map(self) -> FxHashMap<N, f64> {
        self.nodes.into_iter().zip(self.scores).collect()
    }
}
