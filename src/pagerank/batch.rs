//! Parallel ranking of independent graphs.
//!
//! Simulations share no state, so each graph runs on its own rayon task.
//! Results come back in input order, one `Result` per graph, so a single
//! empty graph does not discard the others.

use rayon::prelude::*;

use super::engine::PageRankSimulator;
use super::RankOutcome;
use crate::config::PageRankConfig;
use crate::error::Result;
use crate::graph::DirectedGraph;

/// Rank every graph in `graphs` with the same parameters.
pub fn simulate_batch<G>(graphs: &[G], config: &PageRankConfig) -> Vec<Result<RankOutcome<G::Node>>>
where
    G: DirectedGraph + Sync,
    G::Node: Send,
{
    let simulator = PageRankSimulator::new(*config);
    graphs
        .par_iter()
        .map(|graph| simulator.simulate(graph))
        .collect()
}
