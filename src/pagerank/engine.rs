//! Iterative PageRank simulation
//!
//! Simulates the damped random walk round by round with explicit handling of
//! dangling nodes: their mass is pooled and spread uniformly over all nodes,
//! so the total rank stays at 1.0.
//!
//! The loop has two independent exits, checked after every round:
//! - convergence, when the round's L1 delta is at most `delta_limit`
//! - the round budget, after `max_iterations` rounds
//!
//! Running out of budget is not an error; the outcome carries
//! `converged = false` and the current estimate.

use rustc_hash::FxHashMap;

use super::observer::{NoopObserver, RoundObserver};
use super::state::RankState;
use super::RankOutcome;
use crate::config::PageRankConfig;
use crate::error::Result;
use crate::graph::DirectedGraph;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

macro_rules! trace_simulation {
    ($n:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("simulate_page_rank", nodes = $n).entered();
    };
}

/// Iterative PageRank simulator
#[derive(Debug, Clone, Default)]
pub struct PageRankSimulator {
    config: PageRankConfig,
}

impl PageRankSimulator {
    /// Create a simulator with the given parameters
    pub fn new(config: PageRankConfig) -> Self {
        Self { config }
    }

    /// Parameters in use
    pub fn config(&self) -> &PageRankConfig {
        &self.config
    }

    /// Initialize rank state for `graph` (uniform `1/N`).
    pub fn initialize<G: DirectedGraph>(&self, graph: &G) -> Result<RankState> {
        RankState::initialize(graph)
    }

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn simulate<G: DirectedGraph>(&self, graph: &G) -> Result<RankOutcome<G::Node>> {
        self.simulate_with_observer(graph, &mut NoopObserver)
    }

    /// Run PageRank, notifying `observer` after every round.
    pub fn simulate_with_observer<G, O>(
        &self,
        graph: &G,
        observer: &mut O,
    ) -> Result<RankOutcome<G::Node>>
    where
        G: DirectedGraph,
        O: RoundObserver + ?Sized,
    {
        self.config.validate()?;
        trace_simulation!(graph.node_count());

        let mut state = RankState::initialize(graph)?;
        let mut delta = f64::MAX;
        let mut converged = false;

        for _ in 0..self.config.max_iterations {
            let report = state.step(graph, self.config.damping_factor)?;
            delta = report.delta;
            observer.on_round(&report);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                round = report.round,
                delta = report.delta,
                mass = report.total_mass,
                "pagerank round"
            );

            if delta <= self.config.delta_limit {
                converged = true;
                break;
            }
        }

        let iterations = state.rounds();
        observer.on_finish(iterations, converged);

        #[cfg(feature = "tracing")]
        {
            if converged {
                tracing::info!(iterations, delta, "pagerank converged");
            } else {
                tracing::warn!(
                    iterations,
                    delta,
                    delta_limit = self.config.delta_limit,
                    "pagerank stopped at iteration cap without converging"
                );
            }
        }

        let nodes = (0..graph.node_count())
            .map(|i| graph.node(i).clone())
            .collect();

        Ok(RankOutcome {
            nodes,
            scores: state.into_ranks(),
            iterations,
            delta,
            converged,
        })
    }
}

/// Rank `graph` and return `{node -> rank}`.
pub fn simulate_page_rank<G: DirectedGraph>(
    graph: &G,
    config: &PageRankConfig,
) -> Result<FxHashMap<G::Node, f64>> {
    PageRankSimulator::new(*config)
        .simulate(graph)
        .map(RankOutcome::into_map)
}
