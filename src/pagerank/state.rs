//! Per-run rank state.
//!
//! [`RankState`] lives apart from the graph: the graph stays a shared,
//! read-only input while the state is the only thing a round mutates.
//! Ranks are double-buffered so that a round reads nothing it has already
//! written.

use crate::error::{ConfigIssue, Error, Result};
use crate::graph::DirectedGraph;

use super::observer::RoundReport;

/// Rank, out-degree and rank distribution for every node of one graph.
#[derive(Debug, Clone)]
pub struct RankState {
    /// Current probability mass per node
    rank: Vec<f64>,
    /// Mass each node hands to every successor next round (its full rank if dangling)
    rank_distribution: Vec<f64>,
    /// Fixed at initialization
    out_degree: Vec<usize>,
    /// Indices with no outgoing edges
    dangling: Vec<usize>,
    /// Staging buffer for the round in progress
    next_rank: Vec<f64>,
    /// Rounds applied so far
    rounds: usize,
}

impl RankState {
    /// Build the initial state: uniform rank `1/N` and the fixed topology
    /// summary (out-degrees and the dangling set).
    ///
    /// Fails with [`Error::EmptyGraph`] when the graph has no nodes.
    pub fn initialize<G: DirectedGraph>(graph: &G) -> Result<Self> {
        let n = graph.node_count();
        if n == 0 {
            return Err(Error::EmptyGraph);
        }

        let initial = 1.0 / n as f64;
        let out_degree: Vec<usize> = (0..n).map(|i| graph.out_degree(i)).collect();
        let dangling = graph.dangling_nodes();

        let mut state = Self {
            rank: vec![initial; n],
            rank_distribution: vec![0.0; n],
            out_degree,
            dangling,
            next_rank: vec![0.0; n],
            rounds: 0,
        };
        state.refresh_distribution();
        Ok(state)
    }

    /// Apply one synchronous round with damping factor `damping`.
    ///
    /// Every new rank is computed from the previous round's ranks and
    /// distributions before any of them is replaced. Returns the round's
    /// L1 delta and the total mass afterwards.
    ///
    /// `damping` must lie in (0, 1), otherwise [`Error::InvalidConfig`].
    /// `graph` must be the graph the state was initialized from. Only its
    /// node count is checked ([`Error::TopologyMismatch`]); a graph of the
    /// same size with different edges is not detected.
    pub fn step<G: DirectedGraph>(&mut self, graph: &G, damping: f64) -> Result<RoundReport> {
        if !(damping > 0.0 && damping < 1.0) {
            return Err(Error::InvalidConfig {
                issues: vec![ConfigIssue::new(
                    "damping_factor",
                    format!("must be in (0, 1), got {damping}"),
                )],
            });
        }

        let n = self.rank.len();
        if graph.node_count() != n {
            return Err(Error::TopologyMismatch {
                expected: n,
                found: graph.node_count(),
            });
        }
        let n_f64 = n as f64;

        let dangling_mass: f64 = self.dangling.iter().map(|&d| self.rank[d]).sum();
        let base = (1.0 - damping) / n_f64 + damping * dangling_mass / n_f64;

        for (v, slot) in self.next_rank.iter_mut().enumerate() {
            let incoming: f64 = graph
                .predecessors(v)
                .map(|u| self.rank_distribution[u])
                .sum();
            *slot = base + damping * incoming;
        }

        let delta: f64 = self
            .rank
            .iter()
            .zip(self.next_rank.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut self.rank, &mut self.next_rank);
        self.refresh_distribution();
        self.rounds += 1;

        Ok(RoundReport {
            round: self.rounds,
            delta,
            total_mass: self.total_mass(),
        })
    }

    fn refresh_distribution(&mut self) {
        for ((dist, &rank), &degree) in self
            .rank_distribution
            .iter_mut()
            .zip(self.rank.iter())
            .zip(self.out_degree.iter())
        {
            *dist = if degree > 0 { rank / degree as f64 } else { rank };
        }
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.rank.len()
    }

    /// Always false for an initialized state
    pub fn is_empty(&self) -> bool {
        self.rank.is_empty()
    }

    /// Current ranks in node-index order
    pub fn ranks(&self) -> &[f64] {
        &self.rank
    }

    /// Current per-successor contributions in node-index order
    pub(crate) fn rank_distribution(&self) -> &[f64] {
        &self.rank_distribution
    }

    /// Out-degree of the node at `index`
    pub(crate) fn out_degree(&self, index: usize) -> usize {
        self.out_degree[index]
    }

    /// Indices of the dangling nodes
    pub fn dangling(&self) -> &[usize] {
        &self.dangling
    }

    /// Sum of all ranks; stays at 1.0 up to rounding
    pub fn total_mass(&self) -> f64 {
        self.rank.iter().sum()
    }

    /// Rounds applied since initialization
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub(crate) fn into_ranks(self) -> Vec<f64> {
        self.rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;
    use crate::graph::csr::CsrGraph;

    const EPS: f64 = 1e-12;

    fn two_node_graph() -> CsrGraph<&'static str> {
        CsrGraph::from_edges([("A", "B")])
    }

    #[test]
    fn test_initialize_uniform() {
        let graph = CsrGraph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);
        let state = RankState::initialize(&graph).unwrap();

        assert_eq!(state.len(), 4);
        for &rank in state.ranks() {
            assert!((rank - 0.25).abs() < EPS);
        }
        assert_eq!(state.rounds(), 0);
    }

    #[test]
    fn test_initialize_empty_graph_fails() {
        let graph: CsrGraph<u32> = CsrGraph::default();
        assert!(matches!(RankState::initialize(&graph), Err(Error::EmptyGraph)));
    }

    #[test]
    fn test_initialize_distribution_and_dangling() {
        let state = RankState::initialize(&two_node_graph()).unwrap();

        assert_eq!(state.out_degree(0), 1);
        assert_eq!(state.out_degree(1), 0);
        assert_eq!(state.dangling(), &[1]);
        assert!((state.rank_distribution()[0] - 0.5).abs() < EPS);
        assert!((state.rank_distribution()[1] - 0.5).abs() < EPS);
    }

    #[test]
    fn test_initialize_splits_distribution_by_out_degree() {
        let graph = CsrGraph::from_edges([("hub", "x"), ("hub", "y"), ("hub", "z")]);
        let state = RankState::initialize(&graph).unwrap();

        assert!((state.rank_distribution()[0] - 0.25 / 3.0).abs() < EPS);
        assert_eq!(state.dangling(), &[1, 2, 3]);
    }

    #[test]
    fn test_single_round_two_nodes() {
        let graph = two_node_graph();
        let mut state = RankState::initialize(&graph).unwrap();

        let report = state.step(&graph, 0.85).unwrap();

        assert_eq!(report.round, 1);
        assert!((state.ranks()[0] - 0.2875).abs() < EPS);
        assert!((state.ranks()[1] - 0.7125).abs() < EPS);
        assert!((report.total_mass - 1.0).abs() < EPS);
        assert!((report.delta - 0.425).abs() < EPS);

        // Distributions follow the new ranks
        assert!((state.rank_distribution()[0] - 0.2875).abs() < EPS);
        assert!((state.rank_distribution()[1] - 0.7125).abs() < EPS);
    }

    #[test]
    fn test_fully_dangling_graph_is_fixed_point() {
        let mut builder = GraphBuilder::new();
        for id in 0..5u32 {
            builder.add_node(id);
        }
        let graph = CsrGraph::from_builder(&builder);
        let mut state = RankState::initialize(&graph).unwrap();

        for damping in [0.85, 0.5, 0.1] {
            let report = state.step(&graph, damping).unwrap();
            for &rank in state.ranks() {
                assert!((rank - 0.2).abs() < EPS);
            }
            assert!(report.delta < EPS);
        }
    }

    #[test]
    fn test_isolated_node_receives_base() {
        // c has neither in- nor out-edges
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "b");
        builder.add_edge("b", "a");
        builder.add_node("c");
        let graph = CsrGraph::from_builder(&builder);
        let mut state = RankState::initialize(&graph).unwrap();

        let damping = 0.85;
        let dangling_mass = state.ranks()[2];
        state.step(&graph, damping).unwrap();

        let base = (1.0 - damping) / 3.0 + damping * dangling_mass / 3.0;
        assert!((state.ranks()[2] - base).abs() < EPS);
    }

    #[test]
    fn test_mass_conserved_with_self_loop() {
        let graph = CsrGraph::from_edges([("a", "a"), ("a", "b"), ("b", "c")]);
        let mut state = RankState::initialize(&graph).unwrap();

        for _ in 0..20 {
            let report = state.step(&graph, 0.85).unwrap();
            assert!((report.total_mass - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_step_reads_previous_round_only() {
        // In a 2-cycle with uneven initial mass, an in-place update would let
        // node 1 see node 0's new value. Compare against a hand computation.
        let graph = CsrGraph::from_edges([(0u8, 1u8), (1u8, 0u8), (1u8, 2u8)]);
        let mut state = RankState::initialize(&graph).unwrap();
        let d = 0.85;
        let third = 1.0 / 3.0;

        state.step(&graph, d).unwrap();

        // node 2 dangling with 1/3; node 1 splits 1/3 over two successors
        let base = (1.0 - d) / 3.0 + d * third / 3.0;
        let expect0 = base + d * (third / 2.0);
        let expect1 = base + d * third;
        let expect2 = base + d * (third / 2.0);
        assert!((state.ranks()[0] - expect0).abs() < EPS);
        assert!((state.ranks()[1] - expect1).abs() < EPS);
        assert!((state.ranks()[2] - expect2).abs() < EPS);
    }

    #[test]
    fn test_step_rejects_out_of_range_damping() {
        let graph = two_node_graph();
        let mut state = RankState::initialize(&graph).unwrap();

        for damping in [1.5, 1.0, 0.0, -0.2, f64::NAN] {
            match state.step(&graph, damping) {
                Err(Error::InvalidConfig { issues }) => {
                    assert_eq!(issues[0].field, "damping_factor");
                }
                other => panic!("damping {damping} accepted: {other:?}"),
            }
        }
        assert_eq!(state.rounds(), 0);
        assert_eq!(state.ranks(), &[0.5, 0.5]);
    }

    #[test]
    fn test_step_topology_mismatch() {
        let graph = two_node_graph();
        let other = CsrGraph::from_edges([("A", "B"), ("B", "C")]);
        let mut state = RankState::initialize(&graph).unwrap();

        match state.step(&other, 0.85) {
            Err(Error::TopologyMismatch { expected, found }) => {
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("expected TopologyMismatch, got {other:?}"),
        }
        assert_eq!(state.rounds(), 0);
    }
}
