//! Graph construction and representation
//!
//! The ranking engine only needs a read-only view of the topology, described
//! by [`DirectedGraph`]. [`csr::CsrGraph`] is the in-crate implementation;
//! with the `petgraph` feature, `petgraph::graph::DiGraph` works as well.

pub mod builder;
pub mod csr;
#[cfg(feature = "petgraph")]
pub mod petgraph;

use std::hash::Hash;

/// Read-only directed topology addressed by dense node indices `0..node_count()`.
///
/// Edge payloads are never inspected. Parallel edges, when an implementation
/// keeps them, count once per edge in both `out_degree` and `predecessors`.
pub trait DirectedGraph {
    /// Opaque node identifier.
    type Node: Clone + Eq + Hash;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Identifier of the node at `index`.
    fn node(&self, index: usize) -> &Self::Node;

    /// Number of outgoing edges of the node at `index`.
    fn out_degree(&self, index: usize) -> usize;

    /// Indices of the sources of every edge pointing at `index`.
    fn predecessors(&self, index: usize) -> impl Iterator<Item = usize> + '_;

    /// Indices of nodes with no outgoing edges, ascending.
    fn dangling_nodes(&self) -> Vec<usize> {
        (0..self.node_count())
            .filter(|&i| self.out_degree(i) == 0)
            .collect()
    }
}
