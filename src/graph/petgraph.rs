//! [`DirectedGraph`] for `petgraph` graphs.
//!
//! Lets callers that already hold a `petgraph::graph::DiGraph` (for example
//! to compute degree or betweenness centrality) rank it without copying.
//! Node weights serve as identifiers; edge weights are ignored.

use std::hash::Hash;

use ::petgraph::graph::{DiGraph, Graph, IndexType, NodeIndex};
use ::petgraph::Direction;

use super::DirectedGraph;

impl<N, E, Ix> DirectedGraph for DiGraph<N, E, Ix>
where
    N: Clone + Eq + Hash,
    Ix: IndexType,
{
    type Node = N;

    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn node(&self, index: usize) -> &N {
        &self[NodeIndex::<Ix>::new(index)]
    }

    fn out_degree(&self, index: usize) -> usize {
        self.neighbors_directed(NodeIndex::<Ix>::new(index), Direction::Outgoing)
            .count()
    }

    fn predecessors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors_directed(NodeIndex::<Ix>::new(index), Direction::Incoming)
            .map(|source| source.index())
    }
}
