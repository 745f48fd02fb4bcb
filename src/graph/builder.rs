//! Graph builder with efficient edge handling
//!
//! This module provides a mutable graph builder that uses FxHashMap
//! for O(1) node lookups during construction. Edges are stored in an
//! FxHashSet per node, so repeated edges collapse into one.

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode<N> {
    /// The identifier for this node
    pub id: N,
    /// Successor node indices
    pub edges: FxHashSet<u32>,
}

impl<N> BuilderNode<N> {
    /// Create a new node
    pub fn new(id: N) -> Self {
        Self {
            id,
            edges: FxHashSet::default(),
        }
    }
}

/// A mutable directed graph builder optimized for incremental construction
#[derive(Debug)]
pub struct GraphBuilder<N> {
    /// Maps identifier -> node index
    id_to_index: FxHashMap<N, u32>,
    /// Node storage
    nodes: Vec<BuilderNode<N>>,
}

impl<N: Clone + Eq + Hash> Default for GraphBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone + Eq + Hash> GraphBuilder<N> {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            id_to_index: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            id_to_index: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given identifier, returning its index
    pub fn get_or_create_node(&mut self, id: &N) -> u32 {
        if let Some(&index) = self.id_to_index.get(id) {
            return index;
        }

        let index = self.nodes.len() as u32;
        self.id_to_index.insert(id.clone(), index);
        self.nodes.push(BuilderNode::new(id.clone()));
        index
    }

    /// Add a node with no edges (no-op if it already exists)
    pub fn add_node(&mut self, id: N) -> u32 {
        self.get_or_create_node(&id)
    }

    /// Add a directed edge `from -> to`, creating either endpoint if needed.
    ///
    /// Self-loops are kept. Returns `false` if the edge already existed.
    pub fn add_edge(&mut self, from: N, to: N) -> bool {
        let from = self.get_or_create_node(&from);
        let to = self.get_or_create_node(&to);
        self.add_edge_by_index(from, to)
    }

    /// Add a directed edge between two existing node indices.
    ///
    /// Returns `false` if the edge already existed or `from` is out of range.
    pub fn add_edge_by_index(&mut self, from: u32, to: u32) -> bool {
        if to as usize >= self.nodes.len() {
            return false;
        }
        match self.nodes.get_mut(from as usize) {
            Some(node) => node.edges.insert(to),
            None => false,
        }
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Get a node by index
    pub fn get_node(&self, index: u32) -> Option<&BuilderNode<N>> {
        self.nodes.get(index as usize)
    }

    /// Get a node index by identifier
    pub fn get_node_index(&self, id: &N) -> Option<u32> {
        self.id_to_index.get(id).copied()
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode<N>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
