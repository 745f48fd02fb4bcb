//! Compressed Sparse Row (CSR) graph representation
//!
//! The graph keeps two CSR layouts: a forward one over successors and a
//! reverse one over predecessors. The rank engine pulls mass along in-edges,
//! so the reverse layout is what each round iterates.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::builder::GraphBuilder;
use super::DirectedGraph;

/// An immutable directed graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph<N> {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's successors are at out_idx[out_ptr[i]..out_ptr[i+1]]
    out_ptr: Vec<usize>,
    /// Successor indices, sorted per node
    out_idx: Vec<u32>,
    /// Row pointers into `in_idx`
    in_ptr: Vec<usize>,
    /// Predecessor indices, sorted per node
    in_idx: Vec<u32>,
    /// Identifier for each node
    ids: Vec<N>,
    /// Identifier -> index lookup
    index: FxHashMap<N, u32>,
}

impl<N: Clone + Eq + Hash> CsrGraph<N> {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder<N>) -> Self {
        let num_nodes = builder.node_count();
        let mut out_ptr = Vec::with_capacity(num_nodes + 1);
        let mut out_idx = Vec::with_capacity(builder.edge_count());
        let mut ids = Vec::with_capacity(num_nodes);
        let mut index = FxHashMap::with_capacity_and_hasher(num_nodes, Default::default());
        let mut in_counts = vec![0usize; num_nodes];

        out_ptr.push(0);

        for (i, node) in builder.nodes() {
            ids.push(node.id.clone());
            index.insert(node.id.clone(), i);

            // Sort for deterministic iteration
            let mut edges: Vec<u32> = node.edges.iter().copied().collect();
            edges.sort_unstable();

            for &target in &edges {
                in_counts[target as usize] += 1;
            }
            out_idx.extend(edges);
            out_ptr.push(out_idx.len());
        }

        let mut in_ptr = Vec::with_capacity(num_nodes + 1);
        in_ptr.push(0);
        for count in &in_counts {
            let last = in_ptr[in_ptr.len() - 1];
            in_ptr.push(last + count);
        }

        // Sources are visited in ascending order, so each predecessor row ends up sorted.
        let mut cursor = in_ptr[..num_nodes].to_vec();
        let mut in_idx = vec![0u32; out_idx.len()];
        for source in 0..num_nodes {
            for &target in &out_idx[out_ptr[source]..out_ptr[source + 1]] {
                let slot = &mut cursor[target as usize];
                in_idx[*slot] = source as u32;
                *slot += 1;
            }
        }

        Self {
            num_nodes,
            out_ptr,
            out_idx,
            in_ptr,
            in_idx,
            ids,
            index,
        }
    }

    /// Build a graph straight from `(source, destination)` pairs
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut builder = GraphBuilder::new();
        for (from, to) in edges {
            builder.add_edge(from, to);
        }
        Self::from_builder(&builder)
    }

    /// Look up a node index by identifier
    pub fn index_of(&self, id: &N) -> Option<u32> {
        self.index.get(id).copied()
    }
}

impl<N> CsrGraph<N> {
    /// Iterate over predecessors of a node
    pub fn predecessor_indices(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        let start = self.in_ptr[node as usize];
        let end = self.in_ptr[node as usize + 1];
        self.in_idx[start..end].iter().copied()
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> u32 {
        (self.out_ptr[node as usize + 1] - self.out_ptr[node as usize]) as u32
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of directed edges
    pub fn num_edges(&self) -> usize {
        self.out_idx.len()
    }
}

impl<N> Default for CsrGraph<N> {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            out_ptr: vec![0],
            out_idx: Vec::new(),
            in_ptr: vec![0],
            in_idx: Vec::new(),
            ids: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<N: Clone + Eq + Hash> DirectedGraph for CsrGraph<N> {
    type Node = N;

    fn node_count(&self) -> usize {
        self.num_nodes
    }

    fn node(&self, index: usize) -> &N {
        &self.ids[index]
    }

    fn out_degree(&self, index: usize) -> usize {
        self.degree(index as u32) as usize
    }

    fn predecessors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.predecessor_indices(index as u32).map(|i| i as usize)
    }

    fn dangling_nodes(&self) -> Vec<usize> {
        // Row pointers that do not advance mark nodes with no successors
        self.out_ptr
            .windows(2)
            .enumerate()
            .filter(|(_, row)| row[0] == row[1])
            .map(|(i, _)| i)
            .collect()
    }
}
