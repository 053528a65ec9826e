//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution,
//! plus the vertex colors and edge classes produced by the traversals.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertex color during a traversal (CLRS, p. 594)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    /// Not yet discovered
    White,
    /// Discovered, adjacency scan in progress
    Gray,
    /// Adjacency scan complete
    Black,
}

impl Color {
    /// Integer code stored in satellite data (WHITE=0, GRAY=1, BLACK=2)
    pub fn code(self) -> i64 {
        match self {
            Color::White => 0,
            Color::Gray => 1,
            Color::Black => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Color::White),
            1 => Some(Color::Gray),
            2 => Some(Color::Black),
            _ => None,
        }
    }
}

/// DFS edge classification (CLRS, p. 609)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EdgeClass {
    Tree,
    Back,
    Forward,
    Cross,
}

impl EdgeClass {
    /// Integer code stored in edge properties (TREE=1, BACK=2, FORWARD=3, CROSS=4)
    pub fn code(self) -> i64 {
        match self {
            EdgeClass::Tree => 1,
            EdgeClass::Back => 2,
            EdgeClass::Forward => 3,
            EdgeClass::Cross => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(EdgeClass::Tree),
            2 => Some(EdgeClass::Back),
            3 => Some(EdgeClass::Forward),
            4 => Some(EdgeClass::Cross),
            _ => None,
        }
    }
}

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Vertices are `0..node_count`. Undirected graphs store every edge twice
/// (once per endpoint), exactly as the adjacency lists they were built from.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Whether edges are directed
    pub directed: bool,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices, in adjacency-list order
    pub out_targets: Vec<usize>,

    /// Edge weights: aligned with `out_targets`
    pub weights: Option<Vec<f64>>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: usize) -> Option<&[f64]> {
        self.weights.as_ref().map(|w| {
            let start = self.out_offsets[idx];
            let end = self.out_offsets[idx + 1];
            &w[start..end]
        })
    }

    /// Weight of the `k`-th outgoing edge of `idx`, 1.0 for unweighted views
    pub fn weight(&self, idx: usize, k: usize) -> f64 {
        self.weights(idx).map(|w| w[k]).unwrap_or(1.0)
    }

    /// Position of the `k`-th outgoing edge of `idx` within `out_targets`
    pub fn slot(&self, idx: usize, k: usize) -> usize {
        self.out_offsets[idx] + k
    }

    /// Number of stored adjacency entries (twice the edge count when undirected)
    pub fn entry_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Build a view from per-vertex adjacency lists
    pub fn from_adjacency_list(
        directed: bool,
        outgoing: Vec<Vec<usize>>,
        weights: Option<Vec<Vec<f64>>>,
    ) -> Self {
        let node_count = outgoing.len();
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut flat_weights = if weights.is_some() { Some(Vec::new()) } else { None };

        out_offsets.push(0);
        for (i, neighbors) in outgoing.into_iter().enumerate() {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());

            if let Some(ref mut w_flat) = flat_weights {
                if let Some(w_row) = weights.as_ref().map(|w| &w[i]) {
                    w_flat.extend(w_row.iter());
                }
            }
        }

        GraphView {
            node_count,
            directed,
            out_offsets,
            out_targets,
            weights: flat_weights,
        }
    }
}
