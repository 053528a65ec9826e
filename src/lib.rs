//! Graphcore
//!
//! A graph-algorithms engine over directed and undirected graphs with
//! per-vertex and per-edge integer satellite data.
//!
//! # Architecture
//!
//! - `graph`: the graph stores (`Graph`, `WeightedGraph`) behind the
//!   `GraphStore` / `WeightedStore` capability traits, plus the vertex
//!   satellite data table and edge value types
//! - `algo`: adapter layer that snapshots a store into a dense view, runs
//!   the kernels from `graphcore-algorithms`, and builds annotated result
//!   graphs
//! - `config`: construction parameters, loadable from JSON
//! - `labels`: translation between display labels and vertex indices
//!
//! # Algorithms
//!
//! - Breadth-first search with BFS-tree path lookup
//! - Depth-first search, unordered or with an explicit root order, with
//!   optional TREE/BACK/FORWARD/CROSS edge classification
//! - Topological sort
//! - Strongly connected components (Kosaraju)
//! - Minimum spanning trees (Kruskal, Prim)
//!
//! ## Example Usage
//!
//! ```rust
//! use graphcore::graph::{Graph, GraphStore, DISTANCE};
//!
//! let mut g = Graph::undirected(4);
//! g.insert(0, 1).unwrap();
//! g.insert(1, 2).unwrap();
//! g.insert(2, 3).unwrap();
//!
//! let tree = g.breadth_first_search(0).unwrap();
//! assert_eq!(tree.vertex_data(3, DISTANCE).unwrap(), 3);
//! assert_eq!(tree.bfs_path(0, 3).unwrap(), Some(vec![0, 1, 2, 3]));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod labels;

// Re-export main types for convenience
pub use config::GraphConfig;
pub use graph::{
    Color, Edge, EdgeClass, EdgeTarget, Graph, GraphError, GraphResult, GraphStore,
    SatelliteStore, WeightedEdge, WeightedGraph, WeightedStore,
};
pub use labels::VertexLabels;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}
