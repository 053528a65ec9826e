//! Graph algorithms module
//!
//! Algorithms are implemented in the `graphcore-algorithms` crate.
//! This module provides the integration/adapter layer: it snapshots a store
//! into a `GraphView`, runs a kernel, and builds the annotated result graph.

pub mod components;
pub mod spanning;
pub mod traversal;

pub use components::{forest_trees, strongly_connected_components, topological_sort};
pub use spanning::{min_spanning_tree_kruskal, min_spanning_tree_prim, total_weight};
pub use traversal::{
    all_black, breadth_first_search, depth_first_search, depth_first_search_classified,
    depth_first_search_ordered,
};

// Re-export kernels
pub use graphcore_algorithms::{
    bfs, kruskal_mst, prim, prim_mst, BfsResult, DfsResult, DisjointSet, GraphView, MSTResult,
    PrimResult, TopologicalOrder, VertexOrder,
};
