//! Core graph store implementation
//!
//! This module implements the graph data model with:
//! - Dense integer vertices fixed at construction
//! - Directed and undirected edges without parallel edges
//! - Per-vertex integer satellite data with optional letter labels
//! - Weighted edges with per-edge integer property vectors

pub mod edge;
pub mod list;
pub mod satellite;
pub mod store;
pub mod types;
pub mod weighted;

// Re-export main types
pub use edge::{Edge, WeightedEdge};
pub use list::Graph;
pub use satellite::SatelliteStore;
pub use store::{GraphError, GraphResult, GraphStore, WeightedStore};
pub use types::{
    Color, EdgeClass, BFS_FIELDS, COLOR, DEFAULT_EDGE_WEIGHT, DFS_FIELDS, DISCOVERY_TIME,
    DISTANCE, EDGE_TYPE, FINISH_TIME, MAX_ORDER_SPAN, NIL_VERTEX, PARENT, PRIM_FIELDS,
    TREE_NUMBER, UNREACHED,
};
pub use weighted::{EdgeTarget, WeightedGraph};
