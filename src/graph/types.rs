//! Core type definitions and well-known satellite field indices

pub use graphcore_algorithms::{Color, EdgeClass};

/// Parent value of a vertex with no predecessor
pub const NIL_VERTEX: i64 = -1;

/// Distance value of a vertex not reached by BFS
pub const UNREACHED: i64 = -1;

// Vertex data fields of traversal result graphs
pub const COLOR: usize = 0;
pub const PARENT: usize = 1;
/// BFS only
pub const DISTANCE: usize = 2;
/// DFS only
pub const DISCOVERY_TIME: usize = 2;
/// DFS only
pub const FINISH_TIME: usize = 3;
/// DFS only, identifies the tree (component) a vertex was reached in
pub const TREE_NUMBER: usize = 4;

/// Number of data fields on a BFS result graph
pub const BFS_FIELDS: usize = 3;
/// Number of data fields on a DFS result graph
pub const DFS_FIELDS: usize = 5;
/// Number of data fields on a Prim result graph (parent is kept)
pub const PRIM_FIELDS: usize = 2;

/// Smallest `order_max` an ordered DFS always accepts. Larger values are
/// accepted up to twice the vertex count.
pub const MAX_ORDER_SPAN: usize = 1 << 22;

/// Edge property slot written by edge classification
pub const EDGE_TYPE: usize = 0;

/// Weight given to edges inserted without one
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;
