//! Graph algorithm kernels for graphcore
//!
//! Every kernel works on a [`GraphView`], a dense CSR snapshot of a graph
//! store, and returns plain result structs. Annotating result graphs and
//! mutating the source store is left to the caller.

pub mod common;
pub mod pathfinding;
pub mod dfs;
pub mod ordering;
pub mod topology;
pub mod disjoint_set;
pub mod mst;

pub use common::{Color, EdgeClass, GraphView};
pub use pathfinding::{bfs, BfsResult};
pub use dfs::{depth_first_search, DfsResult};
pub use ordering::{sort_by_rank, sorted_vertices, VertexOrder};
pub use topology::{topological_sort, TopologicalOrder};
pub use disjoint_set::DisjointSet;
pub use mst::{kruskal_mst, prim, prim_mst, MSTResult, PrimResult};
