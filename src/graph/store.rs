//! Graph store contract
//!
//! Directed and undirected graphs share one capability interface,
//! [`GraphStore`]. The weighted capability (edge weights, edge property
//! vectors, vertex weights, MST) is the additional [`WeightedStore`]
//! interface. Algorithms are provided methods that delegate to the `algo`
//! adapter layer, so every store gets them for free.

use super::edge::{Edge, WeightedEdge};
use super::list::Graph;
use super::satellite::SatelliteStore;
use super::weighted::WeightedGraph;
use crate::algo;
use graphcore_algorithms::GraphView;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid vertex {vertex}: graph has {vertices} vertices")]
    InvalidVertex { vertex: usize, vertices: usize },

    #[error("Invalid data field {field}: graph has {fields} data fields")]
    InvalidDataField { field: usize, fields: usize },

    #[error("Invalid edge property {property}: graph has {properties} edge properties")]
    InvalidEdgeProperty { property: usize, properties: usize },

    #[error("Edge ({from}, {to}) does not exist")]
    InvalidEdge { from: usize, to: usize },

    #[error("Self-loop on vertex {0} is not allowed in an undirected graph")]
    SelfLoopNotAllowed(usize),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Invalid data field label '{0}'")]
    InvalidLabel(char),

    #[error("Unknown vertex label '{0}'")]
    UnknownVertexLabel(char),

    #[error("Graph has a cycle through edge ({from}, {to})")]
    CycleDetected { from: usize, to: usize },

    #[error("Order value {value} of vertex {vertex} is outside [0, {max}]")]
    OrderValueOutOfRange { vertex: usize, value: i64, max: usize },

    #[error("Order range [0, {max}] exceeds the limit of {limit}")]
    OrderRangeTooLarge { max: usize, limit: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Capability interface shared by every graph representation
///
/// Vertices are the dense indices `0..vertices()`, fixed at construction.
/// `insert`/`remove` report "already in the desired state" as `Ok(false)`;
/// contract violations are errors.
pub trait GraphStore {
    fn vertices(&self) -> usize;

    /// Number of logical edges (a mirrored undirected edge counts once)
    fn edges(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// Insert `(from, to)`.
    ///
    /// `Ok(false)` if the edge exists or either vertex is out of range;
    /// `SelfLoopNotAllowed` for `from == to` on an undirected graph.
    fn insert(&mut self, from: usize, to: usize) -> GraphResult<bool>;

    /// Remove `(from, to)`, `Ok(false)` if absent.
    fn remove(&mut self, from: usize, to: usize) -> GraphResult<bool>;

    fn has_edge(&self, from: usize, to: usize) -> GraphResult<bool>;

    /// Neighbours of `vertex` in storage (scan) order
    fn adjacencies(&self, vertex: usize) -> GraphResult<Vec<usize>>;

    fn satellite(&self) -> &SatelliteStore;

    fn satellite_mut(&mut self) -> &mut SatelliteStore;

    /// Stable-sort every adjacency list by `rank[target]`
    fn reorder_adjacencies(&mut self, rank: &[usize]);

    /// Dense CSR snapshot for the algorithm kernels. Slot order matches
    /// adjacency order.
    fn view(&self) -> GraphView;

    /// Reverse every edge, copying satellite data. Directed graphs only.
    fn transpose(&self) -> GraphResult<Self>
    where
        Self: Sized;

    /// Copy of the edges with fresh zeroed satellite data of `fields` fields
    fn with_data_fields(&self, fields: usize) -> Self
    where
        Self: Sized;

    fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex >= self.vertices() {
            return Err(GraphError::InvalidVertex {
                vertex,
                vertices: self.vertices(),
            });
        }
        Ok(())
    }

    /// Edges leaving `vertex`, in adjacency order
    fn edges_from(&self, vertex: usize) -> GraphResult<Vec<Edge>> {
        Ok(self
            .adjacencies(vertex)?
            .into_iter()
            .map(|to| Edge::new(vertex, to))
            .collect())
    }

    /// Every logical edge once. Undirected edges are reported as `(u, v)`
    /// with `u < v`.
    fn all_edges(&self) -> Vec<Edge> {
        let directed = self.is_directed();
        let mut edges = Vec::with_capacity(self.edges());
        for u in 0..self.vertices() {
            for v in self.adjacencies(u).unwrap_or_default() {
                if directed || u < v {
                    edges.push(Edge::new(u, v));
                }
            }
        }
        edges
    }

    fn data_fields(&self) -> usize {
        self.satellite().fields()
    }

    fn vertex_data(&self, vertex: usize, field: usize) -> GraphResult<i64> {
        self.satellite().get(vertex, field)
    }

    fn set_vertex_data(&mut self, vertex: usize, field: usize, value: i64) -> GraphResult<()> {
        self.satellite_mut().set(vertex, field, value)
    }

    fn set_data_field_label(&mut self, field: usize, label: char) -> GraphResult<()> {
        self.satellite_mut().set_label(field, label)
    }

    fn data_field_by_label(&self, label: char) -> Option<usize> {
        self.satellite().field_for_label(label)
    }

    /// BFS tree rooted at `source` (CLRS, p. 595)
    fn breadth_first_search(&self, source: usize) -> GraphResult<Graph>
    where
        Self: Sized,
    {
        algo::breadth_first_search(self, source)
    }

    /// DFS forest with roots taken in index order (CLRS, p. 604)
    fn depth_first_search(&self) -> GraphResult<Graph>
    where
        Self: Sized,
    {
        algo::depth_first_search(self)
    }

    /// DFS forest with roots ordered by the values in `order_field`.
    ///
    /// Rewrites the scan order of this graph's adjacency lists to follow the
    /// same permutation.
    fn depth_first_search_ordered(
        &mut self,
        order_field: usize,
        order_max: usize,
        ascending: bool,
    ) -> GraphResult<Graph>
    where
        Self: Sized,
    {
        algo::depth_first_search_ordered(self, order_field, order_max, ascending)
    }

    /// Vertices by decreasing DFS finish time (CLRS, p. 613)
    fn topological_sort(&self) -> GraphResult<Vec<usize>>
    where
        Self: Sized,
    {
        algo::topological_sort(self)
    }

    /// One DFS tree per strongly connected component (CLRS, p. 617)
    fn strongly_connected_components(&self) -> GraphResult<Graph>
    where
        Self: Sized,
    {
        algo::strongly_connected_components(self)
    }
}

/// Weighted capability: per-edge weight and property vector, per-vertex weight
pub trait WeightedStore: GraphStore {
    /// Length of every edge's property vector
    fn edge_properties(&self) -> usize;

    fn insert_weighted(&mut self, from: usize, to: usize, weight: f64) -> GraphResult<bool>;

    fn edge_weight(&self, from: usize, to: usize) -> GraphResult<f64>;

    fn set_edge_weight(&mut self, from: usize, to: usize, weight: f64) -> GraphResult<()>;

    fn edge_property(&self, from: usize, to: usize, property: usize) -> GraphResult<i64>;

    fn set_edge_property(
        &mut self,
        from: usize,
        to: usize,
        property: usize,
        value: i64,
    ) -> GraphResult<()>;

    fn vertex_weight(&self, vertex: usize) -> GraphResult<f64>;

    fn set_vertex_weight(&mut self, vertex: usize, weight: f64) -> GraphResult<()>;

    /// Weighted edges leaving `vertex`, in adjacency order
    fn weighted_edges_from(&self, vertex: usize) -> GraphResult<Vec<WeightedEdge>>;

    /// Every logical edge once, with its weight
    fn weighted_edges(&self) -> Vec<WeightedEdge> {
        let directed = self.is_directed();
        let mut edges = Vec::with_capacity(self.edges());
        for u in 0..self.vertices() {
            for edge in self.weighted_edges_from(u).unwrap_or_default() {
                if directed || u < edge.to() {
                    edges.push(edge);
                }
            }
        }
        edges
    }

    fn check_property(&self, property: usize) -> GraphResult<()> {
        if property >= self.edge_properties() {
            return Err(GraphError::InvalidEdgeProperty {
                property,
                properties: self.edge_properties(),
            });
        }
        Ok(())
    }

    /// Kruskal's minimum spanning tree (forest, if disconnected)
    fn min_spanning_tree_kruskal(&self) -> GraphResult<WeightedGraph>
    where
        Self: Sized,
    {
        algo::min_spanning_tree_kruskal(self)
    }

    /// Prim's minimum spanning tree of the component containing `start`
    fn min_spanning_tree_prim(&self, start: usize) -> GraphResult<WeightedGraph>
    where
        Self: Sized,
    {
        algo::min_spanning_tree_prim(self, start)
    }
}
