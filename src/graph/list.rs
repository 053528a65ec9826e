//! Adjacency-list graph
//!
//! One neighbour list per vertex. Undirected edges are stored in both lists
//! and counted once.

use super::satellite::SatelliteStore;
use super::store::{GraphError, GraphResult, GraphStore};
use super::types::{BFS_FIELDS, DISTANCE, NIL_VERTEX, PARENT};
use super::weighted::WeightedGraph;
use crate::config::GraphConfig;
use graphcore_algorithms::{sort_by_rank, GraphView};
use std::fmt;
use tracing::debug;

/// Unweighted graph over the vertices `0..V`
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    directed: bool,
    edge_count: usize,
    adj: Vec<Vec<usize>>,
    data: SatelliteStore,
}

impl Graph {
    /// Create an edgeless graph without vertex data fields
    pub fn new(vertices: usize, directed: bool) -> Self {
        Self::with_fields(vertices, directed, 0)
    }

    pub fn directed(vertices: usize) -> Self {
        Self::new(vertices, true)
    }

    pub fn undirected(vertices: usize) -> Self {
        Self::new(vertices, false)
    }

    /// Create an edgeless graph with `data_fields` zeroed fields per vertex
    pub fn with_fields(vertices: usize, directed: bool, data_fields: usize) -> Self {
        Graph {
            directed,
            edge_count: 0,
            adj: vec![Vec::new(); vertices],
            data: SatelliteStore::new(vertices, data_fields),
        }
    }

    /// Build from a validated configuration. Edge properties only apply to
    /// weighted graphs and are ignored here.
    pub fn from_config(config: &GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        if config.edge_properties > 0 {
            debug!(
                "Ignoring {} edge properties for unweighted graph",
                config.edge_properties
            );
        }
        debug!(
            "Creating graph: {} vertices, directed={}, {} data fields",
            config.vertices, config.directed, config.data_fields
        );
        Ok(Self::with_fields(
            config.vertices,
            config.directed,
            config.data_fields,
        ))
    }

    /// Build a graph from an edge list
    pub fn from_edges(
        vertices: usize,
        directed: bool,
        edges: &[(usize, usize)],
    ) -> GraphResult<Self> {
        let mut graph = Self::new(vertices, directed);
        for &(from, to) in edges {
            graph.insert(from, to)?;
        }
        Ok(graph)
    }

    /// Path from `source` to `target` through a BFS tree's parent field.
    ///
    /// `Ok(None)` if `target` was not reached from `source`, or if `source`
    /// is not the tree's root. Fails with `Unsupported` when this graph does
    /// not have the shape of a BFS tree.
    pub fn bfs_path(&self, source: usize, target: usize) -> GraphResult<Option<Vec<usize>>> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if self.data.fields() != BFS_FIELDS {
            return Err(GraphError::Unsupported(
                "path lookup requires a breadth-first search tree".to_string(),
            ));
        }
        if self.data.get(source, DISTANCE)? != 0 {
            return Ok(None);
        }
        // the root of a BFS tree has no parent
        if self.data.get(source, PARENT)? != NIL_VERTEX {
            return Err(GraphError::Unsupported(
                "source has distance 0 but is not the root of a breadth-first search tree"
                    .to_string(),
            ));
        }

        let mut path = vec![target];
        let mut current = target;
        while current != source {
            let parent = self.data.get(current, PARENT)?;
            if parent == NIL_VERTEX {
                return Ok(None);
            }
            if parent < 0 || parent as usize >= self.vertices() || path.len() > self.vertices() {
                return Err(GraphError::Unsupported(
                    "parent field does not describe a breadth-first search tree".to_string(),
                ));
            }
            current = parent as usize;
            path.push(current);
        }
        path.reverse();
        Ok(Some(path))
    }

    fn valid_pair(&self, from: usize, to: usize) -> bool {
        from < self.adj.len() && to < self.adj.len()
    }
}

impl GraphStore for Graph {
    fn vertices(&self) -> usize {
        self.adj.len()
    }

    fn edges(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn insert(&mut self, from: usize, to: usize) -> GraphResult<bool> {
        if !self.valid_pair(from, to) {
            return Ok(false);
        }
        if !self.directed && from == to {
            return Err(GraphError::SelfLoopNotAllowed(from));
        }
        if self.adj[from].contains(&to) {
            return Ok(false);
        }
        self.adj[from].push(to);
        if !self.directed {
            self.adj[to].push(from);
        }
        self.edge_count += 1;
        Ok(true)
    }

    fn remove(&mut self, from: usize, to: usize) -> GraphResult<bool> {
        if !self.valid_pair(from, to) {
            return Ok(false);
        }
        let Some(pos) = self.adj[from].iter().position(|&v| v == to) else {
            return Ok(false);
        };
        self.adj[from].remove(pos);
        if !self.directed {
            self.adj[to].retain(|&v| v != from);
        }
        self.edge_count -= 1;
        Ok(true)
    }

    fn has_edge(&self, from: usize, to: usize) -> GraphResult<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.adj[from].contains(&to))
    }

    fn adjacencies(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;
        Ok(self.adj[vertex].clone())
    }

    fn satellite(&self) -> &SatelliteStore {
        &self.data
    }

    fn satellite_mut(&mut self) -> &mut SatelliteStore {
        &mut self.data
    }

    fn reorder_adjacencies(&mut self, rank: &[usize]) {
        for list in self.adj.iter_mut() {
            sort_by_rank(list, rank, |&v| v);
        }
    }

    fn view(&self) -> GraphView {
        GraphView::from_adjacency_list(self.directed, self.adj.clone(), None)
    }

    fn transpose(&self) -> GraphResult<Self> {
        if !self.directed {
            return Err(GraphError::Unsupported(
                "transpose of an undirected graph".to_string(),
            ));
        }
        let mut adj = vec![Vec::new(); self.adj.len()];
        for (u, targets) in self.adj.iter().enumerate() {
            for &v in targets {
                adj[v].push(u);
            }
        }
        Ok(Graph {
            directed: true,
            edge_count: self.edge_count,
            adj,
            data: self.data.clone(),
        })
    }

    fn with_data_fields(&self, fields: usize) -> Self {
        Graph {
            directed: self.directed,
            edge_count: self.edge_count,
            adj: self.adj.clone(),
            data: self.data.reshaped(fields),
        }
    }
}

/// Drops weights and edge properties, keeps vertex data
impl From<&WeightedGraph> for Graph {
    fn from(g: &WeightedGraph) -> Self {
        let adj = (0..g.vertices())
            .map(|v| g.adjacencies(v).unwrap_or_default())
            .collect();
        Graph {
            directed: g.is_directed(),
            edge_count: g.edges(),
            adj,
            data: g.satellite().clone(),
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, targets) in self.adj.iter().enumerate() {
            write!(f, "{}:", v)?;
            for (i, t) in targets.iter().enumerate() {
                if i == 0 {
                    write!(f, " {}", t)?;
                } else {
                    write!(f, " -> {}", t)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
