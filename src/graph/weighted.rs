//! Weighted adjacency-list graph
//!
//! Each adjacency entry is an [`EdgeTarget`] carrying the edge weight and an
//! integer property vector of fixed length. Undirected edges are stored as
//! two entries that each own their property vector; updates through the
//! store API write both.

use super::edge::WeightedEdge;
use super::list::Graph;
use super::satellite::SatelliteStore;
use super::store::{GraphError, GraphResult, GraphStore, WeightedStore};
use super::types::{EdgeClass, DEFAULT_EDGE_WEIGHT, EDGE_TYPE};
use crate::algo;
use crate::config::GraphConfig;
use graphcore_algorithms::{sort_by_rank, GraphView};
use std::fmt;
use tracing::debug;

/// One adjacency entry of a weighted graph
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTarget {
    pub target: usize,
    pub weight: f64,
    pub properties: Vec<i64>,
}

impl EdgeTarget {
    fn new(target: usize, weight: f64, properties: usize) -> Self {
        EdgeTarget {
            target,
            weight,
            properties: vec![0; properties],
        }
    }
}

/// Weighted graph over the vertices `0..V`
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    directed: bool,
    edge_count: usize,
    edge_properties: usize,
    adj: Vec<Vec<EdgeTarget>>,
    vertex_weights: Vec<f64>,
    data: SatelliteStore,
}

impl WeightedGraph {
    /// Create an edgeless graph without data fields or edge properties
    pub fn new(vertices: usize, directed: bool) -> Self {
        Self::with_fields(vertices, directed, 0, 0)
    }

    pub fn directed(vertices: usize) -> Self {
        Self::new(vertices, true)
    }

    pub fn undirected(vertices: usize) -> Self {
        Self::new(vertices, false)
    }

    pub fn with_fields(
        vertices: usize,
        directed: bool,
        data_fields: usize,
        edge_properties: usize,
    ) -> Self {
        WeightedGraph {
            directed,
            edge_count: 0,
            edge_properties,
            adj: vec![Vec::new(); vertices],
            vertex_weights: vec![0.0; vertices],
            data: SatelliteStore::new(vertices, data_fields),
        }
    }

    pub fn from_config(config: &GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        debug!(
            "Creating weighted graph: {} vertices, directed={}, {} data fields, {} edge properties",
            config.vertices, config.directed, config.data_fields, config.edge_properties
        );
        Ok(Self::with_fields(
            config.vertices,
            config.directed,
            config.data_fields,
            config.edge_properties,
        ))
    }

    /// Build a graph from `(from, to, weight)` triples
    pub fn from_edges(
        vertices: usize,
        directed: bool,
        edges: &[(usize, usize, f64)],
    ) -> GraphResult<Self> {
        let mut graph = Self::new(vertices, directed);
        for &(from, to, weight) in edges {
            graph.insert_weighted(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Weighted copy of `g`: every edge gets the default weight and
    /// `edge_properties` zeroed properties. Vertex data is copied.
    pub fn from_graph(g: &Graph, edge_properties: usize) -> Self {
        let adj = (0..g.vertices())
            .map(|v| {
                g.adjacencies(v)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|t| EdgeTarget::new(t, DEFAULT_EDGE_WEIGHT, edge_properties))
                    .collect()
            })
            .collect();
        WeightedGraph {
            directed: g.is_directed(),
            edge_count: g.edges(),
            edge_properties,
            adj,
            vertex_weights: vec![0.0; g.vertices()],
            data: g.satellite().clone(),
        }
    }

    /// Stored entries of `vertex`
    pub fn targets(&self, vertex: usize) -> GraphResult<&[EdgeTarget]> {
        self.check_vertex(vertex)?;
        Ok(&self.adj[vertex])
    }

    /// Edges whose property `property` equals `value`, each logical edge once
    pub fn edges_by_property(&self, property: usize, value: i64) -> GraphResult<Vec<WeightedEdge>> {
        self.check_property(property)?;
        let mut edges = Vec::new();
        for (u, targets) in self.adj.iter().enumerate() {
            for et in targets {
                if (self.directed || u < et.target) && et.properties[property] == value {
                    edges.push(WeightedEdge::new(u, et.target, et.weight));
                }
            }
        }
        Ok(edges)
    }

    /// DFS in index order, classifying every edge of this graph.
    ///
    /// The edge-property vectors are replaced by a single slot holding the
    /// [`EdgeClass`] code at `EDGE_TYPE`.
    pub fn depth_first_search_classified(&mut self) -> GraphResult<Graph> {
        algo::depth_first_search_classified(self, None)
    }

    /// Ordered DFS that also classifies every edge of this graph
    pub fn depth_first_search_classified_ordered(
        &mut self,
        order_field: usize,
        order_max: usize,
        ascending: bool,
    ) -> GraphResult<Graph> {
        algo::depth_first_search_classified(self, Some((order_field, order_max, ascending)))
    }

    /// Class of edge `(from, to)` written by the last classifying DFS
    pub fn edge_class(&self, from: usize, to: usize) -> GraphResult<Option<EdgeClass>> {
        self.check_property(EDGE_TYPE)?;
        Ok(EdgeClass::from_code(self.edge_property(from, to, EDGE_TYPE)?))
    }

    /// Replace every property vector with one slot holding the class of that
    /// entry. `classes` is aligned with the slots of [`GraphStore::view`].
    pub(crate) fn write_edge_classes(&mut self, classes: &[EdgeClass]) {
        self.edge_properties = 1;
        let mut slot = 0;
        for targets in self.adj.iter_mut() {
            for et in targets.iter_mut() {
                et.properties = vec![classes[slot].code()];
                slot += 1;
            }
        }
    }

    fn valid_pair(&self, from: usize, to: usize) -> bool {
        from < self.adj.len() && to < self.adj.len()
    }

    fn position(&self, from: usize, to: usize) -> GraphResult<usize> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.adj[from]
            .iter()
            .position(|et| et.target == to)
            .ok_or(GraphError::InvalidEdge { from, to })
    }

    /// Apply `update` to the entry for `(from, to)` and, on undirected
    /// graphs, to its mirror.
    fn update_entry<F>(&mut self, from: usize, to: usize, update: F) -> GraphResult<()>
    where
        F: Fn(&mut EdgeTarget),
    {
        let pos = self.position(from, to)?;
        update(&mut self.adj[from][pos]);
        if !self.directed {
            if let Some(mirror) = self.adj[to].iter_mut().find(|et| et.target == from) {
                update(mirror);
            }
        }
        Ok(())
    }
}

impl GraphStore for WeightedGraph {
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
        self.insert_weighted(from, to, DEFAULT_EDGE_WEIGHT)
    }

    fn remove(&mut self, from: usize, to: usize) -> GraphResult<bool> {
        if !self.valid_pair(from, to) {
            return Ok(false);
        }
        let Some(pos) = self.adj[from].iter().position(|et| et.target == to) else {
            return Ok(false);
        };
        self.adj[from].remove(pos);
        if !self.directed {
            self.adj[to].retain(|et| et.target != from);
        }
        self.edge_count -= 1;
        Ok(true)
    }

    fn has_edge(&self, from: usize, to: usize) -> GraphResult<bool> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.adj[from].iter().any(|et| et.target == to))
    }

    fn adjacencies(&self, vertex: usize) -> GraphResult<Vec<usize>> {
        self.check_vertex(vertex)?;
        Ok(self.adj[vertex].iter().map(|et| et.target).collect())
    }

    fn satellite(&self) -> &SatelliteStore {
        &self.data
    }

    fn satellite_mut(&mut self) -> &mut SatelliteStore {
        &mut self.data
    }

    fn reorder_adjacencies(&mut self, rank: &[usize]) {
        for list in self.adj.iter_mut() {
            sort_by_rank(list, rank, |et| et.target);
        }
    }

    fn view(&self) -> GraphView {
        let outgoing = self
            .adj
            .iter()
            .map(|targets| targets.iter().map(|et| et.target).collect())
            .collect();
        let weights = self
            .adj
            .iter()
            .map(|targets| targets.iter().map(|et| et.weight).collect())
            .collect();
        GraphView::from_adjacency_list(self.directed, outgoing, Some(weights))
    }

    fn transpose(&self) -> GraphResult<Self> {
        if !self.directed {
            return Err(GraphError::Unsupported(
                "transpose of an undirected graph".to_string(),
            ));
        }
        let mut adj = vec![Vec::new(); self.adj.len()];
        for (u, targets) in self.adj.iter().enumerate() {
            for et in targets {
                adj[et.target].push(EdgeTarget {
                    target: u,
                    weight: et.weight,
                    properties: et.properties.clone(),
                });
            }
        }
        Ok(WeightedGraph {
            directed: true,
            edge_count: self.edge_count,
            edge_properties: self.edge_properties,
            adj,
            vertex_weights: self.vertex_weights.clone(),
            data: self.data.clone(),
        })
    }

    fn with_data_fields(&self, fields: usize) -> Self {
        WeightedGraph {
            data: self.data.reshaped(fields),
            ..self.clone()
        }
    }
}

impl WeightedStore for WeightedGraph {
    fn edge_properties(&self) -> usize {
        self.edge_properties
    }

    fn insert_weighted(&mut self, from: usize, to: usize, weight: f64) -> GraphResult<bool> {
        if !self.valid_pair(from, to) {
            return Ok(false);
        }
        if !self.directed && from == to {
            return Err(GraphError::SelfLoopNotAllowed(from));
        }
        if self.adj[from].iter().any(|et| et.target == to) {
            return Ok(false);
        }
        self.adj[from].push(EdgeTarget::new(to, weight, self.edge_properties));
        if !self.directed {
            self.adj[to].push(EdgeTarget::new(from, weight, self.edge_properties));
        }
        self.edge_count += 1;
        Ok(true)
    }

    fn edge_weight(&self, from: usize, to: usize) -> GraphResult<f64> {
        let pos = self.position(from, to)?;
        Ok(self.adj[from][pos].weight)
    }

    fn set_edge_weight(&mut self, from: usize, to: usize, weight: f64) -> GraphResult<()> {
        self.update_entry(from, to, |et| et.weight = weight)
    }

    fn edge_property(&self, from: usize, to: usize, property: usize) -> GraphResult<i64> {
        self.check_property(property)?;
        let pos = self.position(from, to)?;
        Ok(self.adj[from][pos].properties[property])
    }

    fn set_edge_property(
        &mut self,
        from: usize,
        to: usize,
        property: usize,
        value: i64,
    ) -> GraphResult<()> {
        self.check_property(property)?;
        self.update_entry(from, to, |et| et.properties[property] = value)
    }

    fn vertex_weight(&self, vertex: usize) -> GraphResult<f64> {
        self.check_vertex(vertex)?;
        Ok(self.vertex_weights[vertex])
    }

    fn set_vertex_weight(&mut self, vertex: usize, weight: f64) -> GraphResult<()> {
        self.check_vertex(vertex)?;
        self.vertex_weights[vertex] = weight;
        Ok(())
    }

    fn weighted_edges_from(&self, vertex: usize) -> GraphResult<Vec<WeightedEdge>> {
        self.check_vertex(vertex)?;
        Ok(self.adj[vertex]
            .iter()
            .map(|et| WeightedEdge::new(vertex, et.target, et.weight))
            .collect())
    }
}

/// Default weight on every edge, no edge properties
impl From<&Graph> for WeightedGraph {
    fn from(g: &Graph) -> Self {
        WeightedGraph::from_graph(g, 0)
    }
}

impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, targets) in self.adj.iter().enumerate() {
            write!(f, "{}:", v)?;
            for (i, et) in targets.iter().enumerate() {
                let sep = if i == 0 { " " } else { " -> " };
                write!(f, "{}{} ({})", sep, et.target, et.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_insert() {
        let mut g = WeightedGraph::with_fields(3, false, 0, 2);
        assert!(g.insert_weighted(0, 1, 2.5).unwrap());
        assert!(g.insert(1, 2).unwrap());
        assert!(!g.insert_weighted(1, 0, 9.0).unwrap());

        assert_eq!(g.edge_weight(1, 0).unwrap(), 2.5);
        assert_eq!(g.edge_weight(2, 1).unwrap(), DEFAULT_EDGE_WEIGHT);
        assert_eq!(g.edges(), 2);
        assert_eq!(g.targets(0).unwrap()[0].properties, vec![0, 0]);
        assert_eq!(g.insert_weighted(2, 2, 1.0), Err(GraphError::SelfLoopNotAllowed(2)));
    }

    #[test]
    fn test_missing_edge_errors() {
        let mut g = WeightedGraph::with_fields(3, true, 0, 1);
        g.insert_weighted(0, 1, 1.0).unwrap();

        assert_eq!(g.edge_weight(1, 0), Err(GraphError::InvalidEdge { from: 1, to: 0 }));
        assert_eq!(
            g.set_edge_weight(0, 2, 3.0),
            Err(GraphError::InvalidEdge { from: 0, to: 2 })
        );
        assert_eq!(
            g.edge_property(0, 1, 1),
            Err(GraphError::InvalidEdgeProperty { property: 1, properties: 1 })
        );
        assert!(matches!(g.edge_weight(0, 3), Err(GraphError::InvalidVertex { .. })));
    }

    #[test]
    fn test_mirrored_entries_own_properties() {
        let mut g = WeightedGraph::with_fields(2, false, 0, 1);
        g.insert_weighted(0, 1, 4.0).unwrap();
        g.set_edge_property(0, 1, 0, 7).unwrap();
        g.set_edge_weight(1, 0, 5.0).unwrap();

        assert_eq!(g.edge_property(1, 0, 0).unwrap(), 7);
        assert_eq!(g.edge_weight(0, 1).unwrap(), 5.0);

        // writing one entry directly leaves the mirror untouched
        g.adj[0][0].properties[0] = 1;
        assert_eq!(g.edge_property(1, 0, 0).unwrap(), 7);
    }

    #[test]
    fn test_weighted_edges_and_property_query() {
        let mut g = WeightedGraph::with_fields(4, false, 0, 1);
        g.insert_weighted(0, 1, 1.0).unwrap();
        g.insert_weighted(2, 1, 2.0).unwrap();
        g.insert_weighted(3, 0, 3.0).unwrap();
        g.set_edge_property(2, 1, 0, 5).unwrap();

        let all = g.weighted_edges();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|e| e.from() < e.to()));

        let from_one = g.weighted_edges_from(1).unwrap();
        assert_eq!(from_one.len(), 2);

        let tagged = g.edges_by_property(0, 5).unwrap();
        assert_eq!(tagged, vec![WeightedEdge::new(1, 2, 2.0)]);
        assert!(g.edges_by_property(1, 0).is_err());
    }

    #[test]
    fn test_vertex_weights() {
        let mut g = WeightedGraph::directed(2);
        assert_eq!(g.vertex_weight(1).unwrap(), 0.0);
        g.set_vertex_weight(1, 3.5).unwrap();
        assert_eq!(g.vertex_weight(1).unwrap(), 3.5);
        assert!(g.set_vertex_weight(2, 1.0).is_err());
    }

    #[test]
    fn test_conversions() {
        let mut plain = Graph::from_edges(3, true, &[(0, 1), (1, 2)]).unwrap();
        plain = {
            let mut g = plain.with_data_fields(1);
            g.set_vertex_data(2, 0, 4).unwrap();
            g
        };

        let weighted = WeightedGraph::from_graph(&plain, 2);
        assert_eq!(weighted.edges(), 2);
        assert_eq!(weighted.edge_weight(1, 2).unwrap(), 1.0);
        assert_eq!(weighted.edge_properties(), 2);
        assert_eq!(weighted.vertex_data(2, 0).unwrap(), 4);

        let back = Graph::from(&weighted);
        assert_eq!(back, plain);
        assert_eq!(WeightedGraph::from(&plain).edge_properties(), 0);
    }

    #[test]
    fn test_transpose_keeps_weights() {
        let g = WeightedGraph::from_edges(3, true, &[(0, 1, 2.0), (1, 2, 3.0)]).unwrap();
        let t = g.transpose().unwrap();
        assert_eq!(t.edge_weight(1, 0).unwrap(), 2.0);
        assert_eq!(t.edge_weight(2, 1).unwrap(), 3.0);
        assert!(!t.has_edge(0, 1).unwrap());
    }

    #[test]
    fn test_view_carries_weights() {
        let g = WeightedGraph::from_edges(3, false, &[(0, 1, 2.0), (1, 2, 3.0)]).unwrap();
        let view = g.view();
        assert_eq!(view.successors(1), &[0, 2]);
        assert_eq!(view.weights(1), Some(&[2.0, 3.0][..]));
    }

    #[test]
    fn test_display() {
        let g = WeightedGraph::from_edges(2, true, &[(0, 1, 2.5)]).unwrap();
        assert_eq!(g.to_string(), "0: 1 (2.5)\n1:\n");
    }
}
