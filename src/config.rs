//! Graph construction configuration
//!
//! The shape of a graph (vertex count, directedness, number of vertex data
//! fields and edge properties) is fixed at construction. `GraphConfig`
//! carries that shape and can be loaded from JSON.

use crate::graph::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};

/// Construction parameters for `Graph` and `WeightedGraph`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of vertices
    pub vertices: usize,
    /// Directed or undirected edges
    #[serde(default)]
    pub directed: bool,
    /// Integer data fields per vertex
    #[serde(default)]
    pub data_fields: usize,
    /// Integer properties per edge (weighted graphs only)
    #[serde(default)]
    pub edge_properties: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertices: 1,
            directed: false,
            data_fields: 0,
            edge_properties: 0,
        }
    }
}

impl GraphConfig {
    pub fn directed(vertices: usize) -> Self {
        Self {
            vertices,
            directed: true,
            ..Self::default()
        }
    }

    pub fn undirected(vertices: usize) -> Self {
        Self {
            vertices,
            ..Self::default()
        }
    }

    pub fn with_data_fields(mut self, data_fields: usize) -> Self {
        self.data_fields = data_fields;
        self
    }

    pub fn with_edge_properties(mut self, edge_properties: usize) -> Self {
        self.edge_properties = edge_properties;
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> GraphResult<Self> {
        let config: GraphConfig =
            serde_json::from_str(json).map_err(|e| GraphError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> GraphResult<String> {
        serde_json::to_string(self).map_err(|e| GraphError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> GraphResult<()> {
        if self.vertices == 0 {
            return Err(GraphError::InvalidConfig(
                "graph must have at least one vertex".to_string(),
            ));
        }
        if self.vertices.checked_mul(self.data_fields.max(1)).is_none() {
            return Err(GraphError::InvalidConfig(format!(
                "{} vertices with {} data fields overflows the data table",
                self.vertices, self.data_fields
            )));
        }
        Ok(())
    }
}
