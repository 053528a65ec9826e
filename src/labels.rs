//! Vertex label translation
//!
//! A boundary table between single-character display labels and dense
//! vertex indices, for callers that name vertices `a, b, c, ...` (or
//! `r..y` as in the CLRS figures). Graph stores only ever see indices.

use crate::graph::{Edge, GraphError, GraphResult};
use rustc_hash::FxHashMap;

/// Bijective table between vertex labels and vertex indices
#[derive(Debug, Clone, Default)]
pub struct VertexLabels {
    labels: Vec<char>,
    index: FxHashMap<char, usize>,
}

impl VertexLabels {
    /// Label vertex `i` with the `i`-th element of `labels`
    pub fn new<I>(labels: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut table = VertexLabels::default();
        for label in labels {
            if table.index.insert(label, table.labels.len()).is_some() {
                return Err(GraphError::InvalidConfig(format!(
                    "duplicate vertex label '{}'",
                    label
                )));
            }
            table.labels.push(label);
        }
        Ok(table)
    }

    /// `vertices` consecutive characters starting at `first`
    pub fn from_offset(first: char, vertices: usize) -> GraphResult<Self> {
        let start = first as u32;
        let labels = (0..vertices)
            .map(|i| {
                u32::try_from(i)
                    .ok()
                    .and_then(|i| start.checked_add(i))
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        GraphError::InvalidConfig(format!(
                            "{} labels starting at '{}' leave the character range",
                            vertices, first
                        ))
                    })
            })
            .collect::<GraphResult<Vec<char>>>()?;
        Self::new(labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn index_of(&self, label: char) -> GraphResult<usize> {
        self.index
            .get(&label)
            .copied()
            .ok_or(GraphError::UnknownVertexLabel(label))
    }

    pub fn label_of(&self, vertex: usize) -> GraphResult<char> {
        self.labels
            .get(vertex)
            .copied()
            .ok_or(GraphError::InvalidVertex {
                vertex,
                vertices: self.labels.len(),
            })
    }

    /// Edge between two labelled vertices
    pub fn translate_edge(&self, from: char, to: char) -> GraphResult<Edge> {
        Ok(Edge::new(self.index_of(from)?, self.index_of(to)?))
    }

    /// Translate a list of labelled pairs
    pub fn translate_edges(&self, pairs: &[(char, char)]) -> GraphResult<Vec<Edge>> {
        pairs
            .iter()
            .map(|&(from, to)| self.translate_edge(from, to))
            .collect()
    }

    /// `(from, to)` rendered with labels, e.g. `(r, s)`
    pub fn display_edge(&self, edge: &Edge) -> GraphResult<String> {
        Ok(format!(
            "({}, {})",
            self.label_of(edge.from())?,
            self.label_of(edge.to())?
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_offset() {
        let labels = VertexLabels::from_offset('r', 8).unwrap();
        assert_eq!(labels.len(), 8);
        assert_eq!(labels.index_of('s').unwrap(), 1);
        assert_eq!(labels.label_of(7).unwrap(), 'y');
        assert_eq!(labels.index_of('z'), Err(GraphError::UnknownVertexLabel('z')));
        assert!(labels.label_of(8).is_err());
    }

    #[test]
    fn test_translate_edges() {
        let labels = VertexLabels::from_offset('a', 3).unwrap();
        let edge = labels.translate_edge('c', 'a').unwrap();
        assert_eq!(edge, Edge::new(2, 0));
        assert_eq!(labels.display_edge(&edge).unwrap(), "(c, a)");

        let edges = labels.translate_edges(&[('a', 'b'), ('b', 'c')]).unwrap();
        assert_eq!(edges.len(), 2);
        assert!(labels.translate_edges(&[('a', 'q')]).is_err());
    }

    #[test]
    fn test_custom_labels() {
        let labels = VertexLabels::new(['x', 'y', 'z']).unwrap();
        assert_eq!(labels.index_of('z').unwrap(), 2);
        assert!(matches!(
            VertexLabels::new(['x', 'x']),
            Err(GraphError::InvalidConfig(_))
        ));
        assert!(VertexLabels::from_offset(char::MAX, 2).is_err());
        assert!(VertexLabels::default().is_empty());
    }
}
