//! Edge value types
//!
//! Edges identify an ordered vertex pair and are immutable once built.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An ordered pair `(from, to)` of vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Edge {
    from: usize,
    to: usize,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self {
        Edge { from, to }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    /// The same edge pointing the other way
    pub fn reversed(&self) -> Self {
        Edge {
            from: self.to,
            to: self.from,
        }
    }

    /// Check if this edge connects two specific vertices (in either direction)
    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Edge::new(from, to)
    }
}

/// An edge carrying a floating-point weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    edge: Edge,
    weight: f64,
}

impl WeightedEdge {
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        WeightedEdge {
            edge: Edge::new(from, to),
            weight,
        }
    }

    pub fn from(&self) -> usize {
        self.edge.from
    }

    pub fn to(&self) -> usize {
        self.edge.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The unweighted pair
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Total order on weight, for sorting (lighter first)
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.total_cmp(&other.weight)
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.edge, self.weight)
    }
}

impl From<WeightedEdge> for Edge {
    fn from(e: WeightedEdge) -> Self {
        e.edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new(1, 2);
        assert_eq!(edge.from(), 1);
        assert_eq!(edge.to(), 2);
        assert_eq!(edge.reversed(), Edge::new(2, 1));
        assert!(edge.connects(2, 1));
        assert!(!edge.connects(1, 3));
        assert_eq!(format!("{}", edge), "(1, 2)");

        let e2: Edge = (3, 4).into();
        assert_eq!(e2.to(), 4);
    }

    #[test]
    fn test_weighted_edge_sorting() {
        let mut edges = vec![
            WeightedEdge::new(0, 1, 4.0),
            WeightedEdge::new(1, 2, 1.5),
            WeightedEdge::new(2, 3, 4.0),
            WeightedEdge::new(3, 4, -2.0),
        ];
        edges.sort_by(WeightedEdge::cmp_weight);

        let weights: Vec<f64> = edges.iter().map(|e| e.weight()).collect();
        assert_eq!(weights, vec![-2.0, 1.5, 4.0, 4.0]);
        // stable: (0, 1) stays ahead of (2, 3)
        assert_eq!(edges[2].edge(), Edge::new(0, 1));
        assert_eq!(format!("{}", edges[0]), "(3, 4) -2");
    }

    #[test]
    fn test_edge_serde() {
        let edge = WeightedEdge::new(0, 5, 2.5);
        let json = serde_json::to_string(&edge).unwrap();
        let back: WeightedEdge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }
}
