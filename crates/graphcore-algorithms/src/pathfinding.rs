//! Breadth-first search (CLRS, p. 595)
//!
//! Computes unweighted shortest-path distances, the BFS predecessor tree and
//! the order in which tree edges were discovered.

use super::common::{Color, GraphView};
use std::collections::VecDeque;

/// Result of a breadth-first search
#[derive(Debug, Clone)]
pub struct BfsResult {
    pub source: usize,
    /// Final vertex colors (reachable vertices end BLACK, the rest WHITE)
    pub color: Vec<Color>,
    /// Shortest unweighted distance from `source`, `None` when unreachable
    pub distance: Vec<Option<usize>>,
    /// BFS-tree predecessor, `None` for the source and unreachable vertices
    pub parent: Vec<Option<usize>>,
    /// Tree edges `(parent, child)` in discovery order
    pub tree_edges: Vec<(usize, usize)>,
}

impl BfsResult {
    /// Walk the predecessor chain from `target` back to the source
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.distance.len() || self.distance[target].is_none() {
            return None;
        }
        let mut path = Vec::new();
        let mut curr = Some(target);
        while let Some(idx) = curr {
            path.push(idx);
            curr = self.parent[idx];
        }
        path.reverse();
        Some(path)
    }

    /// Number of vertices reachable from the source (including itself)
    pub fn reached(&self) -> usize {
        self.distance.iter().filter(|d| d.is_some()).count()
    }
}

/// Breadth-First Search
///
/// Scans adjacency lists in stored order. Returns `None` if `source` is not a
/// vertex of the view.
pub fn bfs(view: &GraphView, source: usize) -> Option<BfsResult> {
    if source >= view.node_count {
        return None;
    }

    let n = view.node_count;
    let mut color = vec![Color::White; n];
    let mut distance = vec![None; n];
    let mut parent = vec![None; n];
    let mut tree_edges = Vec::new();
    let mut queue = VecDeque::new();

    color[source] = Color::Gray;
    distance[source] = Some(0);
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        let next_distance = distance[u].map(|d| d + 1);
        for &v in view.successors(u) {
            if color[v] == Color::White {
                color[v] = Color::Gray;
                distance[v] = next_distance;
                parent[v] = Some(u);
                tree_edges.push((u, v));
                queue.push_back(v);
            }
        }
        color[u] = Color::Black;
    }

    Some(BfsResult {
        source,
        color,
        distance,
        parent,
        tree_edges,
    })
}
