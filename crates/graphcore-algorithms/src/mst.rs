//! Minimum Spanning Tree algorithms
//!
//! Implements Kruskal's algorithm (CLRS, p. 631) over the linked-list
//! disjoint set and Prim's algorithm (CLRS, p. 634) over an ordered set used
//! as a priority queue with remove-then-reinsert updates.

use super::common::GraphView;
use super::disjoint_set::DisjointSet;
use std::cmp::Ordering;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct MSTResult {
    pub total_weight: f64,
    pub edges: Vec<(usize, usize, f64)>, // (source, target, weight)
}

/// Every stored edge once: undirected views only contribute entries with `u < v`.
fn weighted_edges(view: &GraphView) -> Vec<(usize, usize, f64)> {
    let mut edges = Vec::new();
    for u in 0..view.node_count {
        for (k, &v) in view.successors(u).iter().enumerate() {
            if view.directed || u < v {
                edges.push((u, v, view.weight(u, k)));
            }
        }
    }
    edges
}

/// Kruskal's Algorithm for Minimum Spanning Tree
///
/// Edges are stably sorted by weight. On a disconnected graph the result is
/// a minimum spanning forest.
pub fn kruskal_mst(view: &GraphView) -> MSTResult {
    let n = view.node_count;
    let mut edges = weighted_edges(view);
    edges.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut sets = DisjointSet::new(n);
    let mut mst_edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;

    for (u, v, weight) in edges {
        if mst_edges.len() + 1 >= n {
            break;
        }
        if sets.union(u, v) {
            mst_edges.push((u, v, weight));
            total_weight += weight;
        }
    }

    MSTResult {
        total_weight,
        edges: mst_edges,
    }
}

/// Queue entry keyed on the lightest known edge into the growing tree
#[derive(Copy, Clone, PartialEq)]
struct KeyState {
    key: f64,
    vertex: usize,
}

impl Eq for KeyState {}

impl Ord for KeyState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for KeyState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Output of Prim's algorithm before the tree edges are materialised
#[derive(Debug, Clone)]
pub struct PrimResult {
    pub start: usize,
    /// Tree predecessor, `None` for the start vertex and unreachable vertices
    pub parent: Vec<Option<usize>>,
    /// Weight of the edge to `parent`, `f64::INFINITY` when unreachable
    pub key: Vec<f64>,
}

impl PrimResult {
    /// Tree edges `(parent, child, weight)` in child-index order
    pub fn into_mst(self) -> MSTResult {
        let mut edges = Vec::new();
        let mut total_weight = 0.0;
        for (v, parent) in self.parent.iter().enumerate() {
            if let Some(p) = *parent {
                edges.push((p, v, self.key[v]));
                total_weight += self.key[v];
            }
        }
        MSTResult { total_weight, edges }
    }
}

/// Prim's Algorithm, returning the parent and key arrays
///
/// Every vertex starts in the queue with key +infinity except `start` (key 0).
/// Returns `None` if `start` is not a vertex of the view.
pub fn prim(view: &GraphView, start: usize) -> Option<PrimResult> {
    let n = view.node_count;
    if start >= n {
        return None;
    }

    let mut key = vec![f64::INFINITY; n];
    let mut parent = vec![None; n];
    let mut in_queue = vec![true; n];
    key[start] = 0.0;

    let mut queue: BTreeSet<KeyState> = (0..n)
        .map(|vertex| KeyState { key: key[vertex], vertex })
        .collect();

    while let Some(KeyState { vertex: u, .. }) = queue.pop_first() {
        in_queue[u] = false;
        for (k, &v) in view.successors(u).iter().enumerate() {
            let weight = view.weight(u, k);
            if in_queue[v] && weight < key[v] {
                queue.remove(&KeyState { key: key[v], vertex: v });
                key[v] = weight;
                parent[v] = Some(u);
                queue.insert(KeyState { key: weight, vertex: v });
            }
        }
    }

    Some(PrimResult { start, parent, key })
}

/// Prim's Algorithm for Minimum Spanning Tree
///
/// If the graph is disconnected, returns the MST of the component containing `start`.
pub fn prim_mst(view: &GraphView, start: usize) -> Option<MSTResult> {
    prim(view, start).map(PrimResult::into_mst)
}
