//! Topological ordering
//!
//! One unordered DFS; vertices are listed by decreasing finish time
//! (CLRS, p. 613). Back edges found on the way are reported so callers can
//! reject cyclic input instead of returning a meaningless order.

use super::common::{EdgeClass, GraphView};
use super::dfs::depth_first_search;

/// Result of a topological sort
#[derive(Debug, Clone)]
pub struct TopologicalOrder {
    /// Vertices by strictly decreasing finish time
    pub order: Vec<usize>,
    /// First back edge met during the search, if any. `Some` means the
    /// graph has a cycle and `order` is not a topological order.
    pub back_edge: Option<(usize, usize)>,
}

impl TopologicalOrder {
    pub fn is_acyclic(&self) -> bool {
        self.back_edge.is_none()
    }
}

/// Topological sort of a directed graph
pub fn topological_sort(view: &GraphView) -> TopologicalOrder {
    let mut back_edge = None;
    let order = match depth_first_search(view, None, true) {
        Some(result) => {
            if let Some(classes) = result.classes.as_ref() {
                back_edge = first_back_edge(view, classes);
            }
            result.by_decreasing_finish()
        }
        None => Vec::new(),
    };

    TopologicalOrder { order, back_edge }
}

fn first_back_edge(view: &GraphView, classes: &[EdgeClass]) -> Option<(usize, usize)> {
    for u in 0..view.node_count {
        for (k, &v) in view.successors(u).iter().enumerate() {
            if classes[view.slot(u, k)] == EdgeClass::Back {
                return Some((u, v));
            }
        }
    }
    None
}
