//! Depth-first search (CLRS, p. 604)
//!
//! Iterative DFS with an explicit work stack of `(vertex, next adjacency
//! position)` frames, so arbitrarily deep graphs never grow the call stack.
//! Supports an explicit root order and optional edge classification.

use super::common::{Color, EdgeClass, GraphView};

/// Result of a depth-first search over the whole vertex set
#[derive(Debug, Clone)]
pub struct DfsResult {
    pub color: Vec<Color>,
    /// DFS-forest predecessor, `None` for tree roots
    pub parent: Vec<Option<usize>>,
    /// Discovery timestamps in `1..=2V`
    pub discovery: Vec<usize>,
    /// Finish timestamps in `1..=2V`
    pub finish: Vec<usize>,
    /// Index of the DFS tree each vertex belongs to, numbered per root
    pub tree_number: Vec<usize>,
    /// Number of trees in the forest
    pub trees: usize,
    /// Tree edges `(parent, child)` in discovery order
    pub tree_edges: Vec<(usize, usize)>,
    /// Classification of every adjacency entry, aligned with `GraphView::out_targets`
    pub classes: Option<Vec<EdgeClass>>,
}

impl DfsResult {
    /// Vertices ordered by strictly decreasing finish time
    pub fn by_decreasing_finish(&self) -> Vec<usize> {
        let n = self.finish.len();
        let mut slots = vec![None; 2 * n + 1];
        for (v, &f) in self.finish.iter().enumerate() {
            slots[f] = Some(v);
        }
        slots.into_iter().rev().flatten().collect()
    }

    /// Members of each tree, indexed by tree number
    pub fn trees(&self) -> Vec<Vec<usize>> {
        let mut trees = vec![Vec::new(); self.trees];
        for (v, &t) in self.tree_number.iter().enumerate() {
            trees[t].push(v);
        }
        trees
    }
}

/// Call-scoped traversal state: the global clock and the tree being grown.
struct DfsContext {
    time: usize,
    tree: usize,
}

struct Frame {
    vertex: usize,
    next: usize,
}

/// Depth-First Search
///
/// Roots are taken from `roots` (a permutation of the vertices) or, when
/// `None`, in index order. Each WHITE root starts a new tree. When `classify`
/// is set every adjacency entry is labelled TREE/BACK/FORWARD/CROSS.
///
/// Returns `None` if `roots` is not a permutation of `0..node_count`.
pub fn depth_first_search(
    view: &GraphView,
    roots: Option<&[usize]>,
    classify: bool,
) -> Option<DfsResult> {
    let n = view.node_count;
    if let Some(order) = roots {
        if !is_permutation(order, n) {
            return None;
        }
    }

    let mut result = DfsResult {
        color: vec![Color::White; n],
        parent: vec![None; n],
        discovery: vec![0; n],
        finish: vec![0; n],
        tree_number: vec![0; n],
        trees: 0,
        tree_edges: Vec::new(),
        classes: if classify {
            Some(vec![EdgeClass::Tree; view.entry_count()])
        } else {
            None
        },
    };
    let mut ctx = DfsContext { time: 0, tree: 0 };
    let mut stack = Vec::new();

    let default_order: Vec<usize>;
    let order = match roots {
        Some(order) => order,
        None => {
            default_order = (0..n).collect();
            &default_order
        }
    };

    for &root in order {
        if result.color[root] == Color::White {
            visit(view, &mut result, &mut ctx, &mut stack, root);
            ctx.tree += 1;
        }
    }
    result.trees = ctx.tree;

    Some(result)
}

fn discover(result: &mut DfsResult, ctx: &mut DfsContext, v: usize) {
    ctx.time += 1;
    result.discovery[v] = ctx.time;
    result.color[v] = Color::Gray;
    result.tree_number[v] = ctx.tree;
}

fn visit(
    view: &GraphView,
    result: &mut DfsResult,
    ctx: &mut DfsContext,
    stack: &mut Vec<Frame>,
    root: usize,
) {
    discover(result, ctx, root);
    stack.push(Frame { vertex: root, next: 0 });

    while let Some(frame) = stack.last_mut() {
        let u = frame.vertex;
        let successors = view.successors(u);

        if frame.next == successors.len() {
            stack.pop();
            result.color[u] = Color::Black;
            ctx.time += 1;
            result.finish[u] = ctx.time;
            continue;
        }

        let k = frame.next;
        frame.next += 1;
        let v = successors[k];

        let class = match result.color[v] {
            Color::White => EdgeClass::Tree,
            // The mirrored entry of an undirected tree edge leads back to the parent.
            Color::Gray if !view.directed && result.parent[u] == Some(v) => EdgeClass::Tree,
            Color::Gray => EdgeClass::Back,
            Color::Black if result.tree_number[v] == ctx.tree => EdgeClass::Forward,
            Color::Black => EdgeClass::Cross,
        };
        if let Some(classes) = result.classes.as_mut() {
            classes[view.slot(u, k)] = class;
        }

        if result.color[v] == Color::White {
            result.parent[v] = Some(u);
            result.tree_edges.push((u, v));
            discover(result, ctx, v);
            stack.push(Frame { vertex: v, next: 0 });
        }
    }
}

fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}
