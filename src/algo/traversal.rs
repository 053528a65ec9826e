//! Breadth-first and depth-first search
//!
//! Runs the traversal kernels over a store snapshot and materialises the
//! result as a new annotated, undirected tree/forest graph.

use crate::graph::{
    Color, Graph, GraphError, GraphResult, GraphStore, WeightedGraph, BFS_FIELDS, COLOR,
    DFS_FIELDS, DISCOVERY_TIME, DISTANCE, FINISH_TIME, MAX_ORDER_SPAN, NIL_VERTEX, PARENT,
    TREE_NUMBER, UNREACHED,
};
use graphcore_algorithms::{
    bfs, depth_first_search as dfs, sorted_vertices, BfsResult, DfsResult, VertexOrder,
};
use tracing::{debug, info};

/// Encode an optional vertex as satellite data
fn vertex_value(vertex: Option<usize>) -> i64 {
    vertex.map_or(NIL_VERTEX, |v| v as i64)
}

/// BFS tree rooted at `source`.
///
/// The result has 3 data fields: color (`'c'`), parent (`'p'`) and
/// distance (`'d'`). Unreached vertices keep WHITE, `NIL_VERTEX` and
/// `UNREACHED`.
pub fn breadth_first_search<S: GraphStore>(store: &S, source: usize) -> GraphResult<Graph> {
    store.check_vertex(source)?;
    debug!(
        "BFS from {} over {} vertices, {} edges",
        source,
        store.vertices(),
        store.edges()
    );

    let view = store.view();
    let result = bfs(&view, source).ok_or(GraphError::InvalidVertex {
        vertex: source,
        vertices: store.vertices(),
    })?;
    info!(
        "BFS from {} reached {} of {} vertices",
        source,
        result.reached(),
        store.vertices()
    );

    bfs_tree(&result)
}

fn bfs_tree(result: &BfsResult) -> GraphResult<Graph> {
    let n = result.color.len();
    let mut tree = Graph::with_fields(n, false, BFS_FIELDS);
    for &(parent, child) in &result.tree_edges {
        tree.insert(parent, child)?;
    }

    let data = tree.satellite_mut();
    data.set_label(COLOR, 'c')?;
    data.set_label(PARENT, 'p')?;
    data.set_label(DISTANCE, 'd')?;
    for v in 0..n {
        data.put(v, COLOR, result.color[v].code());
        data.put(v, PARENT, vertex_value(result.parent[v]));
        data.put(v, DISTANCE, result.distance[v].map_or(UNREACHED, |d| d as i64));
    }
    Ok(tree)
}

/// DFS forest with roots taken in index order.
///
/// The result has 5 data fields: color (`'c'`), parent (`'p'`), discovery
/// time (`'d'`), finish time (`'f'`) and tree number (`'t'`).
pub fn depth_first_search<S: GraphStore>(store: &S) -> GraphResult<Graph> {
    debug!(
        "DFS over {} vertices, {} edges",
        store.vertices(),
        store.edges()
    );
    let result = run_dfs(store, None, false)?;
    dfs_forest(&result)
}

/// DFS forest with roots visited in the order of `order_field`.
///
/// Every adjacency list of `store` is re-sorted in place to the same vertex
/// order before the search.
pub fn depth_first_search_ordered<S: GraphStore>(
    store: &mut S,
    order_field: usize,
    order_max: usize,
    ascending: bool,
) -> GraphResult<Graph> {
    let result = ordered_dfs(store, order_field, order_max, ascending, false)?;
    dfs_forest(&result)
}

/// DFS that also writes the class of every source edge into the single
/// edge property slot of `graph`. Property vectors are replaced.
pub fn depth_first_search_classified(
    graph: &mut WeightedGraph,
    order: Option<(usize, usize, bool)>,
) -> GraphResult<Graph> {
    let result = match order {
        Some((field, max, ascending)) => ordered_dfs(graph, field, max, ascending, true)?,
        None => run_dfs(&*graph, None, true)?,
    };

    if let Some(classes) = result.classes.as_ref() {
        debug!(
            "Overwriting edge properties of {} adjacency entries with edge classes",
            classes.len()
        );
        graph.write_edge_classes(classes);
    }
    dfs_forest(&result)
}

pub(crate) fn ordered_dfs<S: GraphStore>(
    store: &mut S,
    order_field: usize,
    order_max: usize,
    ascending: bool,
    classify: bool,
) -> GraphResult<DfsResult> {
    let order = vertex_order(&*store, order_field, order_max, ascending)?;
    debug!(
        "Ordered DFS on field {} (max {}, ascending={}), reordering adjacency lists",
        order_field, order_max, ascending
    );
    store.reorder_adjacencies(&order.rank);
    run_dfs(&*store, Some(&order.sorted), classify)
}

pub(crate) fn run_dfs<S: GraphStore>(
    store: &S,
    roots: Option<&[usize]>,
    classify: bool,
) -> GraphResult<DfsResult> {
    let view = store.view();
    let result = dfs(&view, roots, classify).ok_or_else(|| {
        GraphError::Unsupported("root order is not a permutation of the vertices".to_string())
    })?;
    debug!("DFS built {} trees", result.trees);
    Ok(result)
}

/// Permutation of the vertices by the values of `field`
fn vertex_order<S: GraphStore>(
    store: &S,
    field: usize,
    max: usize,
    ascending: bool,
) -> GraphResult<VertexOrder> {
    let keys = store.satellite().column(field)?;
    let limit = order_limit(store.vertices());
    if max > limit {
        return Err(GraphError::OrderRangeTooLarge { max, limit });
    }
    sorted_vertices(keys, max, ascending).ok_or_else(|| {
        let bad = keys
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, key)| key < 0 || key as u64 > max as u64);
        match bad {
            Some((vertex, value)) => GraphError::OrderValueOutOfRange { vertex, value, max },
            None => GraphError::OrderRangeTooLarge { max, limit },
        }
    })
}

/// Largest `order_max` accepted for a graph of `vertices` vertices
fn order_limit(vertices: usize) -> usize {
    vertices.saturating_mul(2).max(MAX_ORDER_SPAN)
}

pub(crate) fn dfs_forest(result: &DfsResult) -> GraphResult<Graph> {
    let n = result.color.len();
    let mut forest = Graph::with_fields(n, false, DFS_FIELDS);
    for &(parent, child) in &result.tree_edges {
        forest.insert(parent, child)?;
    }

    let data = forest.satellite_mut();
    data.set_label(COLOR, 'c')?;
    data.set_label(PARENT, 'p')?;
    data.set_label(DISCOVERY_TIME, 'd')?;
    data.set_label(FINISH_TIME, 'f')?;
    data.set_label(TREE_NUMBER, 't')?;
    for v in 0..n {
        data.put(v, COLOR, result.color[v].code());
        data.put(v, PARENT, vertex_value(result.parent[v]));
        data.put(v, DISCOVERY_TIME, result.discovery[v] as i64);
        data.put(v, FINISH_TIME, result.finish[v] as i64);
        data.put(v, TREE_NUMBER, result.tree_number[v] as i64);
    }
    Ok(forest)
}

/// Whether every vertex of a traversal result was finished
pub fn all_black(forest: &Graph) -> GraphResult<bool> {
    Ok(forest
        .satellite()
        .column(COLOR)?
        .iter()
        .all(|&c| c == Color::Black.code()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeClass, WeightedStore};

    // CLRS Figure 22.4 (p. 605): u=0 v=1 w=2 x=3 y=4 z=5
    fn clrs_22_4() -> Graph {
        Graph::from_edges(
            6,
            true,
            &[(0, 1), (0, 3), (1, 4), (2, 4), (2, 5), (3, 1), (4, 3), (5, 5)],
        )
        .unwrap()
    }

    #[test]
    fn test_bfs_annotations() {
        let g = Graph::from_edges(5, false, &[(0, 1), (1, 2), (0, 3)]).unwrap();
        let tree = breadth_first_search(&g, 0).unwrap();

        assert!(!tree.is_directed());
        assert_eq!(tree.edges(), 3);
        assert_eq!(tree.vertex_data(2, DISTANCE).unwrap(), 2);
        assert_eq!(tree.vertex_data(2, PARENT).unwrap(), 1);
        assert_eq!(tree.vertex_data(0, PARENT).unwrap(), NIL_VERTEX);
        assert_eq!(tree.vertex_data(0, COLOR).unwrap(), Color::Black.code());

        // vertex 4 is isolated
        assert_eq!(tree.vertex_data(4, DISTANCE).unwrap(), UNREACHED);
        assert_eq!(tree.vertex_data(4, PARENT).unwrap(), NIL_VERTEX);
        assert_eq!(tree.vertex_data(4, COLOR).unwrap(), Color::White.code());

        assert_eq!(tree.data_field_by_label('d'), Some(DISTANCE));
        assert_eq!(tree.bfs_path(0, 2).unwrap(), Some(vec![0, 1, 2]));
        assert_eq!(tree.bfs_path(0, 4).unwrap(), None);
    }

    #[test]
    fn test_bfs_invalid_source() {
        let g = Graph::directed(3);
        assert_eq!(
            breadth_first_search(&g, 3),
            Err(GraphError::InvalidVertex { vertex: 3, vertices: 3 })
        );
    }

    #[test]
    fn test_dfs_timestamps() {
        let g = clrs_22_4();
        let forest = depth_first_search(&g).unwrap();

        let d = forest.satellite().column(DISCOVERY_TIME).unwrap().to_vec();
        let f = forest.satellite().column(FINISH_TIME).unwrap().to_vec();
        assert_eq!(d, vec![1, 2, 9, 4, 3, 10]);
        assert_eq!(f, vec![8, 7, 12, 5, 6, 11]);

        let t = forest.satellite().column(TREE_NUMBER).unwrap().to_vec();
        assert_eq!(t, vec![0, 0, 1, 0, 0, 1]);
        assert_eq!(forest.edges(), 4);
        assert!(all_black(&forest).unwrap());
        assert_eq!(forest.satellite().label_of(TREE_NUMBER), Some('t'));
    }

    #[test]
    fn test_ordered_dfs_reorders_source() {
        let mut g = Graph::with_fields(4, true, 1);
        for (from, to) in [(0, 1), (0, 2), (0, 3)] {
            g.insert(from, to).unwrap();
        }
        // visit 3, 2, 1, 0
        for (v, key) in [(0, 3), (1, 2), (2, 1), (3, 0)] {
            g.set_vertex_data(v, 0, key).unwrap();
        }

        let forest = depth_first_search_ordered(&mut g, 0, 3, true).unwrap();
        assert_eq!(g.adjacencies(0).unwrap(), vec![3, 2, 1]);
        assert_eq!(forest.vertex_data(3, DISCOVERY_TIME).unwrap(), 1);
        assert_eq!(forest.vertex_data(0, TREE_NUMBER).unwrap(), 3);
    }

    #[test]
    fn test_ordered_dfs_rejects_bad_order() {
        let mut g = Graph::with_fields(3, true, 1);
        g.set_vertex_data(1, 0, 9).unwrap();
        assert_eq!(
            depth_first_search_ordered(&mut g, 0, 5, true),
            Err(GraphError::OrderValueOutOfRange { vertex: 1, value: 9, max: 5 })
        );
        assert_eq!(
            depth_first_search_ordered(&mut g, 2, 5, true),
            Err(GraphError::InvalidDataField { field: 2, fields: 1 })
        );
    }

    #[test]
    fn test_ordered_dfs_rejects_huge_order_range() {
        let mut g = Graph::with_fields(3, true, 1);
        assert_eq!(
            depth_first_search_ordered(&mut g, 0, usize::MAX, true),
            Err(GraphError::OrderRangeTooLarge { max: usize::MAX, limit: MAX_ORDER_SPAN })
        );
        assert!(matches!(
            depth_first_search_ordered(&mut g, 0, 1 << 40, true),
            Err(GraphError::OrderRangeTooLarge { .. })
        ));

        // the adjacency lists are not reordered on rejection
        g.insert(0, 2).unwrap();
        g.insert(0, 1).unwrap();
        let _ = depth_first_search_ordered(&mut g, 0, usize::MAX, false);
        assert_eq!(g.adjacencies(0).unwrap(), vec![2, 1]);

        let forest = depth_first_search_ordered(&mut g, 0, MAX_ORDER_SPAN, true).unwrap();
        assert!(all_black(&forest).unwrap());
    }

    #[test]
    fn test_classified_dfs_writes_edge_classes() {
        let mut g = WeightedGraph::from_graph(&clrs_22_4(), 3);
        depth_first_search_classified(&mut g, None).unwrap();

        assert_eq!(g.edge_properties(), 1);
        assert_eq!(g.edge_class(0, 1).unwrap(), Some(EdgeClass::Tree));
        assert_eq!(g.edge_class(0, 3).unwrap(), Some(EdgeClass::Forward));
        assert_eq!(g.edge_class(3, 1).unwrap(), Some(EdgeClass::Back));
        assert_eq!(g.edge_class(2, 4).unwrap(), Some(EdgeClass::Cross));
        assert_eq!(g.edge_class(5, 5).unwrap(), Some(EdgeClass::Back));
    }

    #[test]
    fn test_classified_undirected_parent_edge_is_tree() {
        let mut g = WeightedGraph::from_edges(3, false, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        depth_first_search_classified(&mut g, None).unwrap();
        assert_eq!(g.edge_class(1, 0).unwrap(), Some(EdgeClass::Tree));
        assert_eq!(g.edge_class(2, 1).unwrap(), Some(EdgeClass::Tree));
    }
}
