//! Minimum spanning trees
//!
//! Kruskal (CLRS, p. 631) and Prim (CLRS, p. 634) over a weighted,
//! undirected store. Results are new undirected weighted graphs.

use crate::graph::{
    Color, GraphError, GraphResult, GraphStore, WeightedGraph, WeightedStore, COLOR, NIL_VERTEX,
    PARENT, PRIM_FIELDS,
};
use graphcore_algorithms::{kruskal_mst, prim};
use tracing::{debug, info};

fn require_undirected<S: GraphStore>(store: &S, name: &str) -> GraphResult<()> {
    if store.is_directed() {
        return Err(GraphError::Unsupported(format!(
            "{} minimum spanning tree of a directed graph",
            name
        )));
    }
    Ok(())
}

/// Kruskal's algorithm. On a disconnected graph the result is a minimum
/// spanning forest.
pub fn min_spanning_tree_kruskal<S: WeightedStore>(store: &S) -> GraphResult<WeightedGraph> {
    require_undirected(store, "Kruskal")?;
    debug!(
        "Kruskal over {} vertices, {} edges",
        store.vertices(),
        store.edges()
    );

    let mst = kruskal_mst(&store.view());
    let mut tree = WeightedGraph::undirected(store.vertices());
    for &(from, to, weight) in &mst.edges {
        tree.insert_weighted(from, to, weight)?;
    }
    info!(
        "Kruskal MST: {} edges, total weight {}",
        mst.edges.len(),
        mst.total_weight
    );
    Ok(tree)
}

/// Prim's algorithm from `start`.
///
/// The result spans the component of `start` and has 2 data fields:
/// color (`'c'`, BLACK for tree vertices) and parent (`'p'`). Each tree
/// vertex's weight is the weight of its edge into the tree.
pub fn min_spanning_tree_prim<S: WeightedStore>(
    store: &S,
    start: usize,
) -> GraphResult<WeightedGraph> {
    store.check_vertex(start)?;
    require_undirected(store, "Prim")?;
    debug!(
        "Prim from {} over {} vertices, {} edges",
        start,
        store.vertices(),
        store.edges()
    );

    let result = prim(&store.view(), start).ok_or(GraphError::InvalidVertex {
        vertex: start,
        vertices: store.vertices(),
    })?;

    let n = store.vertices();
    let mut tree = WeightedGraph::with_fields(n, false, PRIM_FIELDS, 0);
    tree.set_data_field_label(COLOR, 'c')?;
    tree.set_data_field_label(PARENT, 'p')?;
    tree.satellite_mut().fill(PARENT, NIL_VERTEX)?;
    tree.satellite_mut().put(start, COLOR, Color::Black.code());

    let mut total_weight = 0.0;
    for (v, parent) in result.parent.iter().enumerate() {
        if let Some(p) = *parent {
            let weight = result.key[v];
            tree.insert_weighted(p, v, weight)?;
            tree.set_vertex_weight(v, weight)?;
            let data = tree.satellite_mut();
            data.put(v, PARENT, p as i64);
            data.put(v, COLOR, Color::Black.code());
            total_weight += weight;
        }
    }
    info!(
        "Prim MST from {}: {} edges, total weight {}",
        start,
        tree.edges(),
        total_weight
    );
    Ok(tree)
}

/// Sum of the edge weights of a graph
pub fn total_weight<S: WeightedStore>(store: &S) -> f64 {
    store.weighted_edges().iter().map(|e| e.weight()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WeightedGraph {
        WeightedGraph::from_edges(3, false, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 10.0)]).unwrap()
    }

    #[test]
    fn test_kruskal_triangle() {
        let tree = min_spanning_tree_kruskal(&triangle()).unwrap();
        assert_eq!(tree.edges(), 2);
        assert!(tree.has_edge(0, 1).unwrap());
        assert!(tree.has_edge(2, 1).unwrap());
        assert!(!tree.has_edge(0, 2).unwrap());
        assert_eq!(total_weight(&tree), 3.0);
    }

    #[test]
    fn test_prim_annotations() {
        let tree = min_spanning_tree_prim(&triangle(), 2).unwrap();
        assert_eq!(tree.edges(), 2);
        assert_eq!(total_weight(&tree), 3.0);
        assert_eq!(tree.vertex_data(2, PARENT).unwrap(), NIL_VERTEX);
        assert_eq!(tree.vertex_data(1, PARENT).unwrap(), 2);
        assert_eq!(tree.vertex_data(0, PARENT).unwrap(), 1);
        assert_eq!(tree.vertex_weight(0).unwrap(), 1.0);
        assert_eq!(tree.data_field_by_label('p'), Some(PARENT));
    }

    #[test]
    fn test_prim_disconnected_spans_component() {
        let g = WeightedGraph::from_edges(4, false, &[(0, 1, 5.0), (2, 3, 1.0)]).unwrap();
        let tree = min_spanning_tree_prim(&g, 0).unwrap();
        assert_eq!(tree.edges(), 1);
        assert_eq!(tree.vertex_data(3, PARENT).unwrap(), NIL_VERTEX);
        assert_eq!(tree.vertex_data(3, COLOR).unwrap(), Color::White.code());

        let forest = min_spanning_tree_kruskal(&g).unwrap();
        assert_eq!(forest.edges(), 2);
    }

    #[test]
    fn test_mst_requires_undirected() {
        let g = WeightedGraph::from_edges(2, true, &[(0, 1, 1.0)]).unwrap();
        assert!(matches!(min_spanning_tree_kruskal(&g), Err(GraphError::Unsupported(_))));
        assert!(matches!(min_spanning_tree_prim(&g, 0), Err(GraphError::Unsupported(_))));
        assert_eq!(
            min_spanning_tree_prim(&triangle(), 3),
            Err(GraphError::InvalidVertex { vertex: 3, vertices: 3 })
        );
    }
}
