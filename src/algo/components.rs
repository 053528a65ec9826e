//! Topological sort and strongly connected components
//!
//! Both are compositions of depth-first search: topological sort reads the
//! finish times of one DFS; Kosaraju's SCC runs a second, ordered DFS on
//! the transpose with roots in decreasing finish-time order.

use super::traversal::{dfs_forest, ordered_dfs, run_dfs};
use crate::graph::{Graph, GraphError, GraphResult, GraphStore, DFS_FIELDS, TREE_NUMBER};
use graphcore_algorithms::topological_sort as topo_kernel;
use tracing::{debug, info};

/// Vertices of a DAG ordered so every edge points forward.
///
/// Fails with `CycleDetected` on the first back edge found, and with
/// `Unsupported` on undirected graphs.
pub fn topological_sort<S: GraphStore>(store: &S) -> GraphResult<Vec<usize>> {
    if !store.is_directed() {
        return Err(GraphError::Unsupported(
            "topological sort of an undirected graph".to_string(),
        ));
    }
    let view = store.view();
    let result = topo_kernel(&view);
    if let Some((from, to)) = result.back_edge {
        debug!("Topological sort found back edge ({}, {})", from, to);
        return Err(GraphError::CycleDetected { from, to });
    }
    Ok(result.order)
}

/// Kosaraju's algorithm.
///
/// Returns the DFS forest of the transpose; vertices share a tree number
/// exactly when they are in the same strongly connected component.
pub fn strongly_connected_components<S: GraphStore>(store: &S) -> GraphResult<Graph> {
    if !store.is_directed() {
        return Err(GraphError::Unsupported(
            "strongly connected components of an undirected graph".to_string(),
        ));
    }
    let n = store.vertices();
    debug!("SCC over {} vertices, {} edges", n, store.edges());

    let first = run_dfs(store, None, false)?;

    let mut transposed = store.transpose()?.with_data_fields(1);
    let finish = transposed.satellite_mut();
    for (v, &f) in first.finish.iter().enumerate() {
        finish.put(v, 0, f as i64);
    }

    let second = ordered_dfs(&mut transposed, 0, 2 * n, false, false)?;
    info!("Found {} strongly connected components", second.trees);
    dfs_forest(&second)
}

/// Members of each tree of a DFS forest, indexed by tree number
pub fn forest_trees(forest: &Graph) -> GraphResult<Vec<Vec<usize>>> {
    if forest.data_fields() < DFS_FIELDS {
        return Err(GraphError::Unsupported(
            "tree lookup requires a depth-first search forest".to_string(),
        ));
    }
    let numbers = forest.satellite().column(TREE_NUMBER)?;
    let n = numbers.len();
    // a forest over n vertices has at most n trees
    if let Some((vertex, &t)) = numbers
        .iter()
        .enumerate()
        .find(|&(_, &t)| t < 0 || t as u64 >= n as u64)
    {
        return Err(GraphError::Unsupported(format!(
            "tree number {} of vertex {} is outside [0, {}): not a depth-first search forest",
            t, vertex, n
        )));
    }

    let count = numbers.iter().map(|&t| t as usize + 1).max().unwrap_or(0);
    let mut trees = vec![Vec::new(); count];
    for (v, &t) in numbers.iter().enumerate() {
        trees[t as usize].push(v);
    }
    Ok(trees)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topological_sort_respects_edges() {
        let edges = [(0, 1), (0, 7), (1, 2), (1, 7), (2, 5), (3, 2), (3, 4), (4, 5), (6, 7)];
        let g = Graph::from_edges(9, true, &edges).unwrap();
        let order = topological_sort(&g).unwrap();

        assert_eq!(order.len(), 9);
        let mut position = vec![0; 9];
        for (i, &v) in order.iter().enumerate() {
            position[v] = i;
        }
        for (u, v) in edges {
            assert!(position[u] < position[v], "{} should precede {}", u, v);
        }
    }

    #[test]
    fn test_topological_sort_rejects_cycles() {
        let g = Graph::from_edges(3, true, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(
            topological_sort(&g),
            Err(GraphError::CycleDetected { from: 2, to: 0 })
        );

        let u = Graph::from_edges(2, false, &[(0, 1)]).unwrap();
        assert!(matches!(topological_sort(&u), Err(GraphError::Unsupported(_))));
    }

    #[test]
    fn test_scc_two_cycles() {
        // 0 <-> 1 -> 2 <-> 3
        let g = Graph::from_edges(4, true, &[(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]).unwrap();
        let forest = strongly_connected_components(&g).unwrap();
        let mut trees = forest_trees(&forest).unwrap();
        for t in trees.iter_mut() {
            t.sort_unstable();
        }
        trees.sort();
        assert_eq!(trees, vec![vec![0, 1], vec![2, 3]]);

        // source graph is untouched
        assert_eq!(g.data_fields(), 0);
        assert_eq!(g.adjacencies(1).unwrap(), vec![0, 2]);
    }

    #[test]
    fn test_forest_trees_requires_dfs_forest() {
        let g = Graph::undirected(2);
        assert!(matches!(forest_trees(&g), Err(GraphError::Unsupported(_))));
    }

    #[test]
    fn test_forest_trees_rejects_bad_tree_numbers() {
        let g = Graph::from_edges(3, true, &[(0, 1)]).unwrap();
        let mut forest = g.depth_first_search().unwrap();
        assert_eq!(forest_trees(&forest).unwrap(), vec![vec![0, 1], vec![2]]);

        forest.set_vertex_data(2, TREE_NUMBER, -1).unwrap();
        assert!(matches!(forest_trees(&forest), Err(GraphError::Unsupported(_))));

        forest.set_vertex_data(2, TREE_NUMBER, 3).unwrap();
        assert!(matches!(forest_trees(&forest), Err(GraphError::Unsupported(_))));

        forest.set_vertex_data(2, TREE_NUMBER, i64::MAX).unwrap();
        assert!(matches!(forest_trees(&forest), Err(GraphError::Unsupported(_))));
    }
}
