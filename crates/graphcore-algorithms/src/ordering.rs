//! Vertex ordering for ordered DFS
//!
//! `sorted_vertices` is a linear-time bucket pass over a per-vertex integer
//! key assumed unique and dense in `[0, max]`. `sort_by_rank` rewrites an
//! adjacency list in place so neighbours are scanned in the same order.

/// A permutation of the vertices and its inverse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexOrder {
    /// Vertices in visiting order
    pub sorted: Vec<usize>,
    /// `rank[v]` is the position of `v` within `sorted`
    pub rank: Vec<usize>,
}

/// Order vertices by `keys[v]` in O(V + k), where k is the largest key.
///
/// Keys sharing a bucket keep the last vertex written; the displaced vertices
/// are appended afterwards in index order so the result is always a full
/// permutation. Returns `None` if any key lies outside `[0, max]`.
pub fn sorted_vertices(keys: &[i64], max: usize, ascending: bool) -> Option<VertexOrder> {
    let n = keys.len();
    if keys.iter().any(|&key| key < 0 || key as u64 > max as u64) {
        return None;
    }

    // buckets only span the keys actually present, not the declared max
    let top = keys.iter().copied().max().unwrap_or(0) as usize;
    let mut buckets: Vec<Option<usize>> = vec![None; top.checked_add(1)?];
    for (v, &key) in keys.iter().enumerate() {
        buckets[key as usize] = Some(v);
    }

    let mut sorted = Vec::with_capacity(n);
    let mut placed = vec![false; n];
    let mut take = |bucket: &Option<usize>| {
        if let Some(v) = *bucket {
            placed[v] = true;
            sorted.push(v);
        }
    };
    if ascending {
        buckets.iter().for_each(&mut take);
    } else {
        buckets.iter().rev().for_each(&mut take);
    }
    sorted.extend((0..n).filter(|&v| !placed[v]));

    let mut rank = vec![0; n];
    for (position, &v) in sorted.iter().enumerate() {
        rank[v] = position;
    }

    Some(VertexOrder { sorted, rank })
}

/// Insertion sort of `items` by `rank[key(item)]`.
///
/// Adjacency lists are short relative to the vertex count in sparse graphs,
/// and the sort is stable, so it suits the per-list reorder.
pub fn sort_by_rank<T, F>(items: &mut [T], rank: &[usize], key: F)
where
    F: Fn(&T) -> usize,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && rank[key(&items[j - 1])] > rank[key(&items[j])] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_vertices() {
        let keys = vec![4, 0, 7, 2];

        let asc = sorted_vertices(&keys, 8, true).unwrap();
        assert_eq!(asc.sorted, vec![1, 3, 0, 2]);
        assert_eq!(asc.rank, vec![2, 0, 3, 1]);

        let desc = sorted_vertices(&keys, 8, false).unwrap();
        assert_eq!(desc.sorted, vec![2, 0, 3, 1]);
        assert_eq!(desc.rank, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_sorted_vertices_out_of_range() {
        assert!(sorted_vertices(&[0, 9], 8, true).is_none());
        assert!(sorted_vertices(&[-1, 2], 8, true).is_none());
    }

    #[test]
    fn test_large_max_does_not_size_buckets() {
        let order = sorted_vertices(&[2, 0, 1], usize::MAX, false).unwrap();
        assert_eq!(order.sorted, vec![0, 2, 1]);
        assert!(sorted_vertices(&[], 1 << 40, true).unwrap().sorted.is_empty());
    }

    #[test]
    fn test_duplicate_keys_still_permute() {
        let order = sorted_vertices(&[3, 3, 1], 3, true).unwrap();
        // vertex 1 wins bucket 3; vertex 0 is appended
        assert_eq!(order.sorted, vec![2, 1, 0]);
    }

    #[test]
    fn test_sort_by_rank() {
        let rank = vec![3, 2, 1, 0];
        let mut adjacency = vec![0, 2, 3, 1];
        sort_by_rank(&mut adjacency, &rank, |&v| v);
        assert_eq!(adjacency, vec![3, 2, 1, 0]);

        let mut pairs = vec![(1, 'a'), (0, 'b'), (3, 'c')];
        sort_by_rank(&mut pairs, &[0, 1, 2, 3], |p| p.0);
        assert_eq!(pairs, vec![(0, 'b'), (1, 'a'), (3, 'c')]);
    }
}
