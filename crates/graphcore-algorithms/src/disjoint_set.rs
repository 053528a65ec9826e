//! Disjoint-set forest as linked lists (CLRS, section 21.2)
//!
//! Each set is a singly linked list whose members all point at the
//! representative (`head`). `find` is O(1); `union` appends the smaller list
//! to the larger one and relabels every member of the smaller list, so a
//! vertex is relabelled at most `log2(V)` times. No path compression.

/// Per-element bookkeeping. `tail` and `size` are only meaningful on a
/// representative; `head` is kept current on every element.
#[derive(Debug, Clone, Copy)]
struct SetNode {
    next: Option<usize>,
    head: usize,
    tail: usize,
    size: usize,
}

/// Union-Find over `0..len`, starting from singleton sets
#[derive(Debug, Clone)]
pub struct DisjointSet {
    nodes: Vec<SetNode>,
}

impl DisjointSet {
    /// Create `size` singleton sets (the make-set step for every element)
    pub fn new(size: usize) -> Self {
        DisjointSet {
            nodes: (0..size)
                .map(|i| SetNode {
                    next: None,
                    head: i,
                    tail: i,
                    size: 1,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Representative of the set containing `i`
    pub fn find(&self, i: usize) -> usize {
        self.nodes[i].head
    }

    pub fn same_set(&self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }

    /// Size of the set containing `i`
    pub fn set_size(&self, i: usize) -> usize {
        self.nodes[self.find(i)].size
    }

    /// Members of the set containing `i`, representative first
    pub fn members(&self, i: usize) -> Vec<usize> {
        let mut members = Vec::new();
        let mut curr = Some(self.find(i));
        while let Some(idx) = curr {
            members.push(idx);
            curr = self.nodes[idx].next;
        }
        members
    }

    /// Merge the sets containing `i` and `j`.
    ///
    /// Returns false, leaving the structure untouched, if they are already
    /// the same set.
    pub fn union(&mut self, i: usize, j: usize) -> bool {
        let mut first = self.find(i);
        let mut second = self.find(j);
        if first == second {
            return false;
        }
        if self.nodes[first].size < self.nodes[second].size {
            std::mem::swap(&mut first, &mut second);
        }

        let first_tail = self.nodes[first].tail;
        self.nodes[first_tail].next = Some(second);

        let mut curr = Some(second);
        while let Some(idx) = curr {
            self.nodes[idx].head = first;
            curr = self.nodes[idx].next;
        }

        self.nodes[first].tail = self.nodes[second].tail;
        self.nodes[first].size += self.nodes[second].size;
        true
    }
}
