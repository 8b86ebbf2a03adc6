/// Disjoint sets over `0..len`, tracking how many sets are left.
pub struct UnionFind {
    parent: Vec<usize>,
    count: usize,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        UnionFind {
            parent: (0..len).collect(),
            count: len,
        }
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `x`. Halves the path on the way up; roots never change.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    pub fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merges the sets of `p` and `q`, attaching the root of `p` under the root of `q`.
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);

        if root_p == root_q {
            return false; // Already in same set
        }

        self.parent[root_p] = root_q;
        self.count -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_merges_and_counts() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.count(), 5);
        assert!(uf.union(0, 1));
        assert!(uf.union(3, 4));
        assert_eq!(uf.count(), 3);
        assert!(uf.connected(1, 0));
        assert!(!uf.connected(1, 3));
        assert!(uf.union(1, 4));
        assert!(uf.connected(0, 3));
        assert_eq!(uf.count(), 2);
    }

    #[test]
    fn test_union_of_connected_is_noop() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        assert!(!uf.union(1, 0));
        assert_eq!(uf.count(), 2);
    }

    #[test]
    fn test_root_of_p_goes_under_q() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        assert_eq!(uf.find(0), 1);
        uf.union(1, 2);
        assert_eq!(uf.find(0), 2);
        assert_eq!(uf.find(0), uf.find(0));
    }
}
