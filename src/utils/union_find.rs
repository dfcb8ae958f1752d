use crate::node::{Node, NumNodes};

/// A disjoint-set forest over the nodes `0..n`.
///
/// Supports near-constant amortized [`find`](UnionFind::find) and
/// [`union`](UnionFind::union) via union-by-rank and path compression. The
/// parent relation, followed to its fixed points, partitions all nodes into
/// disjoint trees; [`number_of_sets`](UnionFind::number_of_sets) counts them.
///
/// `find` walks iteratively and re-points every visited node directly at the
/// root in a second pass, so deep parent chains flatten without recursion.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u8>,
    num_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_sets: n,
        }
    }

    /// Returns the number of nodes the structure was created with
    pub fn number_of_nodes(&self) -> NumNodes {
        self.parent.len() as NumNodes
    }

    /// Returns the number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }

    /// Returns the representative of the set containing `u`.
    /// Idempotent and stable between mutating operations.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // second pass: re-point the walked chain directly at the root
        let mut node = u;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `u` and `v` by attaching the root of
    /// smaller rank under the root of larger rank.
    /// Returns *false* if both already share a root.
    /// ** Panics if `u >= n || v >= n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let mut x = self.find(u);
        let mut y = self.find(v);

        if x == y {
            return false;
        }

        if self.rank[x as usize] < self.rank[y as usize] {
            std::mem::swap(&mut x, &mut y);
        }

        self.parent[y as usize] = x;
        if self.rank[x as usize] == self.rank[y as usize] {
            self.rank[x as usize] += 1;
        }

        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `u` and `v` belong to the same set
    /// ** Panics if `u >= n || v >= n` **
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }
}
