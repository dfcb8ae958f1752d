use super::*;

/// A dense `n x n` distance matrix in row-major order.
///
/// Entry `(u, v)` holds the weight of the arc from `u` to `v`,
/// [`INFINITE_WEIGHT`] if there is none, and `0` on the diagonal. This is the
/// input and output shape of [`FloydWarshall`](crate::algo::FloydWarshall).
#[derive(Clone, Debug, PartialEq)]
pub struct DistMatrix {
    n: NumNodes,
    dist: Vec<Weight>,
}

impl GraphType for DistMatrix {
    type Dir = Directed;
}

impl GraphNodeOrder for DistMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl DistMatrix {
    /// Creates a matrix with zero diagonal and no edges
    pub fn new(n: NumNodes) -> Self {
        assert!(n > 0);

        let mut dist = vec![INFINITE_WEIGHT; (n as usize) * (n as usize)];
        for u in 0..(n as usize) {
            dist[u * (n as usize) + u] = 0.0;
        }

        Self { n, dist }
    }

    #[inline]
    fn idx(&self, u: Node, v: Node) -> usize {
        debug_assert!(self.has_vertex(u) && self.has_vertex(v));
        (u as usize) * (self.n as usize) + (v as usize)
    }

    /// Returns the entry for the arc `(u, v)`
    /// ** Panics if `u >= n || v >= n` **
    pub fn get(&self, u: Node, v: Node) -> Weight {
        self.dist[self.idx(u, v)]
    }

    /// Sets the entry for the arc `(u, v)`
    /// ** Panics if `u >= n || v >= n` **
    pub fn set(&mut self, u: Node, v: Node, w: Weight) {
        let idx = self.idx(u, v);
        self.dist[idx] = w;
    }

    /// Returns row `u`, i.e. the arc weights from `u` to every vertex
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Weight] {
        let n = self.n as usize;
        &self.dist[(u as usize) * n..(u as usize + 1) * n]
    }

    /// Builds the matrix from a (directed or undirected) adjacency graph.
    /// Parallel edges keep the lighter weight.
    pub fn from_adjacency<G: WeightedAdjacency>(graph: &G) -> Self {
        let mut matrix = Self::new(graph.number_of_nodes());

        for WeightedEdge(u, v, w) in graph.edges(false) {
            if w < matrix.get(u, v) {
                matrix.set(u, v, w);
            }
        }

        matrix
    }

    /// Builds the matrix from an undirected edge list: every edge is entered
    /// in both orientations. Parallel edges keep the lighter weight.
    pub fn from_edge_list(list: &EdgeList) -> Self {
        let mut matrix = Self::new(list.number_of_nodes());

        for &WeightedEdge(u, v, w) in list.iter() {
            if w < matrix.get(u, v) {
                matrix.set(u, v, w);
                matrix.set(v, u, w);
            }
        }

        matrix
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_has_zero_diagonal_and_no_edges() {
        let matrix = DistMatrix::new(3);

        for u in 0..3 {
            for v in 0..3 {
                if u == v {
                    assert_eq!(matrix.get(u, v), 0.0);
                } else {
                    assert!(matrix.get(u, v).is_infinite());
                }
            }
        }
    }

    #[test]
    fn from_adjacency_keeps_orientation() {
        let mut graph = AdjArray::new(3);
        graph.add_edge(0, 1, 4.0);
        graph.add_edge(1, 0, 2.0);
        graph.add_edge(1, 2, 1.0);

        let matrix = DistMatrix::from_adjacency(&graph);
        assert_eq!(matrix.get(0, 1), 4.0);
        assert_eq!(matrix.get(1, 0), 2.0);
        assert_eq!(matrix.get(1, 2), 1.0);
        assert!(matrix.get(2, 1).is_infinite());
    }

    #[test]
    fn from_edges_enters_both_orientations_and_keeps_lighter_parallel() {
        let list = EdgeList::from_edges(3, [(0, 1, 4.0), (1, 0, 1.5), (1, 2, 3.0)]);

        let matrix = DistMatrix::from_edge_list(&list);
        assert_eq!(matrix.get(0, 1), 1.5);
        assert_eq!(matrix.get(1, 0), 1.5);
        assert_eq!(matrix.get(2, 1), 3.0);
        assert_eq!(matrix.row(2), [INFINITE_WEIGHT, 3.0, 0.0].as_slice());
    }
}
