use std::marker::PhantomData;

use super::*;

/// A weighted graph stored as one `Vec<(Node, Weight)>` per node.
///
/// The direction is a type parameter: [`AdjArray`] stores each inserted edge
/// once, [`AdjArrayUndir`] stores both orientations so that `neighbors_of`
/// sees the full neighborhood from either endpoint.
#[derive(Clone)]
pub struct AdjacencyGraph<D: Direction> {
    nbs: Vec<Vec<(Node, Weight)>>,
    num_edges: NumEdges,
    _dir: PhantomData<D>,
}

/// Directed weighted adjacency representation
pub type AdjArray = AdjacencyGraph<Directed>;

/// Undirected weighted adjacency representation
pub type AdjArrayUndir = AdjacencyGraph<Undirected>;

impl<D: Direction> GraphType for AdjacencyGraph<D> {
    type Dir = D;
}

impl<D: Direction> GraphNodeOrder for AdjacencyGraph<D> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<D: Direction> GraphEdgeOrder for AdjacencyGraph<D> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<D: Direction> WeightedAdjacency for AdjacencyGraph<D> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<D: Direction> GraphNew for AdjacencyGraph<D> {
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
            _dir: PhantomData,
        }
    }
}

impl<D: Direction> WeightedEdgeEditing for AdjacencyGraph<D> {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert!(self.has_vertex(u) && self.has_vertex(v));

        self.nbs[u as usize].push((v, w));
        if D::is_undirected() && u != v {
            self.nbs[v as usize].push((u, w));
        }
        self.num_edges += 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn directed_keeps_orientation() {
        let mut graph = AdjArray::new(3);
        graph.add_edge(0, 1, 2.0);
        graph.add_edge(1, 2, 3.0);

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(0), 1);
        assert_eq!(graph.degree_of(2), 0);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![(2, 3.0)]);
    }

    #[test]
    fn undirected_stores_both_orientations() {
        let mut graph = AdjArrayUndir::new(3);
        graph.add_edge(0, 1, 2.0);
        graph.add_edge(1, 2, 3.0);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![(0, 2.0), (2, 3.0)]);
        assert_eq!(graph.degree_of(1), 2);

        // normalized edge iteration reports each undirected edge once
        assert_eq!(
            graph.edges(true).collect_vec(),
            vec![WeightedEdge(0, 1, 2.0), WeightedEdge(1, 2, 3.0)]
        );
    }

    #[test]
    fn from_edges_matches_manual_insertion() {
        let graph = AdjArrayUndir::from_edges(4, [(0, 1, 1.5), (2, 3, 0.5), (0, 3, 2.5)]);

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors_of(3).collect_vec(), vec![(2, 0.5), (0, 2.5)]);
    }

    #[test]
    #[should_panic]
    fn add_edge_rejects_invalid_endpoint() {
        let mut graph = AdjArray::new(2);
        graph.add_edge(0, 2, 1.0);
    }
}
