use super::*;

/// A weighted graph stored as a flat list of undirected edges.
///
/// Edges keep their insertion order; algorithms that sort by weight do so
/// with a stable sort, so equal-weight edges are processed in the order the
/// caller supplied them. This is what makes
/// [`KruskalMst`](crate::algo::KruskalMst) deterministic.
#[derive(Clone, Debug)]
pub struct EdgeList {
    n: NumNodes,
    edges: Vec<WeightedEdge>,
}

impl GraphType for EdgeList {
    type Dir = Undirected;
}

impl GraphNodeOrder for EdgeList {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for EdgeList {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl GraphNew for EdgeList {
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            n,
            edges: Vec::new(),
        }
    }
}

impl WeightedEdgeEditing for EdgeList {
    fn add_edge(&mut self, u: Node, v: Node, w: Weight) {
        assert!(self.has_vertex(u) && self.has_vertex(v));
        self.edges.push(WeightedEdge(u, v, w));
    }
}

impl EdgeList {
    /// Returns the edges in insertion order
    pub fn as_slice(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Returns an iterator over the edges in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &WeightedEdge> + '_ {
        self.edges.iter()
    }

    /// Collects the normalized edges of an undirected adjacency graph.
    /// Each undirected edge appears exactly once.
    pub fn from_adjacency(graph: &AdjArrayUndir) -> Self {
        Self {
            n: graph.number_of_nodes(),
            edges: graph.edges(true).collect(),
        }
    }

    /// Converts the edge list into an undirected adjacency graph
    pub fn into_adjacency(self) -> AdjArrayUndir {
        AdjArrayUndir::from_edges(self.n, self.edges)
    }
}
