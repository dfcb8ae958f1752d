use std::ops::Range;

use crate::prelude::*;

/// Marker for directed graph representations
#[derive(Debug, Clone, Copy)]
pub struct Directed;

/// Marker for undirected graph representations
#[derive(Debug, Clone, Copy)]
pub struct Undirected;

/// Type-level direction of a graph representation
pub trait Direction {
    /// Returns *true* if edges are interpreted as unordered pairs
    fn is_undirected() -> bool;
}

impl Direction for Directed {
    fn is_undirected() -> bool {
        false
    }
}

impl Direction for Undirected {
    fn is_undirected() -> bool {
        true
    }
}

/// Associates a representation with its [`Direction`]
pub trait GraphType {
    type Dir: Direction;

    /// Returns *true* if the representation is undirected
    fn is_undirected() -> bool {
        Self::Dir::is_undirected()
    }

    /// Returns *true* if the representation is directed
    fn is_directed() -> bool {
        !Self::is_undirected()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V.
    ///
    /// The range does not borrow `self` and hence may be used where
    /// additional mutable references of `self` are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a valid vertex of the graph
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns full bitset with one entry per node
    fn vertex_bitset_set(&self) -> NodeBitSet {
        NodeBitSet::new_all_set(self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for weighted neighborhoods & edges
pub trait WeightedAdjacency: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) out-neighborhood of a given vertex
    /// together with the weight of the connecting edge.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.neighbors_of(u)
            .map(move |(v, w)| WeightedEdge(u, v, w))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns the first edge carrying a negative weight, if any.
    /// Algorithms restricted to non-negative weights use this to reject
    /// their input up front.
    fn find_negative_edge(&self) -> Option<WeightedEdge> {
        self.edges(false).find(|e| e.weight() < 0.0)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert weighted edges
pub trait WeightedEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* with weight `w` to the graph. For undirected
    /// representations this inserts both orientations.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, w: Weight);

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromWeightedEdges {
    /// Create a graph from a number of nodes and an iterator over weighted edges
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self;
}

impl<G: GraphNew + WeightedEdgeEditing> GraphFromWeightedEdges for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
