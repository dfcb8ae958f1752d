/*!
# Graph Algorithms

This module provides the weighted-graph algorithms of this crate, each
attached to the representation it consumes:

- [`KruskalMst`] on [`EdgeList`](crate::repr::EdgeList),
- [`PrimMst`] on undirected adjacency graphs,
- [`Dijkstra`] on adjacency graphs with non-negative weights,
- [`FloydWarshall`] on [`DistMatrix`](crate::repr::DistMatrix).

All algorithms are re-exported at the top level of this module, so you can
simply do:
```rust
use wgraphs::algo::*;
```
The algorithms are independent: each invocation owns its union-find, queue,
and distance structures exclusively and drops them on return. Given a fixed
input, results are fully deterministic (stable weight sorting, payload-order
tie-breaking in the queue).
*/

use crate::{prelude::*, utils::*};

mod dijkstra;
mod floyd_warshall;
mod kruskal;
mod prim;

pub use dijkstra::*;
pub use floyd_warshall::*;
pub use kruskal::*;
pub use prim::*;

/// A minimum spanning tree, or forest if the input does not connect.
///
/// Returned by both [`KruskalMst`] and [`PrimMst`]. Disconnection is not an
/// error: the builders report fewer than `n - 1` accepted edges and callers
/// check [`is_spanning_tree`](SpanningForest::is_spanning_tree) to decide.
#[derive(Clone, Debug)]
pub struct SpanningForest {
    number_of_nodes: NumNodes,
    total_weight: Weight,
    edges: Vec<WeightedEdge>,
}

impl SpanningForest {
    fn new(number_of_nodes: NumNodes) -> Self {
        Self {
            number_of_nodes,
            total_weight: 0.0,
            edges: Vec::with_capacity(number_of_nodes as usize - 1),
        }
    }

    fn accept(&mut self, edge: WeightedEdge) {
        self.total_weight += edge.weight();
        self.edges.push(edge);
    }

    /// Returns the sum of all accepted edge weights
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns the accepted edges in acceptance order
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Consumes the forest and returns the accepted edges
    pub fn into_edges(self) -> Vec<WeightedEdge> {
        self.edges
    }

    /// Returns the number of connected components of the forest, counting
    /// every vertex the accepted edges do not touch as a singleton
    pub fn number_of_components(&self) -> NumNodes {
        self.number_of_nodes - self.edges.len() as NumNodes
    }

    /// Returns *true* if the accepted edges span all vertices, i.e. the
    /// result is a single tree rather than a forest
    pub fn is_spanning_tree(&self) -> bool {
        self.number_of_components() == 1
    }
}
