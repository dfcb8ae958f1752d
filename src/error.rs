use thiserror::Error;

use crate::{
    edge::WeightedEdge,
    node::{Node, NumNodes},
};

/// Errors reported by algorithm entry points.
///
/// Malformed inputs are reported once and never retried; all algorithms are
/// pure functions of their input. Note that a *disconnected* graph is not an
/// error: MST builders report it via
/// [`SpanningForest::is_spanning_tree`](crate::algo::SpanningForest::is_spanning_tree)
/// and Dijkstra via infinite distances, so that callers can decide.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A caller-supplied vertex lies outside `0..n`
    #[error("vertex {vertex} is out of range for a graph with {number_of_nodes} nodes")]
    InvalidVertex {
        vertex: Node,
        number_of_nodes: NumNodes,
    },

    /// Dijkstra and Prim require non-negative weights and reject violations up front
    #[error("edge {edge} carries a negative weight")]
    NegativeWeight { edge: WeightedEdge },

    /// Floyd-Warshall observed a negative diagonal entry after closure
    #[error("negative cycle through vertex {vertex}")]
    NegativeCycle { vertex: Node },
}

/// Result alias for fallible graph operations
pub type GraphResult<T> = Result<T, GraphError>;
