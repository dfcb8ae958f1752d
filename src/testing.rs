//! Shared fixtures for the test modules of this crate.

use crate::prelude::*;

/// Normalized edges of a 9-node weighted graph whose minimum spanning tree
/// has total weight `37` (a ring of eight nodes with weighted chords).
/// Used by both MST builders so their results can be compared directly.
pub(crate) const EXAMPLE_MST_EDGES: [(Node, Node, Weight); 14] = [
    (0, 1, 4.0),
    (0, 7, 8.0),
    (1, 2, 8.0),
    (1, 7, 11.0),
    (2, 3, 7.0),
    (2, 5, 4.0),
    (2, 8, 2.0),
    (3, 4, 9.0),
    (3, 5, 14.0),
    (4, 5, 10.0),
    (5, 6, 2.0),
    (6, 7, 1.0),
    (6, 8, 6.0),
    (7, 8, 7.0),
];

pub(crate) fn example_mst_graph() -> AdjArrayUndir {
    AdjArrayUndir::from_edges(9, EXAMPLE_MST_EDGES)
}

pub(crate) fn example_mst_edge_list() -> EdgeList {
    EdgeList::from_edges(9, EXAMPLE_MST_EDGES)
}
