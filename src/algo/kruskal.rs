use itertools::Itertools;

use super::*;

/// Kruskal's minimum-spanning-forest construction over an [`EdgeList`].
pub trait KruskalMst {
    /// Scans the edges in ascending weight order and accepts every edge whose
    /// endpoints lie in different components; edges closing a cycle are
    /// discarded. Stops once a single component remains.
    ///
    /// The sort is stable, so equal-weight edges are considered in insertion
    /// order and the result is deterministic. Negative weights are fine here:
    /// the exchange argument for spanning trees does not need non-negativity.
    ///
    /// On a disconnected input the result is a spanning *forest* with fewer
    /// than `n - 1` edges; check
    /// [`is_spanning_tree`](SpanningForest::is_spanning_tree).
    fn kruskal_mst(&self) -> SpanningForest;
}

impl KruskalMst for EdgeList {
    fn kruskal_mst(&self) -> SpanningForest {
        let n = self.number_of_nodes();
        let mut forest = SpanningForest::new(n);
        let mut sets = UnionFind::new(n);

        let edges = self.iter().copied().sorted_by(WeightedEdge::cmp_by_weight);

        for edge in edges {
            if sets.union(edge.source(), edge.target()) {
                forest.accept(edge);

                if sets.number_of_sets() == 1 {
                    break;
                }
            }
        }

        forest
    }
}
