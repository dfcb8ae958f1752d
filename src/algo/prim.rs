use super::*;

/// Prim's minimum-spanning-tree construction over an undirected adjacency
/// graph.
pub trait PrimMst: WeightedAdjacency + GraphType<Dir = Undirected> {
    /// Grows a tree from `start` by repeatedly settling the cheapest queued
    /// candidate vertex. Superseded queue entries are not removed when a
    /// cheaper candidate is pushed; they are recognized on pop because their
    /// vertex is already settled, and skipped (lazy deletion).
    ///
    /// Vertices unreachable from `start` are never settled, so a
    /// disconnected input yields a forest covering only the start component;
    /// check [`is_spanning_tree`](SpanningForest::is_spanning_tree).
    ///
    /// Returns [`GraphError::InvalidVertex`] if `start` is out of range and
    /// [`GraphError::NegativeWeight`] if any edge weight is negative.
    fn prim_mst(&self, start: Node) -> GraphResult<SpanningForest>;
}

impl<G> PrimMst for G
where
    G: WeightedAdjacency + GraphType<Dir = Undirected>,
{
    fn prim_mst(&self, start: Node) -> GraphResult<SpanningForest> {
        if !self.has_vertex(start) {
            return Err(GraphError::InvalidVertex {
                vertex: start,
                number_of_nodes: self.number_of_nodes(),
            });
        }

        if let Some(edge) = self.find_negative_edge() {
            return Err(GraphError::NegativeWeight { edge });
        }

        Ok(PrimSearch::new(self, start).compute())
    }
}

struct PrimSearch<'a, G>
where
    G: WeightedAdjacency,
{
    graph: &'a G,
    settled: NodeBitSet,
    /// candidate entries `(weight, (vertex, origin))`; `origin` is the
    /// settled endpoint the candidate edge hangs off, `INVALID_NODE` for
    /// the seed entry
    queue: MinQueue<(Node, Node)>,
    forest: SpanningForest,
}

impl<'a, G> PrimSearch<'a, G>
where
    G: WeightedAdjacency,
{
    fn new(graph: &'a G, start: Node) -> Self {
        let mut queue = MinQueue::new();
        queue.push(0.0, (start, INVALID_NODE));

        Self {
            graph,
            settled: graph.vertex_bitset_unset(),
            queue,
            forest: SpanningForest::new(graph.number_of_nodes()),
        }
    }

    fn compute(mut self) -> SpanningForest {
        while let Some((w, (u, origin))) = self.queue.pop() {
            if self.settled.set_bit(u) {
                // stale entry, a cheaper candidate settled u earlier
                continue;
            }

            if origin != INVALID_NODE {
                self.forest.accept(WeightedEdge(origin, u, w).normalized());
            }

            for (v, wv) in self.graph.neighbors_of(u) {
                if !self.settled.get_bit(v) {
                    self.queue.push(wv, (v, u));
                }
            }
        }

        self.forest
    }
}
