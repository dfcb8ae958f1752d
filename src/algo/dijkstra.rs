use super::*;

/// Per-vertex shortest-path distances from a fixed source.
///
/// Unreachable vertices keep [`INFINITE_WEIGHT`].
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: Node,
    dist: Vec<Weight>,
}

impl ShortestPaths {
    /// Returns the source vertex the distances refer to
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the shortest distance from the source to `v`
    /// ** Panics if `v >= n` **
    pub fn distance(&self, v: Node) -> Weight {
        self.dist[v as usize]
    }

    /// Returns *true* if `v` can be reached from the source
    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distance(v).is_finite()
    }

    /// Returns the distances indexed by vertex
    pub fn distances(&self) -> &[Weight] {
        &self.dist
    }

    /// Consumes the result and returns the distances indexed by vertex
    pub fn into_distances(self) -> Vec<Weight> {
        self.dist
    }
}

/// Dijkstra's single-source shortest paths over an adjacency graph with
/// non-negative weights.
pub trait Dijkstra: WeightedAdjacency {
    /// Computes shortest distances from `source` to every vertex.
    ///
    /// The distance table starts at infinity (zero for the source) and only
    /// ever decreases. Popped queue entries whose key exceeds the table's
    /// current value are stale leftovers of earlier relaxations and are
    /// skipped (lazy deletion); otherwise every outgoing edge is relaxed.
    ///
    /// Returns [`GraphError::InvalidVertex`] if `source` is out of range and
    /// [`GraphError::NegativeWeight`] if any edge weight is negative — the
    /// greedy settling argument breaks down there, so such input is rejected
    /// instead of producing silently wrong distances.
    fn dijkstra(&self, source: Node) -> GraphResult<ShortestPaths>;
}

impl<G> Dijkstra for G
where
    G: WeightedAdjacency,
{
    fn dijkstra(&self, source: Node) -> GraphResult<ShortestPaths> {
        if !self.has_vertex(source) {
            return Err(GraphError::InvalidVertex {
                vertex: source,
                number_of_nodes: self.number_of_nodes(),
            });
        }

        if let Some(edge) = self.find_negative_edge() {
            return Err(GraphError::NegativeWeight { edge });
        }

        let mut dist = vec![INFINITE_WEIGHT; self.len()];
        dist[source as usize] = 0.0;

        let mut queue = MinQueue::new();
        queue.push(0.0, source);

        while let Some((d, u)) = queue.pop() {
            if d > dist[u as usize] {
                // stale entry, u was settled with a smaller distance
                continue;
            }

            for (v, w) in self.neighbors_of(u) {
                let via = d + w;
                if via < dist[v as usize] {
                    dist[v as usize] = via;
                    queue.push(via, v);
                }
            }
        }

        Ok(ShortestPaths { source, dist })
    }
}
