use super::*;

/// Floyd-Warshall all-pairs shortest distances over a [`DistMatrix`].
pub trait FloydWarshall {
    /// Returns the shortest-distance closure of the matrix.
    ///
    /// Intermediate vertices are admitted in increasing order; after round
    /// `k` every entry `(i, j)` holds the shortest path using intermediates
    /// from `0..=k` only, so the final matrix is a fixed point of the
    /// relaxation `dist[i][j] <= dist[i][k] + dist[k][j]`.
    ///
    /// Negative arc weights are allowed as long as no cycle has negative
    /// total weight. A negative cycle reveals itself as a negative diagonal
    /// entry after closure and is reported as
    /// [`GraphError::NegativeCycle`].
    fn shortest_distances(&self) -> GraphResult<DistMatrix>;
}

impl FloydWarshall for DistMatrix {
    fn shortest_distances(&self) -> GraphResult<DistMatrix> {
        let mut dist = self.clone();
        let n = self.number_of_nodes();

        for k in 0..n {
            for i in 0..n {
                let via_k = dist.get(i, k);
                if !via_k.is_finite() {
                    continue;
                }

                for j in 0..n {
                    let via = via_k + dist.get(k, j);
                    if via < dist.get(i, j) {
                        dist.set(i, j, via);
                    }
                }
            }
        }

        if let Some(vertex) = dist.vertices().find(|&v| dist.get(v, v) < 0.0) {
            return Err(GraphError::NegativeCycle { vertex });
        }

        Ok(dist)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn matrix_from_rows<const N: usize>(rows: [[Weight; N]; N]) -> DistMatrix {
        let mut matrix = DistMatrix::new(N as NumNodes);
        for (u, row) in rows.iter().enumerate() {
            for (v, &w) in row.iter().enumerate() {
                matrix.set(u as Node, v as Node, w);
            }
        }
        matrix
    }

    #[test]
    fn directed_example() {
        const INF: Weight = INFINITE_WEIGHT;
        let matrix = matrix_from_rows([
            [0.0, 3.0, INF, 5.0],
            [2.0, 0.0, INF, 4.0],
            [INF, 1.0, 0.0, INF],
            [INF, INF, 2.0, 0.0],
        ]);

        let closed = matrix.shortest_distances().unwrap();

        assert_eq!(
            closed,
            matrix_from_rows([
                [0.0, 3.0, 7.0, 5.0],
                [2.0, 0.0, 6.0, 4.0],
                [3.0, 1.0, 0.0, 5.0],
                [5.0, 3.0, 2.0, 0.0],
            ])
        );
    }

    #[test]
    fn unreachable_pairs_stay_infinite() {
        let mut matrix = DistMatrix::new(3);
        matrix.set(0, 1, 1.0);

        let closed = matrix.shortest_distances().unwrap();

        assert_eq!(closed.get(0, 1), 1.0);
        assert!(closed.get(1, 0).is_infinite());
        assert!(closed.get(0, 2).is_infinite());
    }

    #[test]
    fn negative_arcs_without_negative_cycle() {
        let mut matrix = DistMatrix::new(3);
        matrix.set(0, 1, 4.0);
        matrix.set(1, 2, -2.0);

        let closed = matrix.shortest_distances().unwrap();

        assert_eq!(closed.get(0, 2), 2.0);
        assert_eq!(closed.get(1, 2), -2.0);
    }

    #[test]
    fn reports_negative_cycle() {
        let mut matrix = DistMatrix::new(2);
        matrix.set(0, 1, 1.0);
        matrix.set(1, 0, -3.0);

        assert!(matches!(
            matrix.shortest_distances(),
            Err(GraphError::NegativeCycle { .. })
        ));
    }

    #[test]
    fn closure_is_a_fixed_point() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);

        let edges = RandomConnected::new()
            .nodes(20)
            .extra_edges(30)
            .weights(1.0..9.0)
            .generate(rng);
        let list = EdgeList::from_edges(20, edges);

        let closed = DistMatrix::from_edge_list(&list).shortest_distances().unwrap();

        for i in closed.vertices() {
            for j in closed.vertices() {
                for k in closed.vertices() {
                    assert!(closed.get(i, j) <= closed.get(i, k) + closed.get(k, j) + 1e-9);
                }
            }
        }
    }

    #[test]
    fn closure_rows_match_dijkstra() {
        let rng = &mut Pcg64Mcg::seed_from_u64(43);

        let edges = RandomConnected::new()
            .nodes(15)
            .extra_edges(25)
            .weights(0.5..7.5)
            .generate(rng);
        let list = EdgeList::from_edges(15, edges);
        let graph = list.clone().into_adjacency();

        let closed = DistMatrix::from_edge_list(&list).shortest_distances().unwrap();

        for u in graph.vertices() {
            let paths = graph.dijkstra(u).unwrap();
            for v in graph.vertices() {
                assert!((closed.get(u, v) - paths.distance(v)).abs() < 1e-9);
            }
        }
    }
}
