/*!
# Weighted Graph Generators

Random weighted graphs for tests, benchmarks, and experiments. Generators
follow a builder-style pattern: create one, configure it via the setter
traits, then call `generate` with a caller-supplied [`Rng`]:

```
use wgraphs::{gens::*, prelude::*};

let mut rng = rand::rng();
let edges = RandomTree::new().nodes(5).weights(1.0..10.0).generate(&mut rng);

assert_eq!(edges.len(), 4); // always n - 1 edges
```

- [`RandomTree`] yields a uniformly attached random tree: connected, exactly
  `n - 1` edges, no cycles.
- [`RandomConnected`] grows a random tree and adds extra distinct non-loop
  edges on top, so the result is always connected with a controllable edge
  count.

Edges come out normalized; weights are drawn uniformly from the configured
range.
*/

use std::ops::Range;

use fxhash::FxHashSet;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::prelude::*;

/// Trait for generators that allow setting the number of nodes.
///
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the weight range.
pub trait WeightRangeGen {
    /// Sets the half-open range weights are drawn from uniformly.
    fn weights(self, range: Range<Weight>) -> Self;
}

/// Generator for a uniformly attached random tree.
///
/// Every node `v > 0` picks its neighbor uniformly among `0..v`, which yields
/// a connected, cycle-free graph with exactly `n - 1` edges.
#[derive(Debug, Clone)]
pub struct RandomTree {
    n: NumNodes,
    weights: Range<Weight>,
}

impl Default for RandomTree {
    fn default() -> Self {
        Self {
            n: 0,
            weights: 0.0..1.0,
        }
    }
}

impl RandomTree {
    /// Creates a new generator with no nodes and weights in `0.0..1.0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the tree edges in normalized form.
    ///
    /// # Panics
    /// Panics if `n == 0` or the weight range is empty.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<WeightedEdge> {
        assert!(self.n > 0);
        let weight_gen = Uniform::new(self.weights.start, self.weights.end).unwrap();

        (1..self.n)
            .map(|v| {
                let u = rng.random_range(0..v);
                WeightedEdge(u, v, weight_gen.sample(rng))
            })
            .collect()
    }
}

impl NumNodesGen for RandomTree {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl WeightRangeGen for RandomTree {
    fn weights(mut self, range: Range<Weight>) -> Self {
        self.weights = range;
        self
    }
}

/// Generator for a connected random graph: a [`RandomTree`] backbone plus a
/// number of extra distinct non-loop edges.
#[derive(Debug, Clone)]
pub struct RandomConnected {
    tree: RandomTree,
    extra: NumEdges,
}

impl Default for RandomConnected {
    fn default() -> Self {
        Self {
            tree: RandomTree::new(),
            extra: 0,
        }
    }
}

impl RandomConnected {
    /// Creates a new generator with no nodes, no extra edges, and weights in `0.0..1.0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of edges added on top of the spanning tree. Capped at
    /// the number of remaining distinct node pairs.
    pub fn extra_edges(mut self, extra: NumEdges) -> Self {
        self.extra = extra;
        self
    }

    /// Generates the edges in normalized form: first the tree backbone, then
    /// the extra edges. No pair of nodes appears twice.
    ///
    /// # Panics
    /// Panics if `n == 0` or the weight range is empty.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<WeightedEdge> {
        let n = self.tree.n;
        let mut edges = self.tree.generate(rng);

        let all_pairs = (n as u64) * (n as u64 - 1) / 2;
        let extra = (self.extra as u64).min(all_pairs - edges.len() as u64) as NumEdges;
        if extra == 0 {
            return edges;
        }

        let weight_gen = Uniform::new(self.tree.weights.start, self.tree.weights.end).unwrap();
        let mut seen: FxHashSet<(Node, Node)> =
            edges.iter().map(|e| (e.source(), e.target())).collect();

        for _ in 0..extra {
            loop {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u == v {
                    continue;
                }

                let pair = (u.min(v), u.max(v));
                if seen.insert(pair) {
                    edges.push(WeightedEdge(pair.0, pair.1, weight_gen.sample(rng)));
                    break;
                }
            }
        }

        edges
    }
}

impl NumNodesGen for RandomConnected {
    fn nodes(mut self, n: NumNodes) -> Self {
        self.tree = self.tree.nodes(n);
        self
    }
}

impl WeightRangeGen for RandomConnected {
    fn weights(mut self, range: Range<Weight>) -> Self {
        self.tree = self.tree.weights(range);
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::UnionFind;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn tree_is_connected_and_cycle_free() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1 as NumNodes, 2, 10, 100] {
            let edges = RandomTree::new().nodes(n).weights(1.0..2.0).generate(rng);

            assert_eq!(edges.len() as NumNodes, n - 1);

            let mut sets = UnionFind::new(n);
            for e in &edges {
                // every edge joins two previously separate components
                assert!(sets.union(e.source(), e.target()));
                assert!((1.0..2.0).contains(&e.weight()));
            }
            assert_eq!(sets.number_of_sets(), 1);
        }
    }

    #[test]
    fn connected_adds_distinct_extra_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        for n in [5 as NumNodes, 20, 50] {
            for extra in [0 as NumEdges, 3, n] {
                let edges = RandomConnected::new()
                    .nodes(n)
                    .extra_edges(extra)
                    .weights(0.0..1.0)
                    .generate(rng);

                assert_eq!(edges.len() as NumEdges, n - 1 + extra);
                assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));

                let distinct = edges
                    .iter()
                    .map(|e| (e.source(), e.target()))
                    .unique()
                    .count();
                assert_eq!(distinct, edges.len());

                let mut sets = UnionFind::new(n);
                edges.iter().for_each(|e| {
                    sets.union(e.source(), e.target());
                });
                assert_eq!(sets.number_of_sets(), 1);
            }
        }
    }

    #[test]
    fn extra_edges_are_capped_at_the_complete_graph() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        let edges = RandomConnected::new()
            .nodes(4)
            .extra_edges(100)
            .weights(0.0..1.0)
            .generate(rng);

        // K4 has 6 edges
        assert_eq!(edges.len(), 6);
    }
}
