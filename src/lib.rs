/*!
`wgraphs` is a graph algorithms library for graphs that are
- **w**eighted : Every edge carries a real-valued weight
- dense-indexed : Nodes are numbered `0` to `n - 1`

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of
nodes in the graph. As most common graphs do not exceed `2^32` nodes, this
should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `WeightedEdge(Node, Node, Weight)`
with `Weight = f64`; the infinite weight doubles as the "no edge / not
reachable" sentinel.

### Available Representations

The same abstract graph can be stored in three explicit shapes (see [`repr`]),
each fitting a different algorithm:

- [`EdgeList`](crate::repr::EdgeList) — a flat edge list (Kruskal)
- [`AdjArray`](crate::repr::AdjArray) / [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
  — adjacency lists (Prim, Dijkstra)
- [`DistMatrix`](crate::repr::DistMatrix) — a dense distance matrix
  (Floyd-Warshall)

Conversions between them are explicit; no algorithm reinterprets one shape as
another behind the caller's back.

# Design

Algorithms are provided as traits implemented directly on the fitting graph
representations, making them usable without configuring anything beforehand:
`list.kruskal_mst()`, `graph.prim_mst(start)`, `graph.dijkstra(source)`,
`matrix.shortest_distances()`. Execution is single-threaded, synchronous, and
deterministic: equal-weight edges are resolved by stable sorting and by
payload order in the priority queue, so a fixed input always produces the
same output.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, weighted edges, errors, basic
  graph operations, and all standard graph representations,
- [`algo`] includes the algorithm traits implemented on the representations:
  MST construction (Kruskal/Prim), single-source shortest paths (Dijkstra),
  and all-pairs shortest distances (Floyd-Warshall),
- [`gens`] includes random weighted graph generators (random trees and
  connected graphs) for tests and experiments,
- [`utils`] includes the underlying [`UnionFind`](crate::utils::UnionFind)
  and [`MinQueue`](crate::utils::MinQueue) structures, usable on their own.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your
needs.

# When to use

You should only use this library if the following apply:
- Your graphs are weighted with dense unsigned node indices
- You require only the classic weighted-graph algorithms
- Determinism and reproducibility matter to you

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive
library for general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `wgraphs::prelude` includes definitions for nodes and weighted edges, the
/// error type, all basic graph operation traits as well as all implemented
/// representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
