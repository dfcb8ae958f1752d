/*!
# Utilities

Provides the two data structures the algorithms in [`algo`](crate::algo) are
built on:

- [`UnionFind`]: disjoint-set forest with union-by-rank and path compression,
  the cycle filter of [`KruskalMst`](crate::algo::KruskalMst),
- [`MinQueue`]: a binary-heap min-queue keyed by `(Weight, item)` with
  deterministic tie-breaking, the frontier of
  [`PrimMst`](crate::algo::PrimMst) and [`Dijkstra`](crate::algo::Dijkstra).

Both are created per algorithm invocation and never shared.
*/

pub mod queue;
pub mod union_find;

pub use queue::MinQueue;
pub use union_find::UnionFind;
