/*!
# Graph Representations

The same abstract weighted graph can be stored in three ways, each fitting a
different algorithm:

- [`EdgeList`]: a flat list of weighted edges, consumed by
  [`KruskalMst`](crate::algo::KruskalMst),
- [`AdjArray`] / [`AdjArrayUndir`]: per-node adjacency lists, consumed by
  [`PrimMst`](crate::algo::PrimMst) and [`Dijkstra`](crate::algo::Dijkstra),
- [`DistMatrix`]: a dense matrix with an infinite sentinel for absent edges,
  consumed by [`FloydWarshall`](crate::algo::FloydWarshall).

The types are deliberately distinct: no algorithm silently reinterprets one
view as another. Conversions are explicit (`EdgeList::from_adjacency`,
`DistMatrix::from_edges`, ...).
*/

use crate::prelude::*;

mod adjacency;
mod edge_list;
mod matrix;

pub use adjacency::*;
pub use edge_list::*;
pub use matrix::*;
