//! Classic graph algorithms over small in-memory graphs.
//!
//! * [A* search](algo::shortest_path) on an [adjacency map](storage::AdjMap)
//!   with arbitrary vertex labels.
//! * [Kruskal's minimum spanning forest](algo::spanning_tree) on a list of
//!   [edges](core::Edge).
//! * [Kahn's topological sort](algo::toposort) on an adjacency map with
//!   integer-indexed vertices.
//!
//! Each algorithm is configured through a builder and returns its result as a
//! value. Progress is reported through [`tracing`] events; no subscriber is
//! installed by the library.

pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        algo::{ShortestPath, SpanningTree, TopoSort},
        core::Edge,
        storage::AdjMap,
    };
}
