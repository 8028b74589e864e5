//! Find a [topologically sorted] sequence of vertices of a [directed acyclic
//! graph] (DAG) using [Kahn's algorithm].
//!
//! See available parameters [here](TopoSortBuilder#implementations).
//!
//! Vertices are indices `0..n`. The algorithm starts with all vertices that
//! have no incoming edges in ascending order and then repeatedly reports a
//! vertex, removing its outgoing edges. Vertices are reported in the order in
//! which their last incoming edge was removed.
//!
//! If the graph contains a cycle, the sorted sequence ends with
//! [`Error::Cycle`]. The vertices reported before the error are still a valid
//! topological order of the part of the graph not reachable from the cycle, and
//! [`into_partial`](TopoSort::into_partial) returns them.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//! [Kahn's algorithm]:
//!     https://en.wikipedia.org/wiki/Topological_sorting#Kahn's_algorithm
//!
//! # Examples
//!
//! ```
//! use classic_graph::{algo::TopoSort, storage::AdjMap};
//!
//! let mut graph = AdjMap::new();
//!
//! // Edge direction in "must be done before" relation.
//! graph.extend_with_edges([(0, 1, ()), (0, 2, ()), (1, 3, ()), (2, 3, ())]);
//!
//! let order = TopoSort::on(&graph).vertex_count(4).run().into_vec().unwrap();
//! assert_eq!(order, vec![0, 1, 2, 3]);
//! ```

use thiserror::Error;

mod builder;
mod kahn;

pub use builder::TopoSortBuilder;
use kahn::KahnIter;

/// Topologically sorted sequence of vertices of a directed acyclic graph.
///
/// See [module](self) documentation for more details and example.
///
/// This type implements the [`Iterator`] trait and is **lazy**. If you want
/// the resulting [`Vec`] of the vertices, use
/// [`into_vec`](TopoSort::into_vec).
pub struct TopoSort<'a, E> {
    inner: KahnIter<'a, E>,
}

impl<'a, E> Iterator for TopoSort<'a, E> {
    type Item = Result<usize, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, E> TopoSort<'a, E> {
    /// Returns the topologically sorted sequence of vertices as [`Vec`], `Err`
    /// if a cycle is detected.
    pub fn into_vec(self) -> Result<Vec<usize>, Error> {
        self.collect()
    }

    /// Returns the vertices sorted before an error was encountered.
    ///
    /// For a graph with a cycle, the result is shorter than the vertex count.
    pub fn into_partial(self) -> Vec<usize> {
        self.map_while(Result::ok).collect()
    }
}

/// The error encountered during a [`TopoSort`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph contains a cycle.
    ///
    /// Graphs with cycles don't have a topological order.
    #[error("graph contains cycle through vertex {vertex}, {unsorted} vertices not sorted")]
    Cycle {
        /// A vertex that lies on a cycle.
        vertex: usize,
        /// Number of vertices that could not be sorted.
        unsorted: usize,
    },

    /// A vertex index in the graph is not below the vertex count.
    #[error("vertex {vertex} is out of bounds for {vertex_count} vertices")]
    VertexOutOfBounds { vertex: usize, vertex_count: usize },
}
