//! Find a path between two vertices using the [A* search algorithm].
//!
//! See available parameters [here](ShortestPathBuilder#implementations).
//!
//! Every successor descriptor in the graph carries its own traversal cost and
//! the cost of a path is the sum of the descriptor costs along it. The search
//! is guided by a [heuristic](heuristic::Heuristic) estimate of the remaining
//! cost. With the default [zero heuristic](heuristic::Zero) the found path is
//! always a cheapest one. Heuristics that overestimate, such as
//! [`LabelHash`](heuristic::LabelHash), may lead to a more expensive path.
//!
//! Frontier entries with equal priority are expanded in the order they were
//! discovered, so the result is deterministic for a given graph.
//!
//! [A* search algorithm]: https://en.wikipedia.org/wiki/A*_search_algorithm
//!
//! # Examples
//!
//! ```
//! use classic_graph::{algo::ShortestPath, storage::AdjMap};
//!
//! let mut graph = AdjMap::new();
//!
//! graph.extend_with_edges([
//!     ("Prague", "Vienna", 293u32),
//!     ("Prague", "Nuremberg", 297),
//!     ("Vienna", "Munich", 402),
//!     ("Nuremberg", "Munich", 170),
//!     ("Munich", "Florence", 646),
//!     ("Vienna", "Florence", 863),
//!     ("Florence", "Rome", 278),
//! ]);
//!
//! let path = ShortestPath::on(&graph).run("Prague", "Rome").unwrap().unwrap();
//!
//! assert_eq!(path.cost(), &1391);
//! assert_eq!(path.to_string(), "Prague -> Nuremberg -> Munich -> Florence -> Rome");
//! ```

use std::fmt;

use thiserror::Error;

mod a_star;
mod builder;
pub mod heuristic;

pub use builder::ShortestPathBuilder;

/// Path found by A* together with its cost.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<V, W> {
    path: Vec<V>,
    cost: W,
    expanded: usize,
}

impl<V, W> ShortestPath<V, W> {
    /// Vertices on the path, from the source to the goal.
    pub fn path(&self) -> &[V] {
        &self.path
    }

    pub fn into_path(self) -> Vec<V> {
        self.path
    }

    /// Sum of the successor costs along the path.
    pub fn cost(&self) -> &W {
        &self.cost
    }

    pub fn source(&self) -> &V {
        &self.path[0]
    }

    pub fn goal(&self) -> &V {
        &self.path[self.path.len() - 1]
    }

    /// Number of edges on the path.
    pub fn edge_count(&self) -> usize {
        self.path.len() - 1
    }

    /// Number of vertices that were closed during the search.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

impl<V: fmt::Display, W> fmt::Display for ShortestPath<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}

/// The error encountered during a [`ShortestPath`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A successor with negative cost encountered.
    #[error("successor with negative cost encountered")]
    NegativeWeight,
}
