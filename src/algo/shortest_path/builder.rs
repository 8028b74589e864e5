use std::hash::Hash;

use crate::{core::Weight, storage::AdjMap};

use super::{
    a_star::a_star,
    heuristic::{self, Heuristic},
    Error, ShortestPath,
};

pub struct ShortestPathBuilder<'a, V, W, H> {
    graph: &'a AdjMap<V, W>,
    heuristic: H,
}

impl<V, W> ShortestPath<V, W> {
    pub fn on(graph: &AdjMap<V, W>) -> ShortestPathBuilder<'_, V, W, heuristic::Zero> {
        ShortestPathBuilder {
            graph,
            heuristic: heuristic::Zero,
        }
    }
}

impl<'a, V, W, H> ShortestPathBuilder<'a, V, W, H> {
    pub fn heuristic<H2>(self, heuristic: H2) -> ShortestPathBuilder<'a, V, W, H2>
    where
        H2: Heuristic<V, W>,
    {
        ShortestPathBuilder {
            graph: self.graph,
            heuristic,
        }
    }

    // Passing a closure to `heuristic` needs type annotations on its
    // arguments. The explicit Fn signature here lets them be inferred.
    pub fn heuristic_fn<F>(self, heuristic: F) -> ShortestPathBuilder<'a, V, W, F>
    where
        F: Fn(&V, &V) -> W,
    {
        self.heuristic(heuristic)
    }

    /// Runs A* from `source` towards `goal`.
    ///
    /// Returns `Ok(None)` if the goal is not reachable.
    pub fn run(self, source: V, goal: V) -> Result<Option<ShortestPath<V, W>>, Error>
    where
        V: Eq + Hash + Clone,
        W: Weight,
        H: Heuristic<V, W>,
    {
        a_star(self.graph, source, goal, &self.heuristic)
    }
}
