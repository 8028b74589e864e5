use proptest::{collection::vec, prelude::*};

use crate::{core::Edge, storage::AdjMap};

/// Vertex count in `1..=max_vertices` and a list of up to three times as many
/// edges between them, loops and parallel edges included.
pub fn edges<S>(
    max_vertices: usize,
    weight: S,
) -> impl Strategy<Value = (usize, Vec<Edge<S::Value>>)>
where
    S: Strategy + Clone,
{
    (1..=max_vertices).prop_flat_map(move |n| {
        let edge = (0..n, 0..n, weight.clone())
            .prop_map(|(src, dest, weight)| Edge::new(src, dest, weight));
        (Just(n), vec(edge, 0..=n * 3))
    })
}

/// Vertex count and a directed graph on vertices `0..n` that may contain
/// cycles.
pub fn digraph(max_vertices: usize) -> impl Strategy<Value = (usize, AdjMap<usize, ()>)> {
    edges(max_vertices, Just(())).prop_map(|(n, list)| {
        let graph: AdjMap<usize, ()> = list.into_iter().map(|e| (e.src, e.dest, ())).collect();
        (n, graph)
    })
}

/// Vertex count and a directed acyclic graph on vertices `0..n`.
///
/// Edges follow a random permutation of the vertices, so the topological order
/// is not simply ascending.
pub fn dag(max_vertices: usize) -> impl Strategy<Value = (usize, AdjMap<usize, ()>)> {
    (1..=max_vertices)
        .prop_flat_map(|n| {
            let order = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
            (Just(n), order, vec((0..n, 0..n), 0..=n * 3))
        })
        .prop_map(|(n, order, pairs)| {
            let graph: AdjMap<usize, ()> = pairs
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (order[a.min(b)], order[a.max(b)], ()))
                .collect();
            (n, graph)
        })
}
