use tracing::{debug, trace};

use crate::{
    common::UnionFind,
    core::{Edge, Weight},
};

use super::{SpanningTree, TieBreak};

pub fn kruskal<W>(
    edges: &[Edge<W>],
    vertex_count: Option<usize>,
    tie_break: TieBreak,
) -> SpanningTree<W>
where
    W: Weight,
{
    let mut sorted = edges.to_vec();
    match tie_break {
        TieBreak::Stable => sorted.sort_by_key(|edge| W::Ord::from(edge.weight.clone())),
        TieBreak::Endpoints => {
            sorted.sort_by_key(|edge| (W::Ord::from(edge.weight.clone()), edge.src, edge.dest))
        }
    }

    let mut sets = UnionFind::new();

    // Each vertex is registered exactly once.
    let declared = 0..vertex_count.unwrap_or(0);
    for v in declared.chain(sorted.iter().flat_map(|edge| [edge.src, edge.dest])) {
        if !sets.contains(&v) {
            sets.make_set(v);
        }
    }

    debug!(
        edges = sorted.len(),
        vertices = sets.len(),
        "starting Kruskal's algorithm"
    );

    // A forest on n vertices has at most n - 1 edges.
    let max_edges = sets.len().saturating_sub(1);
    let mut accepted = Vec::with_capacity(max_edges);
    let mut total_weight = W::zero();

    for edge in sorted {
        if accepted.len() == max_edges {
            break;
        }

        if sets.union(&edge.src, &edge.dest) {
            trace!(src = edge.src, dest = edge.dest, "edge accepted");
            total_weight = total_weight + edge.weight.clone();
            accepted.push(edge);
        } else {
            trace!(src = edge.src, dest = edge.dest, "edge would close a cycle");
        }
    }

    let tree_count = sets.len() - accepted.len();
    debug!(
        accepted = accepted.len(),
        trees = tree_count,
        "Kruskal's algorithm finished"
    );

    SpanningTree {
        edges: accepted,
        total_weight,
        vertex_count: sets.len(),
        tree_count,
    }
}
