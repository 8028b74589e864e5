use std::hash::Hash;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::{common::Frontier, core::Weight, storage::AdjMap};

use super::{heuristic::Heuristic, Error, ShortestPath};

// Nodes are never updated once created. A vertex reached along several routes
// gets one node per route and the first one popped from the frontier closes
// the vertex.
struct SearchNode<V, W> {
    vertex: V,
    cost: W,
    pred: Option<usize>,
}

pub fn a_star<V, W, H>(
    graph: &AdjMap<V, W>,
    source: V,
    goal: V,
    heuristic: &H,
) -> Result<Option<ShortestPath<V, W>>, Error>
where
    V: Eq + Hash + Clone,
    W: Weight,
    H: Heuristic<V, W>,
{
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "starting A* search"
    );

    let mut nodes = Vec::new();
    let mut closed = FxHashSet::default();
    let mut frontier = Frontier::new();

    let estimate = heuristic.estimate(&source, &goal);
    frontier.push(0, W::Ord::from(W::zero() + estimate));
    nodes.push(SearchNode {
        vertex: source,
        cost: W::zero(),
        pred: None,
    });

    while let Some((index, _)) = frontier.pop() {
        let vertex = nodes[index].vertex.clone();

        // Another node for the same vertex was popped earlier.
        if !closed.insert(vertex.clone()) {
            continue;
        }

        trace!(
            node = index,
            closed = closed.len(),
            frontier = frontier.len(),
            "expanding search node"
        );

        if vertex == goal {
            let path = reconstruct(&nodes, index);
            debug!(
                expanded = closed.len(),
                length = path.len(),
                "A* search reached the goal"
            );

            return Ok(Some(ShortestPath {
                path,
                cost: nodes[index].cost.clone(),
                expanded: closed.len(),
            }));
        }

        for successor in graph.successors(&vertex) {
            if closed.contains(&successor.id) {
                continue;
            }

            if !W::is_unsigned() && successor.attr < W::zero() {
                return Err(Error::NegativeWeight);
            }

            let cost = nodes[index].cost.clone() + successor.attr.clone();
            let priority = cost.clone() + heuristic.estimate(&successor.id, &goal);

            nodes.push(SearchNode {
                vertex: successor.id.clone(),
                cost,
                pred: Some(index),
            });
            frontier.push(nodes.len() - 1, W::Ord::from(priority));
        }
    }

    debug!(expanded = closed.len(), "A* search exhausted the frontier");
    Ok(None)
}

fn reconstruct<V: Clone, W>(nodes: &[SearchNode<V, W>], goal: usize) -> Vec<V> {
    let mut path = std::iter::successors(Some(goal), |&index| nodes[index].pred)
        .map(|index| nodes[index].vertex.clone())
        .collect::<Vec<_>>();
    path.reverse();
    path
}
