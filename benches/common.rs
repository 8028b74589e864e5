#![allow(dead_code)]

use classic_graph::{core::Edge, storage::AdjMap};
use fastrand::Rng;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0x5eed_c1a5_51c_9a4f;

/// Geometric skipping over the lower triangle of the adjacency matrix, which
/// yields each pair `(v, w)` with `w < v` independently with probability `p`.
pub struct RandomPairs {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomPairs {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_pair(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        let Self { v, w, n, p } = self;

        if *v >= *n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - *p).log10()).floor() as usize;

        while *w >= *v && *v < *n {
            *w -= *v;
            *v += 1;
        }

        if *v < *n { Some((*v, *w)) } else { None }
    }
}

/// Weighted pairs `(v, w, weight)` with `w < v`. As a directed graph from `v`
/// to `w`, this is acyclic.
pub fn random_pairs(vertex_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize, u32)> {
    let mut pairs = RandomPairs::new(vertex_count, density);
    std::iter::from_fn(|| pairs.next_pair(rng).map(|(v, w)| (v, w, rng.u32(1..100)))).collect()
}

pub fn adj_map(pairs: &[(usize, usize, u32)]) -> AdjMap<usize, u32> {
    pairs.iter().copied().collect()
}

pub fn edge_list(pairs: &[(usize, usize, u32)]) -> Vec<Edge<u32>> {
    pairs.iter().copied().map(Edge::from).collect()
}

pub fn petgraph_graph<Ty: petgraph::EdgeType>(
    vertex_count: usize,
    pairs: &[(usize, usize, u32)],
) -> petgraph::Graph<(), u32, Ty> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, pairs.len());

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    for &(u, v, weight) in pairs {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), weight);
    }

    graph
}
