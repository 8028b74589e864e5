mod common;

use classic_graph::algo::TopoSort;
use common::{adj_map, petgraph_graph, random_pairs, RANDOM_SEED};
use fastrand::Rng;
use petgraph::Directed;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn kahn_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let pairs = random_pairs(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let graph = adj_map(&pairs);

    bencher.bench(|| {
        TopoSort::on(&graph)
            .vertex_count(N)
            .run()
            .collect::<Vec<_>>()
    });
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn petgraph_toposort_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let pairs = random_pairs(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let graph = petgraph_graph::<Directed>(N, &pairs);

    bencher.bench(|| petgraph::algo::toposort(&graph, None));
}
