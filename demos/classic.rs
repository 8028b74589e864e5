use classic_graph::{
    algo::{shortest_path::heuristic::LabelHash, ShortestPath, SpanningTree, TopoSort},
    core::Edge,
    storage::AdjMap,
};
use tracing_subscriber::EnvFilter;

fn main() {
    // Set RUST_LOG=classic_graph=trace to follow the algorithms step by step.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut graph = AdjMap::new();
    graph.extend_with_edges([("A", "B", 1u32), ("A", "C", 4), ("B", "D", 2), ("C", "D", 1)]);

    match ShortestPath::on(&graph).heuristic(LabelHash).run("A", "D") {
        Ok(Some(path)) => println!("A* Path: {path} (cost {})", path.cost()),
        Ok(None) => println!("A* Path: goal not reachable"),
        Err(error) => eprintln!("A* failed: {error}"),
    }

    let edges = [Edge::new(0, 1, 4u32), Edge::new(1, 2, 8), Edge::new(2, 3, 7)];
    let mst = SpanningTree::on(&edges).vertex_count(4).run();
    println!("Kruskal MST: {mst} (total weight {})", mst.total_weight());

    let mut dag = AdjMap::new();
    dag.extend_with_edges([(0, 1, ()), (0, 2, ()), (1, 3, ()), (2, 3, ())]);

    match TopoSort::on(&dag).vertex_count(4).run().into_vec() {
        Ok(order) => println!("Kahn's Topological Sort: {order:?}"),
        Err(error) => eprintln!("Kahn's Topological Sort failed: {error}"),
    }

    // A* Path: A -> B -> D (cost 3)
    // Kruskal MST: [0 - 1 (4), 2 - 3 (7), 1 - 2 (8)] (total weight 19)
    // Kahn's Topological Sort: [0, 1, 2, 3]
}
