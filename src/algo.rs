pub mod shortest_path;
pub mod spanning_tree;
pub mod toposort;

pub use shortest_path::ShortestPath;
pub use spanning_tree::SpanningTree;
pub use toposort::TopoSort;
