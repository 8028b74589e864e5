pub mod frontier;
pub mod union_find;

pub use frontier::Frontier;
pub use union_find::UnionFind;
