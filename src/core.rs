pub mod weight;

mod edge;

pub use edge::Edge;
pub use weight::Weight;
