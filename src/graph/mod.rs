pub mod traits;
pub mod edge;
pub mod directed;

pub use traits::Graph;
pub use edge::Edge;
pub use directed::DirectedGraph;
