pub mod traits;
pub mod dijkstra;

pub use traits::{Route, ShortestPathAlgorithm};
