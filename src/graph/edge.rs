use serde::{Deserialize, Serialize};

/// A directed, weighted connection from `source` to `dest`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<N, W = f64> {
    pub source: N,
    pub dest: N,
    pub cost: W,
}

impl<N, W> Edge<N, W> {
    /// Creates a new edge
    pub fn new(source: N, dest: N, cost: W) -> Self {
        Edge { source, dest, cost }
    }
}

impl<N, W> From<(N, N, W)> for Edge<N, W> {
    fn from((source, dest, cost): (N, N, W)) -> Self {
        Edge::new(source, dest, cost)
    }
}
