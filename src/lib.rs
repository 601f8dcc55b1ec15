//! Route Finder - Single-Source, Single-Target Shortest Paths
//!
//! This library answers "what is the cheapest path from node A to node B?" over a
//! weighted directed graph built from a plain list of edges, using Dijkstra's
//! algorithm with a deterministic frontier.
//!
//! Nodes are any hashable labels (usually strings) and edge costs are real,
//! non-negative numbers. Each query allocates its own working state, so a single
//! graph can be shared freely between threads.
//!
//! ```
//! use route_finder::{DirectedGraph, Edge};
//!
//! let graph = DirectedGraph::new(vec![
//!     Edge::new("A", "B", 5.0),
//!     Edge::new("A", "C", 10.0),
//!     Edge::new("B", "C", 4.0),
//! ]);
//!
//! let route = graph.distance(&"A", &"C").unwrap();
//! assert_eq!(route.cost, 9.0);
//! assert_eq!(route.nodes, vec!["A", "B"]);
//! ```

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;

pub use algorithm::{
    dijkstra::{distance, Dijkstra, DijkstraConfig, FrontierKind},
    Route, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge, Graph};

use std::fmt;

/// Which end of a query a missing node was passed as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Target => f.write_str("target"),
        }
    }
}

/// A query endpoint that is not part of the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingNode {
    pub endpoint: Endpoint,
    pub node: String,
}

impl fmt::Display for MissingNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.endpoint, self.node)
    }
}

fn join_missing(missing: &[MissingNode]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Nodes must belong to graph: {}", join_missing(.missing))]
    InvalidNode { missing: Vec<MissingNode> },

    #[error("Unreachable node: no path from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("Negative edge cost {cost} on edge from {from} to {to}")]
    NegativeCost { from: String, to: String, cost: f64 },
}

impl Error {
    /// Returns true for errors caused by a query endpoint missing from the graph
    pub fn is_invalid_node(&self) -> bool {
        matches!(self, Error::InvalidNode { .. })
    }

    /// Returns true when both endpoints exist but are not connected
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Error::Unreachable { .. })
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
