use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::{Endpoint, Error, MissingNode, Result};

/// Result of a single shortest path query
///
/// `nodes` is the chain of predecessors from the source up to, but not
/// including, the target. A route from a node to itself has no nodes and zero
/// cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route<N, W = f64> {
    /// Predecessors of the target, starting at the source
    pub nodes: Vec<N>,

    /// Sum of the costs of the traversed edges
    pub cost: W,
}

impl<N, W> Route<N, W>
where
    N: Clone,
{
    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the complete path with `target` appended to the predecessor chain
    pub fn full_path(&self, target: &N) -> Vec<N> {
        let mut path = Vec::with_capacity(self.nodes.len() + 1);
        path.extend(self.nodes.iter().cloned());
        path.push(target.clone());
        path
    }
}

/// Trait for single-source, single-target shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    /// Compute the cheapest route from `source` to `target`
    fn distance(&self, graph: &G, source: &N, target: &N) -> Result<Route<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Fails with [`Error::InvalidNode`] naming every endpoint missing from `graph`
    fn validate_endpoints(&self, graph: &G, source: &N, target: &N) -> Result<()> {
        let missing: Vec<MissingNode> = [(Endpoint::Source, source), (Endpoint::Target, target)]
            .into_iter()
            .filter(|(_, node)| !graph.contains(node))
            .map(|(endpoint, node)| MissingNode {
                endpoint,
                node: format!("{:?}", node),
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidNode { missing })
        }
    }
}
