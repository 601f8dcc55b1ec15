use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::Edge;

/// Read-only view of a weighted directed graph with labelled nodes
pub trait Graph<N, W>: Debug
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Returns the number of distinct nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns true if the node is mentioned by at least one edge
    fn contains(&self, node: &N) -> bool;

    /// Returns the edges leaving `node` in insertion order.
    ///
    /// Unknown nodes yield an empty iterator rather than an error.
    fn edges_from(&self, node: &N) -> Box<dyn Iterator<Item = &Edge<N, W>> + '_>;

    /// Returns an iterator over the nodes in first-appearance order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;
}
