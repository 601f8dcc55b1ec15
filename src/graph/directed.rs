use crate::algorithm::{dijkstra::Dijkstra, Route, ShortestPathAlgorithm};
use crate::graph::{Edge, Graph};
use crate::{Error, Result};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// An immutable directed graph built from an edge list
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W = f64>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Edges in insertion order, parallel edges kept
    edges: Vec<Edge<N, W>>,

    /// Distinct nodes in first-appearance order
    nodes: Vec<N>,

    /// node -> position in `nodes`
    node_index: HashMap<N, usize>,

    /// node -> indices into `edges` of its outgoing edges, ascending
    outgoing: HashMap<N, Vec<usize>>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Builds a graph from any sequence of edges.
    ///
    /// The node set is every source and destination seen, deduplicated, in the
    /// order they first appear (source before destination). Never fails; an empty
    /// edge list gives an empty graph.
    pub fn new<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<N, W>>,
    {
        let edges: Vec<Edge<N, W>> = edges.into_iter().collect();
        let mut nodes = Vec::new();
        let mut node_index = HashMap::new();
        let mut outgoing: HashMap<N, Vec<usize>> = HashMap::new();

        for (idx, edge) in edges.iter().enumerate() {
            for node in [&edge.source, &edge.dest] {
                if !node_index.contains_key(node) {
                    node_index.insert(node.clone(), nodes.len());
                    nodes.push(node.clone());
                }
            }
            outgoing.entry(edge.source.clone()).or_default().push(idx);
        }

        DirectedGraph {
            edges,
            nodes,
            node_index,
            outgoing,
        }
    }

    /// Builds a graph like [`DirectedGraph::new`] but rejects the first edge whose
    /// cost is negative or NaN
    pub fn try_new<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge<N, W>>,
    {
        let graph = Self::new(edges);
        if let Some(edge) = graph.edges.iter().find(|e| !is_valid_cost(e.cost)) {
            return Err(Error::NegativeCost {
                from: format!("{:?}", edge.source),
                to: format!("{:?}", edge.dest),
                cost: edge.cost.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(graph)
    }

    /// Returns all edges in insertion order
    pub fn edges(&self) -> &[Edge<N, W>] {
        &self.edges
    }

    /// Returns true if the graph has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if any edge has a negative or NaN cost
    pub fn has_negative_costs(&self) -> bool {
        self.edges.iter().any(|e| !is_valid_cost(e.cost))
    }

    /// Cheapest route from `source` to `target` using the default [`Dijkstra`] engine
    pub fn distance(&self, source: &N, target: &N) -> Result<Route<N, W>> {
        Dijkstra::new().distance(self, source, target)
    }
}

fn is_valid_cost<W: Float>(cost: W) -> bool {
    cost >= W::zero()
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains(&self, node: &N) -> bool {
        self.node_index.contains_key(node)
    }

    fn edges_from(&self, node: &N) -> Box<dyn Iterator<Item = &Edge<N, W>> + '_> {
        if let Some(indices) = self.outgoing.get(node) {
            Box::new(indices.iter().map(move |&idx| &self.edges[idx]))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.iter())
    }
}

impl<N, W> FromIterator<Edge<N, W>> for DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn from_iter<I: IntoIterator<Item = Edge<N, W>>>(iter: I) -> Self {
        DirectedGraph::new(iter)
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        DirectedGraph::new(Vec::new())
    }
}
