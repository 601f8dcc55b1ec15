use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace, warn};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::algorithm::{Route, ShortestPathAlgorithm};
use crate::data_structures::{FrontierQueue, Relaxation, RouteTable};
use crate::graph::Graph;
use crate::{Error, Result};

/// How the next node to close is chosen
///
/// Both policies pick the open node with the smallest cost and break ties by
/// discovery order, so they always return the same route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierKind {
    /// Linear scan over every open entry, O(V^2) overall
    Scan,
    /// Binary heap with lazy deletion, O((V + E) log V)
    #[default]
    Heap,
}

/// Settings for the [`Dijkstra`] engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DijkstraConfig {
    pub frontier: FrontierKind,
}

/// Counters collected while answering one query
#[derive(Debug, Default, Clone, Copy)]
struct QueryStats {
    closed: usize,
    relaxations: usize,
    improvements: usize,
}

/// Classic Dijkstra's algorithm with lazily discovered nodes
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    config: DijkstraConfig,
}

impl Dijkstra {
    /// Creates a new Dijkstra engine with the default heap frontier
    pub fn new() -> Self {
        Dijkstra::default()
    }

    pub fn with_config(config: DijkstraConfig) -> Self {
        Dijkstra { config }
    }

    /// Set the frontier selection policy
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.config.frontier = frontier;
        self
    }

    pub fn config(&self) -> &DijkstraConfig {
        &self.config
    }

    /// Relaxes every edge leaving `current`, then closes it.
    ///
    /// `on_update` is told about each slot whose best cost changed.
    fn expand<N, W, G, F>(
        &self,
        graph: &G,
        table: &mut RouteTable<N, W>,
        current: usize,
        stats: &mut QueryStats,
        mut on_update: F,
    ) where
        N: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<N, W>,
        F: FnMut(usize, W),
    {
        let node = table.node(current).clone();
        trace!("closing {:?} at cost {:?}", node, table.cost(current));

        for edge in graph.edges_from(&node) {
            if edge.cost < W::zero() {
                warn!(
                    "relaxing negative edge {:?} -> {:?} ({:?}); result may not be minimal",
                    edge.source, edge.dest, edge.cost
                );
            }
            stats.relaxations += 1;

            match table.relax(current, &edge.dest, edge.cost) {
                Relaxation::Discovered(slot) | Relaxation::Improved(slot) => {
                    stats.improvements += 1;
                    trace!("  {:?} -> {:?} now costs {:?}", node, edge.dest, table.cost(slot));
                    on_update(slot, table.cost(slot));
                }
                Relaxation::Unchanged => {}
            }
        }

        table.close(current);
        stats.closed += 1;
    }

    fn run_scan<N, W, G>(
        &self,
        graph: &G,
        target: &N,
        table: &mut RouteTable<N, W>,
        stats: &mut QueryStats,
    ) where
        N: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<N, W>,
    {
        while let Some(current) = table.cheapest_open() {
            if table.node(current) == target {
                break;
            }
            self.expand(graph, table, current, stats, |_, _| {});
        }
    }

    fn run_heap<N, W, G>(
        &self,
        graph: &G,
        target: &N,
        table: &mut RouteTable<N, W>,
        stats: &mut QueryStats,
    ) where
        N: Clone + Eq + Hash + Debug,
        W: Float + Debug,
        G: Graph<N, W>,
    {
        let mut queue = FrontierQueue::new();
        queue.push(0, W::zero());

        while let Some((current, _)) = queue.pop() {
            // A slot is pushed again whenever it improves; older entries
            // surface after it has been closed.
            if table.is_closed(current) {
                continue;
            }
            if table.node(current) == target {
                break;
            }
            self.expand(graph, table, current, stats, |slot, cost| queue.push(slot, cost));
        }
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        match self.config.frontier {
            FrontierKind::Scan => "Dijkstra (scan)",
            FrontierKind::Heap => "Dijkstra (heap)",
        }
    }

    fn distance(&self, graph: &G, source: &N, target: &N) -> Result<Route<N, W>> {
        <Self as ShortestPathAlgorithm<N, W, G>>::validate_endpoints(self, graph, source, target)?;

        debug!(
            "{}: {:?} -> {:?} over {} nodes, {} edges",
            <Self as ShortestPathAlgorithm<N, W, G>>::name(self),
            source,
            target,
            graph.node_count(),
            graph.edge_count()
        );

        let mut table = RouteTable::new(source.clone());
        let mut stats = QueryStats::default();

        match self.config.frontier {
            FrontierKind::Scan => self.run_scan(graph, target, &mut table, &mut stats),
            FrontierKind::Heap => self.run_heap(graph, target, &mut table, &mut stats),
        }

        debug!(
            "closed {} nodes, {} relaxations ({} improving), {} nodes discovered",
            stats.closed,
            stats.relaxations,
            stats.improvements,
            table.len()
        );

        match table.slot_of(target) {
            Some(slot) => Ok(table.route_to(slot)),
            None => Err(Error::Unreachable {
                from: format!("{:?}", source),
                to: format!("{:?}", target),
            }),
        }
    }
}

/// Cheapest route from `source` to `target` using the default [`Dijkstra`] engine
pub fn distance<N, W, G>(graph: &G, source: &N, target: &N) -> Result<Route<N, W>>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
    G: Graph<N, W>,
{
    Dijkstra::new().distance(graph, source, target)
}
