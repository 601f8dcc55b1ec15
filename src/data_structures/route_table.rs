use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::Route;

/// Best known route to one node during a query
#[derive(Debug, Clone)]
struct Slot<N, W> {
    node: N,
    cost: W,
    /// Slot of the node this route arrives from; `None` for the source
    predecessor: Option<usize>,
    closed: bool,
}

/// Outcome of offering a candidate route to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// The node had no entry yet and was assigned this slot
    Discovered(usize),
    /// The candidate was strictly cheaper and replaced the entry in this slot
    Improved(usize),
    /// The existing entry was kept
    Unchanged,
}

/// Per-query working state: the best known route per node plus the closed set.
///
/// Nodes receive slots lazily, in the order they are first reached, and the
/// slot number doubles as the discovery sequence used for tie-breaking. Slot 0
/// is always the source. Routes are stored as predecessor links and only
/// materialised by [`RouteTable::route_to`].
#[derive(Debug)]
pub struct RouteTable<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    slots: Vec<Slot<N, W>>,
    index: HashMap<N, usize>,
}

impl<N, W> RouteTable<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Creates a table holding only `source` at cost zero
    pub fn new(source: N) -> Self {
        let mut index = HashMap::new();
        index.insert(source.clone(), 0);
        RouteTable {
            slots: vec![Slot {
                node: source,
                cost: W::zero(),
                predecessor: None,
                closed: false,
            }],
            index,
        }
    }

    /// Number of nodes with an entry
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub fn node(&self, slot: usize) -> &N {
        &self.slots[slot].node
    }

    pub fn cost(&self, slot: usize) -> W {
        self.slots[slot].cost
    }

    pub fn is_closed(&self, slot: usize) -> bool {
        self.slots[slot].closed
    }

    /// Finalises a slot; its route will not change afterwards
    pub fn close(&mut self, slot: usize) {
        self.slots[slot].closed = true;
    }

    /// Offers `dest` a route through `from` with the given edge cost.
    ///
    /// Equal-cost candidates never replace an existing entry. Closed nodes and
    /// `from` itself are never updated, which keeps predecessor links acyclic.
    pub fn relax(&mut self, from: usize, dest: &N, edge_cost: W) -> Relaxation {
        let candidate = self.slots[from].cost + edge_cost;

        match self.index.get(dest).copied() {
            None => {
                let slot = self.slots.len();
                self.index.insert(dest.clone(), slot);
                self.slots.push(Slot {
                    node: dest.clone(),
                    cost: candidate,
                    predecessor: Some(from),
                    closed: false,
                });
                Relaxation::Discovered(slot)
            }
            Some(slot) => {
                let entry = &mut self.slots[slot];
                if slot != from && !entry.closed && candidate < entry.cost {
                    entry.cost = candidate;
                    entry.predecessor = Some(from);
                    Relaxation::Improved(slot)
                } else {
                    Relaxation::Unchanged
                }
            }
        }
    }

    /// Linear scan for the cheapest open slot.
    ///
    /// Slots are visited in discovery order and only a strictly smaller cost
    /// displaces the current pick, so ties go to the earliest-discovered node.
    pub fn cheapest_open(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (slot, entry) in self.slots.iter().enumerate() {
            if entry.closed {
                continue;
            }
            match best {
                Some(b) if !(entry.cost < self.slots[b].cost) => {}
                _ => best = Some(slot),
            }
        }
        best
    }

    /// Rebuilds the route ending at `slot` from predecessor links
    pub fn route_to(&self, slot: usize) -> Route<N, W> {
        let mut nodes = Vec::new();
        let mut current = self.slots[slot].predecessor;
        while let Some(pred) = current {
            nodes.push(self.slots[pred].node.clone());
            current = self.slots[pred].predecessor;
        }
        nodes.reverse();

        Route {
            nodes,
            cost: self.slots[slot].cost,
        }
    }
}
