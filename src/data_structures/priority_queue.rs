use ordered_float::OrderedFloat;
use num_traits::Float;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-heap of route table slots ordered by `(cost, slot)`.
///
/// Slots are numbered in discovery order, so equal costs pop the
/// earliest-discovered node first. Entries are never decreased in place: an
/// improved cost is pushed again and the outdated entry is discarded by the
/// caller once the slot is closed.
#[derive(Debug)]
pub struct FrontierQueue<W>
where
    W: Float + Debug,
{
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
}

impl<W> FrontierQueue<W>
where
    W: Float + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        FrontierQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a slot with its current best cost
    pub fn push(&mut self, slot: usize, cost: W) {
        self.heap.push(Reverse((OrderedFloat(cost), slot)));
    }

    /// Removes the cheapest entry
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap.pop().map(|Reverse((cost, slot))| (slot, cost.into_inner()))
    }

    /// Returns the cheapest entry without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.heap.peek().map(|Reverse((cost, slot))| (*slot, cost.into_inner()))
    }
}

impl<W> Default for FrontierQueue<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
