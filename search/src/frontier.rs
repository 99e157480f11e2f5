//! Best-first frontier over arena slots.
//!
//! The same slot may be pushed more than once when a cheaper path to it is
//! found; stale entries are skipped by the search loop once the slot is
//! closed.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::FrontierKey;

/// Min-heap of `(FrontierKey, slot)` with a monotonic push counter.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<(FrontierKey, usize)>>,
    next_seq: u64,
    high_water: u64,
}

impl BestFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `slot` with priority `f_cost`. Returns the assigned key.
    pub fn push(&mut self, slot: usize, f_cost: u64) -> FrontierKey {
        let key = FrontierKey {
            f_cost,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.heap.push(Reverse((key, slot)));
        self.high_water = self.high_water.max(self.heap.len() as u64);
        key
    }

    /// Pop the entry with the lowest key.
    pub fn pop(&mut self) -> Option<(FrontierKey, usize)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier ever reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
