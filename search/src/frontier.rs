//! Open frontier: an array-backed binary min-heap of node ids.
//!
//! Heap invariant: for every index `i > 0`, the parent entry does not compare
//! greater than entry `i` under the frontier's [`FrontierOrder`].
//! Storage grows on demand; [`OpenFrontier::with_capacity`] pre-sizes it to the
//! grid's cell count so a typical search never reallocates.

use std::cmp::Ordering;

use crate::node::FrontierKey;

/// How the frontier compares two keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierOrder {
    /// `f_cost` alone. Equal-`f` entries leave in whatever order the sift
    /// mechanics produce, which is fixed for a given push/pop sequence.
    #[default]
    TotalCost,
    /// `f_cost` ascending, then deeper `g_cost`, then older `node_id`.
    DeepestFirst,
}

impl FrontierOrder {
    #[must_use]
    pub fn compare(self, a: &FrontierKey, b: &FrontierKey) -> Ordering {
        match self {
            Self::TotalCost => a.f_cost.cmp(&b.f_cost),
            Self::DeepestFirst => a
                .f_cost
                .cmp(&b.f_cost)
                .then_with(|| b.g_cost.cmp(&a.g_cost))
                .then_with(|| a.node_id.cmp(&b.node_id)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    key: FrontierKey,
    node_id: u64,
}

/// Min-heap of discovered-but-unexpanded nodes.
///
/// The frontier does not own nodes; it holds arena ids plus the key each
/// node had when it was pushed. Each entry is removed exactly once, by `pop`.
#[derive(Debug, Clone, Default)]
pub struct OpenFrontier {
    entries: Vec<FrontierEntry>,
    order: FrontierOrder,
    high_water: u64,
}

impl OpenFrontier {
    #[must_use]
    pub fn new(order: FrontierOrder) -> Self {
        Self::with_capacity(order, 0)
    }

    #[must_use]
    pub fn with_capacity(order: FrontierOrder, capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            order,
            high_water: 0,
        }
    }

    /// Insert a node id under `key`. O(log n).
    pub fn push(&mut self, key: FrontierKey, node_id: u64) {
        self.entries.push(FrontierEntry { key, node_id });
        self.sift_up(self.entries.len() - 1);
        let size = self.entries.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove and return the minimum-key entry. O(log n).
    ///
    /// The last element moves to the root and sifts down toward the smaller
    /// child until the heap invariant holds again.
    pub fn pop(&mut self) -> Option<(FrontierKey, u64)> {
        if self.entries.is_empty() {
            return None;
        }
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((min.key, min.node_id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.entries.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.order.compare(&self.entries[a].key, &self.entries[b].key) == Ordering::Less
    }

    #[cfg(test)]
    fn invariant_holds(&self) -> bool {
        (1..self.entries.len()).all(|i| !self.less(i, (i - 1) / 2))
    }
}
