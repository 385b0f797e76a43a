//! Discovery registry: every node created during a search, indexed by cell.
//!
//! Entries are append-only. A cell reached several times keeps all of its
//! historical nodes in creation order; [`DedupPolicy`] decides which one a
//! lookup reports. Uses `BTreeMap` for deterministic iteration at
//! serialization boundaries.

use std::collections::BTreeMap;

use waypoint_kernel::grid::Cell;

use crate::node::SearchNode;
use crate::policy::DedupPolicy;

/// A non-owning registry record: the node id and its cost at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub node_id: u64,
    pub g_cost: i64,
}

#[derive(Debug, Clone, Default)]
pub struct DiscoveryRegistry {
    by_cell: BTreeMap<Cell, Vec<RegistryEntry>>,
    recorded: u64,
}

impl DiscoveryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` under its cell. Prior entries for the cell are kept.
    pub fn record_discovery(&mut self, node: &SearchNode) {
        self.by_cell.entry(node.cell).or_default().push(RegistryEntry {
            node_id: node.node_id,
            g_cost: node.g_cost,
        });
        self.recorded += 1;
    }

    /// The entry at `(x, y)` that `policy` compares against, if any.
    ///
    /// - [`DedupPolicy::FirstMatch`]: the earliest recorded entry.
    /// - [`DedupPolicy::BestCost`]: the cheapest entry (earliest on ties).
    #[must_use]
    pub fn find_best_known(&self, x: i32, y: i32, policy: DedupPolicy) -> Option<RegistryEntry> {
        let entries = self.by_cell.get(&Cell::new(x, y))?;
        match policy {
            DedupPolicy::FirstMatch => entries.first().copied(),
            DedupPolicy::BestCost => entries
                .iter()
                .copied()
                .min_by_key(|e| (e.g_cost, e.node_id)),
        }
    }

    /// All entries ever recorded at `cell`, in creation order.
    #[must_use]
    pub fn entries_at(&self, cell: Cell) -> &[RegistryEntry] {
        self.by_cell.get(&cell).map_or(&[][..], Vec::as_slice)
    }

    /// Total recorded nodes, duplicates included.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.recorded
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }

    /// Number of distinct cells with at least one node.
    #[must_use]
    pub fn distinct_cells(&self) -> usize {
        self.by_cell.len()
    }

    /// Cells that hold more than one node, with their entry counts.
    pub fn duplicated_cells(&self) -> impl Iterator<Item = (Cell, usize)> + '_ {
        self.by_cell
            .iter()
            .filter(|(_, v)| v.len() > 1)
            .map(|(c, v)| (*c, v.len()))
    }
}
