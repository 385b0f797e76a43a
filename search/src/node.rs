//! Search nodes, the frontier ordering key, and the node arena.
//!
//! The arena is the sole owner of every node created during one search.
//! Frontier, registry, and parent links all refer to nodes by `node_id`,
//! which is the node's index in the arena.

use waypoint_kernel::grid::Cell;

/// One discovered occupancy of a grid cell.
///
/// Immutable once allocated. Several nodes may share a `cell` within one
/// search when a cell is reached again more cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Arena index; also the creation order.
    pub node_id: u64,
    /// Predecessor's `node_id` (`None` for the start node).
    pub parent_id: Option<u64>,
    pub cell: Cell,
    /// Step count from the start.
    pub g_cost: i64,
    /// Manhattan distance to the goal.
    pub h_cost: i64,
}

impl SearchNode {
    /// `f_cost = g_cost + h_cost`.
    #[must_use]
    pub fn f_cost(&self) -> i64 {
        self.g_cost.saturating_add(self.h_cost)
    }

    #[must_use]
    pub fn key(&self) -> FrontierKey {
        FrontierKey::from(self)
    }
}

/// What the frontier orders by. Comparison lives in
/// [`FrontierOrder`](crate::frontier::FrontierOrder), not on the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: i64,
    pub g_cost: i64,
    pub node_id: u64,
}

impl From<&SearchNode> for FrontierKey {
    fn from(node: &SearchNode) -> Self {
        Self {
            f_cost: node.f_cost(),
            g_cost: node.g_cost,
            node_id: node.node_id,
        }
    }
}

/// Owning store for all nodes of one search.
///
/// Dropping the arena releases every node at once.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a node; its `node_id` is the next arena index.
    pub fn alloc(
        &mut self,
        cell: Cell,
        g_cost: i64,
        h_cost: i64,
        parent_id: Option<u64>,
    ) -> &SearchNode {
        let node_id = self.nodes.len() as u64;
        self.nodes.push(SearchNode {
            node_id,
            parent_id,
            cell,
            g_cost,
            h_cost,
        });
        &self.nodes[self.nodes.len() - 1]
    }

    #[must_use]
    pub fn get(&self, node_id: u64) -> Option<&SearchNode> {
        usize::try_from(node_id)
            .ok()
            .and_then(|idx| self.nodes.get(idx))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchNode> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a NodeArena {
    type Item = &'a SearchNode;
    type IntoIter = std::slice::Iter<'a, SearchNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
