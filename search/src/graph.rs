//! `SearchGraph`: expansion-event audit log.
//!
//! The normative record is the ordered list of `ExpandEvent` entries, one per
//! frontier pop. Node summaries are a derived index in `node_id` order.

use waypoint_kernel::grid::Cell;
use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;

use crate::node::FrontierKey;
use crate::policy::DedupPolicy;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    /// One event per frontier pop, in pop order.
    pub expansions: Vec<ExpandEvent>,
    /// Every node created, sorted by `node_id` ascending.
    pub node_summaries: Vec<NodeSummary>,
    pub metadata: SearchGraphMetadata,
}

/// A single frontier pop and what came of it.
#[derive(Debug, Clone)]
pub struct ExpandEvent {
    /// Total order of frontier pops.
    pub expansion_order: u64,
    pub node_id: u64,
    pub cell: Cell,
    /// The frontier key at time of pop.
    pub pop_key: FrontierKey,
    pub outcome: PopOutcome,
    /// Neighbour decisions in fixed offset order; empty unless `Expanded`.
    pub neighbors: Vec<NeighborRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopOutcome {
    /// The popped node sits on the goal cell.
    Goal,
    /// Neighbours were evaluated.
    Expanded,
    /// A cheaper node for this cell was already recorded (`BestCost` only).
    StaleSkipped { best_node: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRecord {
    pub cell: Cell,
    pub outcome: NeighborOutcome,
}

/// What happened to one orthogonal neighbour during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborOutcome {
    OutOfBounds,
    Blocked,
    /// A new node was created and pushed.
    Discovered { to_node: u64 },
    /// The registry already held an entry at least as cheap.
    DuplicateSuppressed { existing_node: u64, existing_g_cost: i64 },
}

/// Derived per-node summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub cell: Cell,
    pub g_cost: i64,
    pub h_cost: i64,
    pub is_goal: bool,
    /// Pop order of this node, if it was ever popped.
    pub expansion_order: Option<u64>,
}

/// Aggregate metadata and counters.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    // Inputs
    pub grid_fingerprint: ContentHash,
    pub width: i32,
    pub height: i32,
    pub start: Cell,
    pub goal: Cell,

    // Policy echo
    pub dedup: DedupPolicy,
    pub max_expansions: Option<u64>,

    // Counters
    pub total_pops: u64,
    pub total_expansions: u64,
    pub total_nodes_created: u64,
    pub total_duplicates_suppressed: u64,
    pub total_stale_skipped: u64,
    /// Distinct cells that received at least one node.
    pub total_cells_discovered: u64,
    /// Cells that received more than one node.
    pub total_cells_rediscovered: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A node on the goal cell was popped.
    GoalReached { node_id: u64 },
    /// The frontier emptied without reaching the goal.
    FrontierExhausted,
    /// `max_expansions` pops happened without reaching the goal.
    ExpansionBudgetExceeded { budget: u64 },
    /// The frontier yielded an id the node arena does not hold.
    FrontierInvariantViolation { node_id: u64 },
}

impl TerminationReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded { .. } => "expansion_budget_exceeded",
            Self::FrontierInvariantViolation { .. } => "frontier_invariant_violation",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraph {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

fn cell_to_json(c: Cell) -> serde_json::Value {
    serde_json::json!([c.x, c.y])
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "cell": cell_to_json(e.cell),
        "expansion_order": e.expansion_order,
        "neighbors": e.neighbors.iter().map(neighbor_to_json).collect::<Vec<_>>(),
        "node_id": e.node_id,
        "outcome": pop_outcome_to_json(e.outcome),
        "pop_key": {
            "f_cost": e.pop_key.f_cost,
            "g_cost": e.pop_key.g_cost,
            "node_id": e.pop_key.node_id,
        },
    })
}

fn pop_outcome_to_json(o: PopOutcome) -> serde_json::Value {
    match o {
        PopOutcome::Goal => serde_json::json!({"type": "goal"}),
        PopOutcome::Expanded => serde_json::json!({"type": "expanded"}),
        PopOutcome::StaleSkipped { best_node } => {
            serde_json::json!({"best_node": best_node, "type": "stale_skipped"})
        }
    }
}

fn neighbor_to_json(n: &NeighborRecord) -> serde_json::Value {
    let outcome = match n.outcome {
        NeighborOutcome::OutOfBounds => serde_json::json!({"type": "out_of_bounds"}),
        NeighborOutcome::Blocked => serde_json::json!({"type": "blocked"}),
        NeighborOutcome::Discovered { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "discovered"})
        }
        NeighborOutcome::DuplicateSuppressed {
            existing_node,
            existing_g_cost,
        } => serde_json::json!({
            "existing_g_cost": existing_g_cost,
            "existing_node": existing_node,
            "type": "duplicate_suppressed",
        }),
    };
    serde_json::json!({"cell": cell_to_json(n.cell), "outcome": outcome})
}

fn node_summary_to_json(n: &NodeSummary) -> serde_json::Value {
    serde_json::json!({
        "cell": cell_to_json(n.cell),
        "expansion_order": n.expansion_order,
        "g_cost": n.g_cost,
        "h_cost": n.h_cost,
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "dedup": m.dedup.as_str(),
        "frontier_high_water": m.frontier_high_water,
        "goal": cell_to_json(m.goal),
        "grid_fingerprint": m.grid_fingerprint.as_str(),
        "height": m.height,
        "max_expansions": m.max_expansions,
        "start": cell_to_json(m.start),
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_cells_discovered": m.total_cells_discovered,
        "total_cells_rediscovered": m.total_cells_rediscovered,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "total_nodes_created": m.total_nodes_created,
        "total_pops": m.total_pops,
        "total_stale_skipped": m.total_stale_skipped,
        "width": m.width,
    })
}

fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": r.as_str()}),
        TerminationReason::ExpansionBudgetExceeded { budget } => {
            serde_json::json!({"budget": budget, "type": r.as_str()})
        }
        TerminationReason::FrontierInvariantViolation { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
    }
}
