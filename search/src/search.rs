//! Search entry point and A* expansion loop.

use tracing::{debug, trace};
use waypoint_kernel::grid::{manhattan, Cell, Grid};

use crate::error::SearchError;
use crate::frontier::OpenFrontier;
use crate::graph::{
    ExpandEvent, NeighborOutcome, NeighborRecord, NodeSummary, PopOutcome, SearchGraph,
    SearchGraphMetadata, TerminationReason,
};
use crate::node::NodeArena;
use crate::path::{reconstruct_path, GridPath};
use crate::policy::{DedupPolicy, SearchPolicy};
use crate::registry::DiscoveryRegistry;

/// Caller-facing outcome of a path query.
///
/// "No path" is a valid terminal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// An optimal start→goal path.
    Found(GridPath),
    /// The frontier was exhausted without reaching the goal.
    NoPath,
    /// The expansion budget ran out first. The goal may still be reachable.
    BudgetExhausted { expansions: u64 },
}

impl PathOutcome {
    #[must_use]
    pub fn path(&self) -> Option<&GridPath> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPath | Self::BudgetExhausted { .. } => None,
        }
    }

    #[must_use]
    pub fn into_path(self) -> Option<GridPath> {
        match self {
            Self::Found(p) => Some(p),
            Self::NoPath | Self::BudgetExhausted { .. } => None,
        }
    }
}

/// Result of a search execution.
///
/// Always contains a complete `SearchGraph` regardless of how the search
/// terminated, plus the node arena so the goal chain can be re-walked.
#[derive(Debug)]
pub struct SearchResult {
    /// The goal node id (if found).
    pub goal_node: Option<u64>,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: NodeArena,
    /// Per-cell discovery history of `nodes`.
    pub registry: DiscoveryRegistry,
    pub graph: SearchGraph,
}

impl SearchResult {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(
            self.graph.metadata.termination_reason,
            TerminationReason::GoalReached { .. }
        )
    }

    #[must_use]
    pub fn termination_reason(&self) -> TerminationReason {
        self.graph.metadata.termination_reason
    }

    /// Reconstruct the goal path. Can be called repeatedly.
    #[must_use]
    pub fn path(&self) -> Option<GridPath> {
        reconstruct_path(&self.nodes, self.goal_node)
    }

    #[must_use]
    pub fn outcome(&self) -> PathOutcome {
        match self.termination_reason() {
            TerminationReason::GoalReached { .. } => {
                self.path().map_or(PathOutcome::NoPath, PathOutcome::Found)
            }
            TerminationReason::ExpansionBudgetExceeded { .. } => PathOutcome::BudgetExhausted {
                expansions: self.graph.metadata.total_pops,
            },
            TerminationReason::FrontierExhausted
            | TerminationReason::FrontierInvariantViolation { .. } => PathOutcome::NoPath,
        }
    }
}

/// Run A* from `start` to `goal` over `grid`.
///
/// Start and goal are not validated: an out-of-bounds or blocked start still
/// seeds the frontier, and a goal that can never be entered exhausts it.
/// Each call owns a fresh arena, frontier, and registry.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. No `SearchGraph` is produced in this case.
#[allow(clippy::too_many_lines)]
pub fn search(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    policy: &SearchPolicy,
) -> Result<SearchResult, SearchError> {
    policy.validate()?;

    debug!(
        width = grid.width(),
        height = grid.height(),
        %start,
        %goal,
        dedup = policy.dedup.as_str(),
        "search started"
    );

    let capacity = grid.cell_count();
    let mut nodes = NodeArena::with_capacity(capacity);
    let mut frontier = OpenFrontier::with_capacity(policy.dedup.frontier_order(), capacity);
    let mut registry = DiscoveryRegistry::new();
    let mut expansions: Vec<ExpandEvent> = Vec::new();
    let mut total_expansions: u64 = 0;
    let mut total_duplicates_suppressed: u64 = 0;
    let mut total_stale_skipped: u64 = 0;

    let root = nodes.alloc(start, 0, manhattan(start, goal), None);
    registry.record_discovery(root);
    frontier.push(root.key(), root.node_id);

    let termination_reason = loop {
        if frontier.is_empty() {
            break TerminationReason::FrontierExhausted;
        }
        let pops = expansions.len() as u64;
        if let Some(budget) = policy.max_expansions {
            if pops >= budget {
                break TerminationReason::ExpansionBudgetExceeded { budget };
            }
        }

        let Some((pop_key, node_id)) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };
        let Some(current) = nodes.get(node_id).cloned() else {
            break TerminationReason::FrontierInvariantViolation { node_id };
        };

        let mut event = ExpandEvent {
            expansion_order: pops,
            node_id,
            cell: current.cell,
            pop_key,
            outcome: PopOutcome::Expanded,
            neighbors: Vec::new(),
        };

        if current.cell == goal {
            event.outcome = PopOutcome::Goal;
            expansions.push(event);
            break TerminationReason::GoalReached { node_id };
        }

        // Closed-set check: a cheaper node for this cell was recorded after
        // this one was pushed, so expanding it cannot improve anything.
        if policy.dedup == DedupPolicy::BestCost {
            if let Some(best) =
                registry.find_best_known(current.cell.x, current.cell.y, DedupPolicy::BestCost)
            {
                if best.g_cost < current.g_cost {
                    trace!(node_id, cell = %current.cell, best_node = best.node_id, "stale pop skipped");
                    event.outcome = PopOutcome::StaleSkipped {
                        best_node: best.node_id,
                    };
                    expansions.push(event);
                    total_stale_skipped += 1;
                    continue;
                }
            }
        }

        let new_cost = current.g_cost + 1;
        for neighbor in current.cell.neighbors_4() {
            let outcome = if !grid.is_in_bounds(neighbor.x, neighbor.y) {
                NeighborOutcome::OutOfBounds
            } else if grid.is_blocked(neighbor.x, neighbor.y) {
                NeighborOutcome::Blocked
            } else {
                match registry.find_best_known(neighbor.x, neighbor.y, policy.dedup) {
                    Some(existing) if existing.g_cost <= new_cost => {
                        total_duplicates_suppressed += 1;
                        NeighborOutcome::DuplicateSuppressed {
                            existing_node: existing.node_id,
                            existing_g_cost: existing.g_cost,
                        }
                    }
                    _ => {
                        let child = nodes.alloc(
                            neighbor,
                            new_cost,
                            manhattan(neighbor, goal),
                            Some(node_id),
                        );
                        registry.record_discovery(child);
                        frontier.push(child.key(), child.node_id);
                        NeighborOutcome::Discovered {
                            to_node: child.node_id,
                        }
                    }
                }
            };
            event.neighbors.push(NeighborRecord {
                cell: neighbor,
                outcome,
            });
        }

        trace!(
            node_id,
            cell = %current.cell,
            f_cost = pop_key.f_cost,
            frontier_len = frontier.len(),
            "expanded"
        );
        expansions.push(event);
        total_expansions += 1;
    };

    let goal_node = match termination_reason {
        TerminationReason::GoalReached { node_id } => Some(node_id),
        _ => None,
    };

    debug!(
        reason = termination_reason.as_str(),
        pops = expansions.len(),
        nodes = nodes.len(),
        duplicates = total_duplicates_suppressed,
        stale = total_stale_skipped,
        rediscovered = registry.duplicated_cells().count(),
        frontier_high_water = frontier.high_water(),
        "search finished"
    );

    let metadata = SearchGraphMetadata {
        grid_fingerprint: grid.fingerprint(),
        width: grid.width(),
        height: grid.height(),
        start,
        goal,
        dedup: policy.dedup,
        max_expansions: policy.max_expansions,
        total_pops: expansions.len() as u64,
        total_expansions,
        total_nodes_created: registry.len(),
        total_duplicates_suppressed,
        total_stale_skipped,
        total_cells_discovered: registry.distinct_cells() as u64,
        total_cells_rediscovered: registry.duplicated_cells().count() as u64,
        frontier_high_water: frontier.high_water(),
        termination_reason,
    };
    let graph = build_graph(expansions, &nodes, metadata);

    Ok(SearchResult {
        goal_node,
        nodes,
        registry,
        graph,
    })
}

fn build_graph(
    expansions: Vec<ExpandEvent>,
    nodes: &NodeArena,
    metadata: SearchGraphMetadata,
) -> SearchGraph {
    // Each node is pushed once, so it is popped at most once.
    let mut pop_order: Vec<Option<u64>> = vec![None; nodes.len()];
    for e in &expansions {
        if let Some(slot) = usize::try_from(e.node_id)
            .ok()
            .and_then(|idx| pop_order.get_mut(idx))
        {
            *slot = Some(e.expansion_order);
        }
    }

    let goal_id = match metadata.termination_reason {
        TerminationReason::GoalReached { node_id } => Some(node_id),
        _ => None,
    };

    let node_summaries = nodes
        .iter()
        .zip(pop_order)
        .map(|(n, expansion_order)| NodeSummary {
            node_id: n.node_id,
            parent_id: n.parent_id,
            cell: n.cell,
            g_cost: n.g_cost,
            h_cost: n.h_cost,
            is_goal: goal_id == Some(n.node_id),
            expansion_order,
        })
        .collect();

    SearchGraph {
        expansions,
        node_summaries,
        metadata,
    }
}
