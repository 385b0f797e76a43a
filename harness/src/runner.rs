//! Harness runner: scenario in, outcome plus digests out.
//!
//! # Pipeline
//!
//! ```text
//! Scenario::build_grid() → search() → SearchGraph::to_canonical_json_bytes()
//!   → path digest → report JSON → canonical_hash(RunReport)
//! ```
//!
//! Every hashed surface is derived from scenario content only. File paths,
//! cwd and wall-clock time never enter a digest.

use tracing::{info, warn};
use waypoint_kernel::grid::Grid;
use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;
use waypoint_search::error::SearchError;
use waypoint_search::graph::{SearchGraph, TerminationReason};
use waypoint_search::path::PathViolation;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::search::{search, PathOutcome};

use crate::scenario::{Scenario, ScenarioError};

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("canonical JSON failed: {0}")]
    Canon(#[from] CanonError),
    /// A found path failed validation against its own grid (engine bug).
    #[error("path failed validation: {0}")]
    InvalidPath(#[from] PathViolation),
}

/// Everything one scenario run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub scenario_name: String,
    pub grid: Grid,
    pub policy: SearchPolicy,
    pub outcome: PathOutcome,
    pub termination_reason: TerminationReason,
    pub graph: SearchGraph,
    /// Canonical JSON bytes of `graph`.
    pub graph_bytes: Vec<u8>,
    pub scenario_digest: ContentHash,
    pub grid_fingerprint: ContentHash,
    pub graph_digest: ContentHash,
    /// `None` unless a path was found.
    pub path_digest: Option<ContentHash>,
    /// Digest over the canonical report JSON, binding all of the above.
    pub report_digest: ContentHash,
}

impl RunReport {
    /// Report summary as canonical-ready JSON (no graph body).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        report_json(
            &self.scenario_name,
            &self.grid,
            &self.policy,
            &self.outcome,
            self.termination_reason,
            &self.scenario_digest,
            &self.graph_digest,
            self.path_digest.as_ref(),
        )
    }
}

/// Run the scenario with its own policy.
///
/// # Errors
///
/// See [`run_scenario_with_policy`].
pub fn run_scenario(scenario: &Scenario) -> Result<RunReport, RunError> {
    run_scenario_with_policy(scenario, &scenario.policy)
}

/// Run the scenario under `policy`, ignoring the scenario's own policy block.
///
/// # Errors
///
/// Returns [`RunError`] if the grid cannot be built, the policy is invalid,
/// or canonical serialization fails. An unreachable goal is not an error.
pub fn run_scenario_with_policy(
    scenario: &Scenario,
    policy: &SearchPolicy,
) -> Result<RunReport, RunError> {
    let grid = scenario.build_grid()?;
    let scenario_digest = scenario.digest()?;
    let result = search(&grid, scenario.start_cell(), scenario.goal_cell(), policy)?;

    let outcome = result.outcome();
    let path_digest = match &outcome {
        PathOutcome::Found(path) => {
            path.validate_on(&grid)?;
            Some(path.digest())
        }
        PathOutcome::NoPath | PathOutcome::BudgetExhausted { .. } => None,
    };

    let graph_bytes = result.graph.to_canonical_json_bytes()?;
    let graph_digest = canonical_hash(HashDomain::SearchGraph, &graph_bytes);
    let termination_reason = result.termination_reason();

    let report = report_json(
        &scenario.name,
        &grid,
        policy,
        &outcome,
        termination_reason,
        &scenario_digest,
        &graph_digest,
        path_digest.as_ref(),
    );
    let report_digest = canonical_hash(HashDomain::RunReport, &canonical_json_bytes(&report)?);

    match &outcome {
        PathOutcome::Found(path) => info!(
            scenario = %scenario.name,
            cells = path.len(),
            cost = path.step_cost(),
            pops = result.graph.metadata.total_pops,
            "path found"
        ),
        PathOutcome::NoPath => info!(
            scenario = %scenario.name,
            pops = result.graph.metadata.total_pops,
            "no path"
        ),
        PathOutcome::BudgetExhausted { expansions } => warn!(
            scenario = %scenario.name,
            expansions,
            "expansion budget exhausted before reaching goal"
        ),
    }

    Ok(RunReport {
        scenario_name: scenario.name.clone(),
        grid_fingerprint: grid.fingerprint(),
        grid,
        policy: *policy,
        outcome,
        termination_reason,
        graph: result.graph,
        graph_bytes,
        scenario_digest,
        graph_digest,
        path_digest,
        report_digest,
    })
}

#[allow(clippy::too_many_arguments)]
fn report_json(
    scenario_name: &str,
    grid: &Grid,
    policy: &SearchPolicy,
    outcome: &PathOutcome,
    termination_reason: TerminationReason,
    scenario_digest: &ContentHash,
    graph_digest: &ContentHash,
    path_digest: Option<&ContentHash>,
) -> serde_json::Value {
    let (outcome_type, path) = match outcome {
        PathOutcome::Found(p) => ("found", p.to_json_value()),
        PathOutcome::NoPath => ("no_path", serde_json::Value::Null),
        PathOutcome::BudgetExhausted { .. } => ("budget_exhausted", serde_json::Value::Null),
    };
    serde_json::json!({
        "dedup": policy.dedup.as_str(),
        "graph_digest": graph_digest.as_str(),
        "grid_fingerprint": grid.fingerprint().as_str(),
        "grid_identity_hex": hex::encode(grid.identity_bytes()),
        "max_expansions": policy.max_expansions,
        "outcome": outcome_type,
        "path": path,
        "path_digest": path_digest.map(ContentHash::as_str),
        "scenario": scenario_name,
        "scenario_digest": scenario_digest.as_str(),
        "termination_reason": termination_reason.as_str(),
    })
}
