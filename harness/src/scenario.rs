//! Scenario files: a grid, its obstacles, one query and an optional policy.
//!
//! # Format
//!
//! ```json
//! {"name": "reference", "width": 10, "height": 10,
//!  "obstacles": [[4,4],[4,5],[4,6]], "start": [0,0], "goal": [9,9],
//!  "max_dimension": 10,
//!  "policy": {"max_expansions": null, "dedup": "best_cost"}}
//! ```
//!
//! `max_dimension` and `policy` may be omitted. Unknown fields are rejected.

use std::path::Path;

use serde::{Deserialize, Serialize};
use waypoint_kernel::grid::{Cell, Grid, GridError, GridLimits};
use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;
use waypoint_search::policy::SearchPolicy;

/// Error loading or materializing a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("cannot read scenario {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scenario grid rejected: {0}")]
    Grid(#[from] GridError),
    #[error("scenario is not canonicalizable: {0}")]
    Canon(#[from] CanonError),
}

/// One pathfinding query against one grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub obstacles: Vec<[i32; 2]>,
    pub start: [i32; 2],
    pub goal: [i32; 2],
    /// Overrides [`GridLimits::max_dimension`] when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_dimension: Option<i32>,
    #[serde(default)]
    pub policy: SearchPolicy,
}

impl Scenario {
    /// The 10×10 grid with a three-cell wall at x=4, queried corner to corner.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            name: "reference".into(),
            width: 10,
            height: 10,
            obstacles: vec![[4, 4], [4, 5], [4, 6]],
            start: [0, 0],
            goal: [9, 9],
            max_dimension: None,
            policy: SearchPolicy::default(),
        }
    }

    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] for malformed JSON or unknown fields.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Read and parse a scenario file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] if the file cannot be read, or
    /// [`ScenarioError::Parse`] if it is not a valid scenario.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let bytes = std::fs::read(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_slice(&bytes)
    }

    #[must_use]
    pub fn start_cell(&self) -> Cell {
        Cell::from(self.start)
    }

    #[must_use]
    pub fn goal_cell(&self) -> Cell {
        Cell::from(self.goal)
    }

    #[must_use]
    pub fn limits(&self) -> GridLimits {
        self.max_dimension
            .map_or_else(GridLimits::default, |max_dimension| GridLimits {
                max_dimension,
            })
    }

    /// Configure the grid and mark every obstacle, failing on the first bad one.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Grid`] for invalid dimensions or an
    /// out-of-bounds obstacle.
    pub fn build_grid(&self) -> Result<Grid, ScenarioError> {
        let mut grid = Grid::configure_with_limits(self.width, self.height, self.limits())?;
        for &[x, y] in &self.obstacles {
            grid.mark_obstacle(x, y)?;
        }
        Ok(grid)
    }

    /// Content hash of the scenario's canonical JSON form.
    ///
    /// Obstacle order and duplicates are part of the digest; two files that
    /// build the same grid can still differ here.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Canon`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, ScenarioError> {
        let value = serde_json::to_value(self)?;
        let bytes = canonical_json_bytes(&value)?;
        Ok(canonical_hash(HashDomain::Scenario, &bytes))
    }
}
