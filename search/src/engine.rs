//! `Pathfinder`: the configure / mark obstacle / find path contract.

use waypoint_kernel::grid::{Cell, Grid, GridError, GridLimits};

use crate::error::SearchError;
use crate::policy::SearchPolicy;
use crate::search::{search, PathOutcome, SearchResult};

/// A configured grid plus the policy used for every query against it.
///
/// Queries never mutate the grid; every [`Pathfinder::find_path`] call runs a
/// fresh search with its own node arena.
#[derive(Debug, Clone)]
pub struct Pathfinder {
    grid: Grid,
    policy: SearchPolicy,
}

impl Pathfinder {
    /// Configure an obstacle-free grid under the default limits.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] for non-positive or
    /// over-maximum dimensions.
    pub fn configure(width: i32, height: i32) -> Result<Self, GridError> {
        Grid::configure(width, height).map(Self::from_grid)
    }

    /// # Errors
    ///
    /// Returns [`GridError::LimitTooLarge`] for limits above the kernel
    /// ceiling, and [`GridError::InvalidDimensions`] if either dimension is
    /// outside `1..=limits.max_dimension`.
    pub fn configure_with_limits(
        width: i32,
        height: i32,
        limits: GridLimits,
    ) -> Result<Self, GridError> {
        Grid::configure_with_limits(width, height, limits).map(Self::from_grid)
    }

    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            policy: SearchPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `(x, y)` is outside the grid.
    pub fn mark_obstacle(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        self.grid.mark_obstacle(x, y)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Shortest path from `(start_x, start_y)` to `(goal_x, goal_y)`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the configured policy fails
    /// pre-flight validation.
    pub fn find_path(
        &self,
        start_x: i32,
        start_y: i32,
        goal_x: i32,
        goal_y: i32,
    ) -> Result<PathOutcome, SearchError> {
        self.search(Cell::new(start_x, start_y), Cell::new(goal_x, goal_y))
            .map(|res| res.outcome())
    }

    /// Full search result, including the audit graph and node arena.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the configured policy fails
    /// pre-flight validation.
    pub fn search(&self, start: Cell, goal: Cell) -> Result<SearchResult, SearchError> {
        search(&self.grid, start, goal, &self.policy)
    }
}
