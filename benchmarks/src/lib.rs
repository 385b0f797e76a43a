//! Shared helpers for waypoint benchmark suites.

use waypoint_harness::scenario::Scenario;
use waypoint_kernel::grid::{Grid, GridLimits};

/// Limits large enough for every benchmark grid.
pub const BENCH_LIMITS: GridLimits = GridLimits { max_dimension: 256 };

/// Obstacle-free `side × side` grid.
///
/// # Panics
///
/// Panics if `side` is outside `1..=BENCH_LIMITS.max_dimension`. Benchmark
/// setup failures are fatal.
#[must_use]
pub fn open_grid(side: i32) -> Grid {
    Grid::configure_with_limits(side, side, BENCH_LIMITS).expect("open grid")
}

/// Serpentine maze: walls on odd interior columns, gaps alternating bottom/top.
///
/// The corner-to-corner path visits nearly every free cell, which makes it
/// the worst case for frontier size and duplicate discoveries.
///
/// # Panics
///
/// Panics if `side` is outside `1..=BENCH_LIMITS.max_dimension`.
#[must_use]
pub fn serpentine_grid(side: i32) -> Grid {
    let mut grid = open_grid(side);
    for x in (1..side - 1).step_by(2) {
        let gap = if (x / 2) % 2 == 0 { side - 1 } else { 0 };
        for y in (0..side).filter(|&y| y != gap) {
            grid.mark_obstacle(x, y).expect("in bounds");
        }
    }
    grid
}

/// Scenario wrapper around [`serpentine_grid`] for end-to-end runner timing.
#[must_use]
pub fn serpentine_scenario(side: i32) -> Scenario {
    let grid = serpentine_grid(side);
    Scenario {
        name: format!("serpentine_{side}"),
        width: side,
        height: side,
        obstacles: grid.obstacles().map(|c| [c.x, c.y]).collect(),
        start: [0, 0],
        goal: [side - 1, side - 1],
        max_dimension: Some(BENCH_LIMITS.max_dimension),
        policy: waypoint_search::policy::SearchPolicy::default(),
    }
}
