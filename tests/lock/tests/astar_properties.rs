//! Path-level properties of the A* engine.
//!
//! - Open grids: corner-to-corner path has `(w-1)+(h-1)+1` cells.
//! - Paths are legal walks and never enter a blocked cell.
//! - Path cost equals breadth-first shortest distance (optimality).
//! - Unreachable goals yield "no path", never a partial path.
//! - Both dedup policies agree on path length.

use std::collections::VecDeque;

use waypoint_kernel::grid::{Cell, Grid, GridLimits};
use waypoint_search::engine::Pathfinder;
use waypoint_search::policy::{DedupPolicy, SearchPolicy};
use waypoint_search::search::{search, PathOutcome};

fn pathfinder(w: i32, h: i32, obstacles: &[(i32, i32)]) -> Pathfinder {
    let mut pf = Pathfinder::configure(w, h).expect("valid dimensions");
    for &(x, y) in obstacles {
        pf.mark_obstacle(x, y).expect("obstacle in bounds");
    }
    pf
}

/// Reference shortest distance by breadth-first search.
fn bfs_distance(grid: &Grid, start: Cell, goal: Cell) -> Option<usize> {
    let idx = |c: Cell| usize::try_from(c.y * grid.width() + c.x).expect("in bounds");
    let mut dist = vec![None; grid.cell_count()];
    dist[idx(start)] = Some(0usize);
    let mut queue = VecDeque::from([start]);
    while let Some(c) = queue.pop_front() {
        let d = dist[idx(c)].expect("queued cells have a distance");
        if c == goal {
            return Some(d);
        }
        for n in c.neighbors_4() {
            if grid.is_walkable(n) && dist[idx(n)].is_none() {
                dist[idx(n)] = Some(d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

/// Deterministic obstacle field from a 64-bit LCG.
fn scattered_grid(seed: u64, w: i32, h: i32, density_percent: u64) -> Grid {
    let mut grid = Grid::configure(w, h).expect("valid dimensions");
    let mut state = seed;
    for y in 0..h {
        for x in 0..w {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let corner = (x, y) == (0, 0) || (x, y) == (w - 1, h - 1);
            if !corner && (state >> 33) % 100 < density_percent {
                grid.mark_obstacle(x, y).expect("in bounds");
            }
        }
    }
    grid
}

#[test]
fn open_grid_corner_to_corner_length() {
    for (w, h) in [(1, 1), (1, 10), (10, 1), (3, 7), (10, 10)] {
        let pf = pathfinder(w, h, &[]);
        let path = pf
            .find_path(0, 0, w - 1, h - 1)
            .unwrap()
            .into_path()
            .unwrap_or_else(|| panic!("{w}x{h} open grid has a path"));
        let expected = usize::try_from((w - 1) + (h - 1) + 1).unwrap();
        assert_eq!(path.len(), expected, "{w}x{h}");
    }
}

#[test]
fn start_equals_goal_is_one_cell() {
    let pf = pathfinder(5, 5, &[(1, 1)]);
    let path = pf.find_path(3, 2, 3, 2).unwrap().into_path().unwrap();
    assert_eq!(path.cells(), &[Cell::new(3, 2)]);
    assert_eq!(path.to_string(), "(3, 2) -> Goal");
}

#[test]
fn reference_grid_routes_around_wall() {
    let pf = pathfinder(10, 10, &[(4, 4), (4, 5), (4, 6)]);
    let path = pf.find_path(0, 0, 9, 9).unwrap().into_path().unwrap();
    assert_eq!(path.len(), 19);
    for y in 4..=6 {
        assert!(!path.contains(Cell::new(4, y)), "path crosses wall at (4, {y})");
    }
    path.validate_on(pf.grid()).unwrap();
}

#[test]
fn small_open_grid_cost_four() {
    let pf = pathfinder(3, 3, &[]);
    let path = pf.find_path(0, 0, 2, 2).unwrap().into_path().unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path.step_cost(), 4);
}

#[test]
fn single_row_wall_has_no_path() {
    let pf = pathfinder(3, 1, &[(1, 0)]);
    assert_eq!(pf.find_path(0, 0, 2, 0).unwrap(), PathOutcome::NoPath);
}

#[test]
fn enclosed_goal_has_no_path() {
    let pf = pathfinder(5, 5, &[(1, 2), (3, 2), (2, 1), (2, 3)]);
    assert_eq!(pf.find_path(0, 0, 2, 2).unwrap(), PathOutcome::NoPath);

    let result = pf.search(Cell::new(0, 0), Cell::new(2, 2)).unwrap();
    assert!(result.path().is_none(), "no partial path on exhaustion");
    assert!(result.goal_node.is_none());
}

#[test]
fn blocked_or_outside_goal_has_no_path() {
    let pf = pathfinder(4, 4, &[(3, 3)]);
    assert_eq!(pf.find_path(0, 0, 3, 3).unwrap(), PathOutcome::NoPath);
    assert_eq!(pf.find_path(0, 0, 7, 0).unwrap(), PathOutcome::NoPath);
}

#[test]
fn rewalking_goal_chain_is_identical() {
    let pf = pathfinder(10, 10, &[(4, 4), (4, 5), (4, 6)]);
    let result = pf.search(Cell::new(0, 0), Cell::new(9, 9)).unwrap();
    let first = result.path().unwrap();
    let second = result.path().unwrap();
    assert_eq!(first, second);
}

#[test]
fn cost_matches_breadth_first_distance() {
    let limits = GridLimits::default();
    let side = limits.max_dimension;
    for seed in 0..40_u64 {
        let grid = scattered_grid(seed, side, side, 30);
        let start = Cell::new(0, 0);
        let goal = Cell::new(side - 1, side - 1);
        let expected = bfs_distance(&grid, start, goal);

        for dedup in [DedupPolicy::BestCost, DedupPolicy::FirstMatch] {
            let policy = SearchPolicy::default().with_dedup(dedup);
            let outcome = search(&grid, start, goal, &policy).unwrap().outcome();
            match (expected, outcome) {
                (Some(d), PathOutcome::Found(path)) => {
                    assert_eq!(path.step_cost(), d, "seed {seed}, {}", dedup.as_str());
                    path.validate_on(&grid).unwrap();
                    assert_eq!(path.start(), start);
                    assert_eq!(path.goal(), goal);
                }
                (None, PathOutcome::NoPath) => {}
                (expected, got) => {
                    panic!("seed {seed}, {}: bfs={expected:?} astar={got:?}", dedup.as_str())
                }
            }
        }
    }
}

#[test]
fn dedup_policies_agree_on_length() {
    let grid = scattered_grid(7, 10, 10, 25);
    let start = Cell::new(0, 0);
    let goal = Cell::new(9, 9);
    let best = search(&grid, start, goal, &SearchPolicy::default()).unwrap();
    let first = search(&grid, start, goal, &SearchPolicy::first_match()).unwrap();
    assert_eq!(best.path().map(|p| p.len()), first.path().map(|p| p.len()));
    assert_eq!(first.graph.metadata.total_stale_skipped, 0);
}

#[test]
fn budget_cuts_search_short() {
    let pf = pathfinder(10, 10, &[]).with_policy(SearchPolicy::default().with_max_expansions(3));
    assert_eq!(
        pf.find_path(0, 0, 9, 9).unwrap(),
        PathOutcome::BudgetExhausted { expansions: 3 }
    );

    // A budget large enough to reach the goal changes nothing.
    let roomy =
        pathfinder(10, 10, &[]).with_policy(SearchPolicy::default().with_max_expansions(1_000));
    assert_eq!(
        roomy.find_path(0, 0, 9, 9).unwrap().path().map(|p| p.len()),
        Some(19)
    );
}

#[test]
fn larger_grids_need_larger_limits() {
    let limits = GridLimits { max_dimension: 64 };
    assert!(Pathfinder::configure(64, 64).is_err());
    let pf = Pathfinder::configure_with_limits(64, 64, limits).unwrap();
    let path = pf.find_path(0, 0, 63, 63).unwrap().into_path().unwrap();
    assert_eq!(path.len(), 127);
}
