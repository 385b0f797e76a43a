//! Text rendering for console output.

use std::fmt::Write;

use waypoint_kernel::grid::{Cell, Grid};
use waypoint_search::path::GridPath;
use waypoint_search::search::PathOutcome;

/// `"Path found:\n(x, y) -> ... -> Goal"`, `"No path found!"`, or the budget notice.
#[must_use]
pub fn render_outcome(outcome: &PathOutcome) -> String {
    match outcome {
        PathOutcome::Found(path) => format!("Path found:\n{path}"),
        PathOutcome::NoPath => "No path found!".to_string(),
        PathOutcome::BudgetExhausted { expansions } => {
            format!("No path found within {expansions} expansions!")
        }
    }
}

/// ASCII overlay of `path` on `grid`, row `y = 0` first.
///
/// `#` blocked, `.` free, `*` path, `S` start, `G` goal.
#[must_use]
pub fn render_map(grid: &Grid, start: Cell, goal: Cell, path: Option<&GridPath>) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 2);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = Cell::new(x, y);
            let glyph = if cell == start {
                'S'
            } else if cell == goal {
                'G'
            } else if grid.is_blocked(x, y) {
                '#'
            } else if path.is_some_and(|p| p.contains(cell)) {
                '*'
            } else {
                '.'
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// One line per counter, `key=value`, in a fixed order.
#[must_use]
pub fn render_counters(report: &crate::runner::RunReport) -> String {
    let m = &report.graph.metadata;
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "termination_reason={}", m.termination_reason.as_str());
    let _ = writeln!(out, "total_pops={}", m.total_pops);
    let _ = writeln!(out, "total_expansions={}", m.total_expansions);
    let _ = writeln!(out, "total_nodes_created={}", m.total_nodes_created);
    let _ = writeln!(out, "total_duplicates_suppressed={}", m.total_duplicates_suppressed);
    let _ = writeln!(out, "total_stale_skipped={}", m.total_stale_skipped);
    let _ = writeln!(out, "total_cells_discovered={}", m.total_cells_discovered);
    let _ = writeln!(out, "total_cells_rediscovered={}", m.total_cells_rediscovered);
    let _ = writeln!(out, "frontier_high_water={}", m.frontier_high_water);
    let _ = writeln!(out, "graph_digest={}", report.graph_digest);
    let _ = writeln!(out, "report_digest={}", report.report_digest);
    out
}
