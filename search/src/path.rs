//! Path reconstruction from the node arena.

use waypoint_kernel::grid::{Cell, Grid};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};
use waypoint_kernel::proof::hash_domain::HashDomain;

use crate::node::NodeArena;

/// Reconstruct the cell sequence from the root to `goal_node_id`.
///
/// Walks `parent_id` links from the goal back to the start, then reverses.
/// Does not mutate the arena, so the same goal can be walked any number of
/// times with identical results. Returns `None` for `None` input or an id
/// the arena does not hold.
#[must_use]
pub fn reconstruct_path(nodes: &NodeArena, goal_node_id: Option<u64>) -> Option<GridPath> {
    let mut current = nodes.get(goal_node_id?)?;
    let mut cells = vec![current.cell];

    while let Some(parent_id) = current.parent_id {
        // Parents are always allocated before their children; a missing or
        // non-decreasing link means a corrupted arena.
        if parent_id >= current.node_id {
            return None;
        }
        current = nodes.get(parent_id)?;
        cells.push(current.cell);
    }

    cells.reverse();
    Some(GridPath { cells })
}

/// An ordered start→goal cell sequence, both ends inclusive.
///
/// Never empty: a start equal to the goal is a one-cell path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPath {
    cells: Vec<Cell>,
}

/// Why a path is not a legal walk on a given grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathViolation {
    #[error("path enters blocked or out-of-bounds cell {cell} at index {index}")]
    NotWalkable { index: usize, cell: Cell },
    #[error("step {index} from {from} to {to} is not a unit orthogonal move")]
    NotAdjacent { index: usize, from: Cell, to: Cell },
}

impl GridPath {
    /// Build a path from raw cells. Returns `None` if `cells` is empty.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, start and goal included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves (`len - 1`).
    #[must_use]
    pub fn step_cost(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    #[must_use]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    #[must_use]
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.cells.windows(2).map(|w| (w[0], w[1]))
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Check that every entered cell is walkable and every step is a unit move.
    ///
    /// The start cell is where the query began, not a cell the path enters,
    /// so it is not checked.
    ///
    /// # Errors
    ///
    /// Returns the first [`PathViolation`] found, scanning start to goal.
    pub fn validate_on(&self, grid: &Grid) -> Result<(), PathViolation> {
        for (index, &cell) in self.cells.iter().enumerate().skip(1) {
            if !grid.is_walkable(cell) {
                return Err(PathViolation::NotWalkable { index, cell });
            }
        }
        for (index, (from, to)) in self.steps().enumerate() {
            if !from.is_adjacent(to) {
                return Err(PathViolation::NotAdjacent { index, from, to });
            }
        }
        Ok(())
    }

    /// Content hash over `x (i32 LE) || y (i32 LE)` per cell.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let mut bytes = Vec::with_capacity(self.cells.len() * 8);
        for c in &self.cells {
            bytes.extend_from_slice(&c.x.to_le_bytes());
            bytes.extend_from_slice(&c.y.to_le_bytes());
        }
        canonical_hash(HashDomain::GridPath, &bytes)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.cells
                .iter()
                .map(|c| serde_json::json!([c.x, c.y]))
                .collect(),
        )
    }
}

/// Console format: `(x, y) -> (x, y) -> ... -> Goal`.
impl std::fmt::Display for GridPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.cells {
            write!(f, "{c} -> ")?;
        }
        f.write_str("Goal")
    }
}
