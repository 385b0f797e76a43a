//! Integer cell coordinates.

/// Unit moves in the fixed expansion order: `(0,1)`, `(1,0)`, `(0,-1)`, `(-1,0)`.
///
/// The order is part of the search's determinism contract: neighbours are
/// always evaluated in this sequence.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A grid cell position.
///
/// Coordinates are signed so that neighbours of edge cells can be formed and
/// then rejected by bounds checks, rather than wrapping.
///
/// Ordering is `(x, y)` lexicographic, used by `BTreeMap` keyed registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`. Saturates at the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// The four orthogonal neighbours in [`ORTHOGONAL_OFFSETS`] order.
    ///
    /// Neighbours may lie outside any grid; callers filter by bounds.
    #[must_use]
    pub fn neighbors_4(self) -> [Cell; 4] {
        ORTHOGONAL_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// True if `other` differs by exactly one orthogonal unit step.
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        manhattan(self, other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Cell {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Manhattan distance `|x1-x2| + |y1-y2|`.
///
/// Admissible and consistent for 4-connected unit-cost movement.
#[must_use]
pub fn manhattan(a: Cell, b: Cell) -> i64 {
    (i64::from(a.x) - i64::from(b.x)).abs() + (i64::from(a.y) - i64::from(b.y)).abs()
}
