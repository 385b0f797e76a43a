//! `Grid`: the bounded obstacle field searched by the engine.
//!
//! Storage is a row-major `Vec<bool>` sized exactly `width * height`.
//! The maximum dimension is a configuration value ([`GridLimits`]) rather than
//! a compile-time array bound.

use crate::grid::cell::Cell;
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// Largest width/height accepted by [`Grid::configure`].
pub const DEFAULT_MAX_DIMENSION: i32 = 10;

/// Hard ceiling on [`GridLimits::max_dimension`]. Caps a grid at about a
/// million cells whatever limits a caller or scenario file asks for.
pub const MAX_DIMENSION_CEILING: i32 = 1024;

/// Configuration bounds for grid construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLimits {
    /// Inclusive upper bound on both width and height.
    pub max_dimension: i32,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

/// Typed failure for grid configuration and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height is non-positive or exceeds the configured maximum.
    #[error("invalid grid dimensions {width}x{height} (each must be in 1..={max_dimension})")]
    InvalidDimensions {
        width: i32,
        height: i32,
        max_dimension: i32,
    },
    /// The requested limits exceed [`MAX_DIMENSION_CEILING`].
    #[error("grid dimension limit {max_dimension} exceeds the ceiling of {ceiling}")]
    LimitTooLarge { max_dimension: i32, ceiling: i32 },
    /// A cell outside `[0,width)×[0,height)` was addressed.
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: i32, height: i32 },
}

/// A fixed-size 2-D field of blocked/free cells.
///
/// Invariant: `blocked.len() == width * height` and both dimensions are in
/// `1..=limits.max_dimension`. Only [`Grid::mark_obstacle`] and
/// [`Grid::clear_obstacle`] mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl Grid {
    /// Configure a grid under the default limits. Every cell starts free.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is
    /// non-positive or greater than [`DEFAULT_MAX_DIMENSION`].
    pub fn configure(width: i32, height: i32) -> Result<Self, GridError> {
        Self::configure_with_limits(width, height, GridLimits::default())
    }

    /// Configure a grid under explicit limits.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LimitTooLarge`] if `limits.max_dimension` is
    /// above [`MAX_DIMENSION_CEILING`], and [`GridError::InvalidDimensions`]
    /// if either dimension is outside `1..=limits.max_dimension`.
    pub fn configure_with_limits(
        width: i32,
        height: i32,
        limits: GridLimits,
    ) -> Result<Self, GridError> {
        if limits.max_dimension > MAX_DIMENSION_CEILING {
            return Err(GridError::LimitTooLarge {
                max_dimension: limits.max_dimension,
                ceiling: MAX_DIMENSION_CEILING,
            });
        }
        let valid = 1..=limits.max_dimension;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(GridError::InvalidDimensions {
                width,
                height,
                max_dimension: limits.max_dimension,
            });
        }
        // Both dimensions are positive here, so the casts are lossless.
        #[allow(clippy::cast_sign_loss)]
        let cells = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            blocked: vec![false; cells],
        })
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.blocked.len()
    }

    /// Mark `(x, y)` as blocked. Marking an already-blocked cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the cell is outside the grid.
    pub fn mark_obstacle(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        let idx = self.checked_index(Cell::new(x, y))?;
        self.blocked[idx] = true;
        Ok(())
    }

    /// Mark `(x, y)` as free again.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the cell is outside the grid.
    pub fn clear_obstacle(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        let idx = self.checked_index(Cell::new(x, y))?;
        self.blocked[idx] = false;
        Ok(())
    }

    #[must_use]
    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Out-of-bounds cells report blocked.
    #[must_use]
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        match self.index(Cell::new(x, y)) {
            Some(idx) => self.blocked[idx],
            None => true,
        }
    }

    /// In bounds and not blocked.
    #[must_use]
    pub fn is_walkable(&self, cell: Cell) -> bool {
        !self.is_blocked(cell.x, cell.y)
    }

    /// Number of blocked cells.
    #[must_use]
    pub fn obstacle_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Blocked cells in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(idx, _)| self.cell_at(idx))
    }

    /// Identity bytes: `width (u32 LE) || height (u32 LE) || one byte per cell`,
    /// row-major, `1` for blocked and `0` for free.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.blocked.len());
        #[allow(clippy::cast_sign_loss)]
        {
            out.extend_from_slice(&(self.width as u32).to_le_bytes());
            out.extend_from_slice(&(self.height as u32).to_le_bytes());
        }
        out.extend(self.blocked.iter().map(|&b| u8::from(b)));
        out
    }

    /// Content hash of [`Grid::identity_bytes`] under [`HashDomain::GridIdentity`].
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        canonical_hash(HashDomain::GridIdentity, &self.identity_bytes())
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if !self.is_in_bounds(cell.x, cell.y) {
            return None;
        }
        #[allow(clippy::cast_sign_loss)]
        Some(cell.y as usize * self.width as usize + cell.x as usize)
    }

    fn checked_index(&self, cell: Cell) -> Result<usize, GridError> {
        self.index(cell).ok_or(GridError::OutOfBounds {
            cell,
            width: self.width,
            height: self.height,
        })
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn cell_at(&self, idx: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((idx % w) as i32, (idx / w) as i32)
    }
}
