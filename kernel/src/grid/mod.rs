//! Grid module: cell coordinates and the bounded obstacle field.
//!
//! Depends on `proof` for fingerprinting only.

pub mod cell;
pub mod map;

pub use cell::{manhattan, Cell, ORTHOGONAL_OFFSETS};
pub use map::{Grid, GridError, GridLimits, DEFAULT_MAX_DIMENSION, MAX_DIMENSION_CEILING};
