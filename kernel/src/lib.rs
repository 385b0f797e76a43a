//! Waypoint Kernel: the grid model and canonical proof primitives.
//!
//! # API Surface
//!
//! - [`grid::Grid`] -- bounded 2-D obstacle field (`configure`, `mark_obstacle`, queries)
//! - [`grid::Cell`] -- integer cell coordinate with the four orthogonal offsets
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON writer
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//!
//! # Module Dependency Direction
//!
//! `proof` ← `grid`
//!
//! One-way only. `grid` uses `proof` to fingerprint itself; `proof` depends on
//! nothing internal.

#![forbid(unsafe_code)]

pub mod grid;
pub mod proof;
