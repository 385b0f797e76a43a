//! Waypoint Search: deterministic A* over a bounded obstacle grid.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (grid, proof)       (frontier, nodes)    (scenarios, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`engine::Pathfinder`] -- `configure` / `mark_obstacle` / `find_path`
//! - [`search::search`] -- the expansion loop, returning a [`search::SearchResult`]
//! - [`node::NodeArena`] -- sole owner of every node created by one search
//! - [`frontier::OpenFrontier`] -- binary min-heap of node ids
//! - [`registry::DiscoveryRegistry`] -- append-only record of discovered nodes per cell
//! - [`path::GridPath`] -- reconstructed start→goal cell sequence
//! - [`graph::SearchGraph`] -- expansion-event audit log
//! - [`policy::SearchPolicy`] -- expansion budget and duplicate policy

#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod path;
pub mod policy;
pub mod registry;
pub mod search;
