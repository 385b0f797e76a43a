//! Waypoint Harness: scenario-level orchestration for the search engine.
//!
//! A [`scenario::Scenario`] describes a grid, its obstacles, the query
//! endpoints and an optional policy. The runner builds the grid through the
//! kernel, runs the search crate, and packages the outcome plus its digests
//! as a [`runner::RunReport`].
//!
//! The harness does not implement search logic; it delegates to
//! `waypoint_search`.

#![forbid(unsafe_code)]

pub mod render;
pub mod runner;
pub mod scenario;
