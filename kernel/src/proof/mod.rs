//! Proof module: canonical JSON, typed hash domains, and content hashing.
//!
//! Nothing in this module depends on `grid`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
