//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget exceeded) are expressed via
//! [`crate::graph::TerminationReason`] and always produce a `SearchGraph`.

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is allocated; no `SearchGraph` exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The search policy cannot be executed.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
