//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::frontier::FrontierOrder;

/// Budget and duplicate-handling configuration for one search.
///
/// The default is unbounded with [`DedupPolicy::BestCost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (`None` = run until goal or exhaustion).
    pub max_expansions: Option<u64>,
    /// How the discovery registry answers "have we seen this cell?".
    pub dedup: DedupPolicy,
}

impl SearchPolicy {
    /// Unbounded, first-match dedup: a plain open list with no closed set.
    #[must_use]
    pub fn first_match() -> Self {
        Self {
            max_expansions: None,
            dedup: DedupPolicy::FirstMatch,
        }
    }

    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    #[must_use]
    pub fn with_dedup(mut self, dedup: DedupPolicy) -> Self {
        self.dedup = dedup;
        self
    }

    /// Pre-flight validation.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is `Some(0)`:
    /// a search that may not pop even the start node has no meaningful outcome.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Duplicate-node policy for the discovery registry, and the frontier
/// ordering that goes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupPolicy {
    /// Compare against the first node ever recorded at a cell. Stale pops are
    /// expanded again. The frontier orders by `f_cost` alone.
    FirstMatch,
    /// Compare against the cheapest node recorded at a cell, and skip popped
    /// nodes whose cell already has a cheaper node (closed-set behaviour).
    /// The frontier breaks `f_cost` ties toward deeper nodes.
    #[default]
    BestCost,
}

impl DedupPolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstMatch => "first_match",
            Self::BestCost => "best_cost",
        }
    }

    #[must_use]
    pub fn frontier_order(self) -> FrontierOrder {
        match self {
            Self::FirstMatch => FrontierOrder::TotalCost,
            Self::BestCost => FrontierOrder::DeepestFirst,
        }
    }
}

impl std::str::FromStr for DedupPolicy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_match" => Ok(Self::FirstMatch),
            "best_cost" => Ok(Self::BestCost),
            other => Err(SearchError::InvalidPolicy {
                detail: format!("unknown dedup policy {other:?}"),
            }),
        }
    }
}
