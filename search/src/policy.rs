//! Search policy types: budgets and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Search budget configuration.
///
/// Every field is optional; the default policy is unbounded, which matches
/// the plain boolean `search` contract. Budgets never change which path is
/// found, only whether the search is allowed to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicyV1 {
    /// Hard cap on fringe pops, summed across iterative-deepening rounds.
    pub max_expansions: Option<u64>,
    /// Largest depth limit iterative deepening may try.
    pub max_deepening_limit: Option<usize>,
}

impl SearchPolicyV1 {
    /// No expansion budget and no deepening ceiling.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: None,
            max_deepening_limit: None,
        }
    }

    #[must_use]
    pub const fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    #[must_use]
    pub const fn with_max_deepening_limit(mut self, max: usize) -> Self {
        self.max_deepening_limit = Some(max);
        self
    }
}

/// Cooperative cancellation flag.
///
/// Clones share one flag. The engine polls it before every expansion step,
/// so a cancel from another thread stops the search at the next step.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
