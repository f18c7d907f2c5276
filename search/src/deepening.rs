//! Iterative deepening: depth-limited search with limits 0, 1, 2, …

use tracing::{debug, warn};

use crate::contract::State;
use crate::problem::Problem;
use crate::search::{SearchControl, SearchOutcome, SearchStats, TerminationReasonV1};
use crate::strategy::{DepthLimited, EngineStrategy, SearchStrategy};

/// Runs [`DepthLimited`] with increasing limits until one succeeds.
///
/// Every round is an independent search from scratch. The driver stops when:
/// - a round reaches the goal (the smallest sufficient limit wins);
/// - a round exhausts its fringe without a single depth cutoff, so every
///   reachable path was already explored and no larger limit can help;
/// - the next limit would exceed `max_limit` (or the policy's
///   `max_deepening_limit`, whichever is smaller);
/// - the control's budget or cancel token interrupts a round.
///
/// With no ceiling, no budget, and an infinite space without a solution the
/// driver does not terminate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IterativeDeepening {
    pub max_limit: Option<usize>,
}

impl IterativeDeepening {
    /// No ceiling of its own (the control's policy may still impose one).
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_limit: None }
    }

    /// Stop after trying limit `max_limit`.
    #[must_use]
    pub const fn bounded(max_limit: usize) -> Self {
        Self {
            max_limit: Some(max_limit),
        }
    }

    fn ceiling<S>(&self, control: &SearchControl<'_, S>) -> Option<usize> {
        match (self.max_limit, control.policy().max_deepening_limit) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl<S: State> SearchStrategy<S> for IterativeDeepening {
    fn name(&self) -> String {
        "Iterative-Deepening Search".into()
    }

    fn run(
        &self,
        problem: &Problem<'_, S>,
        control: &mut SearchControl<'_, S>,
    ) -> SearchOutcome<S> {
        let ceiling = self.ceiling(control);
        let mut totals = SearchStats::default();
        let mut limit = 0;

        loop {
            if let Some(max_limit) = ceiling.filter(|&max| limit > max) {
                warn!(max_limit, "deepening ceiling reached");
                return SearchOutcome {
                    termination: TerminationReasonV1::DepthLimitExhausted { max_limit },
                    goal_path: None,
                    stats: totals,
                };
            }

            debug!(limit, "deepening round");
            let round = DepthLimited::new(limit).engine().run(problem, control);
            totals.absorb(&round.stats);
            totals.iterations += 1;

            let exhausted_everything = round.termination
                == TerminationReasonV1::FrontierExhausted
                && round.stats.depth_cutoffs == 0;
            if round.termination != TerminationReasonV1::FrontierExhausted
                || exhausted_everything
            {
                return SearchOutcome {
                    termination: round.termination,
                    goal_path: round.goal_path,
                    stats: totals,
                };
            }
            limit += 1;
        }
    }
}
