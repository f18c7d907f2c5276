//! General search: the fringe-expansion loop every strategy configures.

use tracing::{debug, trace, warn};

use crate::contract::State;
use crate::fringe::{Fringe, FringeDisciplineV1};
use crate::path::Path;
use crate::policy::{CancelToken, SearchPolicyV1};
use crate::problem::Problem;

/// Sibling order applied to successors before they are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionOrderV1 {
    /// Ascending by the state's natural order.
    Natural,
    /// Descending by the state's natural order.
    Reverse,
}

impl ExpansionOrderV1 {
    /// Sort `states` in place.
    pub fn sort<S: Ord>(self, states: &mut [S]) {
        match self {
            Self::Natural => states.sort(),
            Self::Reverse => states.sort_by(|a, b| b.cmp(a)),
        }
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A path ending in the goal state was popped.
    GoalReached,
    /// The fringe emptied without reaching the goal.
    FrontierExhausted,
    /// `max_expansions` was hit.
    ExpansionBudgetExceeded,
    /// The cancel token was tripped.
    Cancelled,
    /// Iterative deepening tried every limit up to its ceiling.
    DepthLimitExhausted { max_limit: usize },
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Fringe pops (goal pop included).
    pub expansions: u64,
    /// Paths inserted into the fringe, root included.
    pub paths_generated: u64,
    /// Successors dropped because they were already on the path.
    pub cycles_suppressed: u64,
    /// Pops not expanded because the path was past the depth limit.
    pub depth_cutoffs: u64,
    /// Largest fringe size observed.
    pub fringe_high_water: u64,
    /// Depth-limited rounds run (iterative deepening only).
    pub iterations: u64,
    /// Depth limit of the last round run, if any.
    pub final_depth_limit: Option<usize>,
}

impl SearchStats {
    /// Fold the counters of a completed round into this total.
    pub fn absorb(&mut self, round: &SearchStats) {
        self.expansions += round.expansions;
        self.paths_generated += round.paths_generated;
        self.cycles_suppressed += round.cycles_suppressed;
        self.depth_cutoffs += round.depth_cutoffs;
        self.fringe_high_water = self.fringe_high_water.max(round.fringe_high_water);
        self.final_depth_limit = round.final_depth_limit;
    }
}

/// Result of a search execution.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S> {
    pub termination: TerminationReasonV1,
    /// The goal path (if found).
    pub goal_path: Option<Path<S>>,
    pub stats: SearchStats,
}

impl<S> SearchOutcome<S> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReasonV1::GoalReached
    }
}

/// The fringe as seen at the start of one expansion step.
#[derive(Debug)]
pub struct FringeSnapshot<'a, S> {
    /// Zero-based step index within the current run.
    pub step: u64,
    /// Depth limit of the running engine, if any.
    pub depth_limit: Option<usize>,
    /// Paths in pop order, front first.
    pub paths: Vec<&'a Path<S>>,
}

/// Read-only trace hook, called once per expansion step.
///
/// Observers only ever see shared references; they cannot change the search.
pub trait FringeObserver<S> {
    fn on_step(&mut self, snapshot: &FringeSnapshot<'_, S>);
}

impl<S, F> FringeObserver<S> for F
where
    F: FnMut(&FringeSnapshot<'_, S>),
{
    fn on_step(&mut self, snapshot: &FringeSnapshot<'_, S>) {
        self(snapshot);
    }
}

/// Per-invocation controls: budgets, an optional observer, an optional
/// cancel token.
///
/// The expansion counter lives here so that a budget spans every round of
/// an iterative-deepening run.
pub struct SearchControl<'a, S> {
    policy: SearchPolicyV1,
    observer: Option<&'a mut dyn FringeObserver<S>>,
    cancel: Option<CancelToken>,
    expansions: u64,
}

impl<'a, S> SearchControl<'a, S> {
    #[must_use]
    pub fn new(policy: SearchPolicyV1) -> Self {
        Self {
            policy,
            observer: None,
            cancel: None,
            expansions: 0,
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: &'a mut dyn FringeObserver<S>) -> Self {
        self.observer = Some(observer);
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicyV1 {
        &self.policy
    }

    /// Pops performed so far under this control.
    #[must_use]
    pub fn expansions(&self) -> u64 {
        self.expansions
    }

    /// The stop reason that applies before the next step, if any.
    fn interrupt(&self) -> Option<TerminationReasonV1> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Some(TerminationReasonV1::Cancelled);
        }
        match self.policy.max_expansions {
            Some(max) if self.expansions >= max => {
                Some(TerminationReasonV1::ExpansionBudgetExceeded)
            }
            _ => None,
        }
    }
}

/// A configured instance of the general search loop.
///
/// The fringe discipline fully determines search order; the expansion order
/// only fixes the order in which siblings are handed to the fringe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralSearch {
    pub expansion_order: ExpansionOrderV1,
    pub discipline: FringeDisciplineV1,
    /// Paths longer than this many states are popped but not expanded.
    pub depth_limit: Option<usize>,
}

impl GeneralSearch {
    /// Run the expansion loop on `problem`.
    ///
    /// Each step: stop if the fringe is empty or the control interrupts;
    /// report the fringe to the observer; pop the first path; succeed if its
    /// frontier is the goal; otherwise, unless the path is past the depth
    /// limit, extend it by every successor not already on it (sorted by the
    /// expansion order, edge cost defaulting to `0.0`) and insert each.
    pub fn run<S: State>(
        &self,
        problem: &Problem<'_, S>,
        control: &mut SearchControl<'_, S>,
    ) -> SearchOutcome<S> {
        let space = problem.space();
        let mut fringe = Fringe::new(self.discipline);
        let mut stats = SearchStats {
            final_depth_limit: self.depth_limit,
            ..SearchStats::default()
        };
        let mut step: u64 = 0;

        fringe.insert(Path::root(problem.initial_state().clone()));
        stats.paths_generated += 1;

        let mut goal_path = None;
        let termination = loop {
            if fringe.is_empty() {
                break TerminationReasonV1::FrontierExhausted;
            }
            if let Some(reason) = control.interrupt() {
                warn!(?reason, expansions = control.expansions, "search interrupted");
                break reason;
            }

            if let Some(observer) = control.observer.as_deref_mut() {
                observer.on_step(&FringeSnapshot {
                    step,
                    depth_limit: self.depth_limit,
                    paths: fringe.snapshot(),
                });
            }

            let Some(path) = fringe.pop() else {
                break TerminationReasonV1::FrontierExhausted;
            };
            step += 1;
            control.expansions += 1;
            stats.expansions += 1;

            let frontier = path.next_state();
            trace!(
                %frontier,
                length = path.length(),
                cost = path.cost(),
                fringe = fringe.len(),
                "pop"
            );

            if problem.is_goal(frontier) {
                goal_path = Some(path);
                break TerminationReasonV1::GoalReached;
            }

            // The limit only suppresses insertion; checking it before asking
            // the space for successors skips a lookup whose result is unused.
            if self.depth_limit.is_some_and(|limit| path.length() > limit) {
                stats.depth_cutoffs += 1;
                continue;
            }

            let mut children = space.successors(frontier);
            let before = children.len();
            children.retain(|child| !path.did_visit(child));
            stats.cycles_suppressed += (before - children.len()) as u64;
            self.expansion_order.sort(&mut children);

            for child in children {
                let edge_cost = space.cost_between(frontier, &child).unwrap_or(0.0);
                fringe.insert(path.extend(child, edge_cost));
                stats.paths_generated += 1;
            }
        };

        stats.fringe_high_water = fringe.high_water() as u64;
        debug!(
            ?termination,
            expansions = stats.expansions,
            generated = stats.paths_generated,
            depth_limit = ?self.depth_limit,
            "search finished"
        );

        SearchOutcome {
            termination,
            goal_path,
            stats,
        }
    }
}
