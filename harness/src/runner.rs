//! Harness runner: one configured search over a state space, summarized as a
//! [`SearchRunReport`].

use fringe_search::contract::{State, StateSpaceV1};
use fringe_search::error::SearchError;
use fringe_search::policy::{CancelToken, SearchPolicyV1};
use fringe_search::problem::Problem;
use fringe_search::search::{SearchControl, SearchStats, TerminationReasonV1};
use fringe_search::strategy::StrategySpecV1;
use tracing::{debug, info};

use crate::canon::{canonical_hash, canonical_json_bytes, CanonError, ContentHash, HashDomain};
use crate::trace::{format_cost, SearchTraceV1, TraceRecorder};

/// What to run and under which limits.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub strategy: StrategySpecV1,
    pub policy: SearchPolicyV1,
    /// Attach a [`TraceRecorder`] and include the trace in the report.
    pub capture_trace: bool,
    pub cancel: Option<CancelToken>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            strategy: StrategySpecV1::BreadthFirst,
            policy: SearchPolicyV1::unbounded(),
            capture_trace: true,
            cancel: None,
        }
    }
}

impl RunConfig {
    #[must_use]
    pub fn for_strategy(strategy: StrategySpecV1) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}

/// Error from [`run_search`].
#[derive(Debug)]
pub enum RunError {
    /// Problem construction failed.
    Search(SearchError),
    /// The trace could not be canonicalized.
    Canon(CanonError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Canon(e) => write!(f, "canonical JSON error: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Canon(e) => Some(e),
        }
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// State-agnostic summary of one search run.
#[derive(Debug, Clone)]
pub struct SearchRunReport {
    pub space_id: String,
    /// Selector text, e.g. `dls:3`.
    pub strategy: String,
    /// Display name, e.g. `Depth-Limited Search (limit 3)`.
    pub strategy_name: String,
    pub initial_state: String,
    pub goal_state: String,
    pub termination: TerminationReasonV1,
    /// Root-first route to the goal, if reached.
    pub goal_path: Option<Vec<String>>,
    pub goal_cost: Option<String>,
    pub stats: SearchStats,
    pub trace: Option<SearchTraceV1>,
    pub trace_digest: Option<ContentHash>,
}

impl SearchRunReport {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.termination == TerminationReasonV1::GoalReached
    }

    /// The report as JSON. The trace itself is referenced by digest only.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "goal_cost": self.goal_cost,
            "goal_path": self.goal_path,
            "goal_state": self.goal_state,
            "initial_state": self.initial_state,
            "schema_version": "search_run_report.v1",
            "space_id": self.space_id,
            "stats": stats_to_json(&self.stats),
            "strategy": self.strategy,
            "strategy_name": self.strategy_name,
            "termination": termination_to_json(self.termination),
            "trace_digest": self.trace_digest.as_ref().map(ContentHash::as_str),
        })
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical report bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::RunReport, &bytes))
    }
}

fn termination_to_json(termination: TerminationReasonV1) -> serde_json::Value {
    match termination {
        TerminationReasonV1::GoalReached => serde_json::json!({"type": "goal_reached"}),
        TerminationReasonV1::FrontierExhausted => {
            serde_json::json!({"type": "frontier_exhausted"})
        }
        TerminationReasonV1::ExpansionBudgetExceeded => {
            serde_json::json!({"type": "expansion_budget_exceeded"})
        }
        TerminationReasonV1::Cancelled => serde_json::json!({"type": "cancelled"}),
        TerminationReasonV1::DepthLimitExhausted { max_limit } => {
            serde_json::json!({"max_limit": max_limit, "type": "depth_limit_exhausted"})
        }
    }
}

fn stats_to_json(stats: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "cycles_suppressed": stats.cycles_suppressed,
        "depth_cutoffs": stats.depth_cutoffs,
        "expansions": stats.expansions,
        "final_depth_limit": stats.final_depth_limit,
        "fringe_high_water": stats.fringe_high_water,
        "iterations": stats.iterations,
        "paths_generated": stats.paths_generated,
    })
}

/// Run the configured strategy from `initial` toward `goal`.
///
/// # Errors
///
/// Returns [`RunError::Search`] if `initial` is not in `space`, and
/// [`RunError::Canon`] if the captured trace cannot be digested.
pub fn run_search<S: State>(
    space: &dyn StateSpaceV1<S>,
    initial: S,
    goal: S,
    config: &RunConfig,
) -> Result<SearchRunReport, RunError> {
    let initial_state = initial.to_string();
    let goal_state = goal.to_string();
    let problem = Problem::new(space, initial, goal)?;
    let strategy = config.strategy.build::<S>();

    debug!(
        strategy = %config.strategy,
        space = space.space_id(),
        initial = %initial_state,
        goal = %goal_state,
        "run started"
    );

    let mut recorder = TraceRecorder::new();
    let outcome = {
        let mut control = SearchControl::new(config.policy);
        if let Some(cancel) = &config.cancel {
            control = control.with_cancel(cancel.clone());
        }
        if config.capture_trace {
            control = control.with_observer(&mut recorder);
        }
        strategy.run(&problem, &mut control)
    };

    let trace = config.capture_trace.then(|| recorder.into_trace());
    let trace_digest = trace.as_ref().map(SearchTraceV1::digest).transpose()?;

    let report = SearchRunReport {
        space_id: space.space_id().to_string(),
        strategy: config.strategy.to_string(),
        strategy_name: strategy.name(),
        initial_state,
        goal_state,
        termination: outcome.termination,
        goal_path: outcome.goal_path.as_ref().map(|path| {
            path.to_root_first()
                .iter()
                .map(ToString::to_string)
                .collect()
        }),
        goal_cost: outcome.goal_path.as_ref().map(|path| format_cost(path.cost())),
        stats: outcome.stats,
        trace,
        trace_digest,
    };

    info!(
        strategy = %report.strategy,
        termination = ?report.termination,
        expansions = report.stats.expansions,
        "run finished"
    );
    Ok(report)
}
