//! Fringe trace recording: an observer that captures every step's fringe.
//!
//! A recorded [`SearchTraceV1`] is state-agnostic: each path is stored as its
//! rendered states (root first), its cost as decimal text, and its length.
//! Canonical JSON bytes of a trace are stable across runs and processes, so
//! its digest identifies a search execution.

use std::fmt::Write as _;

use fringe_search::contract::State;
use fringe_search::path::Path;
use fringe_search::search::{FringeObserver, FringeSnapshot};

use crate::canon::{canonical_hash, canonical_json_bytes, CanonError, ContentHash, HashDomain};

/// One fringe entry as recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedPathV1 {
    /// Rendered states, initial state first.
    pub states: Vec<String>,
    /// Accumulated cost in `f64` display form (`"2"`, `"0.5"`).
    pub cost: String,
    /// State count.
    pub length: usize,
}

impl TracedPathV1 {
    #[must_use]
    pub fn from_path<S: State>(path: &Path<S>) -> Self {
        let mut states: Vec<String> = path.states().map(ToString::to_string).collect();
        states.reverse();
        Self {
            states,
            cost: format_cost(path.cost()),
            length: path.length(),
        }
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cost": self.cost,
            "length": self.length,
            "states": self.states,
        })
    }
}

/// The fringe at the start of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStepV1 {
    pub step: u64,
    pub depth_limit: Option<usize>,
    /// Pop order, front first.
    pub fringe: Vec<TracedPathV1>,
}

impl TraceStepV1 {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "depth_limit": self.depth_limit,
            "fringe": self.fringe.iter().map(TracedPathV1::to_json_value).collect::<Vec<_>>(),
            "step": self.step,
        })
    }
}

/// Every step of one search run, in order.
///
/// Iterative deepening restarts `step` at zero each round; the round is
/// identified by `depth_limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTraceV1 {
    pub steps: Vec<TraceStepV1>,
}

impl SearchTraceV1 {
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "schema_version": "search_trace.v1",
            "steps": self.steps.iter().map(TraceStepV1::to_json_value).collect::<Vec<_>>(),
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

    /// Content hash of the canonical bytes under [`HashDomain::SearchTrace`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
    }

    /// Human-readable rendering, one line per step:
    ///
    /// ```text
    /// step 0: [A (0)]
    /// step 1: [A -> B (1), A -> C (4)]
    /// ```
    ///
    /// Steps from a depth-limited round carry `(limit N)` after the index.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for step in &self.steps {
            let _ = write!(out, "step {}", step.step);
            if let Some(limit) = step.depth_limit {
                let _ = write!(out, " (limit {limit})");
            }
            out.push_str(": [");
            for (i, path) in step.fringe.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{} ({})", path.states.join(" -> "), path.cost);
            }
            out.push_str("]\n");
        }
        out
    }
}

/// [`FringeObserver`] that records a [`SearchTraceV1`].
#[derive(Debug, Default)]
pub struct TraceRecorder {
    trace: SearchTraceV1,
}

impl TraceRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn trace(&self) -> &SearchTraceV1 {
        &self.trace
    }

    #[must_use]
    pub fn into_trace(self) -> SearchTraceV1 {
        self.trace
    }
}

impl<S: State> FringeObserver<S> for TraceRecorder {
    fn on_step(&mut self, snapshot: &FringeSnapshot<'_, S>) {
        self.trace.steps.push(TraceStepV1 {
            step: snapshot.step,
            depth_limit: snapshot.depth_limit,
            fringe: snapshot
                .paths
                .iter()
                .map(|path| TracedPathV1::from_path(path))
                .collect(),
        });
    }
}

/// Cost text used in traces and reports.
#[must_use]
pub fn format_cost(cost: f64) -> String {
    format!("{cost}")
}
