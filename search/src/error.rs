//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. An unreachable goal, an
//! exhausted depth limit, a spent budget, or a cancellation are ordinary
//! outcomes expressed via [`crate::search::TerminationReasonV1`].

/// Typed failure raised before any search step is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The initial state is not a node of the state space.
    StateNotFound { state: String },
    /// A reserved strategy name was selected (informed search is not built).
    UnsupportedStrategy { name: String },
    /// A strategy selector could not be parsed.
    InvalidStrategySpec { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StateNotFound { state } => {
                write!(f, "state not found in state space: {state}")
            }
            Self::UnsupportedStrategy { name } => {
                write!(f, "strategy is reserved and not supported: {name}")
            }
            Self::InvalidStrategySpec { detail } => {
                write!(f, "invalid strategy spec: {detail}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
