//! Fringe Search: uninformed graph search over an abstract state space.
//!
//! A single expansion loop ([`search::GeneralSearch`]) parameterized by a
//! sibling expansion order, a fringe discipline, and an optional depth limit.
//! The strategy catalog names the useful configurations; iterative deepening
//! composes depth-limited rounds.
//!
//! # Crate dependency graph
//!
//! ```text
//! fringe_search  ←  fringe_harness
//! (engine, paths)   (worlds, traces, runner)
//! ```
//!
//! # Key types
//!
//! - [`StateSpaceV1`]: trait the engine consumes (successors, edge costs)
//! - [`Path`]: immutable newest-first route with a deterministic total order
//! - [`Problem`]: state space + validated initial state + goal
//! - [`SearchStrategy`]: depth-first, breadth-first, depth-limited,
//!   uniform-cost, iterative deepening
//! - [`SearchPolicyV1`] / [`CancelToken`]: budgets and cooperative cancellation
//! - [`FringeObserver`]: read-only per-step trace hook

#![forbid(unsafe_code)]

pub mod contract;
pub mod deepening;
pub mod error;
pub mod fringe;
pub mod path;
pub mod policy;
pub mod problem;
pub mod search;
pub mod strategy;

pub use contract::{State, StateSpaceV1};
pub use deepening::IterativeDeepening;
pub use error::SearchError;
pub use path::Path;
pub use policy::{CancelToken, SearchPolicyV1};
pub use problem::Problem;
pub use search::{FringeObserver, FringeSnapshot, SearchControl, SearchOutcome, TerminationReasonV1};
pub use strategy::{
    BreadthFirst, DepthFirst, DepthLimited, SearchStrategy, StrategySpecV1, UniformCost,
};
