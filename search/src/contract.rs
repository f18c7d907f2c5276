//! State-space contract trait.

use std::fmt::{Debug, Display};

/// A position in a state space.
///
/// States are opaque to the engine: it only stores, clones, compares, and
/// (for traces) displays them. The natural `Ord` drives sibling expansion
/// order and path tie-breaking.
pub trait State: Ord + Clone + Debug + Display {}

impl<T> State for T where T: Ord + Clone + Debug + Display {}

/// Trait for graphs that support search.
///
/// The engine consumes a state space only through this trait. Node storage,
/// adjacency computation, and edge-cost lookup belong to the implementation.
///
/// # Contract
///
/// - `has_node` is consulted once, when a [`crate::problem::Problem`] is built.
/// - `successors` may return states in any order; the engine sorts them.
///   It must not return duplicates.
/// - `cost_between` returns `None` when the space has no cost for the edge;
///   the engine then treats the edge as free (`0.0`). Costs are expected to
///   be non-negative. This is not enforced.
/// - All methods must be deterministic: same input, same output.
pub trait StateSpaceV1<S> {
    /// Stable identifier for trace metadata.
    fn space_id(&self) -> &str;

    /// Whether `state` is a node of this space.
    fn has_node(&self, state: &S) -> bool;

    /// Successor states of `state`.
    fn successors(&self, state: &S) -> Vec<S>;

    /// Cost of the edge `from → to`, if the space reports one.
    fn cost_between(&self, from: &S, to: &S) -> Option<f64>;
}
