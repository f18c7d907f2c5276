//! Search problem: a state space, a validated initial state, and a goal.

use crate::contract::{State, StateSpaceV1};
use crate::error::SearchError;

/// An immutable search problem.
///
/// The initial state is validated against the state space at construction;
/// the goal is not (an absent goal simply makes the problem unsolvable).
pub struct Problem<'g, S> {
    space: &'g dyn StateSpaceV1<S>,
    initial_state: S,
    goal_state: S,
}

impl<'g, S: State> Problem<'g, S> {
    /// Build a problem.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::StateNotFound`] if `initial_state` is not a node
    /// of `space`.
    pub fn new(
        space: &'g dyn StateSpaceV1<S>,
        initial_state: S,
        goal_state: S,
    ) -> Result<Self, SearchError> {
        if !space.has_node(&initial_state) {
            return Err(SearchError::StateNotFound {
                state: initial_state.to_string(),
            });
        }
        Ok(Self {
            space,
            initial_state,
            goal_state,
        })
    }

    #[must_use]
    pub fn space(&self) -> &'g dyn StateSpaceV1<S> {
        self.space
    }

    #[must_use]
    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    #[must_use]
    pub fn goal_state(&self) -> &S {
        &self.goal_state
    }

    /// Whether `state` satisfies this problem's goal.
    #[must_use]
    pub fn is_goal(&self, state: &S) -> bool {
        *state == self.goal_state
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Problem<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("space", &self.space.space_id())
            .field("initial_state", &self.initial_state)
            .field("goal_state", &self.goal_state)
            .finish()
    }
}
