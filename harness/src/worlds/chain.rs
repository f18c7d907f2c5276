//! `ChainWorld`: `0 → 1 → … → len`, for searches far deeper than the call stack.

use fringe_search::contract::StateSpaceV1;

/// A single line of `len + 1` states. Edges report no cost.
#[derive(Debug, Clone, Copy)]
pub struct ChainWorld {
    pub len: u64,
}

impl ChainWorld {
    #[must_use]
    pub const fn new(len: u64) -> Self {
        Self { len }
    }
}

impl StateSpaceV1<u64> for ChainWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn space_id(&self) -> &str {
        "chain"
    }

    fn has_node(&self, state: &u64) -> bool {
        *state <= self.len
    }

    fn successors(&self, state: &u64) -> Vec<u64> {
        if *state < self.len {
            vec![state + 1]
        } else {
            Vec::new()
        }
    }

    fn cost_between(&self, _from: &u64, _to: &u64) -> Option<f64> {
        None
    }
}
