//! `LatticeWorld`: the unbounded integer grid with 4-connected moves.

use std::fmt;

use fringe_search::contract::StateSpaceV1;

/// A grid cell. Ordered by `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn manhattan(&self, other: &Cell) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Every cell exists; each step costs `1.0`.
///
/// The space is infinite, so only strategies with a depth limit, a ceiling,
/// or a budget are guaranteed to stop on an unreachable goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatticeWorld;

impl StateSpaceV1<Cell> for LatticeWorld {
    #[allow(clippy::unnecessary_literal_bound)]
    fn space_id(&self) -> &str {
        "lattice"
    }

    fn has_node(&self, _state: &Cell) -> bool {
        true
    }

    /// Neighbors past the `i64` range are omitted.
    fn successors(&self, state: &Cell) -> Vec<Cell> {
        let Cell { x, y } = *state;
        [
            x.checked_add(1).map(|x| (x, y)),
            x.checked_sub(1).map(|x| (x, y)),
            y.checked_add(1).map(|y| (x, y)),
            y.checked_sub(1).map(|y| (x, y)),
        ]
        .into_iter()
        .flatten()
        .map(|(x, y)| Cell::new(x, y))
        .collect()
    }

    fn cost_between(&self, from: &Cell, to: &Cell) -> Option<f64> {
        (from.manhattan(to) == 1).then_some(1.0)
    }
}
