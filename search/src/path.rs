//! Immutable search paths with a deterministic total order.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// One state of a path, linked to the state it was reached from.
struct Link<S> {
    state: S,
    parent: Option<Arc<Link<S>>>,
}

// Unlink iteratively so dropping a very deep path does not recurse once per
// state. Stops at the first link still shared with another path.
impl<S> Drop for Link<S> {
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut inner) => next = inner.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// An immutable route through the state space, newest state first.
///
/// Extension never mutates: [`Path::extend`] returns a new path that shares
/// its ancestry with the original, so siblings in the fringe cost one link
/// each.
///
/// # Ordering
///
/// Paths are totally ordered by `(cost, next_state, length, states)`:
/// accumulated cost ascending (IEEE total order), then the frontier state's
/// natural order, then fewer states first, then the full newest-first state
/// sequence compared lexicographically. Two paths compare equal only if they
/// are structurally identical.
pub struct Path<S> {
    head: Arc<Link<S>>,
    length: usize,
    cost: f64,
}

impl<S> Path<S> {
    /// A single-state, zero-cost path.
    #[must_use]
    pub fn root(state: S) -> Self {
        Self {
            head: Arc::new(Link {
                state,
                parent: None,
            }),
            length: 1,
            cost: 0.0,
        }
    }

    /// A new path that continues this one to `child` over an edge of
    /// `edge_cost`.
    #[must_use]
    pub fn extend(&self, child: S, edge_cost: f64) -> Self {
        Self {
            head: Arc::new(Link {
                state: child,
                parent: Some(Arc::clone(&self.head)),
            }),
            length: self.length + 1,
            cost: self.cost + edge_cost,
        }
    }

    /// The frontier state (the most recently reached one).
    #[must_use]
    pub fn next_state(&self) -> &S {
        &self.head.state
    }

    /// Number of states on the path (edges + 1).
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Sum of edge costs along the path.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// States from the frontier back to the root.
    #[must_use]
    pub fn states(&self) -> States<'_, S> {
        States {
            next: Some(&self.head),
        }
    }
}

impl<S: PartialEq> Path<S> {
    /// Whether `state` appears anywhere on this path.
    #[must_use]
    pub fn did_visit(&self, state: &S) -> bool {
        self.states().any(|s| s == state)
    }
}

impl<S: Clone> Path<S> {
    /// States from the root to the frontier.
    #[must_use]
    pub fn to_root_first(&self) -> Vec<S> {
        let mut states: Vec<S> = self.states().cloned().collect();
        states.reverse();
        states
    }
}

impl<S> Clone for Path<S> {
    fn clone(&self) -> Self {
        Self {
            head: Arc::clone(&self.head),
            length: self.length,
            cost: self.cost,
        }
    }
}

/// Iterator over a path's states, newest first.
pub struct States<'a, S> {
    next: Option<&'a Link<S>>,
}

impl<'a, S> Iterator for States<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.parent.as_deref();
        Some(&link.state)
    }
}

impl<S: Ord> Ord for Path<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.next_state().cmp(other.next_state()))
            .then_with(|| self.length.cmp(&other.length))
            .then_with(|| self.states().cmp(other.states()))
    }
}

impl<S: Ord> PartialOrd for Path<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Ord> PartialEq for Path<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Ord> Eq for Path<S> {}

impl<S: fmt::Debug> fmt::Debug for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("states", &self.states().collect::<Vec<_>>())
            .field("length", &self.length)
            .field("cost", &self.cost)
            .finish()
    }
}

/// Renders root-first: `A -> B -> D`.
impl<S: fmt::Display> fmt::Display for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let states: Vec<&S> = self.states().collect();
        for (i, state) in states.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{state}")?;
        }
        Ok(())
    }
}
