//! `WeightedGraphV1`: explicit adjacency with optional edge costs.

use std::collections::BTreeMap;

use fringe_search::contract::{State, StateSpaceV1};

/// A directed graph held in memory.
///
/// Adjacency is `BTreeMap`-backed so successor enumeration is deterministic
/// even though the engine sorts successors anyway. Edges added without a cost
/// report `None` from [`StateSpaceV1::cost_between`].
#[derive(Debug, Clone)]
pub struct WeightedGraphV1<S> {
    id: String,
    adjacency: BTreeMap<S, BTreeMap<S, Option<f64>>>,
}

impl<S: State> WeightedGraphV1<S> {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            adjacency: BTreeMap::new(),
        }
    }

    /// Add an isolated node (no-op if present).
    pub fn add_node(&mut self, state: S) -> &mut Self {
        self.adjacency.entry(state).or_default();
        self
    }

    /// Add `from → to` with a cost, creating both nodes as needed.
    ///
    /// Re-adding an edge replaces its cost.
    pub fn add_edge(&mut self, from: S, to: S, cost: f64) -> &mut Self {
        self.insert_edge(from, to, Some(cost))
    }

    /// Add `from → to` with no reported cost.
    pub fn add_unweighted_edge(&mut self, from: S, to: S) -> &mut Self {
        self.insert_edge(from, to, None)
    }

    /// Add `a → b` and `b → a` with the same cost.
    pub fn add_undirected_edge(&mut self, a: S, b: S, cost: f64) -> &mut Self {
        self.insert_edge(a.clone(), b.clone(), Some(cost));
        self.insert_edge(b, a, Some(cost))
    }

    fn insert_edge(&mut self, from: S, to: S, cost: Option<f64>) -> &mut Self {
        self.add_node(to.clone());
        self.adjacency.entry(from).or_default().insert(to, cost);
        self
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }
}

impl<S: State> StateSpaceV1<S> for WeightedGraphV1<S> {
    fn space_id(&self) -> &str {
        &self.id
    }

    fn has_node(&self, state: &S) -> bool {
        self.adjacency.contains_key(state)
    }

    fn successors(&self, state: &S) -> Vec<S> {
        self.adjacency
            .get(state)
            .map(|edges| edges.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn cost_between(&self, from: &S, to: &S) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied().flatten()
    }
}

/// `A → B (1)`, `A → C (4)`, `B → D (1)`, `C → D (1)`.
#[must_use]
pub fn diamond() -> WeightedGraphV1<&'static str> {
    let mut graph = WeightedGraphV1::new("diamond");
    graph
        .add_edge("A", "B", 1.0)
        .add_edge("A", "C", 4.0)
        .add_edge("B", "D", 1.0)
        .add_edge("C", "D", 1.0);
    graph
}
