//! Shared helpers for fringe benchmark suites.

use fringe_harness::worlds::lattice::{Cell, LatticeWorld};
use fringe_harness::worlds::road_map::road_map;
use fringe_harness::worlds::weighted_graph::WeightedGraphV1;
use fringe_search::contract::{State, StateSpaceV1};
use fringe_search::policy::SearchPolicyV1;
use fringe_search::problem::Problem;
use fringe_search::search::{SearchControl, SearchOutcome};
use fringe_search::strategy::StrategySpecV1;

/// A named problem instance: space, endpoints, and the strategies that
/// terminate on it in reasonable time.
pub struct Scenario<S> {
    pub name: &'static str,
    pub space: Box<dyn StateSpaceV1<S>>,
    pub initial: S,
    pub goal: S,
    pub strategies: Vec<StrategySpecV1>,
}

/// Arad → Bucharest on the road map, every strategy.
#[must_use]
pub fn road_map_scenario() -> Scenario<&'static str> {
    Scenario {
        name: "road_map",
        space: Box::new(road_map()),
        initial: "Arad",
        goal: "Bucharest",
        strategies: StrategySpecV1::catalog(4),
    }
}

/// Origin → (3, 2) on the infinite lattice.
///
/// Depth-first is omitted: it never returns on an infinite space.
#[must_use]
pub fn lattice_scenario() -> Scenario<Cell> {
    Scenario {
        name: "lattice",
        space: Box::new(LatticeWorld),
        initial: Cell::new(0, 0),
        goal: Cell::new(3, 2),
        strategies: vec![
            StrategySpecV1::BreadthFirst,
            StrategySpecV1::DepthLimited { limit: 5 },
            StrategySpecV1::IterativeDeepening { max_limit: Some(5) },
            StrategySpecV1::UniformCost,
        ],
    }
}

/// A `width × width` grid graph with unit costs, as explicit adjacency.
#[must_use]
pub fn grid_graph(width: u32) -> WeightedGraphV1<u32> {
    let mut graph = WeightedGraphV1::new(format!("grid_{width}"));
    for y in 0..width {
        for x in 0..width {
            let id = y * width + x;
            if x + 1 < width {
                graph.add_undirected_edge(id, id + 1, 1.0);
            }
            if y + 1 < width {
                graph.add_undirected_edge(id, id + width, 1.0);
            }
        }
    }
    graph
}

/// Run one strategy with no trace attached.
///
/// # Panics
///
/// Panics if `scenario.initial` is not in the space. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn run_engine_only<S: State>(
    scenario: &Scenario<S>,
    strategy: StrategySpecV1,
) -> SearchOutcome<S> {
    let problem = Problem::new(
        scenario.space.as_ref(),
        scenario.initial.clone(),
        scenario.goal.clone(),
    )
    .expect("scenario initial state");
    let mut control = SearchControl::new(SearchPolicyV1::unbounded());
    strategy.build::<S>().run(&problem, &mut control)
}
