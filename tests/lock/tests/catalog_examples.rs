//! Worked examples for every catalog strategy on the diamond graph and the
//! road map.

use fringe_harness::worlds::road_map::road_map;
use fringe_harness::worlds::weighted_graph::{diamond, WeightedGraphV1};
use fringe_search::error::SearchError;
use fringe_search::problem::Problem;
use fringe_search::search::{FringeSnapshot, TerminationReasonV1};
use fringe_search::strategy::{
    BreadthFirst, DepthFirst, DepthLimited, SearchStrategy, StrategySpecV1, UniformCost,
};
use fringe_search::{IterativeDeepening, SearchControl, SearchOutcome, SearchPolicyV1};

fn run<S: fringe_search::State>(
    strategy: &dyn SearchStrategy<S>,
    problem: &Problem<'_, S>,
) -> SearchOutcome<S> {
    let mut control = SearchControl::new(SearchPolicyV1::unbounded());
    strategy.run(problem, &mut control)
}

fn route(outcome: &SearchOutcome<&'static str>) -> Vec<&'static str> {
    outcome
        .goal_path
        .as_ref()
        .expect("goal path")
        .to_root_first()
}

#[test]
fn diamond_uniform_cost_takes_cheap_branch() {
    let graph = diamond();
    let problem = Problem::new(&graph, "A", "D").unwrap();
    let outcome = run(&UniformCost, &problem);
    assert_eq!(route(&outcome), vec!["A", "B", "D"]);
    let cost = outcome.goal_path.unwrap().cost();
    assert!((cost - 2.0).abs() < f64::EPSILON);
}

#[test]
fn uniform_cost_on_unweighted_edges_orders_by_state_then_length() {
    let mut graph = WeightedGraphV1::new("unweighted");
    graph
        .add_unweighted_edge("A", "C")
        .add_unweighted_edge("A", "B")
        .add_unweighted_edge("B", "C")
        .add_unweighted_edge("C", "D");
    let problem = Problem::new(&graph, "A", "D").unwrap();

    let mut pops: Vec<Vec<&str>> = Vec::new();
    let mut observer = |snapshot: &FringeSnapshot<'_, &'static str>| {
        pops.push(snapshot.paths[0].to_root_first());
    };
    let outcome = {
        let mut control =
            SearchControl::new(SearchPolicyV1::unbounded()).with_observer(&mut observer);
        UniformCost.run(&problem, &mut control)
    };

    // Every path costs 0, so B sorts before C, and A,C (2 states) before A,B,C.
    assert_eq!(
        pops,
        vec![
            vec!["A"],
            vec!["A", "B"],
            vec!["A", "C"],
            vec!["A", "B", "C"],
            vec!["A", "C", "D"],
        ]
    );
    assert_eq!(route(&outcome), vec!["A", "C", "D"]);
    assert!(outcome.goal_path.unwrap().cost().abs() < f64::EPSILON);
}

#[test]
fn diamond_breadth_first_uses_two_edges() {
    let graph = diamond();
    let problem = Problem::new(&graph, "A", "D").unwrap();
    assert!(BreadthFirst.search(&problem, None));
    let outcome = run(&BreadthFirst, &problem);
    assert_eq!(outcome.goal_path.unwrap().length(), 3);
}

#[test]
fn diamond_depth_limited_needs_limit_two() {
    let graph = diamond();
    let problem = Problem::new(&graph, "A", "D").unwrap();
    assert!(!DepthLimited::new(1).search(&problem, None));
    assert!(DepthLimited::new(2).search(&problem, None));
}

#[test]
fn diamond_depth_first_and_deepening_agree() {
    let graph = diamond();
    let problem = Problem::new(&graph, "A", "D").unwrap();
    assert_eq!(route(&run(&DepthFirst, &problem)), vec!["A", "B", "D"]);

    let deepening = run(&IterativeDeepening::unbounded(), &problem);
    assert_eq!(route(&deepening), vec!["A", "B", "D"]);
    assert_eq!(deepening.stats.final_depth_limit, Some(2));
    assert_eq!(deepening.stats.iterations, 3);
}

#[test]
fn goal_equal_to_initial_needs_no_expansion() {
    let graph = diamond();
    let problem = Problem::new(&graph, "C", "C").unwrap();
    for spec in StrategySpecV1::catalog(0) {
        let strategy = spec.build::<&'static str>();
        let outcome = run(strategy.as_ref(), &problem);
        assert!(outcome.is_goal_reached(), "{spec}");
        assert_eq!(outcome.stats.expansions, 1, "{spec}");
        assert_eq!(outcome.stats.paths_generated, 1, "{spec}");
    }
}

#[test]
fn unknown_initial_state_is_rejected() {
    let graph = diamond();
    let err = Problem::new(&graph, "Q", "D").unwrap_err();
    assert_eq!(
        err,
        SearchError::StateNotFound {
            state: "Q".to_string()
        }
    );
}

#[test]
fn unreachable_goal_exhausts_every_strategy() {
    let graph = diamond();
    let problem = Problem::new(&graph, "B", "C").unwrap();
    for spec in StrategySpecV1::catalog(5) {
        let outcome = run(spec.build::<&'static str>().as_ref(), &problem);
        assert_eq!(
            outcome.termination,
            TerminationReasonV1::FrontierExhausted,
            "{spec}"
        );
    }
}

#[test]
fn road_map_uniform_cost_is_418_km() {
    let graph = road_map();
    let problem = Problem::new(&graph, "Arad", "Bucharest").unwrap();
    let outcome = run(&UniformCost, &problem);
    assert_eq!(
        route(&outcome),
        vec!["Arad", "Sibiu", "Rimnicu Vilcea", "Pitesti", "Bucharest"]
    );
    assert!((outcome.goal_path.unwrap().cost() - 418.0).abs() < f64::EPSILON);
}

#[test]
fn road_map_breadth_first_goes_through_fagaras() {
    let graph = road_map();
    let problem = Problem::new(&graph, "Arad", "Bucharest").unwrap();
    let outcome = run(&BreadthFirst, &problem);
    assert_eq!(
        route(&outcome),
        vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]
    );
    assert!((outcome.goal_path.unwrap().cost() - 450.0).abs() < f64::EPSILON);
}

#[test]
fn road_map_depth_first_follows_alphabetical_siblings() {
    let graph = road_map();
    let problem = Problem::new(&graph, "Arad", "Bucharest").unwrap();
    let outcome = run(&DepthFirst, &problem);
    assert_eq!(
        route(&outcome),
        vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]
    );
}

#[test]
fn road_map_deepening_stops_at_three() {
    let graph = road_map();
    let problem = Problem::new(&graph, "Arad", "Bucharest").unwrap();
    let outcome = run(&IterativeDeepening::unbounded(), &problem);
    assert_eq!(outcome.stats.final_depth_limit, Some(3));
    assert_eq!(outcome.goal_path.unwrap().length(), 4);
    assert!(!DepthLimited::new(2).search(&problem, None));
}

#[test]
fn strategy_names_match_selectors() {
    let expected = [
        ("dfs", "Depth-First Search"),
        ("bfs", "Breadth-First Search"),
        ("dls:3", "Depth-Limited Search (limit 3)"),
        ("ids", "Iterative-Deepening Search"),
        ("ucs", "Uniform-Cost Search"),
    ];
    for (text, name) in expected {
        let spec: StrategySpecV1 = text.parse().unwrap();
        assert_eq!(spec.build::<u32>().name(), name, "{text}");
    }
}
