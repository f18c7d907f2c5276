//! Very deep finite spaces and infinite ones: no stack exhaustion, and every
//! stop condition (ceiling, budget, cancellation) actually stops the search.

use std::time::Duration;

use fringe_harness::worlds::chain::ChainWorld;
use fringe_harness::worlds::lattice::{Cell, LatticeWorld};
use fringe_search::strategy::{BreadthFirst, DepthFirst, SearchStrategy, UniformCost};
use fringe_search::{
    CancelToken, IterativeDeepening, Problem, SearchControl, SearchPolicyV1, TerminationReasonV1,
};

const CHAIN_LEN: u64 = 20_000;

#[test]
fn depth_first_walks_a_long_chain() {
    let chain = ChainWorld::new(CHAIN_LEN);
    let problem = Problem::new(&chain, 0, CHAIN_LEN).unwrap();
    let mut control = SearchControl::new(SearchPolicyV1::unbounded());
    let outcome = DepthFirst.run(&problem, &mut control);

    let path = outcome.goal_path.expect("end of chain");
    assert_eq!(path.length() as u64, CHAIN_LEN + 1);
    assert_eq!(*path.next_state(), CHAIN_LEN);
    // Unweighted edges cost nothing.
    assert!(path.cost().abs() < f64::EPSILON);
    drop(path);
}

#[test]
fn uniform_cost_on_unweighted_chain_still_terminates() {
    let chain = ChainWorld::new(CHAIN_LEN);
    let problem = Problem::new(&chain, 0, CHAIN_LEN + 1).unwrap();
    let mut control = SearchControl::new(SearchPolicyV1::unbounded());
    let outcome = UniformCost.run(&problem, &mut control);
    assert_eq!(outcome.termination, TerminationReasonV1::FrontierExhausted);
    assert_eq!(outcome.stats.expansions, CHAIN_LEN + 1);
    assert_eq!(outcome.stats.fringe_high_water, 1);
}

#[test]
fn breadth_first_on_lattice_finds_manhattan_route() {
    let problem = Problem::new(&LatticeWorld, Cell::new(0, 0), Cell::new(2, 1)).unwrap();
    let mut control = SearchControl::new(SearchPolicyV1::unbounded());
    let outcome = BreadthFirst.run(&problem, &mut control);
    let path = outcome.goal_path.unwrap();
    assert_eq!(path.length(), 4);
    assert!((path.cost() - 3.0).abs() < f64::EPSILON);
}

#[test]
fn deepening_on_lattice_stops_at_ceiling() {
    let problem = Problem::new(&LatticeWorld, Cell::new(0, 0), Cell::new(50, 50)).unwrap();
    let mut control = SearchControl::new(SearchPolicyV1::unbounded());
    let outcome = IterativeDeepening::bounded(3).run(&problem, &mut control);
    assert_eq!(
        outcome.termination,
        TerminationReasonV1::DepthLimitExhausted { max_limit: 3 }
    );
    assert_eq!(outcome.stats.iterations, 4);
    assert!(outcome.goal_path.is_none());
}

#[test]
fn deepening_on_lattice_finds_near_goal() {
    let problem = Problem::new(&LatticeWorld, Cell::new(0, 0), Cell::new(1, -1)).unwrap();
    let mut control = SearchControl::new(SearchPolicyV1::unbounded().with_max_deepening_limit(6));
    let outcome = IterativeDeepening::unbounded().run(&problem, &mut control);
    assert!(outcome.is_goal_reached());
    assert_eq!(outcome.stats.final_depth_limit, Some(2));
}

#[test]
fn budget_stops_depth_first_on_infinite_lattice() {
    let problem = Problem::new(&LatticeWorld, Cell::new(0, 0), Cell::new(-1_000, 0)).unwrap();
    let mut control = SearchControl::new(SearchPolicyV1::unbounded().with_max_expansions(1_000));
    let outcome = DepthFirst.run(&problem, &mut control);
    assert_eq!(
        outcome.termination,
        TerminationReasonV1::ExpansionBudgetExceeded
    );
    assert_eq!(outcome.stats.expansions, 1_000);
}

#[test]
fn cancel_from_another_thread_stops_search() {
    let token = CancelToken::new();
    let canceller = {
        let token = token.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            token.cancel();
        })
    };

    let problem = Problem::new(&LatticeWorld, Cell::new(0, 0), Cell::new(i64::MAX, 0)).unwrap();
    let mut control = SearchControl::new(SearchPolicyV1::unbounded()).with_cancel(token);
    let outcome = BreadthFirst.run(&problem, &mut control);

    canceller.join().unwrap();
    assert_eq!(outcome.termination, TerminationReasonV1::Cancelled);
    assert!(outcome.stats.expansions > 0);
}
