//! Binary that runs the strategy catalog over the built-in worlds and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture [STRATEGY] [--render]`
//!
//! `STRATEGY` is a selector (`dfs`, `bfs`, `dls:3`, `ids`, `ids:3`, `ucs`);
//! without it every catalog entry runs. `--render` appends the text trace.
//! Logs go to stderr, filtered by `RUST_LOG`.
//!
//! Output: key=value lines, one block per case.

use fringe_harness::runner::{run_search, RunConfig, SearchRunReport};
use fringe_harness::worlds::road_map::road_map;
use fringe_harness::worlds::weighted_graph::diamond;
use fringe_search::strategy::StrategySpecV1;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut render = false;
    let mut selected = None;
    for arg in std::env::args().skip(1) {
        if arg == "--render" {
            render = true;
        } else {
            let spec: StrategySpecV1 = arg
                .parse()
                .unwrap_or_else(|e| panic!("bad strategy {arg:?}: {e}"));
            selected = Some(spec);
        }
    }
    let strategies = selected.map_or_else(|| StrategySpecV1::catalog(3), |spec| vec![spec]);

    let diamond = diamond();
    let roads = road_map();
    for spec in strategies {
        let config = RunConfig::for_strategy(spec);
        let report = run_search(&diamond, "A", "D", &config).expect("diamond run failed");
        print_case("diamond", &report, render);
        let report =
            run_search(&roads, "Arad", "Bucharest", &config).expect("road map run failed");
        print_case("road_map", &report, render);
    }
}

fn print_case(world: &str, report: &SearchRunReport, render: bool) {
    let termination = report.to_json_value()["termination"]["type"]
        .as_str()
        .expect("termination type")
        .to_string();
    println!("case={world}/{}", report.strategy);
    println!("strategy_name={}", report.strategy_name);
    println!("termination={termination}");
    println!(
        "goal_path={}",
        report
            .goal_path
            .as_ref()
            .map_or_else(|| "-".to_string(), |path| path.join(","))
    );
    println!("goal_cost={}", report.goal_cost.as_deref().unwrap_or("-"));
    println!("expansions={}", report.stats.expansions);
    println!(
        "trace_digest={}",
        report
            .trace_digest
            .as_ref()
            .map_or("-", |digest| digest.as_str())
    );
    println!(
        "report_digest={}",
        report.digest().expect("report digest").as_str()
    );
    if render {
        if let Some(trace) = &report.trace {
            print!("{}", trace.render_text());
        }
    }
}
