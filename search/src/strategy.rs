//! Strategy catalog: named configurations of [`GeneralSearch`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::contract::State;
use crate::deepening::IterativeDeepening;
use crate::error::SearchError;
use crate::fringe::FringeDisciplineV1;
use crate::policy::SearchPolicyV1;
use crate::problem::Problem;
use crate::search::{ExpansionOrderV1, FringeObserver, GeneralSearch, SearchControl, SearchOutcome};

/// A search strategy.
///
/// Object-safe so that configuration can select a strategy at runtime
/// (`Box<dyn SearchStrategy<S>>`).
pub trait SearchStrategy<S: State> {
    /// Display name of the configured strategy.
    fn name(&self) -> String;

    /// Run the strategy under the given control.
    fn run(&self, problem: &Problem<'_, S>, control: &mut SearchControl<'_, S>)
        -> SearchOutcome<S>;

    /// Whether the goal is reachable under this strategy, with no budget.
    ///
    /// `trace` (if supplied) sees the fringe at the start of every step.
    fn search(&self, problem: &Problem<'_, S>, trace: Option<&mut dyn FringeObserver<S>>) -> bool {
        let mut control = SearchControl::new(SearchPolicyV1::unbounded());
        if let Some(observer) = trace {
            control = control.with_observer(observer);
        }
        self.run(problem, &mut control).is_goal_reached()
    }
}

/// Strategies that are a single fixed configuration of the general loop.
pub trait EngineStrategy {
    fn engine(&self) -> GeneralSearch;
    fn display_name(&self) -> String;
}

impl<S: State, T: EngineStrategy> SearchStrategy<S> for T {
    fn name(&self) -> String {
        self.display_name()
    }

    fn run(
        &self,
        problem: &Problem<'_, S>,
        control: &mut SearchControl<'_, S>,
    ) -> SearchOutcome<S> {
        debug!(strategy = %self.display_name(), space = problem.space().space_id(), "search started");
        self.engine().run(problem, control)
    }
}

/// Depth-first: reverse-sorted siblings, each prepended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthFirst;

impl EngineStrategy for DepthFirst {
    fn engine(&self) -> GeneralSearch {
        GeneralSearch {
            expansion_order: ExpansionOrderV1::Reverse,
            discipline: FringeDisciplineV1::Stack,
            depth_limit: None,
        }
    }

    fn display_name(&self) -> String {
        "Depth-First Search".into()
    }
}

/// Breadth-first: sorted siblings, each appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreadthFirst;

impl EngineStrategy for BreadthFirst {
    fn engine(&self) -> GeneralSearch {
        GeneralSearch {
            expansion_order: ExpansionOrderV1::Natural,
            discipline: FringeDisciplineV1::Queue,
            depth_limit: None,
        }
    }

    fn display_name(&self) -> String {
        "Breadth-First Search".into()
    }
}

/// Depth-first that stops expanding paths longer than `limit` states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimited {
    pub limit: usize,
}

impl DepthLimited {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl EngineStrategy for DepthLimited {
    fn engine(&self) -> GeneralSearch {
        GeneralSearch {
            expansion_order: ExpansionOrderV1::Reverse,
            discipline: FringeDisciplineV1::Stack,
            depth_limit: Some(self.limit),
        }
    }

    fn display_name(&self) -> String {
        format!("Depth-Limited Search (limit {})", self.limit)
    }
}

/// Uniform-cost (branch-and-bound): always pops the lowest path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCost;

impl EngineStrategy for UniformCost {
    fn engine(&self) -> GeneralSearch {
        GeneralSearch {
            expansion_order: ExpansionOrderV1::Natural,
            discipline: FringeDisciplineV1::Priority,
            depth_limit: None,
        }
    }

    fn display_name(&self) -> String {
        "Uniform-Cost Search".into()
    }
}

/// Informed strategy names kept out of the catalog.
const RESERVED_STRATEGIES: &[&str] = &["greedy", "astar", "beam"];

/// Textual strategy selector used by configuration.
///
/// Grammar: `dfs` | `bfs` | `dls:<limit>` | `ids` | `ids:<max>` | `ucs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategySpecV1 {
    DepthFirst,
    BreadthFirst,
    DepthLimited { limit: usize },
    IterativeDeepening { max_limit: Option<usize> },
    UniformCost,
}

impl StrategySpecV1 {
    /// Every selector, with `dls` and bounded `ids` at the given limit.
    #[must_use]
    pub fn catalog(limit: usize) -> Vec<Self> {
        vec![
            Self::DepthFirst,
            Self::BreadthFirst,
            Self::DepthLimited { limit },
            Self::IterativeDeepening {
                max_limit: Some(limit),
            },
            Self::UniformCost,
        ]
    }

    /// Instantiate the selected strategy.
    #[must_use]
    pub fn build<S: State>(&self) -> Box<dyn SearchStrategy<S>> {
        match *self {
            Self::DepthFirst => Box::new(DepthFirst),
            Self::BreadthFirst => Box::new(BreadthFirst),
            Self::DepthLimited { limit } => Box::new(DepthLimited::new(limit)),
            Self::IterativeDeepening { max_limit } => Box::new(IterativeDeepening { max_limit }),
            Self::UniformCost => Box::new(UniformCost),
        }
    }
}

impl FromStr for StrategySpecV1 {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        if RESERVED_STRATEGIES.contains(&name) {
            return Err(SearchError::UnsupportedStrategy { name: name.into() });
        }

        let parse_limit = |arg: &str| {
            arg.parse::<usize>()
                .map_err(|e| SearchError::InvalidStrategySpec {
                    detail: format!("bad limit in {s:?}: {e}"),
                })
        };

        match (name, arg) {
            ("dfs", None) => Ok(Self::DepthFirst),
            ("bfs", None) => Ok(Self::BreadthFirst),
            ("ucs", None) => Ok(Self::UniformCost),
            ("dls", Some(arg)) => Ok(Self::DepthLimited {
                limit: parse_limit(arg)?,
            }),
            ("ids", None) => Ok(Self::IterativeDeepening { max_limit: None }),
            ("ids", Some(arg)) => Ok(Self::IterativeDeepening {
                max_limit: Some(parse_limit(arg)?),
            }),
            ("dls", None) => Err(SearchError::InvalidStrategySpec {
                detail: "dls requires a limit, e.g. dls:3".into(),
            }),
            _ => Err(SearchError::InvalidStrategySpec {
                detail: format!("unknown strategy {s:?}"),
            }),
        }
    }
}

impl fmt::Display for StrategySpecV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthFirst => f.write_str("dfs"),
            Self::BreadthFirst => f.write_str("bfs"),
            Self::DepthLimited { limit } => write!(f, "dls:{limit}"),
            Self::IterativeDeepening { max_limit: None } => f.write_str("ids"),
            Self::IterativeDeepening {
                max_limit: Some(max),
            } => write!(f, "ids:{max}"),
            Self::UniformCost => f.write_str("ucs"),
        }
    }
}
