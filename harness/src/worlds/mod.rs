//! State-space implementations for the harness runner.

pub mod chain;
pub mod lattice;
pub mod road_map;
pub mod weighted_graph;
