//! Fringe Harness: concrete state spaces and run orchestration for
//! `fringe_search`.
//!
//! The harness supplies the collaborators the engine only sees through
//! traits: in-memory worlds, a trace recorder, canonical JSON + digests,
//! and an on-disk report directory.
//!
//! The harness does NOT implement search; every run delegates to a strategy
//! from the catalog.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod report_dir;
pub mod runner;
pub mod trace;
pub mod worlds;
