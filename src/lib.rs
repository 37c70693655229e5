//! Pareto ranking core for multi-objective evolutionary optimization.
//!
//! Provides the two ranking steps of the NSGA-II family:
//!
//! - **Non-dominated sorting**: partitions a population into ordered
//!   Pareto fronts (front 1 = non-dominated).
//! - **Crowding distance**: scores how isolated each candidate is inside
//!   its front, so that equally ranked candidates can be told apart in
//!   favor of diversity.
//!
//! Survivor selection and the crowded-comparison operator are built on
//! top of those two steps.
//!
//! # Architecture
//!
//! The crate is purely computational: no I/O, no threads, no global state.
//! Genetic operators, objective evaluation and termination belong to the
//! caller. Diagnostics go through the [`log`] facade; no logger is
//! installed here.

pub mod error;
pub mod nsga2;

pub use error::RankingError;
