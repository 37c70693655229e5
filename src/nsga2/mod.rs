//! NSGA-II ranking core.
//!
//! Ranks an evaluated population the way NSGA-II does between generations.
//! Users plug their solution type in by implementing [`Candidate`].
//!
//! # Core Trait
//!
//! - [`Candidate`]: dominance test, objective access, and storage for the
//!   front and crowding distance the core assigns
//!
//! # Key Types
//!
//! - [`DominanceRanker`]: fast non-dominated sort into Pareto fronts
//! - [`CrowdingEstimator`]: per-front crowding distance
//! - [`RankingPipeline`]: rank → sort by front → crowd, in one call
//! - [`Nsga2Config`]: objective count and precondition policy
//! - [`Solution`]: ready-made candidate over minimized objective vectors
//!
//! # Control Flow
//!
//! ```text
//! evaluate objectives (caller)
//!   → DominanceRanker::rank       assigns pareto_front
//!   → sort_by_front               stable, ascending
//!   → CrowdingEstimator::estimate assigns crowding_distance
//!   → crowded_order               (front, distance) comparator for selection
//! ```
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod crowding;
mod dominance;
mod ordering;
mod runner;
mod selection;
mod types;

pub use config::Nsga2Config;
pub use crowding::CrowdingEstimator;
pub use dominance::{DominanceRanker, Fronts};
pub use ordering::{crowded_order, front_order, sort_by_crowded_order, sort_by_front};
pub use runner::{RankingPipeline, RankingReport};
pub use selection::{scalar_fitness, select_survivors};
pub use types::{dominance_cmp, Candidate, Dominance, Solution};
