//! Error type shared by all ranking operations.
//!
//! Every variant is a violated precondition on caller input. None of them
//! is transient, so retrying the same call with the same population always
//! fails the same way.

use thiserror::Error;

/// Invalid input to a ranking, crowding, or selection operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    /// The population holds no candidates.
    #[error("population must not be empty")]
    EmptyPopulation,

    /// The configured objective count is zero.
    #[error("objective count must be at least 1")]
    NoObjectives,

    /// A candidate reached crowding estimation without a Pareto front.
    #[error("candidate {index} has no pareto front assigned; rank the population first")]
    UnrankedCandidate {
        /// Position of the candidate in the population.
        index: usize,
    },

    /// The population is not sorted ascending by Pareto front.
    #[error(
        "population is not sorted by pareto front: position {index} has front {found} after front {previous}"
    )]
    UnsortedPopulation {
        /// Position of the first out-of-order candidate.
        index: usize,
        /// Front of the candidate just before `index`.
        previous: usize,
        /// Front of the candidate at `index`.
        found: usize,
    },

    /// An objective value is NaN or infinite.
    #[error("candidate {index} has non-finite value {value} for objective {objective}")]
    NonFiniteObjective {
        /// Position of the candidate in the population.
        index: usize,
        /// Objective index.
        objective: usize,
        /// Offending value.
        value: f64,
    },

    /// Some candidates never became non-dominated during ranking.
    ///
    /// This happens only when `dominates` is not a strict partial order,
    /// e.g. `a` dominates `b`, `b` dominates `c` and `c` dominates `a`.
    #[error(
        "{} candidate(s) could not be assigned a front; dominance relation is cyclic",
        .unranked.len()
    )]
    IncompleteRanking {
        /// Positions of the candidates left without a front.
        unranked: Vec<usize>,
    },

    /// Survivor selection asked for an impossible number of survivors.
    #[error("cannot select {requested} survivor(s) from a pool of {available}")]
    InvalidSelectionSize {
        /// Requested survivor count.
        requested: usize,
        /// Size of the candidate pool.
        available: usize,
    },
}
