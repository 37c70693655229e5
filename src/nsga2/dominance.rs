//! Fast non-dominated sorting.
//!
//! [`DominanceRanker`] partitions a population into Pareto fronts using the
//! dominance-counting procedure of Deb et al. (2002). Each candidate ends up
//! with a 1-based front number; front 1 holds the candidates no one
//! dominates.
//!
//! # Complexity
//!
//! O(M·N²) dominance evaluations and O(N²) memory for the dominated sets,
//! where N is the population size and M the objective count hidden behind
//! [`Candidate::dominates`].
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use super::config::Nsga2Config;
use super::types::Candidate;
use crate::error::RankingError;
use log::{debug, trace, warn};

/// Per-candidate scratch state, alive for one [`DominanceRanker::rank`] call.
#[derive(Debug, Default)]
struct DominationRecord {
    /// How many candidates dominate this one and are not yet ranked.
    domination_count: usize,

    /// Positions of the candidates this one dominates.
    dominated: Vec<usize>,
}

/// Result of ranking: population positions grouped by front.
///
/// `fronts[0]` is front 1. Positions inside a front are listed in the order
/// the ranker discovered them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fronts {
    fronts: Vec<Vec<usize>>,
    ranks: Vec<usize>,
}

impl Fronts {
    /// Number of fronts.
    pub fn len(&self) -> usize {
        self.fronts.len()
    }

    /// Returns `true` if no candidate was ranked.
    pub fn is_empty(&self) -> bool {
        self.fronts.is_empty()
    }

    /// Positions in front `k` (0-based: `get(0)` is front 1).
    pub fn get(&self, k: usize) -> Option<&[usize]> {
        self.fronts.get(k).map(Vec::as_slice)
    }

    /// Positions in front 1, the non-dominated set.
    pub fn first(&self) -> Option<&[usize]> {
        self.get(0)
    }

    /// Iterates over fronts, best first.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.fronts.iter().map(Vec::as_slice)
    }

    /// Front number of every candidate, indexed by population position.
    ///
    /// Values are 1-based; 0 marks a candidate that could not be ranked.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Size of every front, best first.
    pub fn sizes(&self) -> Vec<usize> {
        self.fronts.iter().map(Vec::len).collect()
    }

    /// Consumes the result, returning the fronts as index lists.
    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.fronts
    }
}

/// Assigns Pareto fronts to a population.
///
/// # Example
///
/// ```
/// use u_pareto::nsga2::{Candidate, DominanceRanker, Nsga2Config, Solution};
///
/// let mut population: Vec<Solution> = vec![
///     vec![1.0, 1.0].into(), // dominates both others
///     vec![2.0, 2.0].into(),
///     vec![3.0, 3.0].into(),
/// ];
///
/// let ranker = DominanceRanker::new(&Nsga2Config::default());
/// let fronts = ranker.rank(&mut population).unwrap();
///
/// assert_eq!(fronts.len(), 3);
/// assert_eq!(population[0].pareto_front(), 1);
/// assert_eq!(population[1].pareto_front(), 2);
/// assert_eq!(population[2].pareto_front(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DominanceRanker {
    check_preconditions: bool,
}

impl DominanceRanker {
    /// Creates a ranker following the precondition policy of `config`.
    pub fn new(config: &Nsga2Config) -> Self {
        Self {
            check_preconditions: config.check_preconditions,
        }
    }

    /// Ranks `population` in place and returns the fronts.
    ///
    /// Every candidate's [`pareto_front`](Candidate::pareto_front) is
    /// overwritten. The population order is left untouched.
    ///
    /// # Errors
    ///
    /// - [`RankingError::EmptyPopulation`] if `population` is empty.
    /// - [`RankingError::IncompleteRanking`] if precondition checks are on
    ///   and `dominates` contains a cycle. Candidates are not modified in
    ///   that case. With checks off, those candidates get front 0.
    pub fn rank<C: Candidate>(&self, population: &mut [C]) -> Result<Fronts, RankingError> {
        let n = population.len();
        if n == 0 {
            return Err(RankingError::EmptyPopulation);
        }

        let mut records: Vec<DominationRecord> =
            (0..n).map(|_| DominationRecord::default()).collect();

        for p in 0..n {
            for q in (p + 1)..n {
                if population[p].dominates(&population[q]) {
                    records[p].dominated.push(q);
                    records[q].domination_count += 1;
                } else if population[q].dominates(&population[p]) {
                    records[q].dominated.push(p);
                    records[p].domination_count += 1;
                }
            }
        }

        let mut ranks = vec![0usize; n];
        let mut fronts: Vec<Vec<usize>> = Vec::new();
        let mut current: Vec<usize> = (0..n)
            .filter(|&p| records[p].domination_count == 0)
            .collect();

        while !current.is_empty() {
            let front = fronts.len() + 1;
            let mut next = Vec::new();

            for &p in &current {
                ranks[p] = front;
                // p is never visited again, so its dominated set can be consumed
                for q in std::mem::take(&mut records[p].dominated) {
                    records[q].domination_count -= 1;
                    if records[q].domination_count == 0 {
                        next.push(q);
                    }
                }
            }

            trace!("front {} holds {} candidate(s)", front, current.len());
            fronts.push(std::mem::replace(&mut current, next));
        }

        let unranked: Vec<usize> = (0..n).filter(|&p| ranks[p] == 0).collect();
        if !unranked.is_empty() {
            warn!(
                "{} of {} candidate(s) left unranked: dominance relation is cyclic",
                unranked.len(),
                n
            );
            if self.check_preconditions {
                return Err(RankingError::IncompleteRanking { unranked });
            }
        }

        for (candidate, &front) in population.iter_mut().zip(&ranks) {
            candidate.set_pareto_front(front);
        }

        debug!("ranked {} candidate(s) into {} front(s)", n, fronts.len());

        Ok(Fronts { fronts, ranks })
    }
}
