//! Crowding distance assignment.
//!
//! The crowding distance of a candidate estimates how sparse its
//! neighborhood is inside its own front: the normalized side length of the
//! cuboid spanned by its nearest neighbors on every objective. Boundary
//! candidates (minimum or maximum of some objective) get `f64::INFINITY`
//! so that the extremes of a front are always preferred.
//!
//! The estimator works on a population already grouped by front. It walks
//! the contiguous runs of equal [`Candidate::pareto_front`] and treats each
//! run independently, so candidates in different fronts never influence
//! each other.
//!
//! # Complexity
//!
//! O(M·N·log N) for M objectives and N candidates.

use super::config::Nsga2Config;
use super::types::Candidate;
use crate::error::RankingError;
use log::{debug, trace, warn};

/// Assigns crowding distances front by front.
///
/// # Preconditions
///
/// The population must be stable-sorted ascending by Pareto front (see
/// [`sort_by_front`](super::sort_by_front)). The estimator never sorts the
/// population itself. With precondition checks disabled, an unsorted
/// population silently splits fronts into several segments and yields
/// meaningless distances.
///
/// # Example
///
/// ```
/// use u_pareto::nsga2::{
///     sort_by_front, Candidate, CrowdingEstimator, DominanceRanker, Nsga2Config, Solution,
/// };
///
/// let config = Nsga2Config::new(2);
/// let mut population: Vec<Solution> = vec![
///     vec![1.0, 5.0].into(),
///     vec![3.0, 3.0].into(),
///     vec![5.0, 1.0].into(),
/// ];
///
/// DominanceRanker::new(&config).rank(&mut population).unwrap();
/// sort_by_front(&mut population);
/// CrowdingEstimator::new(&config).estimate(&mut population).unwrap();
///
/// assert!(population[0].crowding_distance().is_infinite());
/// assert_eq!(population[1].crowding_distance(), 2.0);
/// assert!(population[2].crowding_distance().is_infinite());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CrowdingEstimator {
    objectives: usize,
    check_preconditions: bool,
}

impl CrowdingEstimator {
    /// Creates an estimator for the objective count and precondition policy
    /// of `config`.
    pub fn new(config: &Nsga2Config) -> Self {
        Self {
            objectives: config.objectives,
            check_preconditions: config.check_preconditions,
        }
    }

    /// Overwrites the crowding distance of every candidate in `population`.
    ///
    /// # Errors
    ///
    /// - [`RankingError::EmptyPopulation`] if `population` is empty.
    /// - [`RankingError::NoObjectives`] if the objective count is zero.
    /// - With precondition checks on: [`RankingError::UnrankedCandidate`],
    ///   [`RankingError::UnsortedPopulation`] or
    ///   [`RankingError::NonFiniteObjective`]. Nothing is modified when an
    ///   error is returned.
    pub fn estimate<C: Candidate>(&self, population: &mut [C]) -> Result<(), RankingError> {
        if population.is_empty() {
            return Err(RankingError::EmptyPopulation);
        }
        if self.objectives == 0 {
            return Err(RankingError::NoObjectives);
        }
        if self.check_preconditions {
            self.check(population)
                .inspect_err(|err| warn!("crowding estimation rejected: {}", err))?;
        }

        for candidate in population.iter_mut() {
            candidate.set_crowding_distance(0.0);
        }

        let mut segments = 0usize;
        let mut order = Vec::new();
        for front in population.chunk_by_mut(|a, b| a.pareto_front() == b.pareto_front()) {
            trace!(
                "front {}: {} candidate(s)",
                front[0].pareto_front(),
                front.len()
            );
            self.assign_front(front, &mut order);
            segments += 1;
        }

        debug!(
            "assigned crowding distance to {} candidate(s) in {} front(s)",
            population.len(),
            segments
        );
        Ok(())
    }

    /// Accumulates distances inside one front. `order` is reusable scratch.
    fn assign_front<C: Candidate>(&self, front: &mut [C], order: &mut Vec<usize>) {
        let size = front.len();
        if size == 1 {
            front[0].set_crowding_distance(f64::INFINITY);
            return;
        }

        for obj in 0..self.objectives {
            // permutation of front-relative positions, ascending by objective;
            // sort_by is stable so ties keep population order
            order.clear();
            order.extend(0..size);
            order.sort_by(|&a, &b| front[a].objective(obj).total_cmp(&front[b].objective(obj)));

            let lo = order[0];
            let hi = order[size - 1];
            let min = front[lo].objective(obj);
            let max = front[hi].objective(obj);
            let range = if max > min { max - min } else { 1.0 };

            front[lo].set_crowding_distance(f64::INFINITY);
            front[hi].set_crowding_distance(f64::INFINITY);

            for j in 1..size - 1 {
                let gap = front[order[j + 1]].objective(obj) - front[order[j - 1]].objective(obj);
                debug_assert!(gap >= 0.0 || gap.is_nan());

                let current = front[order[j]].crowding_distance();
                front[order[j]].set_crowding_distance(current + gap / range);
            }
        }
    }

    fn check<C: Candidate>(&self, population: &[C]) -> Result<(), RankingError> {
        let mut previous = 0;
        for (index, candidate) in population.iter().enumerate() {
            let front = candidate.pareto_front();
            if front == 0 {
                return Err(RankingError::UnrankedCandidate { index });
            }
            if front < previous {
                return Err(RankingError::UnsortedPopulation {
                    index,
                    previous,
                    found: front,
                });
            }
            previous = front;

            for objective in 0..self.objectives {
                let value = candidate.objective(objective);
                if !value.is_finite() {
                    return Err(RankingError::NonFiniteObjective {
                        index,
                        objective,
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}
