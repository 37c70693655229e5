//! One-call ranking of a population.
//!
//! [`RankingPipeline`] chains the three steps an NSGA-II generation performs
//! on its evaluated population: rank → sort by front → estimate crowding.

use super::config::Nsga2Config;
use super::crowding::CrowdingEstimator;
use super::dominance::DominanceRanker;
use super::ordering::sort_by_front;
use super::types::Candidate;
use crate::error::RankingError;
use log::debug;

/// Summary of a [`RankingPipeline::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingReport {
    /// Size of every front, best first.
    pub front_sizes: Vec<usize>,

    /// Number of candidates whose crowding distance is infinite.
    pub boundary_count: usize,
}

impl RankingReport {
    /// Number of fronts found.
    pub fn front_count(&self) -> usize {
        self.front_sizes.len()
    }

    /// Size of the non-dominated front.
    pub fn pareto_size(&self) -> usize {
        self.front_sizes.first().copied().unwrap_or(0)
    }
}

/// Ranks, groups and crowds a population in one call.
///
/// # Usage
///
/// ```
/// use u_pareto::nsga2::{Candidate, Nsga2Config, RankingPipeline, Solution};
///
/// let mut population: Vec<Solution> = vec![
///     vec![3.0, 3.0].into(),
///     vec![1.0, 4.0].into(),
///     vec![4.0, 1.0].into(),
///     vec![2.0, 2.0].into(),
/// ];
///
/// let report = RankingPipeline::run(&mut population, &Nsga2Config::new(2)).unwrap();
///
/// assert_eq!(report.front_sizes, vec![3, 1]);
/// // population is now grouped by front
/// assert_eq!(population[3].objectives, vec![3.0, 3.0]);
/// assert_eq!(population[3].pareto_front(), 2);
/// ```
pub struct RankingPipeline;

impl RankingPipeline {
    /// Ranks `population`, stable-sorts it ascending by front and assigns
    /// crowding distances.
    ///
    /// Unlike the individual components, this reorders the population.
    ///
    /// # Errors
    ///
    /// Any [`RankingError`] raised by config validation, the ranker or the
    /// estimator.
    pub fn run<C: Candidate>(
        population: &mut [C],
        config: &Nsga2Config,
    ) -> Result<RankingReport, RankingError> {
        config.validate()?;

        let fronts = DominanceRanker::new(config).rank(population)?;
        sort_by_front(population);
        CrowdingEstimator::new(config).estimate(population)?;

        let boundary_count = population
            .iter()
            .filter(|c| c.crowding_distance().is_infinite())
            .count();

        debug!(
            "ranking pipeline: {} candidate(s), {} front(s), {} boundary",
            population.len(),
            fronts.len(),
            boundary_count
        );

        Ok(RankingReport {
            front_sizes: fronts.sizes(),
            boundary_count,
        })
    }
}
