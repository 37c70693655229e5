//! Survivor selection and scalar fitness.
//!
//! NSGA-II keeps its population size constant by merging parents and
//! offspring, then truncating the merged pool with the crowded-comparison
//! operator: whole fronts are kept while they fit, and the first front that
//! overflows is thinned by preferring the least crowded members.

use super::config::Nsga2Config;
use super::ordering::sort_by_crowded_order;
use super::runner::RankingPipeline;
use super::types::Candidate;
use crate::error::RankingError;
use log::{debug, trace};

/// Selects `count` survivors from a merged parent + offspring `pool`.
///
/// The pool is ranked and crowded from scratch, so the returned survivors
/// carry the front and crowding distance they had inside the pool. Survivors
/// come back best front first; members of the overflowing front are ordered
/// by decreasing crowding distance.
///
/// With precondition checks off and a cyclic dominance relation, candidates
/// left unranked keep front 0, sort ahead of front 1 and are kept first.
///
/// # Errors
///
/// - [`RankingError::InvalidSelectionSize`] if `count` is 0 or larger than
///   the pool.
/// - Any error of [`RankingPipeline::run`].
///
/// # Example
///
/// ```
/// use u_pareto::nsga2::{select_survivors, Nsga2Config, Solution};
///
/// let pool: Vec<Solution> = vec![
///     vec![1.0, 1.0].into(),
///     vec![2.0, 2.0].into(),
///     vec![3.0, 3.0].into(),
/// ];
///
/// let survivors = select_survivors(pool, 2, &Nsga2Config::new(2)).unwrap();
/// assert_eq!(survivors.len(), 2);
/// assert_eq!(survivors[0].objectives, vec![1.0, 1.0]);
/// assert_eq!(survivors[1].objectives, vec![2.0, 2.0]);
/// ```
pub fn select_survivors<C: Candidate>(
    mut pool: Vec<C>,
    count: usize,
    config: &Nsga2Config,
) -> Result<Vec<C>, RankingError> {
    if pool.is_empty() {
        return Err(RankingError::EmptyPopulation);
    }
    if count == 0 || count > pool.len() {
        return Err(RankingError::InvalidSelectionSize {
            requested: count,
            available: pool.len(),
        });
    }

    RankingPipeline::run(&mut pool, config)?;

    let mut kept = 0usize;
    for front in pool.chunk_by_mut(|a, b| a.pareto_front() == b.pareto_front()) {
        if kept + front.len() > count {
            trace!(
                "front {} overflows: keeping {} of {} by crowding distance",
                front[0].pareto_front(),
                count - kept,
                front.len()
            );
            sort_by_crowded_order(front);
            break;
        }
        kept += front.len();
        if kept == count {
            break;
        }
    }

    debug!("selected {} survivor(s) from a pool of {}", count, pool.len());
    pool.truncate(count);
    Ok(pool)
}

/// Folds front and crowding distance into one score, higher is better.
///
/// Computed as `1 / pareto_front + crowding_distance`. Boundary members of a
/// front score `f64::INFINITY`. The candidate must be ranked (front ≥ 1).
pub fn scalar_fitness<C: Candidate>(candidate: &C) -> f64 {
    debug_assert!(candidate.pareto_front() > 0, "candidate is not ranked");
    1.0 / candidate.pareto_front() as f64 + candidate.crowding_distance()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nsga2::Solution;

    fn pool(objs: &[&[f64]]) -> Vec<Solution> {
        objs.iter().map(|o| Solution::new(o.to_vec())).collect()
    }

    fn two_fronts() -> Vec<Solution> {
        pool(&[
            &[4.0, 4.0], // front 2, interior
            &[1.0, 5.0], // front 1
            &[2.0, 6.0], // front 2, boundary
            &[3.0, 3.0], // front 1
            &[6.0, 2.0], // front 2, boundary
            &[5.0, 1.0], // front 1
        ])
    }

    #[test]
    fn test_whole_fronts_fit() {
        let survivors = select_survivors(two_fronts(), 3, &Nsga2Config::new(2)).unwrap();
        assert_eq!(survivors.len(), 3);
        assert!(survivors.iter().all(|s| s.pareto_front == 1));
    }

    #[test]
    fn test_overflowing_front_prefers_sparse_members() {
        let survivors = select_survivors(two_fronts(), 5, &Nsga2Config::new(2)).unwrap();
        assert_eq!(survivors.len(), 5);
        assert!(survivors[..3].iter().all(|s| s.pareto_front == 1));
        assert!(survivors[3..].iter().all(|s| s.pareto_front == 2));
        assert!(survivors[3..]
            .iter()
            .all(|s| s.crowding_distance.is_infinite()));
        // the crowded interior member (4,4) is dropped
        assert!(!survivors.iter().any(|s| s.objectives == vec![4.0, 4.0]));
    }

    #[test]
    fn test_boundary_ties_keep_pool_order() {
        let survivors = select_survivors(two_fronts(), 4, &Nsga2Config::new(2)).unwrap();
        assert_eq!(survivors[3].objectives, vec![2.0, 6.0]);
    }

    #[test]
    fn test_select_everything() {
        let survivors = select_survivors(two_fronts(), 6, &Nsga2Config::new(2)).unwrap();
        assert_eq!(survivors.len(), 6);
        let fronts: Vec<usize> = survivors.iter().map(|s| s.pareto_front).collect();
        assert_eq!(fronts, vec![1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_invalid_counts() {
        let config = Nsga2Config::new(2);
        assert_eq!(
            select_survivors(two_fronts(), 0, &config),
            Err(RankingError::InvalidSelectionSize {
                requested: 0,
                available: 6
            })
        );
        assert_eq!(
            select_survivors(two_fronts(), 7, &config),
            Err(RankingError::InvalidSelectionSize {
                requested: 7,
                available: 6
            })
        );
        assert_eq!(
            select_survivors(Vec::<Solution>::new(), 1, &config),
            Err(RankingError::EmptyPopulation)
        );
    }

    #[derive(Debug, Clone)]
    struct Rock {
        id: usize,
        front: usize,
        distance: f64,
    }

    impl Candidate for Rock {
        // 0 > 1 > 2 > 0; id 3 is outside the cycle
        fn dominates(&self, other: &Self) -> bool {
            self.id < 3 && other.id < 3 && (self.id + 1) % 3 == other.id
        }
        fn objective(&self, _index: usize) -> f64 {
            self.id as f64
        }
        fn pareto_front(&self) -> usize {
            self.front
        }
        fn set_pareto_front(&mut self, front: usize) {
            self.front = front;
        }
        fn crowding_distance(&self) -> f64 {
            self.distance
        }
        fn set_crowding_distance(&mut self, distance: f64) {
            self.distance = distance;
        }
    }

    #[test]
    fn test_cyclic_members_are_kept_first_when_unchecked() {
        let pool: Vec<Rock> = [3, 0, 1, 2]
            .into_iter()
            .map(|id| Rock {
                id,
                front: 0,
                distance: 0.0,
            })
            .collect();
        let config = Nsga2Config::new(1).with_check_preconditions(false);
        let survivors = select_survivors(pool, 3, &config).unwrap();

        let ids: Vec<usize> = survivors.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(survivors.iter().all(|r| r.front == 0));
    }

    #[test]
    fn test_cyclic_pool_is_rejected_when_checked() {
        let pool: Vec<Rock> = (0..4)
            .map(|id| Rock {
                id,
                front: 0,
                distance: 0.0,
            })
            .collect();
        assert_eq!(
            select_survivors(pool, 2, &Nsga2Config::new(1)).map(|s| s.len()),
            Err(RankingError::IncompleteRanking {
                unranked: vec![0, 1, 2]
            })
        );
    }

    #[test]
    fn test_scalar_fitness() {
        let mut s = Solution::new(vec![0.0]);
        s.pareto_front = 2;
        s.crowding_distance = 0.25;
        assert!((scalar_fitness(&s) - 0.75).abs() < 1e-12);

        s.crowding_distance = f64::INFINITY;
        assert!(scalar_fitness(&s).is_infinite());

        s.pareto_front = 1;
        s.crowding_distance = 0.0;
        assert_eq!(scalar_fitness(&s), 1.0);
    }
}
