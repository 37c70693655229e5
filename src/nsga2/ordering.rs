//! Comparators over ranked candidates.
//!
//! The crowded-comparison operator orders candidates first by front
//! (lower is better), then by crowding distance (larger is better). It is
//! the two-key comparator an NSGA-II loop uses for tournament and survivor
//! selection.

use super::types::Candidate;
use std::cmp::Ordering;

/// Ascending by Pareto front.
pub fn front_order<C: Candidate>(a: &C, b: &C) -> Ordering {
    a.pareto_front().cmp(&b.pareto_front())
}

/// Crowded-comparison operator: `Less` means `a` is preferred.
///
/// ```
/// use std::cmp::Ordering;
/// use u_pareto::nsga2::{crowded_order, Solution};
///
/// let mut a = Solution::new(vec![1.0, 2.0]);
/// let mut b = Solution::new(vec![2.0, 1.0]);
/// a.pareto_front = 1;
/// b.pareto_front = 1;
/// a.crowding_distance = f64::INFINITY;
/// b.crowding_distance = 0.5;
///
/// assert_eq!(crowded_order(&a, &b), Ordering::Less);
///
/// b.pareto_front = 0; // unranked sorts first; rank before comparing
/// assert_eq!(crowded_order(&a, &b), Ordering::Greater);
/// ```
pub fn crowded_order<C: Candidate>(a: &C, b: &C) -> Ordering {
    front_order(a, b).then_with(|| b.crowding_distance().total_cmp(&a.crowding_distance()))
}

/// Stable-sorts `population` ascending by Pareto front.
///
/// This is the arrangement [`CrowdingEstimator::estimate`] expects.
///
/// [`CrowdingEstimator::estimate`]: super::CrowdingEstimator::estimate
pub fn sort_by_front<C: Candidate>(population: &mut [C]) {
    population.sort_by(|a, b| front_order(a, b));
}

/// Stable-sorts `population` by the crowded-comparison operator, best first.
pub fn sort_by_crowded_order<C: Candidate>(population: &mut [C]) {
    population.sort_by(|a, b| crowded_order(a, b));
}
