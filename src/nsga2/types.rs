//! Candidate capability contract.
//!
//! [`Candidate`] is the only thing the ranking core knows about a solution:
//! how it compares to another solution under Pareto dominance, how to read
//! one of its objective values, and where to store the two scalars the
//! core produces (front and crowding distance).

/// A member of the population being ranked.
///
/// Implementors decide the comparison direction of every objective.
/// `dominates` must be a strict partial order (irreflexive, antisymmetric,
/// transitive) and must depend only on the two candidates involved.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Design {
///     cost: f64,
///     weight: f64,
///     front: usize,
///     distance: f64,
/// }
///
/// impl Candidate for Design {
///     fn dominates(&self, other: &Self) -> bool {
///         self.cost <= other.cost
///             && self.weight <= other.weight
///             && (self.cost < other.cost || self.weight < other.weight)
///     }
///     fn objective(&self, index: usize) -> f64 {
///         [self.cost, self.weight][index]
///     }
///     fn pareto_front(&self) -> usize { self.front }
///     fn set_pareto_front(&mut self, front: usize) { self.front = front; }
///     fn crowding_distance(&self) -> f64 { self.distance }
///     fn set_crowding_distance(&mut self, d: f64) { self.distance = d; }
/// }
/// ```
pub trait Candidate {
    /// Returns `true` if `self` is no worse than `other` on every objective
    /// and strictly better on at least one.
    fn dominates(&self, other: &Self) -> bool;

    /// Returns the value of objective `index` (0-based).
    fn objective(&self, index: usize) -> f64;

    /// Returns the 1-based Pareto front, or 0 if not ranked yet.
    fn pareto_front(&self) -> usize;

    /// Stores the Pareto front assigned by the ranker.
    fn set_pareto_front(&mut self, front: usize);

    /// Returns the crowding distance (non-negative or `f64::INFINITY`).
    fn crowding_distance(&self) -> f64;

    /// Stores the crowding distance assigned by the estimator.
    fn set_crowding_distance(&mut self, distance: f64);
}

/// Outcome of comparing two objective vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Compares two all-minimized objective vectors for Pareto dominance.
///
/// Both vectors must have the same length; debug builds assert it.
///
/// ```
/// use u_pareto::nsga2::{dominance_cmp, Dominance};
///
/// assert_eq!(dominance_cmp(&[1.0, 1.0], &[2.0, 2.0]), Dominance::Left);
/// assert_eq!(dominance_cmp(&[1.0, 4.0], &[2.0, 3.0]), Dominance::Neither);
/// assert_eq!(dominance_cmp(&[2.0, 2.0], &[2.0, 2.0]), Dominance::Neither);
/// ```
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    debug_assert_eq!(a.len(), b.len(), "objective vectors must have the same length");

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
        if a_better_in_some && b_better_in_some {
            return Dominance::Neither;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Ready-made candidate over a vector of minimized objectives.
///
/// To maximize an objective, store its negated value.
///
/// ```
/// use u_pareto::nsga2::{Candidate, Solution};
///
/// let a = Solution::new(vec![1.0, 1.0]);
/// let b = Solution::new(vec![2.0, 2.0]);
/// assert!(a.dominates(&b));
/// assert_eq!(a.pareto_front(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Objective values, all minimized.
    pub objectives: Vec<f64>,

    /// 1-based Pareto front (0 until ranked).
    pub pareto_front: usize,

    /// Crowding distance within the front.
    pub crowding_distance: f64,
}

impl Solution {
    /// Creates an unranked solution with the given objective values.
    pub fn new(objectives: Vec<f64>) -> Self {
        Self {
            objectives,
            pareto_front: 0,
            crowding_distance: 0.0,
        }
    }
}

impl From<Vec<f64>> for Solution {
    fn from(objectives: Vec<f64>) -> Self {
        Self::new(objectives)
    }
}

impl Candidate for Solution {
    fn dominates(&self, other: &Self) -> bool {
        dominance_cmp(&self.objectives, &other.objectives) == Dominance::Left
    }

    /// Objectives past the end of `objectives` read as NaN, so a strict
    /// estimator reports them as [`RankingError::NonFiniteObjective`].
    ///
    /// [`RankingError::NonFiniteObjective`]: crate::RankingError::NonFiniteObjective
    fn objective(&self, index: usize) -> f64 {
        self.objectives.get(index).copied().unwrap_or(f64::NAN)
    }

    fn pareto_front(&self) -> usize {
        self.pareto_front
    }

    fn set_pareto_front(&mut self, front: usize) {
        self.pareto_front = front;
    }

    fn crowding_distance(&self) -> f64 {
        self.crowding_distance
    }

    fn set_crowding_distance(&mut self, distance: f64) {
        self.crowding_distance = distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominance_cmp_directions() {
        assert_eq!(dominance_cmp(&[1.0, 2.0], &[1.0, 3.0]), Dominance::Left);
        assert_eq!(dominance_cmp(&[1.0, 3.0], &[1.0, 2.0]), Dominance::Right);
        assert_eq!(dominance_cmp(&[1.0, 3.0], &[3.0, 1.0]), Dominance::Neither);
    }

    #[test]
    fn test_identical_vectors_do_not_dominate() {
        let a = Solution::new(vec![2.0, 2.0, 2.0]);
        let b = a.clone();
        assert!(!a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_single_objective_is_total_order() {
        let a = Solution::from(vec![1.0]);
        let b = Solution::from(vec![2.0]);
        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_solution_accessors() {
        let mut s = Solution::new(vec![4.0, 1.0]);
        assert_eq!(s.objective(0), 4.0);
        assert_eq!(s.objective(1), 1.0);

        s.set_pareto_front(3);
        s.set_crowding_distance(f64::INFINITY);
        assert_eq!(s.pareto_front(), 3);
        assert!(s.crowding_distance().is_infinite());
    }

    #[test]
    fn test_missing_objective_reads_as_nan() {
        let s = Solution::new(vec![4.0, 1.0]);
        assert!(s.objective(2).is_nan());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "objective vectors must have the same length")]
    fn test_dominance_cmp_rejects_length_mismatch() {
        dominance_cmp(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
    }
}
