//! Ranking configuration.
//!
//! [`Nsga2Config`] carries the objective count and the precondition policy
//! shared by the ranker, the crowding estimator and survivor selection.

use crate::error::RankingError;

/// Configuration for the NSGA-II ranking core.
///
/// # Defaults
///
/// ```
/// use u_pareto::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::default();
/// assert_eq!(config.objectives, 2);
/// assert!(config.check_preconditions);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pareto::nsga2::Nsga2Config;
///
/// let config = Nsga2Config::new(3).with_check_preconditions(false);
/// assert_eq!(config.objectives, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Config {
    /// Number of objectives `M` read through [`Candidate::objective`].
    ///
    /// Fixed for the whole run; indices `0..objectives` are visited.
    ///
    /// [`Candidate::objective`]: super::Candidate::objective
    pub objectives: usize,

    /// Whether operations validate their preconditions before running.
    ///
    /// When enabled, an unsorted or unranked population passed to the
    /// crowding estimator, a non-finite objective value, or a cyclic
    /// dominance relation is reported as a [`RankingError`]. When disabled
    /// those inputs produce unspecified (but memory-safe) results. The
    /// empty-population check is always performed.
    pub check_preconditions: bool,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            objectives: 2,
            check_preconditions: true,
        }
    }
}

impl Nsga2Config {
    /// Creates a configuration for `objectives` objectives.
    pub fn new(objectives: usize) -> Self {
        Self {
            objectives,
            ..Self::default()
        }
    }

    /// Sets the objective count.
    pub fn with_objectives(mut self, objectives: usize) -> Self {
        self.objectives = objectives;
        self
    }

    /// Enables or disables precondition checks.
    pub fn with_check_preconditions(mut self, check: bool) -> Self {
        self.check_preconditions = check;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), RankingError> {
        if self.objectives == 0 {
            return Err(RankingError::NoObjectives);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Nsga2Config::default();
        assert_eq!(config.objectives, 2);
        assert!(config.check_preconditions);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = Nsga2Config::default()
            .with_objectives(5)
            .with_check_preconditions(false);
        assert_eq!(config.objectives, 5);
        assert!(!config.check_preconditions);
    }

    #[test]
    fn test_validate_zero_objectives() {
        let config = Nsga2Config::new(0);
        assert_eq!(config.validate(), Err(RankingError::NoObjectives));
    }
}
