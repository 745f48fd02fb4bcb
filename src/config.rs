//! Simulation parameters.
//!
//! [`PageRankConfig`] can be built in code with the `with_*` setters or read
//! from JSON. Every field is optional in JSON and falls back to its default:
//!
//! ```json
//! { "damping_factor": 0.85, "delta_limit": 0.001, "max_iterations": 100000 }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigIssue, Error, Result};

/// Default probability of following an outgoing edge.
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.85;
/// Default bound on the total absolute rank change between two rounds.
pub const DEFAULT_DELTA_LIMIT: f64 = 0.001;
/// Default round budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Parameters for a rank simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageRankConfig {
    /// Probability that the walker follows an outgoing edge instead of
    /// jumping to a uniformly random node. Must lie in (0, 1).
    pub damping_factor: f64,
    /// Convergence threshold on `Σ |new_rank - old_rank|`.
    pub delta_limit: f64,
    /// Upper bound on the number of rounds.
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING_FACTOR,
            delta_limit: DEFAULT_DELTA_LIMIT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PageRankConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping_factor(mut self, damping_factor: f64) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    /// Set the convergence threshold
    pub fn with_delta_limit(mut self, delta_limit: f64) -> Self {
        self.delta_limit = delta_limit;
        self
    }

    /// Set the maximum number of rounds
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field, collecting all problems rather than stopping at the
    /// first one.
    pub fn validate(&self) -> Result<()> {
        let mut issues = Vec::new();

        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            issues.push(ConfigIssue::new(
                "damping_factor",
                format!("must be in (0, 1), got {}", self.damping_factor),
            ));
        }

        if !self.delta_limit.is_finite() || self.delta_limit < 0.0 {
            issues.push(ConfigIssue::new(
                "delta_limit",
                format!("must be a finite non-negative number, got {}", self.delta_limit),
            ));
        }

        if self.max_iterations == 0 {
            issues.push(ConfigIssue::new(
                "max_iterations",
                "must be at least 1",
            ));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidConfig { issues })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageRankConfig::default();
        assert_eq!(config.damping_factor, 0.85);
        assert_eq!(config.delta_limit, 0.001);
        assert_eq!(config.max_iterations, 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = PageRankConfig::new()
            .with_damping_factor(0.5)
            .with_delta_limit(1e-9)
            .with_max_iterations(10);

        assert_eq!(config.damping_factor, 0.5);
        assert_eq!(config.delta_limit, 1e-9);
        assert_eq!(config.max_iterations, 10);
    }

    #[test]
    fn test_damping_bounds_are_exclusive() {
        for damping in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let config = PageRankConfig::new().with_damping_factor(damping);
            assert!(config.validate().is_err(), "damping {damping} accepted");
        }
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let config = PageRankConfig {
            damping_factor: 2.0,
            delta_limit: f64::INFINITY,
            max_iterations: 0,
        };

        match config.validate() {
            Err(Error::InvalidConfig { issues }) => {
                let fields: Vec<_> = issues.iter().map(|i| i.field).collect();
                assert_eq!(fields, vec!["damping_factor", "delta_limit", "max_iterations"]);
            }
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_delta_limit_is_valid() {
        let config = PageRankConfig::new().with_delta_limit(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = PageRankConfig::from_json_str(r#"{ "damping_factor": 0.9 }"#).unwrap();
        assert_eq!(config.damping_factor, 0.9);
        assert_eq!(config.delta_limit, DEFAULT_DELTA_LIMIT);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = PageRankConfig::from_json_str(r#"{ "dampening": 0.9 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_json_validates() {
        let err = PageRankConfig::from_json_str(r#"{ "max_iterations": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{ "delta_limit": 0.0001, "max_iterations": 50 }"#;
        let config = PageRankConfig::from_reader(&json[..]).unwrap();
        assert_eq!(config.delta_limit, 0.0001);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_serialize_roundtrip_shape() {
        let json = serde_json::to_value(PageRankConfig::default()).unwrap();
        assert_eq!(json["damping_factor"], 0.85);
        assert_eq!(json["max_iterations"], 100_000);
    }
}
