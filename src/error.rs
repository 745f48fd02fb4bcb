//! Error types for rank simulation.

use std::fmt;

use thiserror::Error;

/// A single problem found while validating a [`PageRankConfig`](crate::PageRankConfig).
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    /// Name of the offending field (e.g. `"damping_factor"`).
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ConfigIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Crate error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The graph has no nodes, so there is no distribution to rank.
    #[error("cannot rank an empty graph")]
    EmptyGraph,

    /// One or more configuration values are out of range.
    #[error("invalid config: {}", join_issues(.issues))]
    InvalidConfig { issues: Vec<ConfigIssue> },

    /// A rank state was stepped against a graph with a different node count.
    ///
    /// Only the node count is compared; edge changes at the same size go
    /// unnoticed.
    #[error("topology mismatch: state holds {expected} nodes, graph has {found}")]
    TopologyMismatch { expected: usize, found: usize },

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
