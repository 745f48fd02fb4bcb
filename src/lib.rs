//! # trust-pagerank
//!
//! Iterative PageRank simulation for directed trust graphs.
//!
//! The engine simulates the damped random walk round by round, redistributing
//! the mass held by dangling nodes uniformly so the total rank stays at 1.0.
//! Rounds are synchronous: every node reads the previous round's values before
//! any new value becomes visible.
//!
//! ```
//! use trust_pagerank::{CsrGraph, PageRankConfig, PageRankSimulator};
//!
//! let graph = CsrGraph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
//! let outcome = PageRankSimulator::new(PageRankConfig::default())
//!     .simulate(&graph)
//!     .unwrap();
//!
//! assert!(outcome.converged);
//! assert!((outcome.score(&"a").unwrap() - 1.0 / 3.0).abs() < 1e-3);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod pagerank;

pub use config::PageRankConfig;
pub use error::{ConfigIssue, Error, Result};
pub use graph::builder::GraphBuilder;
pub use graph::csr::CsrGraph;
pub use graph::DirectedGraph;
pub use pagerank::batch::simulate_batch;
pub use pagerank::engine::{simulate_page_rank, PageRankSimulator};
pub use pagerank::observer::{NoopObserver, RoundHistory, RoundObserver, RoundReport};
pub use pagerank::state::RankState;
pub use pagerank::RankOutcome;
