//! Round observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive a [`RoundReport`] after every round without coupling to
//! the update logic. Pass [`NoopObserver`] for zero-overhead execution, or
//! [`RoundHistory`] to keep every report for later inspection.

/// Summary of one completed round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundReport {
    /// 1-based round number
    pub round: usize,
    /// `Σ |new_rank - old_rank|` over all nodes
    pub delta: f64,
    /// `Σ new_rank` over all nodes
    pub total_mass: f64,
}

/// Receives a notification after every simulation round.
pub trait RoundObserver {
    /// Called once per round, after the new ranks are in place.
    fn on_round(&mut self, report: &RoundReport);

    /// Called once when the loop exits.
    fn on_finish(&mut self, _rounds: usize, _converged: bool) {}
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {
    #[inline]
    fn on_round(&mut self, _report: &RoundReport) {}
}

/// Observer that records every round.
#[derive(Debug, Clone, Default)]
pub struct RoundHistory {
    /// One report per round, in order
    pub reports: Vec<RoundReport>,
    /// Set when the loop exits
    pub converged: Option<bool>,
}

impl RoundHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Deltas in round order
    pub fn deltas(&self) -> impl Iterator<Item = f64> + '_ {
        self.reports.iter().map(|r| r.delta)
    }

    /// Largest deviation of the total mass from 1.0 across all rounds
    pub fn max_mass_drift(&self) -> f64 {
        self.reports
            .iter()
            .map(|r| (r.total_mass - 1.0).abs())
            .fold(0.0, f64::max)
    }
}

impl RoundObserver for RoundHistory {
    fn on_round(&mut self, report: &RoundReport) {
        self.reports.push(*report);
    }

    fn on_finish(&mut self, _rounds: usize, converged: bool) {
        self.converged = Some(converged);
    }
}
