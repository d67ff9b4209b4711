//! Per-step metrics for the simulation clock.
//!
//! [`StepMetrics`] captures timing and rule-firing counts for a single
//! step, for telemetry and profiling.

use hexlife_core::Position;

use crate::lifecycle::RuleTally;

/// Timing and event counts collected during a single step.
///
/// All durations are in microseconds. The clock populates these fields
/// after each `step()` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
    /// Time spent judging cells against the previous generation.
    pub evaluate_us: u64,
    /// Time spent building the next grid and ledger, including the reseed.
    pub merge_us: u64,
    /// Live cells after the step.
    pub live_cells: usize,
    /// Cells born this step.
    pub births: u32,
    /// Cells that died this step.
    pub deaths: u32,
    /// Delayed resurrections this step.
    pub resurrections: u32,
    /// Deaths averted by resurrection immunity this step.
    pub exemptions: u32,
    /// Cell forced alive by the periodic reseed, if one fired.
    pub reseeded: Option<Position>,
}

impl StepMetrics {
    pub(crate) fn record_tally(&mut self, tally: RuleTally) {
        self.births = tally.births;
        self.deaths = tally.deaths;
        self.resurrections = tally.resurrections;
        self.exemptions = tally.exemptions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.evaluate_us, 0);
        assert_eq!(m.merge_us, 0);
        assert_eq!(m.live_cells, 0);
        assert_eq!(m.births, 0);
        assert_eq!(m.deaths, 0);
        assert_eq!(m.resurrections, 0);
        assert_eq!(m.exemptions, 0);
        assert!(m.reseeded.is_none());
    }

    #[test]
    fn tally_is_copied() {
        let mut m = StepMetrics::default();
        m.record_tally(RuleTally {
            births: 3,
            deaths: 2,
            resurrections: 1,
            exemptions: 4,
        });
        assert_eq!((m.births, m.deaths, m.resurrections, m.exemptions), (3, 2, 1, 4));
    }
}
