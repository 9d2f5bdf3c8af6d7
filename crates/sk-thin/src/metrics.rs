use std::time::{Duration, Instant};

use log::trace;
use serde::Serialize;
use sk_core::Grid;

/// Counters for a single iteration (frontier round or full-pass round).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IterationStats {
    pub iteration: usize,
    pub removed: usize,
    pub evaluations: usize,
    pub frontier_size: usize,
}

/// Final counters of a thinning run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThinMetrics {
    pub iterations: usize,
    pub pixels_removed: usize,
    pub predicate_evaluations: usize,
    pub peak_frontier_size: usize,
    pub elapsed: Duration,
    pub foreground_before: usize,
    pub foreground_after: usize,
    /// Per-iteration counters; empty unless history recording was enabled.
    pub history: Vec<IterationStats>,
}

impl ThinMetrics {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Accumulates counters while an engine runs.
///
/// Created at run start, threaded through the loop by `&mut`, and consumed by
/// [`MetricsRecorder::finish`] once the engine reaches its terminal state.
#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    start: Instant,
    foreground_before: usize,
    iterations: usize,
    pixels_removed: usize,
    evaluations: usize,
    peak_frontier_size: usize,
    round_removed: usize,
    round_evaluations: usize,
    history: Option<Vec<IterationStats>>,
}

impl MetricsRecorder {
    pub fn start(grid: &Grid, record_history: bool) -> Self {
        Self {
            start: Instant::now(),
            foreground_before: grid.foreground_count(),
            iterations: 0,
            pixels_removed: 0,
            evaluations: 0,
            peak_frontier_size: 0,
            round_removed: 0,
            round_evaluations: 0,
            history: record_history.then(Vec::new),
        }
    }

    pub fn record_evaluation(&mut self) {
        self.evaluations += 1;
        self.round_evaluations += 1;
    }

    pub fn record_removal(&mut self) {
        self.pixels_removed += 1;
        self.round_removed += 1;
    }

    pub fn observe_frontier(&mut self, size: usize) {
        self.peak_frontier_size = self.peak_frontier_size.max(size);
    }

    /// Closes the current iteration and returns how many pixels it removed.
    pub fn end_iteration(&mut self, frontier_size: usize) -> usize {
        self.iterations += 1;
        let stats = IterationStats {
            iteration: self.iterations,
            removed: self.round_removed,
            evaluations: self.round_evaluations,
            frontier_size,
        };

        trace!(
            "iteration {}: removed={} evaluations={} frontier={}",
            stats.iteration, stats.removed, stats.evaluations, stats.frontier_size
        );

        if let Some(history) = &mut self.history {
            history.push(stats);
        }

        self.round_removed = 0;
        self.round_evaluations = 0;
        stats.removed
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn pixels_removed(&self) -> usize {
        self.pixels_removed
    }

    pub fn predicate_evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn finish(self, grid: &Grid) -> ThinMetrics {
        ThinMetrics {
            iterations: self.iterations,
            pixels_removed: self.pixels_removed,
            predicate_evaluations: self.evaluations,
            peak_frontier_size: self.peak_frontier_size,
            elapsed: self.start.elapsed(),
            foreground_before: self.foreground_before,
            foreground_after: grid.foreground_count(),
            history: self.history.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use sk_core::Grid;

    use super::MetricsRecorder;

    #[test]
    fn iteration_counters_reset_between_rounds() {
        let grid: Grid = "...\n.#.\n...".parse().expect("valid grid");
        let mut rec = MetricsRecorder::start(&grid, true);

        rec.record_evaluation();
        rec.record_evaluation();
        rec.record_removal();
        rec.observe_frontier(5);
        assert_eq!(rec.end_iteration(3), 1);

        rec.record_evaluation();
        rec.observe_frontier(2);
        assert_eq!(rec.end_iteration(0), 0);

        let m = rec.finish(&grid);
        assert_eq!(m.iterations, 2);
        assert_eq!(m.pixels_removed, 1);
        assert_eq!(m.predicate_evaluations, 3);
        assert_eq!(m.peak_frontier_size, 5);
        assert_eq!(m.foreground_before, 1);
        assert_eq!(m.history.len(), 2);
        assert_eq!(m.history[0].evaluations, 2);
        assert_eq!(m.history[1].removed, 0);
        assert_eq!(m.history[1].evaluations, 1);
    }

    #[test]
    fn history_is_empty_when_disabled() {
        let grid = Grid::new_background(3, 3).expect("valid grid");
        let mut rec = MetricsRecorder::start(&grid, false);
        rec.end_iteration(0);

        let m = rec.finish(&grid);
        assert_eq!(m.iterations, 1);
        assert!(m.history.is_empty());
    }
}
