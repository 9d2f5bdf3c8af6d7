//! Two-sub-pass batch thinning.
//!
//! Each round scans every interior pixel twice: once against
//! [`ZsVariant::First`], then against [`ZsVariant::Second`] on the grid left
//! by the first sub-pass. Within a sub-pass all candidates are collected
//! against the same snapshot and cleared together, so the result does not
//! depend on scan order. The run converges on the first round where neither
//! sub-pass finds a candidate; that round is counted.

use log::debug;
use sk_core::{Coord, Grid};

use crate::metrics::{MetricsRecorder, ThinMetrics};
use crate::predicate::{ZsVariant, evaluate};

const SUB_PASSES: [ZsVariant; 2] = [ZsVariant::First, ZsVariant::Second];

/// Full-pass engine. The candidate buffer is reused across sub-passes and runs.
#[derive(Debug, Clone, Default)]
pub struct FullPassThinner {
    record_history: bool,
    candidates: Vec<Coord>,
}

impl FullPassThinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    pub fn thin(&mut self, grid: &mut Grid) -> ThinMetrics {
        let mut rec = MetricsRecorder::start(grid, self.record_history);
        debug!("full-pass thinning on {}x{} grid", grid.rows(), grid.cols());

        loop {
            let mut largest = 0;
            for variant in SUB_PASSES {
                collect_removable_into(grid, variant, &mut rec, &mut self.candidates);
                largest = largest.max(self.candidates.len());
                rec.observe_frontier(self.candidates.len());

                for &c in &self.candidates {
                    if grid.clear(c) {
                        rec.record_removal();
                    }
                }
            }

            if rec.end_iteration(largest) == 0 {
                break;
            }
        }

        let metrics = rec.finish(grid);
        debug!(
            "full-pass thinning converged: rounds={} removed={} evaluations={}",
            metrics.iterations, metrics.pixels_removed, metrics.predicate_evaluations
        );
        metrics
    }
}

/// One sub-pass scan: every interior pixel is evaluated against `variant` on
/// the unchanged grid. Nothing is cleared.
pub fn collect_removable(
    grid: &Grid,
    variant: ZsVariant,
    rec: &mut MetricsRecorder,
) -> Vec<Coord> {
    let mut out = Vec::new();
    collect_removable_into(grid, variant, rec, &mut out);
    out
}

fn collect_removable_into(
    grid: &Grid,
    variant: ZsVariant,
    rec: &mut MetricsRecorder,
    out: &mut Vec<Coord>,
) {
    out.clear();
    for c in grid.interior() {
        if evaluate(grid, c, variant, rec) {
            out.push(c);
        }
    }
}
