//! Zhang-Suen thinning of binary rasters.
//!
//! Two engines share one removability test ([`is_removable`]):
//! - [`FrontierThinner`] re-tests only pixels next to a fresh removal, using a
//!   FIFO, LIFO or priority [`Frontier`]. It applies [`ZsVariant::First`]
//!   continuously, so its skeleton can depend on the [`Discipline`].
//! - [`FullPassThinner`] rescans the whole grid in alternating
//!   [`ZsVariant::First`] / [`ZsVariant::Second`] sub-passes with batched
//!   clears, giving an order-independent result.
//!
//! The two engines are not guaranteed to agree on the final skeleton.
//!
//! Cells only ever go from foreground to background and the outer ring is
//! never touched. Every run terminates: each pixel can be cleared at most once.

mod config;
mod frontier;
mod full_pass;
mod metrics;
mod predicate;

pub use config::{Strategy, ThinConfig};
pub use frontier::{Discipline, Frontier, FrontierThinner, boundary_pixels};
pub use full_pass::{FullPassThinner, collect_removable};
pub use metrics::{IterationStats, MetricsRecorder, ThinMetrics};
pub use predicate::{ZsVariant, evaluate, is_removable, transitions};

use sk_core::Grid;

/// Thinned grid plus the counters of the run that produced it.
#[derive(Debug, Clone)]
pub struct ThinOutput {
    pub grid: Grid,
    pub metrics: ThinMetrics,
}

pub fn thin_in_place(grid: &mut Grid, cfg: &ThinConfig) -> ThinMetrics {
    match cfg.strategy {
        Strategy::Frontier(discipline) => FrontierThinner::new(discipline)
            .with_history(cfg.record_history)
            .thin(grid),
        Strategy::FullPass => FullPassThinner::new()
            .with_history(cfg.record_history)
            .thin(grid),
    }
}

pub fn thin(mut grid: Grid, cfg: &ThinConfig) -> ThinOutput {
    let metrics = thin_in_place(&mut grid, cfg);
    ThinOutput { grid, metrics }
}

#[cfg(test)]
mod tests {
    use sk_core::Grid;

    use crate::{Strategy, ThinConfig, thin};

    #[test]
    fn every_strategy_returns_grid_and_metrics() {
        let grid: Grid = "\
            .......
            .#####.
            .#####.
            .#####.
            ......."
            .parse()
            .expect("valid grid");

        for strategy in Strategy::ALL {
            let out = thin(grid.clone(), &ThinConfig::with_strategy(strategy));

            assert_eq!(out.grid.rows(), 5);
            assert_eq!(out.grid.cols(), 7);
            assert_eq!(out.metrics.foreground_before, 15);
            assert_eq!(
                out.metrics.foreground_after + out.metrics.pixels_removed,
                15,
                "{strategy}"
            );
            assert!(out.metrics.predicate_evaluations > 0);
            assert!(out.metrics.history.is_empty());
        }
    }

    #[test]
    fn strategy_names_are_distinct() {
        let names: Vec<&str> = Strategy::ALL.iter().map(Strategy::name).collect();
        assert_eq!(
            names,
            ["level-order", "depth-order", "priority-order", "full-pass"]
        );
    }
}
