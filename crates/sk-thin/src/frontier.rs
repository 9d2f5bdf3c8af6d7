//! Worklist-driven thinning.
//!
//! Removing a pixel can only expose its 8 neighbors as new boundary
//! candidates, so instead of rescanning the grid every round the engine keeps
//! a frontier of coordinates to re-test:
//! - seed the frontier with every interior boundary pixel;
//! - drain it completely, testing each pixel with [`ZsVariant::First`];
//! - for each pixel removed, push its still-foreground neighbors into the next
//!   frontier (duplicates allowed);
//! - swap frontiers and repeat until the next frontier comes back empty.
//!
//! The [`Discipline`] only changes the pop order within a round, which can
//! change the final skeleton but never the removability test itself.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use log::debug;
use serde::{Deserialize, Serialize};
use sk_core::{Coord, FOREGROUND, Grid};

use crate::metrics::{MetricsRecorder, ThinMetrics};
use crate::predicate::{ZsVariant, evaluate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Discipline {
    /// FIFO: uniform erosion front.
    #[default]
    LevelOrder,
    /// LIFO: follows the most recently exposed pixel first.
    DepthOrder,
    /// Most background neighbors first, ties broken by smaller coordinate.
    PriorityOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Prioritized {
    priority: usize,
    coord: Reverse<Coord>,
}

#[derive(Debug, Clone)]
enum Queue {
    Fifo(VecDeque<Coord>),
    Lifo(Vec<Coord>),
    Priority(BinaryHeap<Prioritized>),
}

/// Multiset of coordinates pending evaluation.
///
/// For [`Discipline::PriorityOrder`] the priority (background neighbor count)
/// is read from the grid at push time and never refreshed.
#[derive(Debug, Clone)]
pub struct Frontier {
    queue: Queue,
}

impl Frontier {
    pub fn new(discipline: Discipline) -> Self {
        let queue = match discipline {
            Discipline::LevelOrder => Queue::Fifo(VecDeque::new()),
            Discipline::DepthOrder => Queue::Lifo(Vec::new()),
            Discipline::PriorityOrder => Queue::Priority(BinaryHeap::new()),
        };
        Self { queue }
    }

    pub fn discipline(&self) -> Discipline {
        match self.queue {
            Queue::Fifo(_) => Discipline::LevelOrder,
            Queue::Lifo(_) => Discipline::DepthOrder,
            Queue::Priority(_) => Discipline::PriorityOrder,
        }
    }

    pub fn push(&mut self, c: Coord, grid: &Grid) {
        match &mut self.queue {
            Queue::Fifo(q) => q.push_back(c),
            Queue::Lifo(q) => q.push(c),
            Queue::Priority(q) => q.push(Prioritized {
                priority: grid.neighbors(c).background_count(),
                coord: Reverse(c),
            }),
        }
    }

    pub fn pop(&mut self) -> Option<Coord> {
        match &mut self.queue {
            Queue::Fifo(q) => q.pop_front(),
            Queue::Lifo(q) => q.pop(),
            Queue::Priority(q) => q.pop().map(|p| p.coord.0),
        }
    }

    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Fifo(q) => q.len(),
            Queue::Lifo(q) => q.len(),
            Queue::Priority(q) => q.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        match &mut self.queue {
            Queue::Fifo(q) => q.clear(),
            Queue::Lifo(q) => q.clear(),
            Queue::Priority(q) => q.clear(),
        }
    }
}

/// Interior foreground pixels with at least one background neighbor, in
/// row-major order.
pub fn boundary_pixels(grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    grid.interior().filter(move |&c| {
        grid.get(c) == Some(FOREGROUND) && grid.neighbors(c).background_count() > 0
    })
}

/// Frontier-propagation engine. Frontier buffers are reused across runs.
#[derive(Debug, Clone)]
pub struct FrontierThinner {
    record_history: bool,
    current: Frontier,
    next: Frontier,
}

impl FrontierThinner {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            record_history: false,
            current: Frontier::new(discipline),
            next: Frontier::new(discipline),
        }
    }

    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }

    pub fn discipline(&self) -> Discipline {
        self.current.discipline()
    }

    pub fn thin(&mut self, grid: &mut Grid) -> ThinMetrics {
        let mut rec = MetricsRecorder::start(grid, self.record_history);
        debug!(
            "frontier thinning ({:?}) on {}x{} grid",
            self.discipline(),
            grid.rows(),
            grid.cols()
        );

        self.current.clear();
        self.next.clear();
        for c in boundary_pixels(grid) {
            self.current.push(c, grid);
        }
        rec.observe_frontier(self.current.len());

        while !self.current.is_empty() {
            self.drain_round(grid, &mut rec);
            std::mem::swap(&mut self.current, &mut self.next);
            rec.observe_frontier(self.current.len());
            rec.end_iteration(self.current.len());
        }

        let metrics = rec.finish(grid);
        debug!(
            "frontier thinning done: iterations={} removed={} evaluations={} peak_frontier={}",
            metrics.iterations,
            metrics.pixels_removed,
            metrics.predicate_evaluations,
            metrics.peak_frontier_size
        );
        metrics
    }

    fn drain_round(&mut self, grid: &mut Grid, rec: &mut MetricsRecorder) {
        while let Some(c) = self.current.pop() {
            if !evaluate(grid, c, ZsVariant::First, rec) {
                continue;
            }

            grid.clear(c);
            rec.record_removal();

            let nb = grid.neighbors(c);
            for n in nb.foreground_coords() {
                self.next.push(n, grid);
            }
        }
    }
}
