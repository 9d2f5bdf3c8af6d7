use core::fmt;

use serde::{Deserialize, Serialize};

use crate::frontier::Discipline;

/// Which engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Frontier(Discipline),
    FullPass,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Frontier(Discipline::LevelOrder),
        Strategy::Frontier(Discipline::DepthOrder),
        Strategy::Frontier(Discipline::PriorityOrder),
        Strategy::FullPass,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Frontier(Discipline::LevelOrder) => "level-order",
            Strategy::Frontier(Discipline::DepthOrder) => "depth-order",
            Strategy::Frontier(Discipline::PriorityOrder) => "priority-order",
            Strategy::FullPass => "full-pass",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Frontier(Discipline::LevelOrder)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinConfig {
    pub strategy: Strategy,
    /// Keep per-iteration counters in [`crate::ThinMetrics::history`].
    pub record_history: bool,
}

impl ThinConfig {
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }
}
