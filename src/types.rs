use std::time::Duration;

use arrayvec::ArrayVec;

pub type Score = f64;

pub const SCORE_INFINITY: Score = f64::INFINITY;
pub const WIN_SCORE: Score = 10_000.0;
pub const MAX_MOVES: usize = 64;
pub const DEFAULT_DEPTH: i32 = 5;
pub const MIN_DEPTH: i32 = 1;
pub const MAX_DEPTH: i32 = 60;
pub const DEFAULT_TIME_BUDGET_MS: u64 = 4800;

/// Ordered move list handed out by a move generator.
pub type MoveList<M> = ArrayVec<M, MAX_MOVES>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// plies searched below the current position
    pub max_depth: i32,
    /// wall-clock budget per move
    pub time_budget: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            time_budget: Duration::from_millis(DEFAULT_TIME_BUDGET_MS),
        }
    }
}

impl EngineConfig {
    pub fn with_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_time_budget(mut self, time_budget: Duration) -> Self {
        self.time_budget = time_budget;
        self
    }
}
