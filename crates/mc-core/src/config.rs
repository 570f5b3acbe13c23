//! Run configuration.
//!
//! `WalkConfig` holds every tunable the engine starts from.  The defaults
//! reproduce the classic 10 × 10 board with three walkers and a budget of
//! 1 000 episodes.  Drivers typically construct one with struct-update syntax
//! or (with the `serde` feature) load it from JSON, where missing fields fall
//! back to the defaults.

use crate::{CoreError, CoreResult};

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_AGENT_COUNT: usize = 3;
pub const MAX_AGENT_COUNT: usize = 20;
pub const DEFAULT_STEPS_PER_FRAME: usize = 1;
pub const DEFAULT_MAX_STEPS_PER_WALK: usize = 200;
pub const DEFAULT_MAX_SIMULATIONS: usize = 1_000;
pub const DEFAULT_COST_PAINT_VALUE: u8 = 1;

/// Largest cost-dot value a cell can carry.
pub const MAX_COST_DOTS: u8 = 9;

/// Top-level run configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkConfig {
    /// Grid height in cells.
    pub rows: usize,

    /// Grid width in cells.
    pub cols: usize,

    /// Number of walkers in the pool.  Clamped to `[1, max_agent_count]` by
    /// the engine's setter.
    pub agent_count: usize,

    /// Upper bound for `agent_count`.
    pub max_agent_count: usize,

    /// Ticks run per `advance_one_frame` call.
    pub steps_per_frame: usize,

    /// A walk that has taken this many steps without reaching the goal ends
    /// as exhausted.
    pub max_steps_per_walk: usize,

    /// Episode budget: the cap on episodes ever started in one run.
    pub max_simulations: usize,

    /// Dot value painted by a primary edit in cost mode.
    pub cost_paint_value: u8,

    /// RNG seed.  `None` draws from OS entropy (non-reproducible).
    pub seed: Option<u64>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            rows:               DEFAULT_ROWS,
            cols:               DEFAULT_COLS,
            agent_count:        DEFAULT_AGENT_COUNT,
            max_agent_count:    MAX_AGENT_COUNT,
            steps_per_frame:    DEFAULT_STEPS_PER_FRAME,
            max_steps_per_walk: DEFAULT_MAX_STEPS_PER_WALK,
            max_simulations:    DEFAULT_MAX_SIMULATIONS,
            cost_paint_value:   DEFAULT_COST_PAINT_VALUE,
            seed:               None,
        }
    }
}

impl WalkConfig {
    /// Reject configurations the engine cannot start from.
    ///
    /// Runtime setters clamp instead of failing; this check only guards
    /// initial construction.
    pub fn validate(&self) -> CoreResult<()> {
        match self.rows.checked_mul(self.cols) {
            Some(area) if area >= 2 => {}
            Some(_) => {
                return Err(CoreError::Config(format!(
                    "grid {}x{} cannot hold distinct start and goal cells",
                    self.rows, self.cols
                )));
            }
            None => {
                return Err(CoreError::Config(format!(
                    "grid {}x{} is too large",
                    self.rows, self.cols
                )));
            }
        }
        if self.max_agent_count == 0 {
            return Err(CoreError::Config("max_agent_count must be at least 1".into()));
        }
        if self.agent_count == 0 || self.agent_count > self.max_agent_count {
            return Err(CoreError::Config(format!(
                "agent_count {} outside [1, {}]",
                self.agent_count, self.max_agent_count
            )));
        }
        if self.steps_per_frame == 0 {
            return Err(CoreError::Config("steps_per_frame must be at least 1".into()));
        }
        if self.max_steps_per_walk == 0 {
            return Err(CoreError::Config("max_steps_per_walk must be at least 1".into()));
        }
        if self.cost_paint_value > MAX_COST_DOTS {
            return Err(CoreError::Config(format!(
                "cost_paint_value {} exceeds {MAX_COST_DOTS}",
                self.cost_paint_value
            )));
        }
        Ok(())
    }
}
