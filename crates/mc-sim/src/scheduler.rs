//! `EpisodeScheduler`: the global episode budget.
//!
//! Counts episodes started since the last reset (`sim_count`) and tops up
//! idle walkers while the budget allows.  The count never exceeds the budget:
//! the top-up hands the pool exactly the remaining budget as its respawn
//! limit, and the pool re-checks that limit before each respawn.

use mc_agent::AgentPool;
use mc_grid::Grid;

#[derive(Clone, Debug)]
pub struct EpisodeScheduler {
    /// Episodes started since the last reset.
    started: usize,
    /// Set by `reset`; the initial spawn is counted on the first frame.
    awaiting_first_tick: bool,
}

impl Default for EpisodeScheduler {
    fn default() -> Self {
        Self { started: 0, awaiting_first_tick: true }
    }
}

impl EpisodeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all counted episodes; the next frame recounts the initial spawn.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Episodes started since the last reset.
    #[inline]
    pub fn sim_count(&self) -> usize {
        self.started
    }

    /// Episodes that may still be started under `budget`.
    #[inline]
    pub fn remaining(&self, budget: usize) -> usize {
        budget.saturating_sub(self.started)
    }

    /// On the first frame after a reset, count every initially active walker
    /// as one started episode (capped at `budget`).  No-op afterwards.
    pub fn begin_run(&mut self, active_agents: usize, budget: usize) {
        if self.awaiting_first_tick {
            self.started = active_agents.min(budget);
            self.awaiting_first_tick = false;
        }
    }

    /// Respawn idle walkers while budget remains.  Returns how many started.
    pub fn top_up(&mut self, pool: &mut AgentPool, grid: &mut Grid, budget: usize) -> usize {
        let remaining = self.remaining(budget);
        if remaining == 0 {
            return 0;
        }
        let spawned = pool.respawn_inactive(grid, remaining);
        self.started += spawned;
        spawned
    }

    /// The run is over once the budget is spent and no walker is active.
    pub fn is_complete(&self, pool: &AgentPool, budget: usize) -> bool {
        self.started >= budget && pool.all_inactive()
    }
}
