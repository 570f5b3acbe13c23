//! `AgentPool`: the fixed-size collection of walkers.
//!
//! Walkers are addressed by their stable [`AgentId`] (the index into the
//! pool) and always processed in ascending id order, so a seeded run is
//! reproducible.

use mc_core::{AgentId, SimRng};
use mc_grid::Grid;

use crate::{EpisodeOutcome, Walker};

/// Fixed-size walker pool.  Resizing means building a new pool.
#[derive(Clone, Debug, Default)]
pub struct AgentPool {
    walkers: Vec<Walker>,
}

impl AgentPool {
    /// Spawn `count` active walkers on the grid's start cell, recording one
    /// heatmap visit per walker.
    pub fn spawn(count: usize, grid: &mut Grid) -> Self {
        let start = grid.start();
        let walkers = (0..count)
            .map(|_| {
                grid.record_visit(start);
                Walker::spawn(start)
            })
            .collect();
        Self { walkers }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walkers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walkers.is_empty()
    }

    /// All walkers in `AgentId` order.
    #[inline]
    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }

    pub fn get(&self, agent: AgentId) -> Option<&Walker> {
        self.walkers.get(agent.index())
    }

    /// Iterator over `(AgentId, &Walker)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Walker)> + '_ {
        self.walkers
            .iter()
            .enumerate()
            .map(|(i, w)| (AgentId(i as u32), w))
    }

    pub fn active_count(&self) -> usize {
        self.walkers.iter().filter(|w| w.is_active()).count()
    }

    pub fn all_inactive(&self) -> bool {
        self.walkers.iter().all(|w| !w.is_active())
    }

    /// Step every walker once, in ascending id order.
    ///
    /// `on_end` is called for each walker whose episode ended during its
    /// step, with read access to the grid so the caller can cost the path.
    pub fn step_all<F>(
        &mut self,
        grid:      &mut Grid,
        max_steps: usize,
        rng:       &mut SimRng,
        mut on_end: F,
    ) where
        F: FnMut(AgentId, &Walker, EpisodeOutcome, &Grid),
    {
        for (i, walker) in self.walkers.iter_mut().enumerate() {
            if let Some(outcome) = walker.step(grid, max_steps, rng) {
                on_end(AgentId(i as u32), &*walker, outcome, &*grid);
            }
        }
    }

    /// Respawn inactive walkers at the grid's start, in id order, until
    /// `limit` walkers have been respawned.
    ///
    /// The limit is re-checked before every respawn, so a caller passing the
    /// remaining episode budget can never overshoot it.  Returns the number
    /// of walkers respawned.
    pub fn respawn_inactive(&mut self, grid: &mut Grid, limit: usize) -> usize {
        let start = grid.start();
        let mut respawned = 0;
        for walker in self.walkers.iter_mut() {
            if respawned >= limit {
                break;
            }
            if !walker.is_active() {
                walker.respawn(start);
                grid.record_visit(start);
                respawned += 1;
            }
        }
        respawned
    }
}
