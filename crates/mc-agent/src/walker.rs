//! One agent's random walk.
//!
//! A `Walker` lives through a sequence of episodes.  Each episode starts at
//! the grid's start cell with a one-cell path and ends in exactly one
//! [`EpisodeOutcome`].  The walk never revisits a cell within an episode, so
//! every path is a simple path and at most `rows * cols` cells long.

use mc_core::{CellPos, SimRng};
use mc_grid::Grid;

#[cfg(feature = "fx-hash")]
type VisitedSet = rustc_hash::FxHashSet<CellPos>;
#[cfg(not(feature = "fx-hash"))]
type VisitedSet = std::collections::HashSet<CellPos>;

/// How an episode ended.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EpisodeOutcome {
    /// Reached the goal.
    Success,
    /// No unvisited free neighbour left.
    Stuck,
    /// Hit the per-walk step limit.
    Exhausted,
}

impl EpisodeOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            EpisodeOutcome::Success   => "success",
            EpisodeOutcome::Stuck     => "stuck",
            EpisodeOutcome::Exhausted => "exhausted",
        }
    }
}

impl std::fmt::Display for EpisodeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single random-walk agent.
#[derive(Clone, Debug)]
pub struct Walker {
    pos:          CellPos,
    path:         Vec<CellPos>,
    visited:      VisitedSet,
    active:       bool,
    steps:        usize,
    last_outcome: Option<EpisodeOutcome>,
}

impl Walker {
    /// A fresh, active walker standing on `start`.
    ///
    /// Does not touch the heatmap; the pool records the spawn visit.
    pub fn spawn(start: CellPos) -> Self {
        let mut visited = VisitedSet::default();
        visited.insert(start);
        Self {
            pos: start,
            path: vec![start],
            visited,
            active: true,
            steps: 0,
            last_outcome: None,
        }
    }

    /// Begin a new episode at `start`, discarding the previous path and
    /// visited set entirely.
    pub fn respawn(&mut self, start: CellPos) {
        self.pos = start;
        self.path.clear();
        self.path.push(start);
        self.visited.clear();
        self.visited.insert(start);
        self.active = true;
        self.steps = 0;
        self.last_outcome = None;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn pos(&self) -> CellPos {
        self.pos
    }

    /// Cells visited this episode, `path[0]` being the start.
    #[inline]
    pub fn path(&self) -> &[CellPos] {
        &self.path
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Moves made this episode.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Outcome of the episode that just ended, until the next respawn.
    #[inline]
    pub fn last_outcome(&self) -> Option<EpisodeOutcome> {
        self.last_outcome
    }

    #[inline]
    pub fn has_visited(&self, pos: CellPos) -> bool {
        self.visited.contains(&pos)
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance this walker by one tick.
    ///
    /// Returns `Some(outcome)` if the episode ended during this call, `None`
    /// if the walker moved and is still active or was already inactive.
    /// A move onto the goal ends the episode immediately as a success.
    pub fn step(
        &mut self,
        grid:      &mut Grid,
        max_steps: usize,
        rng:       &mut SimRng,
    ) -> Option<EpisodeOutcome> {
        if !self.active {
            return None;
        }
        if self.steps >= max_steps {
            return Some(self.finish(EpisodeOutcome::Exhausted));
        }
        if self.pos == grid.goal() {
            return Some(self.finish(EpisodeOutcome::Success));
        }

        let mut options = grid.open_neighbors(self.pos);
        options.retain(|p| !self.visited.contains(&p));
        let Some(&next) = rng.choose(options.as_slice()) else {
            return Some(self.finish(EpisodeOutcome::Stuck));
        };

        self.pos = next;
        self.path.push(next);
        self.visited.insert(next);
        self.steps += 1;
        grid.record_visit(next);

        if next == grid.goal() {
            return Some(self.finish(EpisodeOutcome::Success));
        }
        None
    }

    fn finish(&mut self, outcome: EpisodeOutcome) -> EpisodeOutcome {
        self.active = false;
        self.last_outcome = Some(outcome);
        outcome
    }
}
