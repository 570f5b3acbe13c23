//! The `Engine` struct: run state, frame loop, and every public entry point.

use mc_agent::{AgentPool, EpisodeOutcome, Walker};
use mc_core::config::MAX_COST_DOTS;
use mc_core::{CellPos, SimRng, Tick, WalkConfig};
use mc_grid::{CellKind, Grid};
use tracing::{debug, info, trace};

use crate::{
    BestPath, CellAction, CursorMode, EpisodeScheduler, NoopObserver, RunState, RunStats,
    RunSummary, SimObserver, SimResult,
};

/// The Monte Carlo walk engine.
///
/// Owns the grid, the walker pool, the episode scheduler, the statistics,
/// and the random source.  Nothing runs in the background: state changes
/// only through the methods below, and each call is atomic from the
/// caller's point of view.
///
/// Read accessors hand out shared borrows only; renderers can look but not
/// touch.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder] or [`Engine::new`].
#[derive(Debug)]
pub struct Engine {
    config:         WalkConfig,
    /// Last value passed to `set_max_episode_budget`, before clamping.
    budget_request: Option<usize>,
    grid:           Grid,
    agents:         AgentPool,
    scheduler:      EpisodeScheduler,
    stats:          RunStats,
    rng:            SimRng,
    tick:           Tick,
    paused:         bool,
    done:           bool,
    cursor_mode:    CursorMode,
}

impl Engine {
    /// Build an engine from `config` with the default obstacle layout.
    pub fn new(config: WalkConfig) -> SimResult<Self> {
        crate::EngineBuilder::new(config).build()
    }

    /// Assemble from validated parts and reset into READY.
    pub(crate) fn from_parts(config: WalkConfig, grid: Grid, rng: SimRng) -> Self {
        let mut engine = Self {
            config,
            budget_request: None,
            grid,
            agents:         AgentPool::default(),
            scheduler:      EpisodeScheduler::new(),
            stats:          RunStats::new(),
            rng,
            tick:           Tick::ZERO,
            paused:         true,
            done:           false,
            cursor_mode:    CursorMode::default(),
        };
        engine.reset();
        engine
    }

    // ── Read accessors ────────────────────────────────────────────────────

    /// Current tunables (dimensions, counts, limits, paint value).
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn cell_kind(&self, pos: CellPos) -> SimResult<CellKind> {
        Ok(self.grid.kind(pos)?)
    }

    /// Traversal cost of `pos`: `1.0 + 0.2 * dots`.
    pub fn cost_of(&self, pos: CellPos) -> SimResult<f64> {
        Ok(self.grid.cost_of(pos)?)
    }

    pub fn start(&self) -> CellPos {
        self.grid.start()
    }

    pub fn goal(&self) -> CellPos {
        self.grid.goal()
    }

    pub fn agents(&self) -> &AgentPool {
        &self.agents
    }

    pub fn walkers(&self) -> &[Walker] {
        self.agents.walkers()
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn best_path(&self) -> Option<&BestPath> {
        self.stats.best()
    }

    /// Episodes started since the last reset.
    pub fn sim_count(&self) -> usize {
        self.scheduler.sim_count()
    }

    /// Ticks processed since the last reset.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn run_state(&self) -> RunState {
        if self.done {
            RunState::Done
        } else if !self.paused {
            RunState::Running
        } else if self.sim_count() > 0 {
            RunState::Paused
        } else {
            RunState::Ready
        }
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    pub fn cost_paint_value(&self) -> u8 {
        self.config.cost_paint_value
    }

    pub fn agent_count(&self) -> usize {
        self.config.agent_count
    }

    pub fn steps_per_frame(&self) -> usize {
        self.config.steps_per_frame
    }

    pub fn max_steps_per_walk(&self) -> usize {
        self.config.max_steps_per_walk
    }

    pub fn max_simulations(&self) -> usize {
        self.config.max_simulations
    }

    /// Snapshot of every figure a status panel shows.
    pub fn summary(&self) -> RunSummary {
        let s = &self.stats;
        RunSummary {
            state:           self.run_state(),
            sim_count:       self.sim_count(),
            max_simulations: self.config.max_simulations,
            agent_count:     self.config.agent_count,
            rows:            self.rows(),
            cols:            self.cols(),
            success_count:   s.success_count,
            success_rate:    s.success_rate(self.sim_count()),
            best_length:     s.best().map(BestPath::len),
            best_cost:       s.best_cost(),
            avg_length:      s.avg_success_length(),
            avg_cost:        s.avg_success_cost(),
            min_length:      s.min_success_length,
            max_length:      s.max_success_length,
            min_cost:        s.min_success_cost,
            max_cost:        s.max_success_cost,
        }
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Run one frame (`steps_per_frame` ticks).  Returns the ticks processed:
    /// 0 while paused or done, fewer than `steps_per_frame` if the run
    /// finished mid-frame.
    pub fn advance_one_frame(&mut self) -> usize {
        self.advance_one_frame_with(&mut NoopObserver)
    }

    /// [`advance_one_frame`](Self::advance_one_frame) with observer hooks.
    pub fn advance_one_frame_with<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        if self.paused || self.done {
            return 0;
        }

        self.scheduler
            .begin_run(self.agents.active_count(), self.config.max_simulations);

        let mut ticks = 0;
        for _ in 0..self.config.steps_per_frame {
            self.process_tick(observer);
            ticks += 1;
            if self.done {
                break;
            }
        }
        ticks
    }

    /// Resume (if needed) and advance frames until DONE or `max_frames`
    /// frames have run.  Returns the number of frames run.
    pub fn run_until_done(&mut self, max_frames: usize) -> usize {
        if self.done {
            return 0;
        }
        self.paused = false;
        let mut frames = 0;
        while !self.done && frames < max_frames {
            self.advance_one_frame();
            frames += 1;
        }
        frames
    }

    fn process_tick<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.tick;
        let budget = self.config.max_simulations;

        // ── ① Step every walker ───────────────────────────────────────────
        let stats = &mut self.stats;
        self.agents.step_all(
            &mut self.grid,
            self.config.max_steps_per_walk,
            &mut self.rng,
            |agent, walker, outcome, grid| {
                let path = walker.path();
                if outcome == EpisodeOutcome::Success {
                    let cost = grid.path_cost(path);
                    if stats.record_success(path, cost) {
                        info!(cost, length = path.len(), %agent, "new best path");
                        if let Some(best) = stats.best() {
                            observer.on_new_best(best);
                        }
                    }
                }
                trace!(%agent, %outcome, length = path.len(), "episode ended");
                observer.on_episode_end(agent, outcome, path.len());
            },
        );

        // ── ② Top up idle walkers from the budget ─────────────────────────
        self.scheduler.top_up(&mut self.agents, &mut self.grid, budget);

        observer.on_tick_end(now, self.agents.active_count());
        self.tick = now.next();

        // ── ③ Completion ──────────────────────────────────────────────────
        if self.scheduler.is_complete(&self.agents, budget) {
            self.done = true;
            info!(
                sim_count = self.sim_count(),
                successes = self.stats.success_count,
                ticks = self.tick.0,
                "simulation finished"
            );
            observer.on_run_done(&self.stats, self.sim_count());
        }
    }

    // ── Run control ───────────────────────────────────────────────────────

    /// Back to READY: paused, counters and heatmap cleared, walkers respawned
    /// at start.  Grid, obstacles, costs, and anchors are kept.
    ///
    /// A budget raised to the started-episode count by
    /// [`set_max_episode_budget`](Self::set_max_episode_budget) falls back to
    /// the requested value (floored at the agent count).
    pub fn reset(&mut self) {
        if let Some(requested) = self.budget_request {
            self.config.max_simulations = requested.max(self.config.agent_count);
        }
        self.grid.clear_visits();
        self.stats = RunStats::new();
        self.scheduler.reset();
        self.tick = Tick::ZERO;
        self.done = false;
        self.paused = true;
        self.agents = AgentPool::spawn(self.config.agent_count, &mut self.grid);
        debug!(agents = self.config.agent_count, "simulation reset");
    }

    /// Toggle between RUNNING and PAUSED.  Ignored once DONE; returns whether
    /// the toggle happened.
    pub fn toggle_pause(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Reallocate the grid with the default layout, then reset.  Returns the
    /// dimensions actually used.
    ///
    /// Fails only when `rows * cols` overflows; the engine is then unchanged.
    pub fn resize(&mut self, rows: usize, cols: usize) -> SimResult<(usize, usize)> {
        let (rows, cols) = self.grid.resize(rows, cols)?;
        self.config.rows = rows;
        self.config.cols = cols;
        debug!(rows, cols, "grid resized");
        self.reset();
        Ok((rows, cols))
    }

    // ── Parameter tuning ──────────────────────────────────────────────────

    /// Clamped to `[1, max_agent_count]`; resets the run.
    pub fn set_agent_count(&mut self, n: usize) {
        self.config.agent_count = n.clamp(1, self.config.max_agent_count.max(1));
        debug!(agents = self.config.agent_count, "agent count changed");
        self.reset();
    }

    /// Clamped to at least 1.
    pub fn set_steps_per_frame(&mut self, n: usize) {
        self.config.steps_per_frame = n.max(1);
        debug!(steps_per_frame = self.config.steps_per_frame, "steps per frame changed");
    }

    /// Clamped to at least the agent count, and never below the episodes
    /// already started.  The started-episode floor lasts until the next
    /// reset, which re-applies `n` against the agent count alone.
    pub fn set_max_episode_budget(&mut self, n: usize) {
        self.budget_request = Some(n);
        let floor = self.config.agent_count.max(self.sim_count());
        self.config.max_simulations = n.max(floor);
        debug!(budget = self.config.max_simulations, "episode budget changed");
    }

    /// Clamped to at least 1.
    pub fn set_max_steps_per_walk(&mut self, n: usize) {
        self.config.max_steps_per_walk = n.max(1);
        debug!(max_steps = self.config.max_steps_per_walk, "step limit changed");
    }

    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        self.cursor_mode = mode;
        debug!(?mode, "cursor mode changed");
    }

    /// Clamped to `[0, 9]`.
    pub fn set_cost_paint_value(&mut self, v: i32) {
        self.config.cost_paint_value = v.clamp(0, i32::from(MAX_COST_DOTS)) as u8;
        debug!(value = self.config.cost_paint_value, "cost paint value changed");
    }

    // ── Cell edits ────────────────────────────────────────────────────────

    /// Dispatch an input-layer cell interaction.  Returns whether anything
    /// changed; rejected edits are `Ok(false)`.
    pub fn handle_cell_interaction(&mut self, pos: CellPos, action: CellAction) -> SimResult<bool> {
        match action {
            CellAction::PrimaryEdit => match self.cursor_mode {
                CursorMode::Obstacle => Ok(self.grid.toggle_obstacle(pos)?),
                CursorMode::Cost => {
                    let v = i32::from(self.config.cost_paint_value);
                    Ok(self.grid.set_cost(pos, v)?)
                }
            },
            CellAction::SetStart => self.set_start(pos),
            CellAction::SetGoal  => self.set_goal(pos),
        }
    }

    /// Obstacle edits take effect immediately and do not reset the run.
    pub fn set_obstacle(&mut self, pos: CellPos, present: bool) -> SimResult<bool> {
        Ok(self.grid.set_obstacle(pos, present)?)
    }

    pub fn set_cost(&mut self, pos: CellPos, value: i32) -> SimResult<bool> {
        Ok(self.grid.set_cost(pos, value)?)
    }

    /// Move the start anchor and reset.  Rejected if `pos` is the goal.
    pub fn set_start(&mut self, pos: CellPos) -> SimResult<bool> {
        let moved = self.grid.set_start(pos)?;
        if moved {
            debug!(%pos, "start moved");
            self.reset();
        }
        Ok(moved)
    }

    /// Move the goal anchor and reset.  Rejected if `pos` is the start.
    pub fn set_goal(&mut self, pos: CellPos) -> SimResult<bool> {
        let moved = self.grid.set_goal(pos)?;
        if moved {
            debug!(%pos, "goal moved");
            self.reset();
        }
        Ok(moved)
    }
}
