//! Observer trait for progress reporting and data collection.

use mc_agent::EpisodeOutcome;
use mc_core::{AgentId, Tick};

use crate::{BestPath, RunStats};

/// Callbacks invoked by [`Engine::advance_one_frame_with`] at key points in
/// the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers only see borrowed state and
/// cannot mutate the engine.
///
/// # Example: outcome tally
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Tally { stuck: usize }
///
/// impl SimObserver for Tally {
///     fn on_episode_end(&mut self, _a: AgentId, outcome: EpisodeOutcome, _len: usize) {
///         if outcome == EpisodeOutcome::Stuck {
///             self.stuck += 1;
///         }
///     }
/// }
/// ```
///
/// [`Engine::advance_one_frame_with`]: crate::Engine::advance_one_frame_with
pub trait SimObserver {
    /// Called after every tick.  `active` is the number of walkers still
    /// mid-episode after the top-up pass.
    fn on_tick_end(&mut self, _tick: Tick, _active: usize) {}

    /// Called whenever an episode ends.  `path_len` counts cells, start
    /// included.
    fn on_episode_end(&mut self, _agent: AgentId, _outcome: EpisodeOutcome, _path_len: usize) {}

    /// Called when a success replaces the stored best path.
    fn on_new_best(&mut self, _best: &BestPath) {}

    /// Called once when the run reaches DONE.
    fn on_run_done(&mut self, _stats: &RunStats, _sim_count: usize) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
