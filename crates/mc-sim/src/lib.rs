//! `mc-sim`: the frame-driven Monte Carlo walk engine.
//!
//! # Frame / tick loop
//!
//! ```text
//! advance_one_frame():
//!   if paused or done: return
//!   on the first frame after a reset: sim_count = min(active agents, budget)
//!   repeat steps_per_frame times:
//!     ① Step   : every active walker moves once, ascending AgentId order.
//!                 Successes update RunStats and possibly the best path.
//!     ② Top-up : inactive walkers respawn at start while budget remains.
//!     ③ Done?  : budget spent and no walker active → DONE, stop.
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`engine`]    | `Engine`: owns grid, pool, stats; the public surface    |
//! | [`builder`]   | `EngineBuilder`                                         |
//! | [`scheduler`] | `EpisodeScheduler`: the global episode budget           |
//! | [`stats`]     | `RunStats`, `BestPath`, `RunSummary`                    |
//! | [`state`]     | `RunState`, `CursorMode`, `CellAction`                  |
//! | [`observer`]  | `SimObserver`, `NoopObserver`                           |
//! | [`error`]     | `SimError`, `SimResult<T>`                              |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash visited sets in `mc-agent`.                      |
//! | `serde`   | Serde derives on configuration and state enums.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mc_core::WalkConfig;
//! use mc_sim::EngineBuilder;
//!
//! let mut engine = EngineBuilder::new(WalkConfig::default()).seed(42).build()?;
//! engine.toggle_pause();
//! while !engine.is_done() {
//!     engine.advance_one_frame();
//! }
//! println!("{}", engine.summary());
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod state;
pub mod stats;


pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scheduler::EpisodeScheduler;
pub use state::{CellAction, CursorMode, RunState};
pub use stats::{BEST_PATH_EPSILON, BestPath, RunStats, RunSummary};
