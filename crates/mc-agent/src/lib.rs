//! `mc-agent`: random-walk agents for the Monte Carlo grid walker.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`walker`] | `Walker` (one agent's episode state), `EpisodeOutcome`    |
//! | [`pool`]   | `AgentPool` (fixed-size, stepped in ascending `AgentId`)  |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Visited sets use `FxHashSet` instead of `HashSet`.       |
//! | `serde`   | Propagates serde derives to `mc-core` / `mc-grid` types. |

pub mod pool;
pub mod walker;


pub use pool::AgentPool;
pub use walker::{EpisodeOutcome, Walker};
