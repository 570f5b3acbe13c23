//! `mc-core`: foundational types for the Monte Carlo grid walker.
//!
//! This crate is a dependency of every other `mc-*` crate.  It has no `mc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`ids`]    | `CellPos`, `AgentId`                                |
//! | [`time`]   | `Tick`                                              |
//! | [`rng`]    | `SimRng` (the single shared random source)          |
//! | [`config`] | `WalkConfig` and the default tunables               |
//! | [`error`]  | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WalkConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, CellPos};
pub use rng::SimRng;
pub use time::Tick;
