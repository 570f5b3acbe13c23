//! `mc-grid`: the mutable board the walkers explore.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`grid`]   | `Grid` (cell kinds, cost dots, heatmap, anchors), `CellKind`, `MOVES` |
//! | [`layout`] | The canonical default obstacle layout                          |
//! | [`error`]  | `GridError`, `GridResult<T>`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod layout;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{CellKind, Grid, MOVES, Neighbors, cost_for_dots};
pub use layout::{DEFAULT_OBSTACLES, default_obstacles};
