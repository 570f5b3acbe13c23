//! Small closed enums describing engine mode and run progress.

use std::fmt;

/// Externally visible lifecycle of a run.
///
/// ```text
/// READY ──resume──▶ RUNNING ◀──toggle──▶ PAUSED
///                      │
///                      └── budget spent, all walkers idle ──▶ DONE
/// ```
///
/// `reset` returns to READY from any state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    Ready,
    Running,
    Paused,
    Done,
}

impl RunState {
    pub fn as_str(self) -> &'static str {
        match self {
            RunState::Ready   => "READY",
            RunState::Running => "RUNNING",
            RunState::Paused  => "PAUSED",
            RunState::Done    => "DONE",
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a primary edit on a cell does.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CursorMode {
    /// Toggle the cell between free and obstacle.
    #[default]
    Obstacle,
    /// Paint the current cost value onto a free cell.
    Cost,
}

/// A cell interaction forwarded by the input layer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CellAction {
    /// Behaviour depends on the current [`CursorMode`].
    PrimaryEdit,
    SetStart,
    SetGoal,
}
