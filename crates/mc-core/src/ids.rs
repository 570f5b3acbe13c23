//! Strongly typed coordinates and identifiers.
//!
//! Both types are `Copy + Ord + Hash` so they can be used as set members and
//! map keys without ceremony.

use std::fmt;

// ── CellPos ───────────────────────────────────────────────────────────────────

/// A grid cell coordinate, 0-indexed: `row ∈ [0, rows)`, `col ∈ [0, cols)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` if the coordinate lies inside a `rows × cols` grid.
    #[inline]
    pub fn in_bounds(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Row-major flat index into a grid `cols` cells wide.
    ///
    /// Also serves as the compact encoding of `(row, col)` used by visited sets.
    #[inline(always)]
    pub fn index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// The cell displaced by `(d_row, d_col)`, or `None` if it falls outside
    /// a `rows × cols` grid.
    #[inline]
    pub fn offset(self, (d_row, d_col): (isize, isize), rows: usize, cols: usize) -> Option<CellPos> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let pos = CellPos { row, col };
        pos.in_bounds(rows, cols).then_some(pos)
    }

    /// Manhattan distance to `other`.
    #[inline]
    pub fn manhattan(self, other: CellPos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for CellPos {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        CellPos { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── AgentId ───────────────────────────────────────────────────────────────────

/// Stable index of an agent in the pool.  Agents are stepped in ascending
/// `AgentId` order every tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}
