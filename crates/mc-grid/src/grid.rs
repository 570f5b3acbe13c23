//! The `Grid`: cell kinds, cost dots, visit heatmap, and the two anchors.
//!
//! # Data layout
//!
//! Three parallel row-major arrays of `rows * cols` entries, indexed by
//! [`CellPos::index`]:
//!
//! ```text
//! cells[i]   FREE | OBSTACLE
//! costs[i]   0..=9 cost dots (always 0 on obstacles)
//! visits[i]  heatmap counter (always 0 right after a cell becomes an obstacle)
//! ```
//!
//! # Invariants
//!
//! - `start != goal`, both in bounds, both `Free`.
//! - Every obstacle carries zero cost dots.
//!
//! The grid enforces both itself: edits that would break them are rejected as
//! no-ops (`Ok(false)`).  Only out-of-bounds coordinates produce an error.

use mc_core::CellPos;
use mc_core::config::MAX_COST_DOTS;

use crate::layout::default_obstacles;
use crate::{GridError, GridResult};

/// Orthogonal moves in probe order: up, down, left, right.
pub const MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Traversal cost of a cell carrying `dots` cost dots: `1.0 + 0.2 * dots`.
#[inline]
pub fn cost_for_dots(dots: u8) -> f64 {
    1.0 + 0.2 * f64::from(dots)
}

// ── CellKind ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Free,
    Obstacle,
}

impl CellKind {
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, CellKind::Free)
    }
}

// ── Neighbors ─────────────────────────────────────────────────────────────────

/// Up to four neighbouring cells, stored inline (no heap allocation).
#[derive(Clone, Debug, Default)]
pub struct Neighbors {
    buf: [CellPos; 4],
    len: usize,
}

impl Neighbors {
    #[inline]
    fn push(&mut self, pos: CellPos) {
        self.buf[self.len] = pos;
        self.len += 1;
    }

    /// Keep only the cells for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(CellPos) -> bool) {
        let mut kept = 0;
        for i in 0..self.len {
            let pos = self.buf[i];
            if keep(pos) {
                self.buf[kept] = pos;
                kept += 1;
            }
        }
        self.len = kept;
    }

    #[inline]
    pub fn as_slice(&self) -> &[CellPos] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// The walkable board.
///
/// Read access is open to everyone holding `&Grid` (renderers included);
/// every mutating method needs `&mut Grid`, which only the engine holds.
#[derive(Clone, Debug)]
pub struct Grid {
    rows:   usize,
    cols:   usize,
    cells:  Vec<CellKind>,
    costs:  Vec<u8>,
    visits: Vec<u64>,
    start:  CellPos,
    goal:   CellPos,
}

impl Grid {
    /// An obstacle-free `rows × cols` grid with start at the top-left corner
    /// and goal at the bottom-right corner.
    pub fn new(rows: usize, cols: usize) -> GridResult<Self> {
        match rows.checked_mul(cols) {
            Some(area) if area >= 2 => Ok(Self::allocate(rows, cols, area)),
            _ => Err(GridError::Dimensions { rows, cols }),
        }
    }

    /// Like [`new`](Self::new), then applies the default obstacle layout.
    pub fn with_default_layout(rows: usize, cols: usize) -> GridResult<Self> {
        let mut grid = Self::new(rows, cols)?;
        grid.apply_default_layout();
        Ok(grid)
    }

    fn allocate(rows: usize, cols: usize, n: usize) -> Self {
        Self {
            rows,
            cols,
            cells:  vec![CellKind::Free; n],
            costs:  vec![0; n],
            visits: vec![0; n],
            start:  CellPos::new(0, 0),
            goal:   CellPos::new(rows - 1, cols - 1),
        }
    }

    fn apply_default_layout(&mut self) {
        for pos in default_obstacles(self.rows, self.cols) {
            if pos != self.start && pos != self.goal {
                self.make_obstacle(pos);
            }
        }
    }

    // ── Dimensions & anchors ──────────────────────────────────────────────

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn start(&self) -> CellPos {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> CellPos {
        self.goal
    }

    #[inline]
    pub fn is_anchor(&self, pos: CellPos) -> bool {
        pos == self.start || pos == self.goal
    }

    /// `Ok(())` if `pos` lies inside the grid.
    #[inline]
    pub fn check(&self, pos: CellPos) -> GridResult<()> {
        if pos.in_bounds(self.rows, self.cols) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { pos, rows: self.rows, cols: self.cols })
        }
    }

    #[inline]
    fn idx(&self, pos: CellPos) -> usize {
        pos.index(self.cols)
    }

    // ── Read accessors ────────────────────────────────────────────────────

    pub fn kind(&self, pos: CellPos) -> GridResult<CellKind> {
        self.check(pos)?;
        Ok(self.cells[self.idx(pos)])
    }

    /// `true` if `pos` is inside the grid and free.
    #[inline]
    pub fn is_free(&self, pos: CellPos) -> bool {
        pos.in_bounds(self.rows, self.cols) && self.cells[self.idx(pos)].is_free()
    }

    pub fn cost_dots(&self, pos: CellPos) -> GridResult<u8> {
        self.check(pos)?;
        Ok(self.costs[self.idx(pos)])
    }

    /// Traversal cost of `pos`: `1.0 + 0.2 * dots`.
    ///
    /// Obstacles carry zero dots, so they report 1.0; walkers never enter them.
    pub fn cost_of(&self, pos: CellPos) -> GridResult<f64> {
        self.cost_dots(pos).map(cost_for_dots)
    }

    /// Sum of [`cost_of`](Self::cost_of) over every cell of `path`.
    ///
    /// Cells outside the grid are skipped (paths are rebuilt on every resize,
    /// so this only matters for foreign input).
    pub fn path_cost(&self, path: &[CellPos]) -> f64 {
        path.iter()
            .filter(|p| p.in_bounds(self.rows, self.cols))
            .map(|&p| cost_for_dots(self.costs[self.idx(p)]))
            .sum()
    }

    pub fn visits(&self, pos: CellPos) -> GridResult<u64> {
        self.check(pos)?;
        Ok(self.visits[self.idx(pos)])
    }

    /// Row-major cell kinds.
    #[inline]
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Row-major cost dots.
    #[inline]
    pub fn costs(&self) -> &[u8] {
        &self.costs
    }

    /// Row-major heatmap counters.
    #[inline]
    pub fn visit_counts(&self) -> &[u64] {
        &self.visits
    }

    /// Largest heatmap value (0 on a fresh grid).  Renderers normalise by it.
    pub fn max_visits(&self) -> u64 {
        self.visits.iter().copied().max().unwrap_or(0)
    }

    /// In-bounds free orthogonal neighbours of `pos`, in [`MOVES`] order.
    pub fn open_neighbors(&self, pos: CellPos) -> Neighbors {
        let mut out = Neighbors::default();
        for next in MOVES.iter().filter_map(|&d| pos.offset(d, self.rows, self.cols)) {
            if self.cells[self.idx(next)].is_free() {
                out.push(next);
            }
        }
        out
    }

    // ── Cell edits ────────────────────────────────────────────────────────

    /// Set or clear an obstacle at `pos`.
    ///
    /// Returns `Ok(false)` without touching anything when `pos` is the start
    /// or goal.  Turning a cell into an obstacle zeroes its cost dots and its
    /// heatmap counter.
    pub fn set_obstacle(&mut self, pos: CellPos, present: bool) -> GridResult<bool> {
        self.check(pos)?;
        if self.is_anchor(pos) {
            return Ok(false);
        }
        if present {
            self.make_obstacle(pos);
        } else {
            let i = self.idx(pos);
            self.cells[i] = CellKind::Free;
        }
        Ok(true)
    }

    /// Flip `pos` between free and obstacle (anchors are left alone).
    pub fn toggle_obstacle(&mut self, pos: CellPos) -> GridResult<bool> {
        let present = self.kind(pos)?.is_free();
        self.set_obstacle(pos, present)
    }

    fn make_obstacle(&mut self, pos: CellPos) {
        let i = self.idx(pos);
        self.cells[i] = CellKind::Obstacle;
        self.costs[i] = 0;
        self.visits[i] = 0;
    }

    /// Paint `value` cost dots on `pos`, clamped to `[0, 9]`.
    ///
    /// Returns `Ok(false)` when `pos` is an obstacle.
    pub fn set_cost(&mut self, pos: CellPos, value: i32) -> GridResult<bool> {
        self.check(pos)?;
        let i = self.idx(pos);
        if !self.cells[i].is_free() {
            return Ok(false);
        }
        self.costs[i] = value.clamp(0, i32::from(MAX_COST_DOTS)) as u8;
        Ok(true)
    }

    /// Increment the heatmap counter of `pos`.
    #[inline]
    pub fn record_visit(&mut self, pos: CellPos) {
        if pos.in_bounds(self.rows, self.cols) {
            let i = self.idx(pos);
            self.visits[i] += 1;
        }
    }

    /// Zero the whole heatmap.
    pub fn clear_visits(&mut self) {
        self.visits.fill(0);
    }

    // ── Anchors ───────────────────────────────────────────────────────────

    /// Move the start anchor.  Rejected (`Ok(false)`) if `pos` is the goal.
    ///
    /// An obstacle under the new start is cleared so the anchor stays free.
    pub fn set_start(&mut self, pos: CellPos) -> GridResult<bool> {
        self.check(pos)?;
        if pos == self.goal {
            return Ok(false);
        }
        self.start = pos;
        self.clear_anchor_cell(pos);
        Ok(true)
    }

    /// Move the goal anchor.  Rejected (`Ok(false)`) if `pos` is the start.
    pub fn set_goal(&mut self, pos: CellPos) -> GridResult<bool> {
        self.check(pos)?;
        if pos == self.start {
            return Ok(false);
        }
        self.goal = pos;
        self.clear_anchor_cell(pos);
        Ok(true)
    }

    /// Place both anchors at once (used at construction, where the default
    /// corners may not be what the caller wants).
    pub fn set_anchors(&mut self, start: CellPos, goal: CellPos) -> GridResult<()> {
        self.check(start)?;
        self.check(goal)?;
        if start == goal {
            return Err(GridError::AnchorConflict(start));
        }
        self.start = start;
        self.goal = goal;
        self.clear_anchor_cell(start);
        self.clear_anchor_cell(goal);
        Ok(())
    }

    fn clear_anchor_cell(&mut self, pos: CellPos) {
        let i = self.idx(pos);
        self.cells[i] = CellKind::Free;
    }

    // ── Resize ────────────────────────────────────────────────────────────

    /// Reallocate to `rows × cols` with fresh defaults.
    ///
    /// Each dimension is clamped to at least 1 and a 1 × 1 request widens to
    /// 1 × 2.  Start moves to `(0, 0)`, goal to the bottom-right corner, and
    /// the default obstacle layout is reapplied.  Returns the dimensions
    /// actually used.
    ///
    /// A request whose cell count overflows `usize` is rejected with
    /// [`GridError::Dimensions`] and leaves the grid untouched.
    pub fn resize(&mut self, rows: usize, cols: usize) -> GridResult<(usize, usize)> {
        let rows = rows.max(1);
        let cols = if rows == 1 { cols.max(2) } else { cols.max(1) };
        let area = rows
            .checked_mul(cols)
            .ok_or(GridError::Dimensions { rows, cols })?;
        *self = Self::allocate(rows, cols, area);
        self.apply_default_layout();
        Ok((rows, cols))
    }
}
