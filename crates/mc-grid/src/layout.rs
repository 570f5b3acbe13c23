//! Canonical default obstacle layout.
//!
//! Applied when a grid is created with [`Grid::with_default_layout`] and
//! again after every resize.  Cells outside the current bounds are skipped.
//!
//! [`Grid::with_default_layout`]: crate::Grid::with_default_layout

use mc_core::CellPos;

/// Two walls and a pillar sized for the default 10 × 10 board.
pub const DEFAULT_OBSTACLES: [(usize, usize); 13] = [
    (1, 1), (1, 2), (1, 3),
    (2, 3),
    (3, 3), (3, 4), (3, 5),
    (5, 7), (6, 7), (7, 7),
    (4, 1), (5, 1), (6, 1),
];

/// The default obstacle cells that fit inside a `rows × cols` grid.
pub fn default_obstacles(rows: usize, cols: usize) -> impl Iterator<Item = CellPos> {
    DEFAULT_OBSTACLES
        .iter()
        .map(|&rc| CellPos::from(rc))
        .filter(move |p| p.in_bounds(rows, cols))
}
