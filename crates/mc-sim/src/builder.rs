//! Fluent builder for constructing an [`Engine`].

use mc_core::{CellPos, SimRng, WalkConfig};
use mc_grid::Grid;

use crate::{Engine, SimResult};

/// Fluent builder for [`Engine`].
///
/// # Required input
///
/// - [`WalkConfig`]: dimensions, agent count, limits, budget, seed.
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                   |
/// |-------------------|-------------------------------------------|
/// | `.seed(s)`        | `config.seed` (entropy when `None`)       |
/// | `.start(p)`       | `(0, 0)`                                  |
/// | `.goal(p)`        | `(rows - 1, cols - 1)`                    |
/// | `.obstacles(v)`   | The default obstacle layout               |
/// | `.cost(p, dots)`  | No cost dots                              |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(WalkConfig { rows: 5, cols: 5, ..WalkConfig::default() })
///     .obstacles(vec![])
///     .seed(7)
///     .build()?;
/// ```
pub struct EngineBuilder {
    config:    WalkConfig,
    start:     Option<CellPos>,
    goal:      Option<CellPos>,
    obstacles: Option<Vec<CellPos>>,
    costs:     Vec<(CellPos, i32)>,
}

impl EngineBuilder {
    pub fn new(config: WalkConfig) -> Self {
        Self {
            config,
            start:     None,
            goal:      None,
            obstacles: None,
            costs:     Vec::new(),
        }
    }

    /// Seed the shared RNG for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn start(mut self, pos: CellPos) -> Self {
        self.start = Some(pos);
        self
    }

    pub fn goal(mut self, pos: CellPos) -> Self {
        self.goal = Some(pos);
        self
    }

    /// Replace the default obstacle layout.  An empty list gives an open
    /// grid.  Obstacles listed on an anchor are ignored.
    pub fn obstacles(mut self, cells: Vec<CellPos>) -> Self {
        self.obstacles = Some(cells);
        self
    }

    /// Paint `dots` cost dots on `pos` (clamped to `[0, 9]`).
    pub fn cost(mut self, pos: CellPos, dots: i32) -> Self {
        self.costs.push((pos, dots));
        self
    }

    /// Validate inputs, lay out the grid, and return a READY [`Engine`].
    pub fn build(self) -> SimResult<Engine> {
        self.config.validate()?;
        let (rows, cols) = (self.config.rows, self.config.cols);

        let mut grid = match &self.obstacles {
            Some(_) => Grid::new(rows, cols)?,
            None    => Grid::with_default_layout(rows, cols)?,
        };

        let start = self.start.unwrap_or(grid.start());
        let goal = self.goal.unwrap_or(grid.goal());
        grid.set_anchors(start, goal)?;

        for &pos in self.obstacles.iter().flatten() {
            grid.set_obstacle(pos, true)?;
        }
        for &(pos, dots) in &self.costs {
            grid.set_cost(pos, dots)?;
        }

        let rng = SimRng::from_seed_opt(self.config.seed);
        Ok(Engine::from_parts(self.config, grid, rng))
    }
}
