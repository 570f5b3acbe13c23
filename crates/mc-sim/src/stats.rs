//! Running statistics over successful episodes and the best path.
//!
//! # Ranking policy
//!
//! A new successful path replaces the stored best when
//!
//! ```text
//! new_cost < best_cost - ε
//!   or (|new_cost - best_cost| < ε  and  new_len < best_len)
//! ```
//!
//! with ε = [`BEST_PATH_EPSILON`].  Cost is primary, length only breaks ties,
//! so the stored best cost never increases within a run.

use std::fmt;

use mc_core::CellPos;

/// Cost tolerance used when comparing path costs.
pub const BEST_PATH_EPSILON: f64 = 1e-9;

// ── BestPath ──────────────────────────────────────────────────────────────────

/// The lowest-cost (then shortest) successful path seen in the current run.
#[derive(Clone, Debug, PartialEq)]
pub struct BestPath {
    pub path: Vec<CellPos>,
    pub cost: f64,
}

impl BestPath {
    /// Path length in cells, start included.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// `true` if a path of `cost` and `len` strictly beats this one.
    pub fn is_beaten_by(&self, cost: f64, len: usize) -> bool {
        cost < self.cost - BEST_PATH_EPSILON
            || ((cost - self.cost).abs() < BEST_PATH_EPSILON && len < self.len())
    }
}

// ── RunStats ──────────────────────────────────────────────────────────────────

/// Aggregates over every successful episode of the current run.
///
/// Reset together with the rest of the run state; never independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunStats {
    pub success_count:        usize,
    pub total_success_length: usize,
    pub min_success_length:   Option<usize>,
    pub max_success_length:   Option<usize>,
    pub total_success_cost:   f64,
    pub min_success_cost:     Option<f64>,
    pub max_success_cost:     Option<f64>,
    best:                     Option<BestPath>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one successful path (of total `cost`) into the aggregates.
    ///
    /// Returns `true` if the path became the new best.
    pub fn record_success(&mut self, path: &[CellPos], cost: f64) -> bool {
        let len = path.len();

        self.success_count += 1;
        self.total_success_length += len;
        self.total_success_cost += cost;

        self.min_success_length = Some(self.min_success_length.map_or(len, |m| m.min(len)));
        self.max_success_length = Some(self.max_success_length.map_or(len, |m| m.max(len)));
        self.min_success_cost = Some(self.min_success_cost.map_or(cost, |m| m.min(cost)));
        self.max_success_cost = Some(self.max_success_cost.map_or(cost, |m| m.max(cost)));

        let replace = match &self.best {
            None       => true,
            Some(best) => best.is_beaten_by(cost, len),
        };
        if replace {
            self.best = Some(BestPath { path: path.to_vec(), cost });
        }
        replace
    }

    #[inline]
    pub fn best(&self) -> Option<&BestPath> {
        self.best.as_ref()
    }

    pub fn best_cost(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.cost)
    }

    /// Successes per started episode, in `[0, 1]`.  0 before anything started.
    pub fn success_rate(&self, sim_count: usize) -> f64 {
        if sim_count == 0 {
            0.0
        } else {
            self.success_count as f64 / sim_count as f64
        }
    }

    /// Mean successful path length, 0 without successes.
    pub fn avg_success_length(&self) -> f64 {
        if self.success_count == 0 {
            0.0
        } else {
            self.total_success_length as f64 / self.success_count as f64
        }
    }

    /// Mean successful path cost, 0 without successes.
    pub fn avg_success_cost(&self) -> f64 {
        if self.success_count == 0 {
            0.0
        } else {
            self.total_success_cost / self.success_count as f64
        }
    }
}

// ── RunSummary ────────────────────────────────────────────────────────────────

/// A flat, copyable snapshot of the figures a sidebar or log line shows.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub state:           crate::RunState,
    pub sim_count:       usize,
    pub max_simulations: usize,
    pub agent_count:     usize,
    pub rows:            usize,
    pub cols:            usize,
    pub success_count:   usize,
    pub success_rate:    f64,
    pub best_length:     Option<usize>,
    pub best_cost:       Option<f64>,
    pub avg_length:      f64,
    pub avg_cost:        f64,
    pub min_length:      Option<usize>,
    pub max_length:      Option<usize>,
    pub min_cost:        Option<f64>,
    pub max_cost:        Option<f64>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "status      : {}", self.state)?;
        writeln!(f, "map         : {} x {}", self.rows, self.cols)?;
        writeln!(f, "episodes    : {}/{}", self.sim_count, self.max_simulations)?;
        writeln!(f, "agents      : {}", self.agent_count)?;
        writeln!(
            f,
            "successes   : {} ({:.1}%)",
            self.success_count,
            self.success_rate * 100.0
        )?;
        match (self.best_length, self.best_cost) {
            (Some(len), Some(cost)) => writeln!(f, "best path   : {len} cells, cost {cost:.2}")?,
            _ => writeln!(f, "best path   : -")?,
        }
        if let (Some(min_l), Some(max_l), Some(min_c), Some(max_c)) =
            (self.min_length, self.max_length, self.min_cost, self.max_cost)
        {
            writeln!(f, "avg len     : {:.1}", self.avg_length)?;
            writeln!(f, "min/max len : {min_l}/{max_l}")?;
            writeln!(f, "avg cost    : {:.2}", self.avg_cost)?;
            write!(f, "min/max cost: {min_c:.2}/{max_c:.2}")?;
        } else {
            write!(f, "no successful path yet")?;
        }
        Ok(())
    }
}
