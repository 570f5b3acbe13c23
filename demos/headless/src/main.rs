//! headless: run the Monte Carlo grid walker to completion without a UI.
//!
//! Usage: `headless [config.json]`
//!
//! The optional JSON file holds a (possibly partial) `WalkConfig`; missing
//! fields take their defaults.  Set `RUST_LOG=debug` (or `trace`) for more
//! engine output.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mc_agent::EpisodeOutcome;
use mc_core::{AgentId, CellPos, WalkConfig};
use mc_grid::CellKind;
use mc_sim::{Engine, EngineBuilder, RunStats, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SEED: u64   = 42;
const MAX_FRAMES:   usize = 1_000_000;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tallies episode outcomes as the run progresses.
#[derive(Default)]
struct OutcomeCounter {
    success:   usize,
    stuck:     usize,
    exhausted: usize,
    improved:  usize,
}

impl SimObserver for OutcomeCounter {
    fn on_episode_end(&mut self, _agent: AgentId, outcome: EpisodeOutcome, _path_len: usize) {
        match outcome {
            EpisodeOutcome::Success   => self.success += 1,
            EpisodeOutcome::Stuck     => self.stuck += 1,
            EpisodeOutcome::Exhausted => self.exhausted += 1,
        }
    }

    fn on_new_best(&mut self, _best: &mc_sim::BestPath) {
        self.improved += 1;
    }

    fn on_run_done(&mut self, stats: &RunStats, sim_count: usize) {
        info!(
            sim_count,
            successes = stats.success_count,
            rate = stats.success_rate(sim_count),
            "run complete"
        );
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// `S`/`G` anchors, `#` obstacles, `*` best path, digits for cost dots.
fn render(engine: &Engine) -> String {
    let grid = engine.grid();
    let best: &[CellPos] = engine.best_path().map(|b| b.path.as_slice()).unwrap_or_default();
    let mut out = String::with_capacity(grid.area() + grid.rows());

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = CellPos::new(row, col);
            let idx = pos.index(grid.cols());
            let ch = if pos == grid.start() {
                'S'
            } else if pos == grid.goal() {
                'G'
            } else if grid.cells()[idx] == CellKind::Obstacle {
                '#'
            } else if best.contains(&pos) {
                '*'
            } else {
                match grid.costs()[idx] {
                    0 => '.',
                    d => char::from(b'0' + d),
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn load_config(path: Option<String>) -> Result<WalkConfig> {
    let Some(path) = path else {
        return Ok(WalkConfig { seed: Some(DEFAULT_SEED), ..WalkConfig::default() });
    };
    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let config: WalkConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = load_config(std::env::args().nth(1))?;
    println!("=== headless | Monte Carlo grid walker ===");
    println!(
        "Grid: {} x {}  |  Agents: {}  |  Budget: {}  |  Max steps/walk: {}",
        config.rows, config.cols, config.agent_count, config.max_simulations, config.max_steps_per_walk
    );
    println!();

    let mut engine = EngineBuilder::new(config).build()?;
    let mut counter = OutcomeCounter::default();

    let t0 = Instant::now();
    engine.toggle_pause();
    let mut frames = 0;
    while !engine.is_done() && frames < MAX_FRAMES {
        engine.advance_one_frame_with(&mut counter);
        frames += 1;
    }
    let elapsed = t0.elapsed();

    println!("Finished in {:.3} s ({frames} frames, {} ticks)", elapsed.as_secs_f64(), engine.tick().0);
    println!(
        "Outcomes: {} success, {} stuck, {} exhausted  |  best improved {} times",
        counter.success, counter.stuck, counter.exhausted, counter.improved
    );
    println!();
    println!("{}", engine.summary());
    println!();
    print!("{}", render(&engine));
    Ok(())
}
