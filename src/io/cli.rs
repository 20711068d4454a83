//! Command-line interface for solving the maze wall catalog

use crate::algorithm::compatibility::CompatibilityIndex;
use crate::algorithm::executor::{SolveState, Solver};
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS, DEFAULT_SEED, DEFAULT_WIDTH};
use crate::io::error::{AlgorithmError, Result, file_system_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::visualization::{VisualizationCapture, render_text};
use crate::spatial::tiles::maze_catalog;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sockettile")]
#[command(
    author,
    version,
    about = "Fill a grid with maze wall tiles using wave function collapse"
)]
/// Command-line arguments for the maze solver
pub struct Cli {
    /// Grid width in cells
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Solves to attempt before giving up on contradictions
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Write the rendering to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render the grid after every step of the successful attempt
    #[arg(long)]
    pub intermediate: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Result of a successful command-line solve
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Seed of the attempt that solved the grid
    pub seed: u64,
    /// Number of attempts used, including the successful one
    pub attempts: usize,
    /// Steps taken by the successful attempt
    pub steps: usize,
    /// Text rendering of the result, preceded by any intermediate frames
    pub rendering: String,
    /// Whether the rendering was written to `--output`
    pub written: bool,
}

/// Runs restarting solves over the maze catalog
pub struct MazeRunner {
    cli: Cli,
    index: Arc<CompatibilityIndex>,
    progress_manager: Option<ProgressManager>,
}

impl MazeRunner {
    /// Create a runner; the compatibility index is built once and shared by every attempt
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            index: Arc::new(CompatibilityIndex::new(maze_catalog())),
            progress_manager,
        }
    }

    /// Solve the grid, restarting with a fresh seed after each contradiction
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid dimensions or the attempt count are invalid
    /// - Every attempt ends in a contradiction
    /// - The output file cannot be written
    pub fn run(&mut self) -> Result<SolveReport> {
        if self.cli.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &self.cli.attempts,
                &"at least one attempt is required",
            ));
        }

        let mut last_contradiction = None;

        for attempt in 1..=self.cli.attempts {
            let seed = self.cli.seed.wrapping_add(attempt as u64 - 1);
            let mut solver = Solver::new(
                Arc::clone(&self.index),
                self.cli.width,
                self.cli.height,
                seed,
            )?;
            let mut capture = self.cli.intermediate.then(VisualizationCapture::new);

            if let Some(ref mut pm) = self.progress_manager {
                pm.start_attempt(attempt, self.cli.attempts, solver.grid().len());
            }

            let state = loop {
                let state = solver.step();
                if let Some(ref pm) = self.progress_manager {
                    pm.update(solver.grid().collapsed_count());
                }
                if let Some(ref mut frames) = capture {
                    frames.record(solver.iteration(), solver.grid(), &self.index);
                }
                if state.is_terminal() {
                    break state;
                }
            };

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_attempt(state);
            }

            match state {
                SolveState::Solved => {
                    info!(attempt, seed, steps = solver.iteration(), "maze solved");
                    return self.report(&solver, capture, seed, attempt);
                }
                SolveState::Contradiction(contradiction) => {
                    info!(attempt, seed, %contradiction, "restarting after contradiction");
                    last_contradiction = Some(contradiction);
                }
                SolveState::Running => {}
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        last_contradiction.map_or_else(
            || {
                Err(invalid_parameter(
                    "attempts",
                    &self.cli.attempts,
                    &"no attempt reached a terminal state",
                ))
            },
            |last_contradiction| {
                Err(AlgorithmError::Unsolved {
                    attempts: self.cli.attempts,
                    last_contradiction,
                })
            },
        )
    }

    fn report(
        &self,
        solver: &Solver,
        capture: Option<VisualizationCapture>,
        seed: u64,
        attempts: usize,
    ) -> Result<SolveReport> {
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let mut rendering = capture.map(|frames| frames.to_text()).unwrap_or_default();
        rendering.push_str(&render_text(solver.grid(), &self.index));

        let written = if let Some(path) = &self.cli.output {
            std::fs::write(path, &rendering)
                .map_err(|source| file_system_error(path, "write rendering", source))?;
            true
        } else {
            false
        };

        Ok(SolveReport {
            seed,
            attempts,
            steps: solver.iteration(),
            rendering,
            written,
        })
    }
}
