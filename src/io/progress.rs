//! Per-attempt progress tracking for the command-line driver

use crate::algorithm::executor::SolveState;
use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_BAR_WIDTH};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display across solve attempts
///
/// Shows one bar per attempt measuring collapsed cells. Once more than
/// [`MAX_INDIVIDUAL_PROGRESS_BARS`] attempts have run, the oldest bar is
/// reused so restarts do not flood the terminal.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    attempt_bars: Vec<ProgressBar>,
    /// Bar belonging to the attempt in progress
    current: Option<usize>,
    attempts_started: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            attempt_bars: Vec::new(),
            current: None,
            attempts_started: 0,
        }
    }

    /// Configure a bar for a new attempt over `cell_count` cells
    pub fn start_attempt(&mut self, attempt: usize, max_attempts: usize, cell_count: usize) {
        let slot = self.attempts_started % MAX_INDIVIDUAL_PROGRESS_BARS;
        self.attempts_started += 1;

        if slot >= self.attempt_bars.len() {
            let bar = ProgressBar::new(0);
            bar.set_style(PROGRESS_STYLE.clone());
            self.attempt_bars.push(self.multi_progress.add(bar));
        }

        if let Some(bar) = self.attempt_bars.get(slot) {
            bar.reset();
            bar.set_length(cell_count as u64);
            bar.set_position(0);
            bar.set_prefix(format!("attempt {attempt}/{max_attempts}"));
            bar.set_message(String::new());
        }
        self.current = Some(slot);
    }

    /// Report how many cells are collapsed in the current attempt
    pub fn update(&self, collapsed: usize) {
        if let Some(bar) = self.current_bar() {
            bar.set_position(collapsed as u64);
        }
    }

    /// Mark the current attempt with its final state
    pub fn complete_attempt(&mut self, state: SolveState) {
        if let Some(bar) = self.current_bar() {
            let message = match state {
                SolveState::Solved => "✓ solved".to_string(),
                SolveState::Contradiction(contradiction) => format!("✗ {contradiction}"),
                SolveState::Running => "stopped".to_string(),
            };
            bar.set_message(message);
        }
        self.current = None;
    }

    /// Number of attempts started so far
    pub const fn attempts_started(&self) -> usize {
        self.attempts_started
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        for bar in &self.attempt_bars {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    fn current_bar(&self) -> Option<&ProgressBar> {
        self.current.and_then(|slot| self.attempt_bars.get(slot))
    }
}
