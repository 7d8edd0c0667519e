//! Progress display and tallies for surveys over many seeds

use crate::io::configuration::{PROGRESS_BAR_WIDTH, SURVEY_REFRESH_INTERVAL};
use crate::puzzle::Puzzle;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SURVEY_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Seeds: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Running totals over surveyed puzzles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurveyTally {
    /// Puzzles built
    pub puzzles: u64,
    /// Puzzles that needed the fallback seed
    pub fallbacks: u64,
    /// Seeds for which even the fallback failed
    pub failures: u64,
    /// Attempts spent across all built puzzles
    pub attempts: u64,
    /// Longest attempt count for a single puzzle
    pub max_attempts: u64,
}

impl SurveyTally {
    /// Fold one successful puzzle into the totals
    pub fn record(&mut self, puzzle: &Puzzle) {
        let attempts = puzzle.attempts() as u64;
        self.puzzles += 1;
        self.attempts += attempts;
        self.max_attempts = self.max_attempts.max(attempts);
        if puzzle.used_fallback() {
            self.fallbacks += 1;
        }
    }

    /// Count a seed whose generation failed outright
    pub const fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Mean attempts per built puzzle, zero when nothing was built
    pub fn mean_attempts(&self) -> f64 {
        if self.puzzles == 0 {
            0.0
        } else {
            self.attempts as f64 / self.puzzles as f64
        }
    }

    /// Share of built puzzles that fell back, in `[0, 1]`
    pub fn fallback_rate(&self) -> f64 {
        if self.puzzles == 0 {
            0.0
        } else {
            self.fallbacks as f64 / self.puzzles as f64
        }
    }
}

/// Progress bar for a survey, silent when hidden
pub struct SurveyProgress {
    bar: Option<ProgressBar>,
}

impl SurveyProgress {
    /// Create a bar over `total` seeds, or a silent tracker when `visible` is false
    pub fn new(total: u64, visible: bool) -> Self {
        let bar = visible.then(|| {
            let bar = ProgressBar::new(total);
            bar.set_style(SURVEY_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Report one more surveyed seed along with the running tally
    pub fn advance(&self, tally: &SurveyTally) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            if bar.position() % SURVEY_REFRESH_INTERVAL == 0 {
                bar.set_message(format!(
                    "fallbacks {} mean attempts {:.1}",
                    tally.fallbacks,
                    tally.mean_attempts()
                ));
            }
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
