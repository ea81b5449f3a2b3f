//! Progress display for long-running solves
//!
//! A spinner showing the running iteration count and search rate while a
//! solve occupies a background thread. Purely advisory: it reads the
//! solver's atomic counter and never influences the search.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting iterations and rate of an in-flight solve
pub struct SolveProgress {
    bar: ProgressBar,
    started: Instant,
}

impl Default for SolveProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SolveProgress {
    /// Create and show the spinner
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        Self {
            bar,
            started: Instant::now(),
        }
    }

    /// Refresh the display with the current iteration count
    pub fn update(&self, iterations: u64) {
        self.bar
            .set_message(format!("{iterations} iterations ({})", self.rate(iterations)));
        self.bar.tick();
    }

    /// Replace the spinner with a final summary line
    pub fn finish(&self, iterations: u64, elapsed: Duration) {
        self.bar.finish_with_message(format!(
            "{iterations} iterations in {:.2}s ({})",
            elapsed.as_secs_f64(),
            self.rate(iterations)
        ));
    }

    fn rate(&self, iterations: u64) -> String {
        let elapsed = self.started.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            format!("{:.0}/s", iterations as f64 / elapsed)
        } else {
            String::from("-/s")
        }
    }
}
