//! Progress and summary reporting on stderr during ingestion.

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::counter::MaskCounts;

pub struct IngestProgress {
    bar: ProgressBar,
    interval: u64,
    start: Instant,
}

impl IngestProgress {
    /// Spinner refreshed every `interval` lines. An interval of 0 draws nothing.
    pub fn new(interval: u64) -> Self {
        let bar = if interval == 0 {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
            bar.set_style(
                ProgressStyle::with_template("{spinner} [{elapsed_precise}] {pos} lines {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar
        };
        Self {
            bar,
            interval,
            start: Instant::now(),
        }
    }

    pub fn hidden() -> Self {
        Self::new(0)
    }

    /// Call once per line read.
    pub fn tick(&self, lines: u64, distinct: usize) {
        if self.interval > 0 && lines % self.interval == 0 {
            self.bar.set_position(lines);
            self.bar.set_message(format!("({distinct} masks)"));
        }
    }

    pub fn finish(&self, lines: u64) {
        if self.interval > 0 {
            self.bar.set_position(lines);
            self.bar.finish_and_clear();
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Print an ingestion summary on stderr.
pub fn print_stats(counts: &MaskCounts, elapsed: Duration) {
    let rate = if elapsed.as_secs_f64() > 0.0 {
        counts.lines() as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    eprintln!("Ingestion complete!");
    eprintln!("Lines read: {}", counts.lines());
    eprintln!("Qualifying: {}", counts.qualifying());
    eprintln!("Filtered by length: {}", counts.filtered());
    eprintln!("Distinct masks: {}", counts.distinct());
    eprintln!("Elapsed: {:.2?} ({:.0} lines/s)", elapsed, rate);
}
