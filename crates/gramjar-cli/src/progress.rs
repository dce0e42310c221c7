//! Spinner-backed progress reporting.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use gramjar_core::traits::ProgressReporter;

const TICK_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷", " "];

/// Terminal spinner that counts records as a drain progresses.
pub struct SpinnerReporter {
    noun: &'static str,
    bar: Option<ProgressBar>,
}

impl SpinnerReporter {
    /// Create a reporter counting the given noun (e.g. "posts found").
    pub fn new(noun: &'static str) -> Self {
        Self { noun, bar: None }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn start(&mut self) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .expect("valid template")
                .tick_strings(TICK_FRAMES),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message(format!("0 {}", self.noun));
        self.bar = Some(bar);
    }

    fn update(&mut self, count: usize) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{} {}", count, self.noun));
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
