use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::services::ProgressReporter;

const TEMPLATE: &str =
    "{prefix:.bold}\n{msg:.dim}\n[{bar:40}] {percent}%\nEstimated time remaining: {eta}";

/// Progress bar on stdout, cleared once the run completes.
#[derive(Default)]
pub struct TerminalProgress {
    bar: Option<ProgressBar>,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for TerminalProgress {
    fn start(&mut self, total_stories: usize) {
        let style = ProgressStyle::with_template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█░");
        let bar = ProgressBar::with_draw_target(
            Some(total_stories as u64),
            ProgressDrawTarget::stdout(),
        )
        .with_style(style);
        self.bar = Some(bar);
    }

    fn update(&mut self, scenario: &str, story: &str, completed: usize) {
        if let Some(bar) = &self.bar {
            bar.set_prefix(format!("Current Scenario: {scenario}"));
            bar.set_message(format!("Current Story: {story}"));
            bar.set_position(completed as u64);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for TerminalProgress {
    fn drop(&mut self) {
        // An aborted run leaves the bar where it stopped.
        if let Some(bar) = self.bar.take() {
            bar.abandon();
        }
    }
}
