//! Progress display for long-running installation steps

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a blocking external step runs
///
/// The external tools are invoked quietly, so a spinner is the only
/// feedback during the multi-gigabyte download and extraction steps.
pub struct StepSpinner {
    pb: ProgressBar,
}

impl StepSpinner {
    /// Start a spinner with the given step message
    pub fn start(message: &str) -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Finish the spinner, leaving a completion message
    pub fn finish(self, message: &str) {
        self.pb.finish_with_message(message.to_string());
    }

    /// Abandon on error, leaving the last message visible
    pub fn abandon(self) {
        self.pb.abandon();
    }
}
