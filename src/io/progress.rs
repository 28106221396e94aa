//! Terminal progress display for script runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SCRIPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar counting executed script commands
pub struct ScriptProgress {
    bar: ProgressBar,
}

impl Default for ScriptProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptProgress {
    /// Create a progress bar drawn to stderr
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new(0).with_style(SCRIPT_STYLE.clone()),
        }
    }

    /// Create a progress tracker that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reset the bar for a script of `commands` commands
    pub fn start(&mut self, commands: usize) {
        self.bar.set_length(commands as u64);
        self.bar.set_position(0);
    }

    /// Record one command as started
    pub fn advance(&mut self, command: &str) {
        self.bar.set_message(command.to_string());
        self.bar.inc(1);
    }

    /// Number of commands recorded so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar, leaving the final state on screen
    pub fn finish(&mut self) {
        self.bar.finish();
    }
}
