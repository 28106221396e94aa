//! Command-line interface for running batch edit scripts

use crate::history::EditHistory;
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::Result;
use crate::io::progress::ScriptProgress;
use crate::io::script::{RunOutcome, ScriptRunner, read_script};
use crate::math::random::SeededRandom;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pixedit")]
#[command(author, version, about = "Run batch image editing scripts")]
/// Command-line arguments for the script runner
pub struct Cli {
    /// Script file with one editing command per line
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Random seed for reproducible mosaics
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Keep at most this many undo steps (unbounded when omitted)
    #[arg(long, value_name = "STEPS")]
    pub history_limit: Option<usize>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the history the script will edit
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the history limit is zero
    pub fn history(&self) -> Result<EditHistory> {
        self.history_limit
            .map_or_else(|| Ok(EditHistory::new()), EditHistory::with_depth_limit)
    }

    /// Parse the script and execute it
    ///
    /// # Errors
    ///
    /// Returns an error if the script cannot be read or parsed, or if any
    /// command fails
    pub fn run(&self) -> Result<RunOutcome> {
        let script = read_script(&self.script)?;
        info!(
            script = %self.script.display(),
            commands = script.len(),
            seed = self.seed,
            "Running script"
        );

        let random = Box::new(SeededRandom::new(self.seed));
        let mut runner = ScriptRunner::new(self.history()?, random);
        if self.should_show_progress() {
            runner = runner.with_progress(ScriptProgress::new());
        }
        runner.run(&script)
    }
}
