//! Batch script interpreter driving an edit history
//!
//! Scripts hold one command per line with whitespace-separated arguments:
//!
//! ```text
//! load photo.png
//! blur
//! mosaic 500
//! save out/photo-mosaic.png
//! ```
//!
//! The whole script is parsed before anything runs, so a malformed line
//! performs no edits. Blank lines and lines starting with `#` are skipped.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::history::{EditHistory, Operation};
use crate::io::error::{EditorError, Result, script_error};
use crate::io::image::{read_image, write_image};
use crate::io::progress::ScriptProgress;
use crate::math::random::RandomSource;

/// One script instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Decode a file and make it the active image
    Load(PathBuf),
    /// Encode the active image to a file
    Save(PathBuf),
    /// Apply an operator or generator
    Edit(Operation),
    /// Step back one edit
    Undo,
    /// Step forward one undone edit
    Redo,
    /// Stop executing the script
    Quit,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(path) => write!(f, "load {}", path.display()),
            Self::Save(path) => write!(f, "save {}", path.display()),
            Self::Edit(operation) => write!(f, "{operation}"),
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
            Self::Quit => f.write_str("quit"),
        }
    }
}

/// A parsed command with its 1-based source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    /// Line number in the script text
    pub line: usize,
    /// The parsed instruction
    pub command: Command,
}

/// How a script run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every command executed
    Completed,
    /// A `quit` command stopped execution
    Quit {
        /// Line of the `quit` command
        line: usize,
    },
}

/// Parse one line; blank lines and comments yield `None`
///
/// # Errors
///
/// Returns a script error for unknown commands, wrong argument counts, and
/// arguments that are not non-negative integers
pub fn parse_command(line: usize, text: &str) -> Result<Option<Command>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(None);
    };
    if name.starts_with('#') {
        return Ok(None);
    }

    let command = match name {
        "load" => Command::Load(PathBuf::from(single_arg(line, name, args)?)),
        "save" => Command::Save(PathBuf::from(single_arg(line, name, args)?)),
        "blur" => nullary(line, name, args, Command::Edit(Operation::Blur))?,
        "sharpen" => nullary(line, name, args, Command::Edit(Operation::Sharpen))?,
        "greyscale" => nullary(line, name, args, Command::Edit(Operation::Greyscale))?,
        "sepia" => nullary(line, name, args, Command::Edit(Operation::Sepia))?,
        "dither" => nullary(line, name, args, Command::Edit(Operation::Dither))?,
        "undo" => nullary(line, name, args, Command::Undo)?,
        "redo" => nullary(line, name, args, Command::Redo)?,
        "quit" => nullary(line, name, args, Command::Quit)?,
        "mosaic" => Command::Edit(Operation::Mosaic {
            seeds: integer_arg(line, single_arg(line, name, args)?)?,
        }),
        "checkers" => Command::Edit(Operation::Checkerboard {
            size: integer_arg(line, single_arg(line, name, args)?)?,
        }),
        "frenchFlag" => Command::Edit(Operation::FrenchFlag {
            size: integer_arg(line, single_arg(line, name, args)?)?,
        }),
        "greekFlag" => Command::Edit(Operation::GreekFlag {
            size: integer_arg(line, single_arg(line, name, args)?)?,
        }),
        "swissFlag" => Command::Edit(Operation::SwissFlag {
            size: integer_arg(line, single_arg(line, name, args)?)?,
        }),
        "horizontalRainbow" => {
            let (width, height) = dimension_args(line, name, args)?;
            Command::Edit(Operation::HorizontalRainbow { width, height })
        }
        "verticalRainbow" => {
            let (width, height) = dimension_args(line, name, args)?;
            Command::Edit(Operation::VerticalRainbow { width, height })
        }
        _ => return Err(script_error(line, &format!("unknown command '{name}'"))),
    };
    Ok(Some(command))
}

/// Parse a whole script
///
/// # Errors
///
/// Returns the first script error encountered
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut script = Vec::new();
    for (index, text_line) in text.lines().enumerate() {
        let line = index + 1;
        if let Some(command) = parse_command(line, text_line)? {
            script.push(ScriptLine { line, command });
        }
    }
    Ok(script)
}

/// Read and parse a script file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to parse
pub fn read_script<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptLine>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| EditorError::FileSystem {
        path: path.to_path_buf(),
        operation: "read script",
        source: e,
    })?;
    parse_script(&text)
}

/// Executes parsed scripts against an owned edit history
pub struct ScriptRunner {
    history: EditHistory,
    random: Box<dyn RandomSource>,
    progress: Option<ScriptProgress>,
}

impl ScriptRunner {
    /// Create a runner without progress display
    pub fn new(history: EditHistory, random: Box<dyn RandomSource>) -> Self {
        Self {
            history,
            random,
            progress: None,
        }
    }

    /// Report executed commands through `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: ScriptProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// The history the runner edits
    pub const fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Execute `script` in order, stopping at `quit` or the first failure
    ///
    /// The history is reset when the run ends, however it ends.
    ///
    /// # Errors
    ///
    /// Returns the error of the first command that fails
    pub fn run(&mut self, script: &[ScriptLine]) -> Result<RunOutcome> {
        if let Some(progress) = &mut self.progress {
            progress.start(script.len());
        }

        let outcome = self.run_commands(script);
        self.history.reset();

        if let Some(progress) = &mut self.progress {
            progress.finish();
        }
        if let Err(error) = &outcome {
            warn!(%error, "Script run failed");
        }
        outcome
    }

    fn run_commands(&mut self, script: &[ScriptLine]) -> Result<RunOutcome> {
        for ScriptLine { line, command } in script {
            info!(line, %command, "Executing");
            if let Some(progress) = &mut self.progress {
                progress.advance(&command.to_string());
            }
            if *command == Command::Quit {
                return Ok(RunOutcome::Quit { line: *line });
            }
            self.execute(command)?;
        }
        Ok(RunOutcome::Completed)
    }

    fn execute(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Load(path) => {
                let buffer = read_image(path)?;
                self.history.load(buffer);
                Ok(())
            }
            Command::Save(path) => write_image(self.history.current()?, path),
            Command::Edit(operation) => self.history.apply(operation, self.random.as_mut()),
            Command::Undo => self.history.undo(),
            Command::Redo => self.history.redo(),
            Command::Quit => Ok(()),
        }
    }
}

fn nullary(line: usize, name: &str, args: &[&str], command: Command) -> Result<Command> {
    expect_arity(line, name, args, 0)?;
    Ok(command)
}

fn single_arg<'a>(line: usize, name: &str, args: &[&'a str]) -> Result<&'a str> {
    expect_arity(line, name, args, 1)?;
    args.first()
        .copied()
        .ok_or_else(|| script_error(line, &format!("'{name}' expects an argument")))
}

fn dimension_args(line: usize, name: &str, args: &[&str]) -> Result<(usize, usize)> {
    expect_arity(line, name, args, 2)?;
    match args {
        [width, height] => Ok((integer_arg(line, width)?, integer_arg(line, height)?)),
        _ => Err(script_error(line, &format!("'{name}' expects width and height"))),
    }
}

fn expect_arity(line: usize, name: &str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() == expected {
        return Ok(());
    }
    Err(script_error(
        line,
        &format!(
            "'{name}' expects {expected} argument(s), found {}",
            args.len()
        ),
    ))
}

fn integer_arg(line: usize, token: &str) -> Result<usize> {
    token.parse().map_err(|error| {
        script_error(
            line,
            &format!("'{token}' is not a non-negative integer: {error}"),
        )
    })
}
