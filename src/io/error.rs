//! Error types for editing operations, history transitions and file handling

use std::fmt;
use std::path::PathBuf;

/// History precondition that an operation found violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateViolation {
    /// An operator, `current` or a save was requested with no image loaded
    NoImageLoaded,
    /// `undo` was requested with an empty undo stack
    NothingToUndo,
    /// `redo` was requested with an empty redo stack
    NothingToRedo,
}

impl fmt::Display for StateViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NoImageLoaded => "no image loaded",
            Self::NothingToUndo => "nothing to undo",
            Self::NothingToRedo => "nothing to redo",
        };
        f.write_str(message)
    }
}

/// Main error type for all editor operations
#[derive(Debug)]
pub enum EditorError {
    /// Size, seed count or kernel parameter outside its valid range
    InvalidArgument {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operation not permitted in the current history state
    InvalidState {
        /// Which precondition failed
        violation: StateViolation,
    },

    /// Failed to decode an image file into a pixel buffer
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Failed to encode a pixel buffer to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Malformed batch script command
    Script {
        /// 1-based line number of the offending command
        line: usize,
        /// What is wrong with the command
        reason: String,
    },
}

impl EditorError {
    /// Whether this error reports an out-of-range argument
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether this error reports a history precondition failure
    pub const fn is_state_error(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// The violated history precondition, if this is a state error
    pub const fn state_violation(&self) -> Option<StateViolation> {
        match self {
            Self::InvalidState { violation } => Some(*violation),
            _ => None,
        }
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidState { violation } => {
                write!(f, "Invalid editor state: {violation}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Script { line, reason } => {
                write!(f, "Script error on line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<StateViolation> for EditorError {
    fn from(violation: StateViolation) -> Self {
        Self::InvalidState { violation }
    }
}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for editor results
pub type Result<T> = std::result::Result<T, EditorError>;

/// Create an invalid argument error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EditorError {
    EditorError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a script error for the given 1-based line
pub fn script_error(line: usize, reason: &impl ToString) -> EditorError {
    EditorError::Script {
        line,
        reason: reason.to_string(),
    }
}
