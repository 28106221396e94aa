//! Input/output collaborators, configuration and error handling

/// Command-line interface
pub mod cli;
/// Editor constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// File codec adapter
pub mod image;
/// Script progress display
pub mod progress;
/// Batch script interpreter
pub mod script;
