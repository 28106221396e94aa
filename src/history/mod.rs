//! Edit history: the single owner of every image version
//!
//! This module contains:
//! - The undo/redo state machine over the active image
//! - The operation values it records

/// Undo/redo history manager
pub mod editor;
/// Edit operations as plain values
pub mod operation;

pub use editor::EditHistory;
pub use operation::Operation;
