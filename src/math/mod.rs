//! Numeric helpers for channel arithmetic and random sampling

/// Injectable random coordinate source
pub mod random;
/// Rounding and clamping of channel values
pub mod rounding;
