//! Synthetic pattern generators
//!
//! Generators build a buffer from nothing; they depend only on their size
//! arguments. Sizes below a pattern's minimum are rejected before anything is
//! allocated.

/// Checkerboard pattern
pub mod checkerboard;
/// French, Greek and Swiss flags
pub mod flags;
/// Horizontal and vertical rainbows
pub mod rainbow;

pub use checkerboard::checkerboard;
pub use flags::{french_flag, greek_flag, swiss_flag};
pub use rainbow::{horizontal_rainbow, vertical_rainbow};

use crate::io::configuration::MAX_DIMENSION;
use crate::io::error::{Result, invalid_parameter};

/// Reject sizes below a generator's minimum
fn require_minimum(parameter: &'static str, value: usize, minimum: usize) -> Result<()> {
    if value < minimum {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be at least {minimum}"),
        ));
    }
    Ok(())
}

/// Pixel length of `units` design units at `scale` pixels per unit
fn scaled_side(parameter: &'static str, scale: usize, units: usize) -> Result<usize> {
    scale
        .checked_mul(units)
        .filter(|&side| side <= MAX_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                parameter,
                &format!("{units} x {scale}"),
                &format!("generated side must not exceed {MAX_DIMENSION} pixels"),
            )
        })
}
