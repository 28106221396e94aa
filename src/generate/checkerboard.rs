//! Black and white checkerboard

use tracing::debug;

use crate::io::configuration::{CHECKERBOARD_TILES, MIN_CHECKERBOARD_SIZE};
use crate::io::error::Result;
use crate::pixel::{Color, PixelBuffer};

use super::{require_minimum, scaled_side};

/// Generate an 8x8 board of `size` x `size` tiles, black at the top-left
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is zero or the board would exceed the
/// maximum buffer dimension
pub fn checkerboard(size: usize) -> Result<PixelBuffer> {
    require_minimum("size", size, MIN_CHECKERBOARD_SIZE)?;
    let side = scaled_side("size", size, CHECKERBOARD_TILES)?;
    debug!(size, side, "Generating checkerboard");

    PixelBuffer::from_fn(side, side, |row, col| {
        if (row / size + col / size) % 2 == 0 {
            Color::Black.rgb()
        } else {
            Color::White.rgb()
        }
    })
}
