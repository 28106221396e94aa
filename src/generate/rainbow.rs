//! Seven-band ROYGBIV rainbows

use tracing::debug;

use crate::io::configuration::{MIN_RAINBOW_PRIMARY, MIN_RAINBOW_SECONDARY};
use crate::io::error::Result;
use crate::pixel::{Color, PixelBuffer, Rgb};

use super::require_minimum;

/// Generate horizontal bands stacked from top (red) to bottom (violet)
///
/// # Errors
///
/// Returns `InvalidArgument` if `height` is below 16, `width` is zero, or
/// either exceeds the maximum buffer dimension
pub fn horizontal_rainbow(width: usize, height: usize) -> Result<PixelBuffer> {
    require_minimum("height", height, MIN_RAINBOW_PRIMARY)?;
    require_minimum("width", width, MIN_RAINBOW_SECONDARY)?;
    let band = band_width(height);
    debug!(width, height, band, "Generating horizontal rainbow");
    PixelBuffer::from_fn(width, height, |row, _| band_color(row, band))
}

/// Generate vertical bands running from left (red) to right (violet)
///
/// # Errors
///
/// Returns `InvalidArgument` if `width` is below 16, `height` is zero, or
/// either exceeds the maximum buffer dimension
pub fn vertical_rainbow(width: usize, height: usize) -> Result<PixelBuffer> {
    require_minimum("width", width, MIN_RAINBOW_PRIMARY)?;
    require_minimum("height", height, MIN_RAINBOW_SECONDARY)?;
    let band = band_width(width);
    debug!(width, height, band, "Generating vertical rainbow");
    PixelBuffer::from_fn(width, height, |_, col| band_color(col, band))
}

/// Width of each band; the last band absorbs any shortfall
pub const fn band_width(extent: usize) -> usize {
    extent.div_ceil(Color::ROYGBIV.len())
}

/// Band index for a position along the rainbow's primary axis
pub fn band_index(position: usize, band: usize) -> usize {
    (position / band.max(1)).min(Color::ROYGBIV.len() - 1)
}

fn band_color(position: usize, band: usize) -> Rgb {
    Color::ROYGBIV
        .get(band_index(position, band))
        .copied()
        .unwrap_or(Color::Violet)
        .rgb()
}
