//! National flag layouts scaled to a requested width
//!
//! Each flag is drawn on an integer grid of design units; the requested size
//! is divided by the flag's unit width (rounding down) to get the pixel scale.

use tracing::debug;

use crate::io::configuration::{MIN_FRENCH_FLAG_SIZE, MIN_GREEK_FLAG_SIZE, MIN_SWISS_FLAG_SIZE};
use crate::io::error::Result;
use crate::pixel::{Color, PixelBuffer};

use super::{require_minimum, scaled_side};

// French tricolour: 3 x 2 units, one-unit vertical stripes
const FRENCH_WIDTH_UNITS: usize = 3;
const FRENCH_HEIGHT_UNITS: usize = 2;
const FRENCH_STRIPES: [Color; 3] = [Color::Blue, Color::White, Color::Red];

// Greek flag: 27 x 18 units, nine stripes of two units each
const GREEK_WIDTH_UNITS: usize = 27;
const GREEK_HEIGHT_UNITS: usize = 18;
const GREEK_STRIPE_UNITS: usize = 2;
const GREEK_CANTON_STRIPES: usize = 5;
const GREEK_CROSS_OFFSET_STRIPES: usize = 2;

// Swiss flag: 32 x 32 units, cross arms 6 units wide in a 6:7:6 layout
const SWISS_SIDE_UNITS: usize = 32;
const SWISS_SHORT_UNITS: usize = 6;
const SWISS_LONG_UNITS: usize = 7;

/// Generate the French flag: blue, white and red vertical stripes at 3:2
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is below 3 or the flag would exceed
/// the maximum buffer dimension
pub fn french_flag(size: usize) -> Result<PixelBuffer> {
    require_minimum("size", size, MIN_FRENCH_FLAG_SIZE)?;
    let scale = size / FRENCH_WIDTH_UNITS;
    let width = scaled_side("size", scale, FRENCH_WIDTH_UNITS)?;
    let height = scaled_side("size", scale, FRENCH_HEIGHT_UNITS)?;
    debug!(size, width, height, "Generating French flag");

    let mut flag = PixelBuffer::new(width, height)?;
    for (index, color) in FRENCH_STRIPES.into_iter().enumerate() {
        flag.fill_region(0, index * scale, height, scale, color);
    }
    Ok(flag)
}

/// Generate the Greek flag: nine blue and white stripes with a crossed canton
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is below 27 or the flag would exceed
/// the maximum buffer dimension
pub fn greek_flag(size: usize) -> Result<PixelBuffer> {
    require_minimum("size", size, MIN_GREEK_FLAG_SIZE)?;
    let scale = size / GREEK_WIDTH_UNITS;
    let width = scaled_side("size", scale, GREEK_WIDTH_UNITS)?;
    let height = scaled_side("size", scale, GREEK_HEIGHT_UNITS)?;
    let stripe = GREEK_STRIPE_UNITS * scale;
    debug!(size, width, height, stripe, "Generating Greek flag");

    let mut flag = PixelBuffer::from_fn(width, height, |row, _| {
        if (row / stripe) % 2 == 0 {
            Color::Blue.rgb()
        } else {
            Color::White.rgb()
        }
    })?;

    let canton = GREEK_CANTON_STRIPES * stripe;
    let cross = GREEK_CROSS_OFFSET_STRIPES * stripe;
    flag.fill_region(0, 0, canton, canton, Color::Blue);
    flag.fill_region(0, cross, canton, stripe, Color::White);
    flag.fill_region(cross, 0, stripe, canton, Color::White);
    Ok(flag)
}

/// Generate the Swiss flag: a centered white cross on a red square
///
/// # Errors
///
/// Returns `InvalidArgument` if `size` is below 32 or the flag would exceed
/// the maximum buffer dimension
pub fn swiss_flag(size: usize) -> Result<PixelBuffer> {
    require_minimum("size", size, MIN_SWISS_FLAG_SIZE)?;
    let scale = size / SWISS_SIDE_UNITS;
    let side = scaled_side("size", scale, SWISS_SIDE_UNITS)?;
    let short = SWISS_SHORT_UNITS * scale;
    let long = SWISS_LONG_UNITS * scale;
    debug!(size, side, "Generating Swiss flag");

    let mut flag = PixelBuffer::filled(side, side, Color::Red)?;
    let arm_span = 2 * long + short;
    flag.fill_region(short, short + long, arm_span, short, Color::White);
    flag.fill_region(short + long, short, short, arm_span, Color::White);
    Ok(flag)
}
