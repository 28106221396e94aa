//! Floyd-Steinberg error diffusion to pure black and white
//!
//! The image is reduced to greyscale first, then quantized in raster order.
//! Each pixel's quantization error is pushed onto its unvisited neighbors:
//! - East:       7/16
//! - Southwest:  3/16
//! - South:      5/16
//! - Southeast:  1/16
//!
//! Later pixels read the already-adjusted values, so rows cannot be processed
//! independently.

use ndarray::Array2;
use tracing::debug;

use crate::io::configuration::DITHER_THRESHOLD;
use crate::math::rounding::{clamp_channel, diffusion_share};
use crate::pixel::PixelBuffer;
use crate::transform::linear::{ColorMatrix, transform};

/// Neighbor offsets `(row, col)` and their sixteenths of the error
const DIFFUSION: [(usize, isize, i32); 4] = [(0, 1, 7), (1, -1, 3), (1, 0, 5), (1, 1, 1)];

/// Dither `source` to a black-and-white buffer
pub fn dither(source: &PixelBuffer) -> PixelBuffer {
    let (width, height) = (source.width(), source.height());
    debug!(width, height, "Applying Floyd-Steinberg dithering");

    let grey = transform(source, &ColorMatrix::GREYSCALE);

    // Working values may leave [0, 255] while error accumulates
    let mut levels: Array2<i32> = Array2::from_shape_fn((height, width), |(row, col)| {
        grey.pixel(row, col).map_or(0, |rgb| i32::from(rgb[0]))
    });

    for row in 0..height {
        for col in 0..width {
            let Some(level) = levels.get_mut((row, col)) else {
                continue;
            };
            let old_level = *level;
            let new_level = quantize(old_level);
            *level = new_level;
            diffuse(&mut levels, row, col, old_level - new_level);
        }
    }

    PixelBuffer::fill_with(width, height, |row, col| {
        let value = levels.get((row, col)).copied().map_or(0, clamp_channel);
        [value; 3]
    })
}

const fn quantize(level: i32) -> i32 {
    if level < DITHER_THRESHOLD { 0 } else { 255 }
}

// Contributions landing outside the image are dropped
fn diffuse(levels: &mut Array2<i32>, row: usize, col: usize, error: i32) {
    for (d_row, d_col, numerator) in DIFFUSION {
        let Some(target_col) = col.checked_add_signed(d_col) else {
            continue;
        };
        if let Some(level) = levels.get_mut((row + d_row, target_col)) {
            *level += diffusion_share(error, numerator);
        }
    }
}
