//! Kernel convolution over RGB buffers
//!
//! The kernel center sits on the target pixel. Kernel cells that land outside
//! the image are skipped without renormalizing the remaining weights, so
//! kernels that do not sum to one darken or brighten the border.

use ndarray::{Array2, arr2};
use tracing::debug;

use crate::io::error::{Result, invalid_parameter};
use crate::math::rounding::quantize_channel;
use crate::pixel::PixelBuffer;

const BLUR_WEIGHTS: [[f64; 3]; 3] = [
    [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
    [1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0],
    [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
];

const SHARPEN_WEIGHTS: [[f64; 5]; 5] = [
    [-0.125, -0.125, -0.125, -0.125, -0.125],
    [-0.125, 0.25, 0.25, 0.25, -0.125],
    [-0.125, 0.25, 1.0, 0.25, -0.125],
    [-0.125, 0.25, 0.25, 0.25, -0.125],
    [-0.125, -0.125, -0.125, -0.125, -0.125],
];

/// Square, odd-sized matrix of real weights
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Array2<f64>,
}

impl Kernel {
    /// Wrap a weight matrix
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the matrix is empty, not square, or has
    /// an even side length
    pub fn new(weights: Array2<f64>) -> Result<Self> {
        let (rows, cols) = weights.dim();
        if rows == 0 || rows != cols {
            return Err(invalid_parameter(
                "kernel",
                &format!("{rows}x{cols}"),
                &"kernel must be a non-empty square matrix",
            ));
        }
        if rows % 2 == 0 {
            return Err(invalid_parameter(
                "kernel",
                &format!("{rows}x{cols}"),
                &"kernel side length must be odd",
            ));
        }
        Ok(Self { weights })
    }

    /// Normalized 3x3 Gaussian-like blur
    pub fn blur() -> Self {
        Self {
            weights: arr2(&BLUR_WEIGHTS),
        }
    }

    /// 5x5 sharpen: center 1, inner ring 1/4, outer ring -1/8
    pub fn sharpen() -> Self {
        Self {
            weights: arr2(&SHARPEN_WEIGHTS),
        }
    }

    /// Side length of the kernel
    pub fn size(&self) -> usize {
        self.weights.nrows()
    }

    /// Distance from the center cell to an edge
    pub fn radius(&self) -> usize {
        self.size() / 2
    }

    /// Borrow the weight matrix
    pub const fn weights(&self) -> &Array2<f64> {
        &self.weights
    }
}

/// Convolve every channel of `source` with `kernel`
///
/// Each output channel is the weighted sum of the in-bounds footprint,
/// rounded half-up and clamped to `[0, 255]`.
pub fn convolve(source: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    let (width, height) = (source.width(), source.height());
    debug!(width, height, kernel = kernel.size(), "Applying convolution");
    let radius = kernel.radius();

    PixelBuffer::fill_with(width, height, |row, col| {
        let mut sums = [0.0_f64; 3];
        for ((ki, kj), &weight) in kernel.weights().indexed_iter() {
            // Offsets are applied as `row + ki - radius` without going negative
            let Some(src_row) = (row + ki).checked_sub(radius) else {
                continue;
            };
            let Some(src_col) = (col + kj).checked_sub(radius) else {
                continue;
            };
            let Some(rgb) = source.pixel(src_row, src_col) else {
                continue;
            };
            for (sum, value) in sums.iter_mut().zip(rgb) {
                *sum += weight * f64::from(value);
            }
        }
        sums.map(quantize_channel)
    })
}
