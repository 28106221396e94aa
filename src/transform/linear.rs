//! Per-pixel linear channel mixing

use tracing::debug;

use crate::math::rounding::quantize_channel;
use crate::pixel::{PixelBuffer, Rgb};

/// 3x3 matrix mapping input channels to output channels
///
/// Row `k` holds the weights of output channel `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [[f64; 3]; 3]);

impl ColorMatrix {
    /// Rec. 709 luma in every channel
    pub const GREYSCALE: Self = Self([
        [0.2126, 0.7152, 0.0722],
        [0.2126, 0.7152, 0.0722],
        [0.2126, 0.7152, 0.0722],
    ]);

    /// Standard sepia tone
    pub const SEPIA: Self = Self([
        [0.393, 0.769, 0.189],
        [0.349, 0.686, 0.168],
        [0.272, 0.534, 0.131],
    ]);

    /// The identity transform
    pub const IDENTITY: Self = Self([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Mix one pixel's channels
    pub fn apply(&self, rgb: Rgb) -> Rgb {
        self.0.map(|weights| {
            let sum: f64 = weights
                .iter()
                .zip(rgb)
                .map(|(weight, value)| weight * f64::from(value))
                .sum();
            quantize_channel(sum)
        })
    }
}

/// Apply `matrix` to every pixel of `source`
pub fn transform(source: &PixelBuffer, matrix: &ColorMatrix) -> PixelBuffer {
    let (width, height) = (source.width(), source.height());
    debug!(width, height, "Applying color transform");
    PixelBuffer::fill_with(width, height, |row, col| {
        source
            .pixel(row, col)
            .map_or([0; 3], |rgb| matrix.apply(rgb))
    })
}
