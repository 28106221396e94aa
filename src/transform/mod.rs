//! Image-to-image operators
//!
//! Every operator reads a [`PixelBuffer`](crate::pixel::PixelBuffer) and
//! returns a new one of the same dimensions. Named operators are constant
//! configurations of the two generic engines.

/// Kernel convolution (blur, sharpen)
pub mod convolution;
/// Floyd-Steinberg dithering
pub mod dither;
/// Linear channel mixing (greyscale, sepia)
pub mod linear;
/// Nearest-seed color quantization
pub mod mosaic;

pub use convolution::{Kernel, convolve};
pub use dither::dither;
pub use linear::{ColorMatrix, transform};
pub use mosaic::mosaic;
