//! Pixel-level image editing engine
//!
//! Deterministic operators (convolution filters, linear color transforms,
//! Floyd-Steinberg dithering, seed-based mosaic), synthetic pattern generators,
//! and a linear undo/redo history that owns every image version.

#![forbid(unsafe_code)]

/// Synthetic pattern generators (checkerboard, flags, rainbows)
pub mod generate;
/// Edit history with undo and redo
pub mod history;
/// Input/output operations and error handling
pub mod io;
/// Channel arithmetic and random sampling
pub mod math;
/// Pixel buffer, colors and coordinates
pub mod pixel;
/// Image-to-image operators
pub mod transform;

pub use history::{EditHistory, Operation};
pub use io::error::{EditorError, Result, StateViolation};
pub use math::random::{RandomSource, SeededRandom};
pub use pixel::{Color, PixelBuffer, Point, Rgb};
