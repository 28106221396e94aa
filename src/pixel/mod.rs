//! Pixel storage and the value types operators exchange
//!
//! This module contains:
//! - The rectangular RGB pixel buffer
//! - The fixed color palette
//! - Integer pixel coordinates

/// Rectangular RGB pixel buffer
pub mod buffer;
/// Named color lookup table
pub mod color;
/// Pixel coordinates and nearest-point search
pub mod point;

pub use buffer::{PixelBuffer, Rgb};
pub use color::Color;
pub use point::Point;
