//! Rectangular RGB pixel grid shared by every operator and generator
//!
//! A [`PixelBuffer`] is a value: operators read one and allocate a new one
//! for their result. Channels are stored as `u8` in an `(height, width, 3)`
//! array, so every write from a wider value goes through the channel clamp.

use ndarray::{Array3, Axis};

use crate::io::configuration::{CHANNELS, MAX_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::math::rounding::clamp_channel;
use crate::pixel::color::Color;

/// Red, green and blue channel values of one pixel
pub type Rgb = [u8; 3];

/// Immutable-per-version rectangular grid of RGB pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Array3<u8>,
}

impl PixelBuffer {
    /// Create an all-black buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero or exceeds
    /// [`MAX_DIMENSION`]
    pub fn new(width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            pixels: Array3::zeros((height, width, CHANNELS)),
        })
    }

    /// Create a buffer filled with a single color
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero or exceeds
    /// [`MAX_DIMENSION`]
    pub fn filled(width: usize, height: usize, color: Color) -> Result<Self> {
        Self::from_fn(width, height, |_, _| color.rgb())
    }

    /// Create a buffer by evaluating `fill` at every `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero or exceeds
    /// [`MAX_DIMENSION`]
    pub fn from_fn<F>(width: usize, height: usize, fill: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Rgb,
    {
        validate_dimensions(width, height)?;
        Ok(Self::fill_with(width, height, fill))
    }

    /// Ingest a nested `[row][col][r, g, b]` integer buffer
    ///
    /// Channel values outside `[0, 255]` are clamped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the buffer is empty or its rows differ
    /// in length
    pub fn from_rows(rows: &[Vec<[i32; 3]>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        validate_dimensions(width, height)?;

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(invalid_parameter(
                "rows",
                &format!("row {index} has {} columns", row.len()),
                &format!("every row must have exactly {width} columns"),
            ));
        }

        Ok(Self::fill_with(width, height, |row, col| {
            rows.get(row)
                .and_then(|line| line.get(col))
                .map_or([0; 3], |channels| channels.map(clamp_channel))
        }))
    }

    /// Wrap an existing `(height, width, 3)` channel array
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the array does not have exactly three
    /// channels or has an empty or oversized spatial axis
    pub fn from_array(pixels: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = pixels.dim();
        if channels != CHANNELS {
            return Err(invalid_parameter(
                "channels",
                &channels,
                &"pixel arrays must have exactly 3 channels",
            ));
        }
        validate_dimensions(width, height)?;
        Ok(Self { pixels })
    }

    /// Construct from dimensions already known to be valid
    pub(crate) fn fill_with<F>(width: usize, height: usize, mut fill: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgb,
    {
        let mut pixels = Array3::zeros((height, width, CHANNELS));
        for (row, mut line) in pixels.outer_iter_mut().enumerate() {
            for (col, mut pixel) in line.outer_iter_mut().enumerate() {
                for (slot, value) in pixel.iter_mut().zip(fill(row, col)) {
                    *slot = value;
                }
            }
        }
        Self { pixels }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.pixels.len_of(Axis(1))
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.pixels.len_of(Axis(0))
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Channel values at `(row, col)`, or `None` outside the image
    pub fn pixel(&self, row: usize, col: usize) -> Option<Rgb> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        let mut rgb = [0; CHANNELS];
        for (channel, slot) in rgb.iter_mut().enumerate() {
            *slot = self.pixels.get((row, col, channel)).copied()?;
        }
        Some(rgb)
    }

    /// Paint the rectangle at `(top, left)` spanning `height` x `width`
    ///
    /// The rectangle is clipped to the image bounds.
    pub fn fill_region(
        &mut self,
        top: usize,
        left: usize,
        height: usize,
        width: usize,
        color: Color,
    ) {
        let rgb = color.rgb();
        let bottom = top.saturating_add(height).min(self.height());
        let right = left.saturating_add(width).min(self.width());
        for row in top..bottom {
            for col in left..right {
                for (channel, &value) in rgb.iter().enumerate() {
                    if let Some(slot) = self.pixels.get_mut((row, col, channel)) {
                        *slot = value;
                    }
                }
            }
        }
    }

    /// Row-major iterator over every pixel
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.pixels.lanes(Axis(2)).into_iter().map(|lane| {
            let mut rgb = [0; CHANNELS];
            for (slot, &value) in rgb.iter_mut().zip(lane.iter()) {
                *slot = value;
            }
            rgb
        })
    }

    /// Borrow the underlying `(height, width, 3)` array
    pub const fn as_array(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Copy out as a nested `[row][col]` vector
    pub fn to_rows(&self) -> Vec<Vec<Rgb>> {
        let width = self.width();
        let mut rows = Vec::with_capacity(self.height());
        let mut line = Vec::with_capacity(width);
        for rgb in self.pixels() {
            line.push(rgb);
            if line.len() == width {
                rows.push(std::mem::replace(&mut line, Vec::with_capacity(width)));
            }
        }
        rows
    }
}

/// Check buffer dimensions against the accepted range
///
/// # Errors
///
/// Returns `InvalidArgument` naming the first offending dimension
pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    for (parameter, value) in [("width", width), ("height", height)] {
        if value == 0 {
            return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
        }
        if value > MAX_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must not exceed {MAX_DIMENSION}"),
            ));
        }
    }
    Ok(())
}
