//! File codec adapter between pixel buffers and image files

use std::path::Path;

use image::{Rgb as ImageRgb, RgbImage};
use tracing::debug;

use crate::io::error::{EditorError, Result, invalid_parameter};
use crate::pixel::PixelBuffer;

/// Decode an image file into a pixel buffer
///
/// Any format the `image` crate can read is accepted; alpha is discarded.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The decoded image has a zero or oversized dimension
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|e| EditorError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "Decoded image");
    from_rgb_image(&decoded.to_rgb8())
}

/// Encode a pixel buffer to disk, choosing the format from the extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The extension names no supported format or encoding fails
pub fn write_image<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| EditorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    to_rgb_image(buffer)
        .save(path)
        .map_err(|e| EditorError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!(path = %path.display(), "Encoded image");
    Ok(())
}

/// Convert a pixel buffer into an `image` RGB buffer
pub fn to_rgb_image(buffer: &PixelBuffer) -> RgbImage {
    let width = u32::try_from(buffer.width()).unwrap_or(u32::MAX);
    let height = u32::try_from(buffer.height()).unwrap_or(u32::MAX);
    RgbImage::from_fn(width, height, |x, y| {
        ImageRgb(buffer.pixel(y as usize, x as usize).unwrap_or([0; 3]))
    })
}

/// Convert an `image` RGB buffer into a pixel buffer
///
/// # Errors
///
/// Returns `InvalidArgument` if the image has a zero or oversized dimension
pub fn from_rgb_image(image: &RgbImage) -> Result<PixelBuffer> {
    let width = usize::try_from(image.width())
        .map_err(|error| invalid_parameter("width", &image.width(), &error))?;
    let height = usize::try_from(image.height())
        .map_err(|error| invalid_parameter("height", &image.height(), &error))?;
    PixelBuffer::from_fn(width, height, |row, col| {
        image.get_pixel(col as u32, row as u32).0
    })
}
