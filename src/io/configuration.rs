//! Editor constants and runtime configuration defaults

/// Number of color channels per pixel
pub const CHANNELS: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed width or height of any buffer
pub const MAX_DIMENSION: usize = 16_384;

/// Grey values below this quantize to black when dithering
pub const DITHER_THRESHOLD: i32 = 128;

/// Number of tiles along each side of a checkerboard
pub const CHECKERBOARD_TILES: usize = 8;

/// Smallest accepted checkerboard tile size
pub const MIN_CHECKERBOARD_SIZE: usize = 1;
/// Smallest accepted French flag width
pub const MIN_FRENCH_FLAG_SIZE: usize = 3;
/// Smallest accepted Greek flag width
pub const MIN_GREEK_FLAG_SIZE: usize = 27;
/// Smallest accepted Swiss flag side
pub const MIN_SWISS_FLAG_SIZE: usize = 32;

/// Smallest accepted size along the axis a rainbow's bands stack on
pub const MIN_RAINBOW_PRIMARY: usize = 16;
/// Smallest accepted size across a rainbow's bands
pub const MIN_RAINBOW_SECONDARY: usize = 1;

// Default values for configurable parameters
/// Fixed seed for reproducible mosaics
pub const DEFAULT_SEED: u64 = 42;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
