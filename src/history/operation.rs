//! Every edit the history manager can record, as a plain value

use std::fmt;

use crate::generate;
use crate::io::error::{Result, StateViolation};
use crate::math::random::RandomSource;
use crate::pixel::PixelBuffer;
use crate::transform::{self, ColorMatrix, Kernel};

/// One image edit: a transformation of the current image or a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// 3x3 blur convolution
    Blur,
    /// 5x5 sharpen convolution
    Sharpen,
    /// Luma greyscale color transform
    Greyscale,
    /// Sepia color transform
    Sepia,
    /// Floyd-Steinberg black and white dither
    Dither,
    /// Nearest-seed mosaic with the given number of seeds
    Mosaic {
        /// Number of distinct seed pixels
        seeds: usize,
    },
    /// Checkerboard with `size` pixel tiles
    Checkerboard {
        /// Tile side in pixels
        size: usize,
    },
    /// French flag about `size` pixels wide
    FrenchFlag {
        /// Requested width in pixels
        size: usize,
    },
    /// Greek flag about `size` pixels wide
    GreekFlag {
        /// Requested width in pixels
        size: usize,
    },
    /// Swiss flag about `size` pixels on a side
    SwissFlag {
        /// Requested side in pixels
        size: usize,
    },
    /// Rainbow with horizontal bands
    HorizontalRainbow {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },
    /// Rainbow with vertical bands
    VerticalRainbow {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },
}

impl Operation {
    /// Short command-style name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Sharpen => "sharpen",
            Self::Greyscale => "greyscale",
            Self::Sepia => "sepia",
            Self::Dither => "dither",
            Self::Mosaic { .. } => "mosaic",
            Self::Checkerboard { .. } => "checkers",
            Self::FrenchFlag { .. } => "frenchFlag",
            Self::GreekFlag { .. } => "greekFlag",
            Self::SwissFlag { .. } => "swissFlag",
            Self::HorizontalRainbow { .. } => "horizontalRainbow",
            Self::VerticalRainbow { .. } => "verticalRainbow",
        }
    }

    /// Whether the operation creates an image rather than editing one
    pub const fn is_generator(&self) -> bool {
        matches!(
            self,
            Self::Checkerboard { .. }
                | Self::FrenchFlag { .. }
                | Self::GreekFlag { .. }
                | Self::SwissFlag { .. }
                | Self::HorizontalRainbow { .. }
                | Self::VerticalRainbow { .. }
        )
    }

    /// Produce the buffer this operation yields from `current`
    ///
    /// Generators ignore `current`; transformations require it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if a transformation runs with no current image,
    /// or `InvalidArgument` if a size or seed count is out of range
    pub fn render(
        &self,
        current: Option<&PixelBuffer>,
        random: &mut dyn RandomSource,
    ) -> Result<PixelBuffer> {
        match *self {
            Self::Checkerboard { size } => generate::checkerboard(size),
            Self::FrenchFlag { size } => generate::french_flag(size),
            Self::GreekFlag { size } => generate::greek_flag(size),
            Self::SwissFlag { size } => generate::swiss_flag(size),
            Self::HorizontalRainbow { width, height } => {
                generate::horizontal_rainbow(width, height)
            }
            Self::VerticalRainbow { width, height } => generate::vertical_rainbow(width, height),
            Self::Blur => Ok(transform::convolve(require(current)?, &Kernel::blur())),
            Self::Sharpen => Ok(transform::convolve(require(current)?, &Kernel::sharpen())),
            Self::Greyscale => Ok(transform::transform(
                require(current)?,
                &ColorMatrix::GREYSCALE,
            )),
            Self::Sepia => Ok(transform::transform(require(current)?, &ColorMatrix::SEPIA)),
            Self::Dither => Ok(transform::dither(require(current)?)),
            Self::Mosaic { seeds } => transform::mosaic(require(current)?, seeds, random),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mosaic { seeds } => write!(f, "{} {seeds}", self.name()),
            Self::Checkerboard { size }
            | Self::FrenchFlag { size }
            | Self::GreekFlag { size }
            | Self::SwissFlag { size } => write!(f, "{} {size}", self.name()),
            Self::HorizontalRainbow { width, height } | Self::VerticalRainbow { width, height } => {
                write!(f, "{} {width} {height}", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

fn require(current: Option<&PixelBuffer>) -> Result<&PixelBuffer> {
    current.ok_or_else(|| StateViolation::NoImageLoaded.into())
}
