pub mod convolution;
pub mod dither;
