//! Tests for Floyd-Steinberg dithering

#[cfg(test)]
mod tests {
    use pixedit::pixel::{Color, PixelBuffer};
    use pixedit::transform::dither;

    const BLACK: [u8; 3] = [0, 0, 0];
    const WHITE: [u8; 3] = [255, 255, 255];

    fn grey(width: usize, height: usize, value: u8) -> PixelBuffer {
        let Ok(buffer) = PixelBuffer::from_fn(width, height, |_, _| [value; 3]) else {
            unreachable!("test buffers are small and non-empty");
        };
        buffer
    }

    // Tests the threshold sits at 128
    // Verified by using <= in the quantizer
    #[test]
    fn test_threshold() {
        assert_eq!(dither(&grey(1, 1, 127)).pixel(0, 0), Some(BLACK));
        assert_eq!(dither(&grey(1, 1, 128)).pixel(0, 0), Some(WHITE));
    }

    // Tests the eastward share carries a pixel over the threshold
    // Verified by dropping the east neighbor from the diffusion table
    #[test]
    fn test_error_diffuses_east() {
        let dithered = dither(&grey(2, 1, 100));

        assert_eq!(dithered.pixel(0, 0), Some(BLACK));
        assert_eq!(dithered.pixel(0, 1), Some(WHITE));
    }

    // Tests accumulated positive and negative errors across two rows
    // Verified by truncating shares towards zero
    #[test]
    fn test_two_by_two() {
        let dithered = dither(&grey(2, 2, 100));

        assert_eq!(dithered.pixel(0, 0), Some(BLACK));
        assert_eq!(dithered.pixel(0, 1), Some(WHITE));
        assert_eq!(dithered.pixel(1, 0), Some(BLACK));
        assert_eq!(dithered.pixel(1, 1), Some(BLACK));
    }

    // Tests every output pixel is pure black or white
    // Verified by writing the adjusted level instead of the quantized one
    #[test]
    fn test_output_is_binary() {
        let Ok(source) = PixelBuffer::from_fn(9, 7, |row, col| {
            [(row * 30) as u8, (col * 25) as u8, ((row + col) * 9) as u8]
        }) else {
            unreachable!("9x7 buffer should be valid");
        };

        let dithered = dither(&source);

        assert_eq!((dithered.width(), dithered.height()), (9, 7));
        assert!(dithered.pixels().all(|rgb| rgb == BLACK || rgb == WHITE));
    }

    // Tests color inputs are reduced to greyscale first
    // Verified by thresholding the red channel
    #[test]
    fn test_color_reduced_to_luma() {
        // Red has luma 54, blue has luma 18
        let Ok(red) = PixelBuffer::filled(1, 1, Color::Red) else {
            unreachable!("1x1 buffer should be valid");
        };
        let Ok(white) = PixelBuffer::filled(3, 3, Color::White) else {
            unreachable!("3x3 buffer should be valid");
        };

        assert_eq!(dither(&red).pixel(0, 0), Some(BLACK));
        assert!(dither(&white).pixels().all(|rgb| rgb == WHITE));
    }
}
