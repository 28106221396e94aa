//! Tests for horizontal and vertical rainbow generators

#[cfg(test)]
mod tests {
    use pixedit::generate::rainbow::{band_index, band_width};
    use pixedit::generate::{horizontal_rainbow, vertical_rainbow};
    use pixedit::pixel::Color;

    // Tests band widths round up so seven bands cover the extent
    // Verified by using floor division
    #[test]
    fn test_band_width() {
        assert_eq!(band_width(14), 2);
        assert_eq!(band_width(16), 3);
        assert_eq!(band_width(21), 3);
        assert_eq!(band_width(22), 4);
    }

    // Tests trailing positions clamp to the last band
    // Verified by removing the clamp to six
    #[test]
    fn test_band_index_clamps() {
        assert_eq!(band_index(0, 3), 0);
        assert_eq!(band_index(15, 3), 5);
        assert_eq!(band_index(20, 3), 6);
        assert_eq!(band_index(99, 3), 6);
    }

    // Tests horizontal bands run red to violet from the top
    // Verified by indexing bands by column
    #[test]
    fn test_horizontal_bands() {
        let Ok(rainbow) = horizontal_rainbow(5, 16) else {
            unreachable!("5x16 should be valid");
        };

        assert_eq!((rainbow.width(), rainbow.height()), (5, 16));
        assert_eq!(rainbow.pixel(0, 4), Some(Color::Red.rgb()));
        assert_eq!(rainbow.pixel(3, 0), Some(Color::Orange.rgb()));
        assert_eq!(rainbow.pixel(15, 2), Some(Color::Indigo.rgb()));
    }

    // Tests a height divisible by seven ends with a full violet band
    // Verified by using six bands
    #[test]
    fn test_horizontal_full_violet_band() {
        let Ok(rainbow) = horizontal_rainbow(2, 21) else {
            unreachable!("2x21 should be valid");
        };

        assert_eq!(rainbow.pixel(0, 0), Some(Color::Red.rgb()));
        assert_eq!(rainbow.pixel(18, 1), Some(Color::Violet.rgb()));
        assert_eq!(rainbow.pixel(20, 1), Some(Color::Violet.rgb()));
    }

    // Tests vertical bands run red to violet from the left
    // Verified by indexing bands by row
    #[test]
    fn test_vertical_bands() {
        let Ok(rainbow) = vertical_rainbow(21, 3) else {
            unreachable!("21x3 should be valid");
        };

        for (band, color) in Color::ROYGBIV.into_iter().enumerate() {
            assert_eq!(rainbow.pixel(2, band * 3), Some(color.rgb()));
            assert_eq!(rainbow.pixel(0, band * 3 + 2), Some(color.rgb()));
        }
    }

    // Tests minimum extents on each axis
    // Verified by checking the primary axis only
    #[test]
    fn test_minimum_extents() {
        assert!(horizontal_rainbow(1, 15).is_err_and(|e| e.is_invalid_argument()));
        assert!(horizontal_rainbow(0, 16).is_err_and(|e| e.is_invalid_argument()));
        assert!(vertical_rainbow(15, 1).is_err_and(|e| e.is_invalid_argument()));
        assert!(vertical_rainbow(16, 0).is_err_and(|e| e.is_invalid_argument()));
        assert!(vertical_rainbow(16, 1).is_ok());
    }
}
