//! Tests for the checkerboard generator

#[cfg(test)]
mod tests {
    use pixedit::generate::checkerboard;
    use pixedit::io::configuration::MAX_DIMENSION;
    use pixedit::pixel::Color;

    // Tests the board is eight tiles on a side
    // Verified by using seven tiles
    #[test]
    fn test_board_dimensions() {
        let Ok(board) = checkerboard(3) else {
            unreachable!("size 3 should be valid");
        };

        assert_eq!((board.width(), board.height()), (24, 24));
    }

    // Tests the top-left tile is black and tiles alternate
    // Verified by starting with a white tile
    #[test]
    fn test_single_pixel_tiles_alternate() {
        let Ok(board) = checkerboard(1) else {
            unreachable!("size 1 should be valid");
        };
        let black = Some(Color::Black.rgb());
        let white = Some(Color::White.rgb());

        assert_eq!(board.pixel(0, 0), black);
        assert_eq!(board.pixel(0, 1), white);
        assert_eq!(board.pixel(1, 0), white);
        assert_eq!(board.pixel(1, 1), black);
        assert_eq!(board.pixel(7, 7), black);
    }

    // Tests tiles span `size` pixels in both directions
    // Verified by dividing the column by size + 1
    #[test]
    fn test_tiles_span_size() {
        let Ok(board) = checkerboard(4) else {
            unreachable!("size 4 should be valid");
        };

        assert_eq!(board.pixel(3, 3), Some(Color::Black.rgb()));
        assert_eq!(board.pixel(3, 4), Some(Color::White.rgb()));
        assert_eq!(board.pixel(4, 3), Some(Color::White.rgb()));
        assert_eq!(board.pixel(4, 4), Some(Color::Black.rgb()));
        assert!(
            board
                .pixels()
                .all(|rgb| rgb == Color::Black.rgb() || rgb == Color::White.rgb())
        );
    }

    // Tests zero and oversized tiles are rejected
    // Verified by removing the minimum size check
    #[test]
    fn test_invalid_sizes() {
        assert!(checkerboard(0).is_err_and(|e| e.is_invalid_argument()));
        assert!(checkerboard(MAX_DIMENSION).is_err_and(|e| e.is_invalid_argument()));
        assert!(checkerboard(usize::MAX).is_err_and(|e| e.is_invalid_argument()));
    }
}
