//! Tests for kernel validation and convolution at borders and interiors

#[cfg(test)]
mod tests {
    use ndarray::{Array2, arr2};
    use pixedit::pixel::PixelBuffer;
    use pixedit::transform::{Kernel, convolve};

    fn grey(width: usize, height: usize, value: u8) -> PixelBuffer {
        let Ok(buffer) = PixelBuffer::from_fn(width, height, |_, _| [value; 3]) else {
            unreachable!("test buffers are small and non-empty");
        };
        buffer
    }

    // Tests non-square, even and empty kernels are rejected
    // Verified by removing the odd side check
    #[test]
    fn test_kernel_shape_validation() {
        assert!(Kernel::new(Array2::zeros((2, 2))).is_err_and(|e| e.is_invalid_argument()));
        assert!(Kernel::new(Array2::zeros((3, 5))).is_err_and(|e| e.is_invalid_argument()));
        assert!(Kernel::new(Array2::zeros((0, 0))).is_err_and(|e| e.is_invalid_argument()));

        let Ok(kernel) = Kernel::new(Array2::zeros((7, 7))) else {
            unreachable!("7x7 kernel should be accepted");
        };
        assert_eq!(kernel.size(), 7);
        assert_eq!(kernel.radius(), 3);
    }

    // Tests the named kernels have their documented shapes and sums
    // Verified by changing a sharpen outer ring weight
    #[test]
    fn test_named_kernels() {
        let blur = Kernel::blur();
        let sharpen = Kernel::sharpen();

        assert_eq!(blur.size(), 3);
        assert_eq!(sharpen.size(), 5);
        assert!((blur.weights().sum() - 1.0).abs() < 1e-12);
        assert!((sharpen.weights().sum() - 1.0).abs() < 1e-12);
        assert_eq!(sharpen.weights().get((0, 0)), Some(&-0.125));
        assert_eq!(sharpen.weights().get((2, 2)), Some(&1.0));
    }

    // Tests blur leaves the interior of a flat image unchanged and darkens
    // borders without renormalizing
    // Verified by renormalizing over in-bounds weights
    #[test]
    fn test_blur_flat_image_borders() {
        let blurred = convolve(&grey(3, 3, 100), &Kernel::blur());

        assert_eq!(blurred.pixel(1, 1), Some([100; 3]));
        assert_eq!(blurred.pixel(0, 0), Some([56; 3]));
        assert_eq!(blurred.pixel(2, 2), Some([56; 3]));
        assert_eq!(blurred.pixel(0, 1), Some([75; 3]));
        assert_eq!(blurred.pixel(1, 2), Some([75; 3]));
    }

    // Tests sharpen rounds exact halves up at the corner
    // Verified by rounding halves to even
    #[test]
    fn test_sharpen_flat_image() {
        let sharpened = convolve(&grey(5, 5, 100), &Kernel::sharpen());

        assert_eq!(sharpened.pixel(2, 2), Some([100; 3]));
        assert_eq!(sharpened.pixel(0, 0), Some([113; 3]));
    }

    // Tests results are clamped into the channel range
    // Verified by wrapping instead of clamping
    #[test]
    fn test_convolution_clamps() {
        let Ok(boost) = Kernel::new(arr2(&[[0.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 0.0]]))
        else {
            unreachable!("3x3 kernel should be accepted");
        };
        let Ok(negate) = Kernel::new(arr2(&[[-1.0]])) else {
            unreachable!("1x1 kernel should be accepted");
        };
        let source = grey(2, 2, 200);

        assert_eq!(convolve(&source, &boost).pixel(1, 1), Some([255; 3]));
        assert_eq!(convolve(&source, &negate).pixel(0, 0), Some([0; 3]));
    }

    // Tests channels are convolved independently and the input is untouched
    // Verified by summing only the red channel
    #[test]
    fn test_channels_independent() {
        let Ok(source) = PixelBuffer::from_fn(3, 3, |_, _| [10, 20, 30]) else {
            unreachable!("3x3 buffer should be valid");
        };
        let before = source.clone();

        let blurred = convolve(&source, &Kernel::blur());

        assert_eq!(blurred.pixel(1, 1), Some([10, 20, 30]));
        assert_eq!(source, before);
        assert_eq!((blurred.width(), blurred.height()), (3, 3));
    }

    // Tests a single-pixel image only sees the kernel center
    // Verified by treating out-of-bounds cells as clamped edges
    #[test]
    fn test_single_pixel_image() {
        let blurred = convolve(&grey(1, 1, 200), &Kernel::blur());
        assert_eq!(blurred.pixel(0, 0), Some([50; 3]));
    }
}
