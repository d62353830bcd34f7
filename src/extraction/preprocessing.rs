use image::{DynamicImage, GrayImage};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use tracing::debug;

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Binarize a grayscale image so ink becomes foreground.
///
/// The threshold is chosen by Otsu's method and applied inverted: pixels
/// at or below the threshold (ink) become 255, lighter pixels become 0.
/// Uniform images produce a valid, possibly all-background map.
pub fn binarize(gray: &GrayImage) -> GrayImage {
    let level = otsu_level(gray);
    debug!(level, "Otsu threshold selected");
    threshold(gray, level, ThresholdType::BinaryInverted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn binarize_marks_dark_ink_as_foreground() {
        // White page with a dark 4x4 block.
        let mut gray = GrayImage::from_pixel(16, 16, Luma([255u8]));
        for y in 4..8 {
            for x in 4..8 {
                gray.put_pixel(x, y, Luma([20u8]));
            }
        }

        let binary = binarize(&gray);
        assert_eq!(binary.get_pixel(5, 5)[0], 255, "ink must be foreground");
        assert_eq!(binary.get_pixel(0, 0)[0], 0, "paper must be background");
    }

    #[test]
    fn binarize_uniform_image_does_not_panic() {
        let gray = GrayImage::from_pixel(8, 8, Luma([128u8]));
        let binary = binarize(&gray);
        assert_eq!(binary.dimensions(), (8, 8));
    }
}
