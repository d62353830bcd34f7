use dysgraph::{FeatureVector, LABEL_LPD, LABEL_PD};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb};

/// Binary map (ink = 255, background = 0) with the given ink blocks,
/// each as `(x, y, width, height)`.
pub fn binary_map(width: u32, height: u32, blocks: &[(u32, u32, u32, u32)]) -> GrayImage {
    let mut img = GrayImage::from_pixel(width, height, Luma([0u8]));
    for &(x, y, w, h) in blocks {
        for dy in 0..h {
            for dx in 0..w {
                img.put_pixel(x + dx, y + dy, Luma([255u8]));
            }
        }
    }
    img
}

/// White RGB page with dark ink blocks, simulating a scanned sample.
pub fn handwriting_page(
    width: u32,
    height: u32,
    blocks: &[(u32, u32, u32, u32)],
) -> DynamicImage {
    let mut img = ImageBuffer::from_pixel(width, height, Rgb([250u8, 250u8, 250u8]));
    for &(x, y, w, h) in blocks {
        for dy in 0..h {
            for dx in 0..w {
                img.put_pixel(x + dx, y + dy, Rgb([25u8, 25u8, 25u8]));
            }
        }
    }
    DynamicImage::ImageRgb8(img)
}

/// Uniform white page with no ink at all.
pub fn blank_page(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb([250u8, 250u8, 250u8])))
}

/// A balanced, cleanly separable training set: 10 LPD samples with tight
/// line spacing and 10 PD samples with wide line spacing.
pub fn separable_training_set() -> (Vec<FeatureVector>, Vec<u8>) {
    let mut features = Vec::new();
    let mut labels = Vec::new();

    for i in 0..10 {
        features.push(FeatureVector {
            line_spacing: 5.0 + i as f64 * 0.1,
            letter_size_variation: 0.2,
            writing_pressure: 255.0,
            letter_spacing: 3.0,
            slant_angle: 4.0,
            baseline_deviation: 1.5,
        });
        labels.push(LABEL_LPD);

        features.push(FeatureVector {
            line_spacing: 40.0 + i as f64 * 0.1,
            letter_size_variation: 0.2,
            writing_pressure: 255.0,
            letter_spacing: 3.0,
            slant_angle: 4.0,
            baseline_deviation: 1.5,
        });
        labels.push(LABEL_PD);
    }

    (features, labels)
}
