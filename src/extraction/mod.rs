pub mod features;
pub mod geometry;
pub mod preprocessing;
pub mod regions;

use image::{DynamicImage, GrayImage};
use tracing::debug;

use crate::models::FeatureVector;

/// Extract the six handwriting-geometry features from a raw image.
///
/// Grayscale conversion, Otsu inverted binarization, connected-component
/// region extraction, then the feature computations. Deterministic, and
/// never fails on a decoded image: sparse pages yield the zero vector.
pub fn extract_features(image: &DynamicImage) -> FeatureVector {
    let gray = preprocessing::to_grayscale(image);
    let binary = preprocessing::binarize(&gray);
    features_from_binary(&binary)
}

/// Extract features from an already-binarized map (ink = nonzero).
pub fn features_from_binary(binary: &GrayImage) -> FeatureVector {
    let regions = regions::find_regions(binary);
    debug!(regions = regions.len(), "Connected ink regions found");
    features::compute_features(binary, &regions)
}
