use imageproc::point::Point;
use serde::{Deserialize, Serialize};

/// Number of features extracted per handwriting sample.
pub const FEATURE_COUNT: usize = 6;

/// Feature names in the canonical column order used by the classifier.
///
/// Must stay in sync with the field order of [`FeatureVector`] and with
/// [`FeatureVector::to_array`].
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "line_spacing",
    "letter_size_variation",
    "writing_pressure",
    "letter_spacing",
    "slant_angle",
    "baseline_deviation",
];

/// Label value for low-potential-dysgraphia samples.
pub const LABEL_LPD: u8 = 0;
/// Label value for potential-dysgraphia samples.
pub const LABEL_PD: u8 = 1;

/// One connected ink region found in a binarized handwriting image.
///
/// Bounding box coordinates are inclusive; `points` holds every pixel of
/// the component (needed for the rotated-rectangle slant fit).
#[derive(Debug, Clone)]
pub struct Region {
    pub label: u32,
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
    pub pixel_count: u32,
    pub points: Vec<Point<i32>>,
}

impl Region {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Pixel area of the component.
    pub fn area(&self) -> u32 {
        self.pixel_count
    }

    pub fn left(&self) -> u32 {
        self.min_x
    }

    pub fn top(&self) -> u32 {
        self.min_y
    }

    /// Exclusive right edge (`left + width`).
    pub fn right(&self) -> u32 {
        self.max_x + 1
    }

    /// Exclusive bottom edge (`top + height`).
    pub fn bottom(&self) -> u32 {
        self.max_y + 1
    }
}

/// The six handwriting-geometry measurements for one image.
///
/// The declared field order is the canonical column order of the feature
/// matrix: [`FeatureVector::to_array`] is the single projection to
/// positional form, and both training and prediction go through it. All
/// fields default to `0.0` when an image yields fewer than two regions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub line_spacing: f64,
    pub letter_size_variation: f64,
    pub writing_pressure: f64,
    pub letter_spacing: f64,
    pub slant_angle: f64,
    pub baseline_deviation: f64,
}

impl FeatureVector {
    /// Project the features into the canonical column order.
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.line_spacing,
            self.letter_size_variation,
            self.writing_pressure,
            self.letter_spacing,
            self.slant_angle,
            self.baseline_deviation,
        ]
    }
}

/// Outcome of classifying one handwriting image.
///
/// `probability` is the estimated likelihood of the PD class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub label: u8,
    pub probability: f64,
}

impl Prediction {
    pub fn verdict(&self) -> &'static str {
        if self.label == LABEL_PD {
            "Potential Dysgraphia"
        } else {
            "Low Potential Dysgraphia"
        }
    }
}
