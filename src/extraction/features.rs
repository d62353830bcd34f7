//! The six handwriting-geometry measurements.
//!
//! Each is a pure function of the region set; `writing_pressure` also
//! reads the binary map directly. Fewer than two regions is not an
//! error: the whole vector defaults to zero (insufficient signal), which
//! lets sparse or noisy pages degrade gracefully instead of being
//! discarded.

use image::GrayImage;

use super::geometry;
use crate::models::{FeatureVector, Region};

/// Compute the full feature vector for one binarized image.
pub fn compute_features(binary: &GrayImage, regions: &[Region]) -> FeatureVector {
    if regions.len() < 2 {
        return FeatureVector::default();
    }

    FeatureVector {
        line_spacing: line_spacing(regions),
        letter_size_variation: letter_size_variation(regions),
        writing_pressure: writing_pressure(binary),
        letter_spacing: letter_spacing(regions),
        slant_angle: slant_angle(regions),
        baseline_deviation: baseline_deviation(regions),
    }
}

/// Mean vertical gap between consecutive regions, sorted by top edge.
/// Only positive gaps count; overlapping lines contribute nothing.
fn line_spacing(regions: &[Region]) -> f64 {
    let mut sorted: Vec<&Region> = regions.iter().collect();
    sorted.sort_by_key(|r| r.top());

    let gaps: Vec<f64> = sorted
        .windows(2)
        .map(|pair| pair[1].top() as f64 - pair[0].bottom() as f64)
        .filter(|gap| *gap > 0.0)
        .collect();

    mean(&gaps).unwrap_or(0.0)
}

/// Coefficient of variation of region pixel areas.
fn letter_size_variation(regions: &[Region]) -> f64 {
    let areas: Vec<f64> = regions.iter().map(|r| r.area() as f64).collect();
    match mean(&areas) {
        Some(m) if m > 0.0 => population_std(&areas, m) / m,
        _ => 0.0,
    }
}

/// Mean intensity of the foreground (ink) pixels.
fn writing_pressure(binary: &GrayImage) -> f64 {
    let mut sum = 0u64;
    let mut count = 0u64;
    for pixel in binary.pixels() {
        if pixel[0] > 0 {
            sum += pixel[0] as u64;
            count += 1;
        }
    }

    if count > 0 { sum as f64 / count as f64 } else { 0.0 }
}

/// Mean horizontal gap between consecutive regions, sorted by left edge.
fn letter_spacing(regions: &[Region]) -> f64 {
    let mut sorted: Vec<&Region> = regions.iter().collect();
    sorted.sort_by_key(|r| r.left());

    let gaps: Vec<f64> = sorted
        .windows(2)
        .map(|pair| pair[1].left() as f64 - pair[0].right() as f64)
        .filter(|gap| *gap > 0.0)
        .collect();

    mean(&gaps).unwrap_or(0.0)
}

/// Mean absolute slant of the per-region minimum-area rectangles.
///
/// Angles below -45 degrees are shifted by +90 so both rectangle sides
/// measure against the same reference axis; an upright stroke reads 0.
fn slant_angle(regions: &[Region]) -> f64 {
    let angles: Vec<f64> = regions
        .iter()
        .map(|r| {
            let mut angle = geometry::min_rect_angle(&r.points);
            if angle < -45.0 {
                angle += 90.0;
            }
            angle.abs()
        })
        .collect();

    mean(&angles).unwrap_or(0.0)
}

/// Population standard deviation of the regions' bottom edges.
fn baseline_deviation(regions: &[Region]) -> f64 {
    let bottoms: Vec<f64> = regions.iter().map(|r| r.bottom() as f64).collect();
    match mean(&bottoms) {
        Some(m) => population_std(&bottoms, m),
        None => 0.0,
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
