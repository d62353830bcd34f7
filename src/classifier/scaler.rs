use serde::{Deserialize, Serialize};

use crate::models::FEATURE_COUNT;

/// Zero-mean, unit-variance feature standardizer.
///
/// `fit` captures per-column mean and population standard deviation from
/// the training matrix; `transform` reapplies those statistics unchanged
/// at prediction time. A zero-variance column passes through unscaled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardScaler {
    means: [f64; FEATURE_COUNT],
    stds: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture column statistics from the full training matrix.
    pub fn fit(&mut self, matrix: &[[f64; FEATURE_COUNT]]) {
        if matrix.is_empty() {
            return;
        }
        let n = matrix.len() as f64;

        for col in 0..FEATURE_COUNT {
            let mean = matrix.iter().map(|row| row[col]).sum::<f64>() / n;
            let variance =
                matrix.iter().map(|row| (row[col] - mean).powi(2)).sum::<f64>() / n;
            let std = variance.sqrt();

            self.means[col] = mean;
            self.stds[col] = if std > 0.0 { std } else { 1.0 };
        }
    }

    /// Standardize one row using the fitted statistics.
    pub fn transform(&self, row: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut out = [0.0; FEATURE_COUNT];
        for col in 0..FEATURE_COUNT {
            out[col] = (row[col] - self.means[col]) / self.stds[col];
        }
        out
    }

    /// Fit on the matrix and return every row standardized.
    pub fn fit_transform(
        &mut self,
        matrix: &[[f64; FEATURE_COUNT]],
    ) -> Vec<[f64; FEATURE_COUNT]> {
        self.fit(matrix);
        matrix.iter().map(|row| self.transform(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_transform_centers_and_scales() {
        let matrix = vec![
            [0.0, 10.0, 1.0, 0.0, 0.0, 0.0],
            [2.0, 20.0, 1.0, 0.0, 0.0, 0.0],
            [4.0, 30.0, 1.0, 0.0, 0.0, 0.0],
        ];
        let mut scaler = StandardScaler::new();
        let scaled = scaler.fit_transform(&matrix);

        for col in 0..FEATURE_COUNT {
            let mean: f64 = scaled.iter().map(|r| r[col]).sum::<f64>() / 3.0;
            assert!(mean.abs() < 1e-12, "column {col} mean {mean}");
        }
        // Column 0: values 0,2,4 → mean 2, population std sqrt(8/3).
        let expected = (0.0f64 - 2.0) / (8.0f64 / 3.0).sqrt();
        assert!((scaled[0][0] - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_column_passes_through() {
        let matrix = vec![[5.0; FEATURE_COUNT], [5.0; FEATURE_COUNT]];
        let mut scaler = StandardScaler::new();
        let scaled = scaler.fit_transform(&matrix);
        assert_eq!(scaled[0], [0.0; FEATURE_COUNT]);
        assert_eq!(scaled[1], [0.0; FEATURE_COUNT]);
    }

    #[test]
    fn transform_uses_training_statistics() {
        let matrix = vec![
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ];
        let mut scaler = StandardScaler::new();
        scaler.fit(&matrix);

        // A new observation is scaled against the fitted mean of 1.0.
        let row = scaler.transform(&[3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((row[0] - 2.0).abs() < 1e-12, "got {}", row[0]);
    }
}
