pub mod forest;
pub mod scaler;
pub mod store;

pub use forest::{RandomForest, DEFAULT_SEED, TREE_COUNT};
pub use scaler::StandardScaler;

use image::DynamicImage;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};
use crate::extraction;
use crate::models::{FeatureVector, Prediction, FEATURE_COUNT, LABEL_LPD, LABEL_PD};

/// Handwriting dysgraphia detector: a feature scaler plus a bagged-tree
/// ensemble with an explicit trained/untrained lifecycle.
///
/// Prediction borrows `&self`, so a trained detector can be shared
/// read-only across callers; training replaces the fitted state in place
/// and must be serialized by the caller.
#[derive(Debug, Clone)]
pub struct Detector {
    scaler: StandardScaler,
    forest: RandomForest,
    is_trained: bool,
}

impl Detector {
    pub fn new() -> Self {
        Self {
            scaler: StandardScaler::new(),
            forest: RandomForest::new(TREE_COUNT, DEFAULT_SEED),
            is_trained: false,
        }
    }

    pub fn is_trained(&self) -> bool {
        self.is_trained
    }

    /// Fit the scaler and the ensemble from scratch over the full
    /// training set. Every call retrains; there is no partial fit.
    pub fn train(&mut self, samples: &[FeatureVector], labels: &[u8]) -> Result<()> {
        if samples.len() != labels.len() {
            return Err(Error::ShapeMismatch {
                features: samples.len(),
                labels: labels.len(),
            });
        }
        if samples.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }

        let matrix: Vec<[f64; FEATURE_COUNT]> =
            samples.iter().map(FeatureVector::to_array).collect();
        let scaled = self.scaler.fit_transform(&matrix);
        self.forest.fit(&scaled, labels);
        self.is_trained = true;

        info!(samples = samples.len(), trees = TREE_COUNT, "Detector trained");
        Ok(())
    }

    /// Classify a raw handwriting image.
    ///
    /// Fails with [`Error::NotTrained`] unless the detector has been
    /// trained or loaded from persisted artifacts.
    pub fn predict(&self, image: &DynamicImage) -> Result<Prediction> {
        if !self.is_trained {
            return Err(Error::NotTrained);
        }
        let features = extraction::extract_features(image);
        self.predict_features(&features)
    }

    /// Classify an already-extracted feature vector.
    pub fn predict_features(&self, features: &FeatureVector) -> Result<Prediction> {
        if !self.is_trained {
            return Err(Error::NotTrained);
        }

        // Transform only: the scaler keeps its training statistics.
        let scaled = self.scaler.transform(&features.to_array());
        let probability = self.forest.predict_proba(&scaled);
        let label = if probability >= 0.5 { LABEL_PD } else { LABEL_LPD };
        Ok(Prediction { label, probability })
    }

    /// Persist the ensemble and the scaler as two independent artifacts.
    /// The writes are sequential and non-transactional.
    pub fn save<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        model_path: P,
        scaler_path: Q,
    ) -> Result<()> {
        store::save(model_path, &self.forest)?;
        store::save(scaler_path, &self.scaler)?;
        Ok(())
    }

    /// Load persisted artifacts into a ready-to-predict detector.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        model_path: P,
        scaler_path: Q,
    ) -> Result<Self> {
        let forest = store::load(model_path)?;
        let scaler = store::load(scaler_path)?;
        Ok(Self {
            scaler,
            forest,
            is_trained: true,
        })
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}
