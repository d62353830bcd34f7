use thiserror::Error;

/// Errors produced by the dysgraph pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Prediction was requested before the detector was trained or loaded.
    #[error("model must be trained before making predictions")]
    NotTrained,

    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("feature matrix and label vector lengths differ ({features} vs {labels})")]
    ShapeMismatch { features: usize, labels: usize },

    #[error("unsupported artifact format version {found} (expected {expected})")]
    UnsupportedFormat { found: u32, expected: u32 },

    #[error("manifest has no image path column")]
    MissingImageColumn,

    #[error("manifest error: {0}")]
    Manifest(#[from] csv::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("artifact encoding error: {0}")]
    Persist(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
