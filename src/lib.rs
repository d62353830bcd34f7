pub mod classifier;
pub mod dataset;
pub mod error;
pub mod extraction;
pub mod models;

pub use classifier::{Detector, RandomForest, StandardScaler};
pub use error::{Error, Result};
pub use extraction::{extract_features, features_from_binary};
pub use models::{
    FeatureVector, Prediction, Region, FEATURE_COUNT, FEATURE_NAMES, LABEL_LPD, LABEL_PD,
};
