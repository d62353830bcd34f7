//! Integration tests for model artifact persistence.

mod common;

use common::*;
use dysgraph::classifier::{store, RandomForest};
use dysgraph::{Detector, Error};
use std::fs;

#[test]
fn save_then_load_round_trips_predictions_exactly() {
    let (features, labels) = separable_training_set();
    let mut trained = Detector::new();
    trained.train(&features, &labels).unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let model_path = dir.path().join("model.json");
    let scaler_path = dir.path().join("scaler.json");
    trained.save(&model_path, &scaler_path).unwrap();

    let loaded = Detector::load(&model_path, &scaler_path).unwrap();
    assert!(loaded.is_trained());

    // No explicit train call: the loaded detector must predict, and it
    // must predict identically to the instance it was saved from.
    for sample in features.iter().take(20) {
        let original = trained.predict_features(sample).unwrap();
        let reloaded = loaded.predict_features(sample).unwrap();
        assert_eq!(original, reloaded);
    }
}

#[test]
fn load_rejects_unknown_artifact_version() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    fs::write(&path, r#"{"version":999,"payload":null}"#).unwrap();

    let result = store::load::<RandomForest, _>(&path);
    assert!(matches!(
        result,
        Err(Error::UnsupportedFormat { found: 999, .. })
    ));
}

#[test]
fn load_propagates_missing_artifact_io_errors() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let result = Detector::load(&missing, &missing);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn artifacts_are_independent_files() {
    let (features, labels) = separable_training_set();
    let mut detector = Detector::new();
    detector.train(&features, &labels).unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let model_path = dir.path().join("model.json");
    let scaler_path = dir.path().join("scaler.json");
    detector.save(&model_path, &scaler_path).unwrap();

    assert!(model_path.exists());
    assert!(scaler_path.exists());

    // Deleting one artifact breaks loading without touching the other.
    fs::remove_file(&scaler_path).unwrap();
    assert!(Detector::load(&model_path, &scaler_path).is_err());
}
