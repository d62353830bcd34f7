use std::path::Path;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::extraction;
use crate::models::{FeatureVector, LABEL_LPD, LABEL_PD};

/// Load a dataset manifest and extract features for every readable image.
///
/// The manifest is a CSV with an image path column (`Image Path` in the
/// original exports; header matching ignores case and spacing). Labels
/// come from the dataset folder convention: a `PD` path segment marks a
/// potential-dysgraphia sample. Missing or undecodable images are logged
/// and skipped; the batch itself never aborts over one bad row.
pub fn load_dataset<P: AsRef<Path>>(manifest: P) -> Result<(Vec<FeatureVector>, Vec<u8>)> {
    let mut reader = csv::Reader::from_path(manifest.as_ref())?;
    let column = image_path_column(reader.headers()?).ok_or(Error::MissingImageColumn)?;

    let mut features = Vec::new();
    let mut labels = Vec::new();

    for record in reader.records() {
        let record = record?;
        let Some(path) = record.get(column) else {
            continue;
        };
        let label = label_for_path(path);

        match image::open(path) {
            Ok(img) => {
                features.push(extraction::extract_features(&img));
                labels.push(label);
            }
            Err(err) => {
                warn!(path, %err, "Skipping unreadable image");
            }
        }
    }

    info!(samples = features.len(), "Dataset loaded");
    Ok((features, labels))
}

/// Header index of the image path column.
fn image_path_column(headers: &csv::StringRecord) -> Option<usize> {
    headers.iter().position(|h| {
        h.trim().to_ascii_lowercase().replace(' ', "_") == "image_path"
    })
}

/// Folder-naming convention: a `PD` directory segment means label 1.
///
/// The test is segment-wise, so `LPD/` directories do not match.
fn label_for_path(path: &str) -> u8 {
    let is_pd = Path::new(path)
        .components()
        .any(|c| c.as_os_str().to_str() == Some("PD"));
    if is_pd { LABEL_PD } else { LABEL_LPD }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pd_segment_labels_one() {
        assert_eq!(label_for_path("data/PD/sample_01.png"), LABEL_PD);
        assert_eq!(label_for_path("PD/sample_01.png"), LABEL_PD);
    }

    #[test]
    fn lpd_segment_labels_zero() {
        // "LPD" contains "PD" as a substring but is not a PD segment.
        assert_eq!(label_for_path("data/LPD/sample_01.png"), LABEL_LPD);
        assert_eq!(label_for_path("PD_archive/sample_01.png"), LABEL_LPD);
        assert_eq!(label_for_path("sample_01.png"), LABEL_LPD);
    }

    #[test]
    fn header_matching_tolerates_case_and_spacing() {
        let exact = csv::StringRecord::from(vec!["Image Path", "Sentence"]);
        assert_eq!(image_path_column(&exact), Some(0));

        let snake = csv::StringRecord::from(vec!["sentence", "image_path"]);
        assert_eq!(image_path_column(&snake), Some(1));

        let missing = csv::StringRecord::from(vec!["sentence", "notes"]);
        assert_eq!(image_path_column(&missing), None);
    }
}
