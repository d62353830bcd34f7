//! Versioned JSON artifact persistence for fitted model state.
//!
//! The ensemble and the scaler are written as two independent artifacts;
//! save and load are separate, non-transactional operations. A failure
//! between the two writes leaves the store with mixed artifact
//! generations on disk.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

/// Artifact format version; loads reject anything else.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Artifact {
    version: u32,
    payload: serde_json::Value,
}

/// Write one fitted component as a versioned artifact.
pub fn save<T: Serialize, P: AsRef<Path>>(path: P, payload: &T) -> Result<()> {
    let artifact = Artifact {
        version: FORMAT_VERSION,
        payload: serde_json::to_value(payload)?,
    };

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &artifact)?;
    writer.flush()?;
    Ok(())
}

/// Read one fitted component, checking the format version first.
pub fn load<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let file = File::open(path)?;
    let artifact: Artifact = serde_json::from_reader(BufReader::new(file))?;

    if artifact.version != FORMAT_VERSION {
        return Err(Error::UnsupportedFormat {
            found: artifact.version,
            expected: FORMAT_VERSION,
        });
    }

    Ok(serde_json::from_value(artifact.payload)?)
}
