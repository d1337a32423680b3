// crates/countrydex-core/src/loader.rs

//! # Data Loader
//!
//! Reads a saved API response from disk. Handles the physical layer (file,
//! optional gzip) and accepts both the API envelope `{ "data": [...] }` and a
//! bare JSON array of records.

use crate::error::{DexError, Result};
use crate::model::{Directory, ListEnvelope};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

impl Directory {
    /// Load a directory from a `.json` or `.json.gz` file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let directory = Self::from_reader(reader)?;
        tracing::info!(
            path = %path.display(),
            countries = directory.countries().len(),
            "loaded country snapshot"
        );
        Ok(directory)
    }

    /// Parse either the API envelope or a bare array of records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let payload: Value = serde_json::from_reader(reader)?;
        Self::from_payload(payload)
    }

    pub fn from_payload(payload: Value) -> Result<Self> {
        match payload {
            Value::Array(records) => Ok(Self::from_records(records)),
            Value::Object(_) => {
                let envelope: ListEnvelope = serde_json::from_value(payload)?;
                Ok(Self::from_envelope(envelope))
            }
            other => Err(DexError::InvalidData(format!(
                "expected a country array or {{\"data\": [...]}}, got {}",
                kind(&other)
            ))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the file
/// name ends in `.gz`.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        DexError::NotFound(format!("Snapshot not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let gzipped = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(DexError::InvalidData(format!(
            "{} is gzipped but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_envelope_and_bare_array() {
        let env = br#"{"data":[{"name":"Aland","region":"Europe"},{"name":""}]}"#;
        let dir = Directory::from_reader(&env[..]).unwrap();
        assert_eq!(dir.countries().len(), 1);
        assert_eq!(dir.stats().dropped, 1);

        let bare = br#"[{"name":"Zambia","region":"Africa"}]"#;
        assert_eq!(Directory::from_reader(&bare[..]).unwrap().countries()[0].name(), "Zambia");
    }

    #[test]
    fn rejects_other_payloads() {
        assert!(matches!(
            Directory::from_reader(&b"\"hello\""[..]),
            Err(DexError::InvalidData(_))
        ));
        assert!(matches!(
            Directory::from_reader(&b"{\"data\": 5}"[..]),
            Err(DexError::Json(_))
        ));
        assert!(matches!(Directory::from_reader(&b"{"[..]), Err(DexError::Json(_))));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Directory::load_from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DexError::NotFound(_)));
    }

    #[test]
    fn loads_plain_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"data":[{"name":"Fiji","region":"Oceania"}]}"#)
            .unwrap();
        let dir = Directory::load_from_path(file.path()).unwrap();
        assert_eq!(dir.countries()[0].region(), "Oceania");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn loads_gzipped_file() {
        use flate2::{write::GzEncoder, Compression};

        let file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(file.as_file(), Compression::default());
        encoder
            .write_all(br#"[{"name":"Chad","region":"Africa"},{"name":"Peru","region":"Americas"}]"#)
            .unwrap();
        encoder.finish().unwrap();

        let dir = Directory::load_from_path(file.path()).unwrap();
        assert_eq!(dir.countries().len(), 2);
    }
}
