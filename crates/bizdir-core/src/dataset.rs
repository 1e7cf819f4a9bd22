// Rust guideline compliant 2026-02-06

//! Dataset loading from JSON and JSON Lines files.
//!
//! A dataset is either a single JSON array of records or a JSON Lines file
//! with one record per line. Malformed JSON Lines entries are skipped with a
//! warning; normalization of the records themselves happens in
//! [`crate::normalize`].

use crate::store::ListingStore;
use crate::{Error, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// On-disk layout of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// A single JSON array of records.
    Json,
    /// One JSON record per line.
    JsonLines,
}

impl DatasetFormat {
    /// Infers the format from a file extension.
    ///
    /// `.jsonl` and `.ndjson` are JSON Lines; anything else is a JSON array.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson") => {
                DatasetFormat::JsonLines
            }
            _ => DatasetFormat::Json,
        }
    }
}

/// A dataset file on disk.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Path to the dataset file.
    path: PathBuf,
    /// Layout of the file.
    format: DatasetFormat,
}

impl Dataset {
    /// Creates a dataset handle, inferring the format from the extension.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the dataset file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        Self::validate_path(&path)?;
        let format = DatasetFormat::from_path(&path);
        Ok(Self { path, format })
    }

    fn validate_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(())
    }

    /// Returns the dataset path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the dataset format.
    pub fn format(&self) -> DatasetFormat {
        self.format
    }

    /// Reads the raw records in file order.
    ///
    /// A missing file yields no records.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - A JSON dataset is not valid JSON
    /// - A JSON dataset is not an array
    pub fn load_records(&self) -> Result<Vec<Value>> {
        use std::fs::File;
        use std::io::BufReader;

        if !self.path.exists() {
            tracing::warn!(path = %self.path.display(), "dataset file missing, directory is empty");
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);

        match self.format {
            DatasetFormat::Json => match serde_json::from_reader(reader)? {
                Value::Array(records) => Ok(records),
                _ => Err(Error::InvalidListing(format!(
                    "{} must contain a JSON array of listings",
                    self.path.display()
                ))),
            },
            DatasetFormat::JsonLines => {
                use std::io::BufRead;

                let mut records = Vec::new();
                for (index, line) in reader.split(b'\n').enumerate() {
                    let line = line?;
                    let trimmed = line.trim_ascii();
                    if trimmed.is_empty() {
                        continue;
                    }
                    match serde_json::from_slice::<Value>(trimmed) {
                        Ok(record) => records.push(record),
                        Err(e) => {
                            tracing::warn!(line = index + 1, error = %e, "skipping malformed dataset line");
                        }
                    }
                }

                Ok(records)
            }
        }
    }

    /// Loads and normalizes the dataset into a listing store.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    pub fn load_store(&self) -> Result<ListingStore> {
        let records = self.load_records()?;
        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "dataset read"
        );
        Ok(ListingStore::from_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("a/listings.jsonl")),
            DatasetFormat::JsonLines
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("a/listings.NDJSON")),
            DatasetFormat::JsonLines
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("a/listings.json")),
            DatasetFormat::Json
        );
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(Dataset::new(PathBuf::new()).is_err());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let dataset = Dataset::new(temp_dir.path().join("listings.json")).unwrap();
        assert!(dataset.load_records().unwrap().is_empty());
    }

    #[test]
    fn test_json_array_loads_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("listings.json");
        fs::write(
            &path,
            r#"[{"placeId":"b","title":"B"},{"placeId":"a","title":"A"}]"#,
        )
        .unwrap();

        let store = Dataset::new(path).unwrap().load_store().unwrap();
        let ids: Vec<&str> = store.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_json_object_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("listings.json");
        fs::write(&path, r#"{"placeId":"a"}"#).unwrap();
        assert!(Dataset::new(path).unwrap().load_records().is_err());
    }

    #[test]
    fn test_json_lines_skip_malformed_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("listings.jsonl");
        fs::write(
            &path,
            "{\"id\":\"a\",\"name\":\"A\"}\n{not json\n\n{\"id\":\"b\",\"name\":\"B\"}\n",
        )
        .unwrap();

        let records = Dataset::new(path).unwrap().load_records().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_json_lines_skip_invalid_utf8_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("listings.jsonl");
        let mut bytes = b"{\"id\":\"a\",\"name\":\"A\"}\n".to_vec();
        bytes.extend_from_slice(b"{\"id\":\"b\",\"name\":\"B\xff\xfe\"}\n");
        bytes.extend_from_slice(b"{\"id\":\"c\",\"name\":\"C\"}\r\n");
        fs::write(&path, bytes).unwrap();

        let store = Dataset::new(path).unwrap().load_store().unwrap();
        let ids: Vec<&str> = store.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
