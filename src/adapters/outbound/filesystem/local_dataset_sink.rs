use crate::dataset::{DatasetMetadata, Table};
use crate::ports::outbound::{DatasetSink, WriteMode};
use crate::shared::error::RegistryError;
use crate::shared::fs_guard::{ensure_plain_key, write_atomically};
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILE: &str = "data.jsonl";
const METADATA_FILE: &str = "metadata.json";
const PUBLISHED_FILE: &str = "published.json";

#[derive(Debug, Serialize)]
struct PublishRecord<'a> {
    id: &'a str,
    title: &'a str,
    row_count: usize,
    published_at: DateTime<Utc>,
}

/// LocalDatasetSink adapter publishing datasets under `<root>/<dataset id>/`
///
/// `upload` writes `data.jsonl` and `metadata.json`; `publish` adds
/// `published.json`, which consumers treat as the signal that the dataset is
/// complete.
pub struct LocalDatasetSink {
    root: PathBuf,
}

impl LocalDatasetSink {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn dataset_dir(&self, dataset_id: &str) -> Result<PathBuf> {
        ensure_plain_key(dataset_id, "Dataset id")?;
        Ok(self.root.join(dataset_id))
    }

    fn write(path: &Path, content: &[u8]) -> Result<()> {
        write_atomically(path, content).map_err(|e| {
            RegistryError::DatasetWriteError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl DatasetSink for LocalDatasetSink {
    fn upload(&self, table: &Table, metadata: &DatasetMetadata, mode: WriteMode) -> Result<()> {
        let dir = self.dataset_dir(&metadata.id)?;
        let data_path = dir.join(DATA_FILE);

        if mode == WriteMode::ErrorIfExists && data_path.exists() {
            return Err(RegistryError::DatasetWriteError {
                path: data_path,
                details: "Dataset already exists and write mode forbids overwriting".to_string(),
            }
            .into());
        }

        // A re-upload invalidates any earlier publication until publish runs again.
        let published_path = dir.join(PUBLISHED_FILE);
        if published_path.exists() {
            fs::remove_file(&published_path).map_err(|e| RegistryError::DatasetWriteError {
                path: published_path.clone(),
                details: e.to_string(),
            })?;
        }

        Self::write(&data_path, table.to_json_lines()?.as_bytes())?;
        Self::write(
            &dir.join(METADATA_FILE),
            serde_json::to_string_pretty(metadata)?.as_bytes(),
        )?;

        Ok(())
    }

    fn publish(&self, metadata: &DatasetMetadata) -> Result<()> {
        let dir = self.dataset_dir(&metadata.id)?;
        let data_path = dir.join(DATA_FILE);

        let data = fs::read_to_string(&data_path).map_err(|e| RegistryError::DatasetWriteError {
            path: data_path.clone(),
            details: format!("Dataset must be uploaded before it is published: {}", e),
        })?;

        let record = PublishRecord {
            id: &metadata.id,
            title: &metadata.title,
            row_count: data.lines().count(),
            published_at: Utc::now(),
        };
        Self::write(
            &dir.join(PUBLISHED_FILE),
            serde_json::to_string_pretty(&record)?.as_bytes(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::field_rules::project_records;
    use serde_json::json;
    use tempfile::TempDir;

    fn table() -> Table {
        project_records(&[json!({"name": "a"}), json!({"name": "b"})])
            .unwrap()
            .table
    }

    #[test]
    fn test_upload_and_publish() {
        let temp_dir = TempDir::new().unwrap();
        let sink = LocalDatasetSink::new(temp_dir.path().to_path_buf());
        let metadata = DatasetMetadata::popular_packages();

        sink.upload(&table(), &metadata, WriteMode::Overwrite).unwrap();
        sink.publish(&metadata).unwrap();

        let dir = temp_dir.path().join("npm_popular_packages");
        let data = fs::read_to_string(dir.join(DATA_FILE)).unwrap();
        assert_eq!(data.lines().count(), 2);

        let published: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join(PUBLISHED_FILE)).unwrap()).unwrap();
        assert_eq!(published["row_count"], 2);
        assert_eq!(published["id"], "npm_popular_packages");

        let stored: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join(METADATA_FILE)).unwrap()).unwrap();
        assert_eq!(stored["title"], "npm Popular Packages");
    }

    #[test]
    fn test_overwrite_replaces_and_unpublishes() {
        let temp_dir = TempDir::new().unwrap();
        let sink = LocalDatasetSink::new(temp_dir.path().to_path_buf());
        let metadata = DatasetMetadata::popular_packages();

        sink.upload(&table(), &metadata, WriteMode::Overwrite).unwrap();
        sink.publish(&metadata).unwrap();
        sink.upload(&table(), &metadata, WriteMode::Overwrite).unwrap();

        let dir = temp_dir.path().join("npm_popular_packages");
        assert!(dir.join(DATA_FILE).exists());
        assert!(!dir.join(PUBLISHED_FILE).exists());
    }

    #[test]
    fn test_error_if_exists_refuses_second_upload() {
        let temp_dir = TempDir::new().unwrap();
        let sink = LocalDatasetSink::new(temp_dir.path().to_path_buf());
        let metadata = DatasetMetadata::popular_packages();

        sink.upload(&table(), &metadata, WriteMode::ErrorIfExists).unwrap();
        let err = sink
            .upload(&table(), &metadata, WriteMode::ErrorIfExists)
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_publish_without_upload_fails() {
        let temp_dir = TempDir::new().unwrap();
        let sink = LocalDatasetSink::new(temp_dir.path().to_path_buf());

        let err = sink.publish(&DatasetMetadata::popular_packages()).unwrap_err();
        assert!(err.to_string().contains("uploaded before it is published"));
    }
}
