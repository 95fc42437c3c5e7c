use crate::ports::outbound::RawStore;
use crate::registry_ingest::domain::PackageRecord;
use crate::shared::error::RegistryError;
use crate::shared::fs_guard::{ensure_not_symlink, ensure_plain_key, ensure_readable_artifact, write_atomically};
use crate::shared::Result;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// RawJsonStore adapter writing raw artifacts to `<dir>/<slug>.json`
pub struct RawJsonStore {
    dir: PathBuf,
}

impl RawJsonStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path_for(&self, slug: &str) -> Result<PathBuf> {
        ensure_plain_key(slug, "Raw artifact slug")?;
        Ok(self.dir.join(format!("{}.json", slug)))
    }
}

impl RawStore for RawJsonStore {
    fn save_raw(&self, slug: &str, records: &[PackageRecord]) -> Result<()> {
        let path = self.path_for(slug)?;
        if path.exists() {
            ensure_not_symlink(&path, "write")?;
        }

        let content = serde_json::to_string_pretty(records)?;
        write_atomically(&path, content.as_bytes()).map_err(|e| {
            RegistryError::RawArtifactWriteError {
                path: path.clone(),
                details: e.to_string(),
            }
        })?;

        Ok(())
    }

    fn load_raw(&self, slug: &str) -> Result<Vec<Value>> {
        let path = self.path_for(slug)?;
        if !path.exists() {
            return Err(RegistryError::RawArtifactNotFound { path }.into());
        }

        ensure_readable_artifact(&path, "raw artifact")?;

        let content = fs::read_to_string(&path).map_err(|e| RegistryError::RawArtifactParseError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        let records: Vec<Value> =
            serde_json::from_str(&content).map_err(|e| RegistryError::RawArtifactParseError {
                path: path.clone(),
                details: e.to_string(),
            })?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_keeps_null_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = RawJsonStore::new(temp_dir.path().join("raw"));

        store
            .save_raw("popular_packages", &[PackageRecord::new("chalk").unwrap()])
            .unwrap();
        let raw = store.load_raw("popular_packages").unwrap();

        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0]["name"], "chalk");
        assert!(raw[0].get("license").unwrap().is_null());
    }

    #[test]
    fn test_load_missing_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let store = RawJsonStore::new(temp_dir.path().to_path_buf());

        let err = store.load_raw("popular_packages").unwrap_err();
        assert!(err.to_string().contains("Raw artifact not found"));
    }

    #[test]
    fn test_load_non_array_artifact() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("popular_packages.json"), r#"{"name": "x"}"#).unwrap();
        let store = RawJsonStore::new(temp_dir.path().to_path_buf());

        let err = store.load_raw("popular_packages").unwrap_err();
        assert!(err.to_string().contains("Failed to parse raw artifact"));
    }
}
