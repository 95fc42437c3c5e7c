use crate::ports::outbound::StateStore;
use crate::registry_ingest::domain::IngestState;
use crate::shared::error::RegistryError;
use crate::shared::fs_guard::{ensure_not_symlink, ensure_plain_key, ensure_readable_artifact, write_atomically};
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// JsonStateStore adapter keeping one pretty-printed JSON file per key
///
/// Files live at `<dir>/<key>.json` and are replaced atomically on save, so
/// an interrupted run always leaves the previous complete checkpoint behind.
pub struct JsonStateStore {
    dir: PathBuf,
}

impl JsonStateStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        ensure_plain_key(key, "State key")?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl StateStore for JsonStateStore {
    fn load(&self, key: &str) -> Result<Option<IngestState>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        ensure_readable_artifact(&path, "ingest state").map_err(|e| {
            RegistryError::StateReadError {
                path: path.clone(),
                details: e.to_string(),
            }
        })?;

        let content = fs::read_to_string(&path).map_err(|e| RegistryError::StateReadError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        let state: IngestState =
            serde_json::from_str(&content).map_err(|e| RegistryError::StateReadError {
                path: path.clone(),
                details: e.to_string(),
            })?;

        Ok(Some(state.reconciled()))
    }

    fn save(&self, key: &str, state: &IngestState) -> Result<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            ensure_not_symlink(&path, "write").map_err(|e| RegistryError::StateWriteError {
                path: path.clone(),
                details: e.to_string(),
            })?;
        }

        let content = serde_json::to_string_pretty(state)?;
        write_atomically(&path, content.as_bytes()).map_err(|e| {
            RegistryError::StateWriteError {
                path: path.clone(),
                details: e.to_string(),
            }
        })?;

        Ok(())
    }
}
