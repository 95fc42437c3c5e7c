use crate::registry_ingest::domain::IngestState;
use crate::shared::Result;

/// StateStore port for durable ingest checkpoints, addressed by key
pub trait StateStore {
    /// Loads the checkpoint saved under `key`, or `None` on first run
    fn load(&self, key: &str) -> Result<Option<IngestState>>;

    /// Replaces the checkpoint saved under `key`
    fn save(&self, key: &str, state: &IngestState) -> Result<()>;
}
