use crate::registry_ingest::domain::PackageRecord;
use crate::shared::Result;
use serde_json::Value;

/// RawStore port for the raw artifact that separates ingest from transform
pub trait RawStore {
    /// Writes the full record list under `slug`, replacing any previous one
    fn save_raw(&self, slug: &str, records: &[PackageRecord]) -> Result<()>;

    /// Reads the artifact under `slug` as untyped JSON records
    ///
    /// # Errors
    /// Returns an error if the artifact is missing or is not a JSON array
    fn load_raw(&self, slug: &str) -> Result<Vec<Value>>;
}
