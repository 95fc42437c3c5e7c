use npm_registry::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock RawStore holding artifacts in memory as untyped JSON
#[derive(Default, Clone)]
pub struct MockRawStore {
    pub artifacts: Arc<Mutex<HashMap<String, Vec<Value>>>>,
}

impl MockRawStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artifact(self, slug: &str, records: Vec<Value>) -> Self {
        self.artifacts
            .lock()
            .unwrap()
            .insert(slug.to_string(), records);
        self
    }

    pub fn names(&self, slug: &str) -> Vec<String> {
        self.artifacts
            .lock()
            .unwrap()
            .get(slug)
            .map(|records| {
                records
                    .iter()
                    .filter_map(|r| r["name"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl RawStore for MockRawStore {
    fn save_raw(&self, slug: &str, records: &[PackageRecord]) -> Result<()> {
        let values = records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.artifacts
            .lock()
            .unwrap()
            .insert(slug.to_string(), values);
        Ok(())
    }

    fn load_raw(&self, slug: &str) -> Result<Vec<Value>> {
        self.artifacts
            .lock()
            .unwrap()
            .get(slug)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock raw artifact '{}' not found", slug))
    }
}
