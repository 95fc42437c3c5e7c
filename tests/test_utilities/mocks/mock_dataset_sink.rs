use npm_registry::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DatasetSink recording uploads as JSON Lines and publishes by id
#[derive(Default, Clone)]
pub struct MockDatasetSink {
    pub uploads: Arc<Mutex<Vec<(String, WriteMode)>>>,
    pub published: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
}

impl MockDatasetSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_uploads(&self) -> Vec<(String, WriteMode)> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn get_published(&self) -> Vec<String> {
        self.published.lock().unwrap().clone()
    }
}

impl DatasetSink for MockDatasetSink {
    fn upload(&self, table: &Table, _metadata: &DatasetMetadata, mode: WriteMode) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock dataset sink failure");
        }
        self.uploads
            .lock()
            .unwrap()
            .push((table.to_json_lines()?, mode));
        Ok(())
    }

    fn publish(&self, metadata: &DatasetMetadata) -> Result<()> {
        self.published.lock().unwrap().push(metadata.id.clone());
        Ok(())
    }
}
