use npm_registry::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock StateStore keeping checkpoints as serialized JSON, as the file store does
#[derive(Default, Clone)]
pub struct MockStateStore {
    pub documents: Arc<Mutex<HashMap<String, String>>>,
    pub save_count: Arc<Mutex<usize>>,
}

impl MockStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw checkpoint document, e.g. one written by an older release
    pub fn with_document(self, key: &str, json: &str) -> Self {
        self.documents
            .lock()
            .unwrap()
            .insert(key.to_string(), json.to_string());
        self
    }

    pub fn get_state(&self, key: &str) -> Option<IngestState> {
        self.load(key).unwrap()
    }

    pub fn saves(&self) -> usize {
        *self.save_count.lock().unwrap()
    }
}

impl StateStore for MockStateStore {
    fn load(&self, key: &str) -> Result<Option<IngestState>> {
        let documents = self.documents.lock().unwrap();
        match documents.get(key) {
            Some(json) => {
                let state: IngestState = serde_json::from_str(json)?;
                Ok(Some(state.reconciled()))
            }
            None => Ok(None),
        }
    }

    fn save(&self, key: &str, state: &IngestState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        self.documents.lock().unwrap().insert(key.to_string(), json);
        *self.save_count.lock().unwrap() += 1;
        Ok(())
    }
}
