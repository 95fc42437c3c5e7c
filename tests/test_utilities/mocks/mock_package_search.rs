use npm_registry::prelude::*;
use npm_registry::registry_ingest::domain::{SearchPage, SearchQuery};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Builds a record the way the search client would for a typical hit
pub fn package(name: &str) -> PackageRecord {
    let mut record = PackageRecord::new(name).unwrap();
    record.version = Some("1.0.0".to_string());
    record.description = Some(format!("The {} package", name));
    record.maintainers_count = 1;
    record.npm_url = Some(format!("https://www.npmjs.com/package/{}", name));
    record.score_final = Some(0.5);
    record
}

/// Mock PackageSearch serving canned pages keyed by (term, offset)
///
/// Pages that were not registered come back empty, which ends the term.
#[derive(Default, Clone)]
pub struct MockPackageSearch {
    pub pages: HashMap<(String, u32), Vec<PackageRecord>>,
    pub fail_at: Option<(String, u32)>,
    pub queries: Arc<Mutex<Vec<(String, u32)>>>,
}

impl MockPackageSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, term: &str, offset: u32, names: &[&str]) -> Self {
        self.pages.insert(
            (term.to_string(), offset),
            names.iter().map(|name| package(name)).collect(),
        );
        self
    }

    pub fn with_failure_at(mut self, term: &str, offset: u32) -> Self {
        self.fail_at = Some((term.to_string(), offset));
        self
    }

    pub fn get_queries(&self) -> Vec<(String, u32)> {
        self.queries.lock().unwrap().clone()
    }
}

impl PackageSearch for MockPackageSearch {
    fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let key = (query.text.clone(), query.from);
        self.queries.lock().unwrap().push(key.clone());

        if self.fail_at.as_ref() == Some(&key) {
            anyhow::bail!("Mock search failure for '{}' at offset {}", key.0, key.1);
        }

        let records = self.pages.get(&key).cloned().unwrap_or_default();
        Ok(SearchPage::new(records.len(), records))
    }
}
