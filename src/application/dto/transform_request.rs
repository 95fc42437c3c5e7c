use crate::dataset::contract::DEFAULT_MIN_ROWS;
use crate::registry_ingest::domain::ingest_plan::RAW_SLUG;

/// TransformRequest - input of the transform use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRequest {
    /// Raw artifact to read
    pub raw_slug: String,
    /// Row-count floor enforced before publishing
    pub min_rows: usize,
}

impl TransformRequest {
    pub fn new(raw_slug: impl Into<String>, min_rows: usize) -> Self {
        Self {
            raw_slug: raw_slug.into(),
            min_rows,
        }
    }
}

impl Default for TransformRequest {
    fn default() -> Self {
        Self::new(RAW_SLUG, DEFAULT_MIN_ROWS)
    }
}
