use super::RankingWeights;
use std::time::Duration;

/// Registry search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://registry.npmjs.org/-/v1/search";

/// Number of unique packages to collect
pub const DEFAULT_TARGET_COUNT: usize = 10_000;

/// Largest page the search endpoint serves
pub const MAX_PAGE_SIZE: u32 = 250;

/// Consecutive all-duplicate pages before a term is abandoned
pub const DEFAULT_SATURATION_PAGES: u32 = 3;

/// State-store key for the ingest checkpoint
pub const STATE_KEY: &str = "npm_packages";

/// Slug of the raw artifact handed to the transform phase
pub const RAW_SLUG: &str = "popular_packages";

/// What the ingest loop collects and when it stops.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestPlan {
    /// Broad query terms, scanned in order. "npm" alone matches well over a
    /// million packages, so the later terms only fill gaps.
    pub search_terms: Vec<String>,
    pub target_count: usize,
    pub page_size: u32,
    pub saturation_pages: u32,
    /// Fixed pause between pages, on top of rate limiting
    pub page_delay: Duration,
    pub weights: RankingWeights,
    pub state_key: String,
    pub raw_slug: String,
}

impl Default for IngestPlan {
    fn default() -> Self {
        Self {
            search_terms: vec!["npm".to_string(), "node".to_string(), "package".to_string()],
            target_count: DEFAULT_TARGET_COUNT,
            page_size: MAX_PAGE_SIZE,
            saturation_pages: DEFAULT_SATURATION_PAGES,
            page_delay: Duration::ZERO,
            weights: RankingWeights::default(),
            state_key: STATE_KEY.to_string(),
            raw_slug: RAW_SLUG.to_string(),
        }
    }
}
