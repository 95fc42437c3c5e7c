/// IngestSummary - outcome of one ingest run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    /// Records held after the run, including those from earlier runs
    pub total: usize,
    /// Records added by this run
    pub added: usize,
    /// Search pages requested by this run
    pub pages_fetched: usize,
    pub target_reached: bool,
}
