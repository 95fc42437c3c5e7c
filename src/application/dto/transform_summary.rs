/// TransformSummary - outcome of a transform that reached publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformSummary {
    pub dataset_id: String,
    /// Records read from the raw artifact
    pub loaded: usize,
    /// Records dropped for lacking a usable name
    pub dropped: usize,
    /// Rows uploaded and published
    pub rows: usize,
}
