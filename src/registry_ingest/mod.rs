/// Registry ingest domain: records, checkpoint state, and the fetch policies
///
/// Nothing in this module performs I/O. Adapters and use cases drive it.
pub mod domain;
pub mod policies;
