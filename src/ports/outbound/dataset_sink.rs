use crate::dataset::{DatasetMetadata, Table};
use crate::shared::Result;

/// How an upload treats an existing dataset with the same id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace whatever is there
    Overwrite,
    /// Fail if the dataset already exists
    ErrorIfExists,
}

/// DatasetSink port for the upload and publish destinations
pub trait DatasetSink {
    /// Stores a validated table together with its metadata
    fn upload(&self, table: &Table, metadata: &DatasetMetadata, mode: WriteMode) -> Result<()>;

    /// Makes a previously uploaded dataset available to consumers
    fn publish(&self, metadata: &DatasetMetadata) -> Result<()>;
}
