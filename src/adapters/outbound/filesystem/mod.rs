/// Filesystem adapters for checkpoints, raw artifacts and published datasets
mod json_state_store;
mod local_dataset_sink;
mod raw_json_store;

pub use json_state_store::JsonStateStore;
pub use local_dataset_sink::LocalDatasetSink;
pub use raw_json_store::RawJsonStore;
