/// Mock implementations for testing
mod mock_dataset_sink;
mod mock_package_search;
mod mock_progress_reporter;
mod mock_raw_store;
mod mock_state_store;

pub use mock_dataset_sink::MockDatasetSink;
pub use mock_package_search::{package, MockPackageSearch};
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_raw_store::MockRawStore;
pub use mock_state_store::MockStateStore;
