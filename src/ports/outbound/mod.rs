/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console, time).
pub mod clock;
pub mod dataset_sink;
pub mod http_fetcher;
pub mod package_search;
pub mod progress_reporter;
pub mod raw_store;
pub mod state_store;

pub use clock::Clock;
pub use dataset_sink::{DatasetSink, WriteMode};
pub use http_fetcher::HttpFetcher;
pub use package_search::PackageSearch;
pub use progress_reporter::ProgressReporter;
pub use raw_store::RawStore;
pub use state_store::StateStore;
