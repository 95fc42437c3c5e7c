pub mod fetch_error;
pub mod ingest_plan;
pub mod ingest_state;
pub mod package_record;
pub mod search;

pub use fetch_error::FetchError;
pub use ingest_plan::IngestPlan;
pub use ingest_state::{IngestState, TermCursor};
pub use package_record::PackageRecord;
pub use search::{RankingWeights, SearchPage, SearchQuery};
