use crate::registry_ingest::domain::{SearchPage, SearchQuery};
use crate::shared::Result;

/// PackageSearch port for the registry's paginated search
pub trait PackageSearch {
    /// Fetches one page of results for `query`
    ///
    /// # Returns
    /// The page's hits flattened into records; hits without a name are
    /// counted in `object_count` but omitted from `records`
    fn search(&self, query: &SearchQuery) -> Result<SearchPage>;
}
