use crate::registry_ingest::domain::FetchError;
use serde_json::Value;

/// HttpFetcher port for GET requests returning JSON
///
/// Implementations must report every non-2xx response as
/// [`FetchError::Status`] so retry decisions can inspect the code.
pub trait HttpFetcher {
    /// Issues one GET request and parses the body as JSON
    ///
    /// # Arguments
    /// * `url` - Endpoint URL without query string
    /// * `params` - Query parameters, encoded by the implementation
    ///
    /// # Errors
    /// Returns a [`FetchError`] describing the status, network or decode failure
    fn get_json(&self, url: &str, params: &[(String, String)]) -> Result<Value, FetchError>;
}
