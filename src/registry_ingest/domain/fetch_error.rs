use thiserror::Error;

/// Failure of a single upstream request.
///
/// The variants separate what the retry policy is allowed to retry (status
/// codes it lists, network failures) from what must surface immediately.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{url} returned HTTP status {status}")]
    Status { status: u16, url: String },

    #[error("network error while requesting {url}: {details}")]
    Network { url: String, details: String },

    #[error("failed to decode response from {url}: {details}")]
    Decode { url: String, details: String },

    /// The request could not be built; it never reached the network.
    #[error("invalid request to {url}: {details}")]
    InvalidRequest { url: String, details: String },
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network { .. })
    }
}
