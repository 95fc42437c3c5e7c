use crate::ports::outbound::HttpFetcher;
use crate::registry_ingest::domain::FetchError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

/// ReqwestFetcher adapter issuing blocking GET requests
///
/// One request is in flight at a time; pacing and retries are layered on top
/// by [`super::ResilientFetcher`].
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a fetcher with the default timeout and user agent
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("npm-registry/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn build_url(url: &str, params: &[(String, String)]) -> std::result::Result<Url, FetchError> {
        Url::parse_with_params(url, params).map_err(|e| FetchError::InvalidRequest {
            url: url.to_string(),
            details: format!("invalid URL: {}", e),
        })
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn get_json(&self, url: &str, params: &[(String, String)]) -> std::result::Result<Value, FetchError> {
        let request_url = Self::build_url(url, params)?;

        let response = self
            .client
            .get(request_url)
            .send()
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().map_err(|e| FetchError::Network {
            url: url.to_string(),
            details: format!("failed to read response body: {}", e),
        })?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            details: e.to_string(),
        })
    }
}

// Note: no Default implementation; client construction can fail and callers
// must handle the Result from ReqwestFetcher::new().

#[cfg(test)]
mod tests {
    use crate::registry_ingest::policies::RetryPolicy;
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        assert!(ReqwestFetcher::new().is_ok());
    }

    #[test]
    fn test_build_url_encodes_params() {
        let url = ReqwestFetcher::build_url(
            "https://registry.npmjs.org/-/v1/search",
            &[
                ("text".to_string(), "a b".to_string()),
                ("size".to_string(), "250".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://registry.npmjs.org/-/v1/search?text=a+b&size=250"
        );
    }

    #[test]
    fn test_build_url_rejects_garbage() {
        let err = ReqwestFetcher::build_url("not a url", &[]).unwrap_err();
        assert!(matches!(err, FetchError::InvalidRequest { .. }));
        assert!(!RetryPolicy::default().is_retryable(&err));
    }
}
