/// Network adapters for the npm registry
mod npm_search_client;
mod reqwest_fetcher;
mod resilient_fetcher;

pub use npm_search_client::NpmSearchClient;
pub use reqwest_fetcher::ReqwestFetcher;
pub use resilient_fetcher::ResilientFetcher;
