use crate::ports::outbound::{HttpFetcher, PackageSearch};
use crate::registry_ingest::domain::{PackageRecord, SearchPage, SearchQuery};
use crate::shared::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes an optional field, treating a value of the wrong shape as absent.
///
/// Registry metadata is author-supplied; one package with an odd `keywords`
/// or `license` must not fail the whole page.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default, deserialize_with = "lenient")]
    objects: Option<Vec<SearchObject>>,
}

#[derive(Debug, Deserialize)]
struct SearchObject {
    #[serde(default, deserialize_with = "lenient")]
    package: Option<NpmPackage>,
    #[serde(default, deserialize_with = "lenient")]
    score: Option<NpmScore>,
}

#[derive(Debug, Deserialize)]
struct NpmPackage {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    version: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    license: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    publisher: Option<NpmPublisher>,
    #[serde(default, deserialize_with = "lenient")]
    maintainers: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    keywords: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    links: Option<NpmLinks>,
}

#[derive(Debug, Deserialize)]
struct NpmPublisher {
    #[serde(default, deserialize_with = "lenient")]
    username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NpmLinks {
    #[serde(default, deserialize_with = "lenient")]
    repository: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    homepage: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    npm: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NpmScore {
    #[serde(default, rename = "final", deserialize_with = "lenient")]
    final_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    detail: Option<NpmScoreDetail>,
}

#[derive(Debug, Default, Deserialize)]
struct NpmScoreDetail {
    #[serde(default, deserialize_with = "lenient")]
    quality: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    popularity: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    maintenance: Option<f64>,
}

impl SearchObject {
    /// Flattens the hit; `None` when it has no usable name.
    fn into_record(self) -> Option<PackageRecord> {
        let package = self.package?;
        let name = package.name.filter(|n| !n.is_empty())?;
        let links = package.links.unwrap_or_default();
        let score = self.score.unwrap_or_default();
        let detail = score.detail.unwrap_or_default();

        Some(PackageRecord {
            name,
            version: package.version,
            description: package.description,
            license: package.license,
            date: package.date,
            publisher_username: package.publisher.and_then(|p| p.username),
            maintainers_count: package
                .maintainers
                .map_or(0, |m| u32::try_from(m.len()).unwrap_or(u32::MAX)),
            keywords: package.keywords,
            repository_url: links.repository,
            homepage_url: links.homepage,
            npm_url: links.npm,
            score_final: score.final_score,
            score_quality: detail.quality,
            score_popularity: detail.popularity,
            score_maintenance: detail.maintenance,
        })
    }
}

/// NpmSearchClient adapter for the registry's `/-/v1/search` endpoint
///
/// Translates [`SearchQuery`] into request parameters and the response body
/// into [`PackageRecord`]s. Pacing and retries belong to the injected fetcher.
pub struct NpmSearchClient<F> {
    fetcher: F,
    search_url: String,
}

impl<F: HttpFetcher> NpmSearchClient<F> {
    pub fn new(fetcher: F, search_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            search_url: search_url.into(),
        }
    }
}

impl<F: HttpFetcher> PackageSearch for NpmSearchClient<F> {
    fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        let body = self
            .fetcher
            .get_json(&self.search_url, &query.to_params())
            .with_context(|| {
                format!(
                    "Search for '{}' at offset {} failed",
                    query.text, query.from
                )
            })?;

        let response: SearchResponse = serde_json::from_value(body).with_context(|| {
            format!(
                "Unexpected search response shape for '{}' at offset {}",
                query.text, query.from
            )
        })?;

        let objects = response.objects.unwrap_or_default();
        let object_count = objects.len();
        let records = objects
            .into_iter()
            .filter_map(SearchObject::into_record)
            .collect();

        Ok(SearchPage::new(object_count, records))
    }
}
