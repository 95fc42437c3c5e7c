use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// One discovered npm package, flattened from a search hit.
///
/// This is the raw-artifact record shape. Field order here is the order fields
/// appear in `popular_packages.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub date: Option<String>,
    pub publisher_username: Option<String>,
    #[serde(default)]
    pub maintainers_count: u32,
    pub keywords: Option<Vec<String>>,
    pub repository_url: Option<String>,
    pub homepage_url: Option<String>,
    pub npm_url: Option<String>,
    pub score_final: Option<f64>,
    pub score_quality: Option<f64>,
    pub score_popularity: Option<f64>,
    pub score_maintenance: Option<f64>,
}

impl PackageRecord {
    /// Creates a record with only a name; every optional field is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        Ok(Self {
            name,
            version: None,
            description: None,
            license: None,
            date: None,
            publisher_username: None,
            maintainers_count: 0,
            keywords: None,
            repository_url: None,
            homepage_url: None,
            npm_url: None,
            score_final: None,
            score_quality: None,
            score_popularity: None,
            score_maintenance: None,
        })
    }
}
