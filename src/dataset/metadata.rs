use super::field_rules::PACKAGE_FIELDS;
use serde::Serialize;

/// Identifier of the published dataset
pub const DATASET_ID: &str = "npm_popular_packages";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescription {
    pub name: String,
    pub description: String,
}

/// Descriptive metadata handed to the upload and publish sinks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetMetadata {
    pub id: String,
    pub title: String,
    pub description: String,
    pub column_descriptions: Vec<ColumnDescription>,
}

impl DatasetMetadata {
    pub fn popular_packages() -> Self {
        Self {
            id: DATASET_ID.to_string(),
            title: "npm Popular Packages".to_string(),
            description: "Top 10,000 most popular packages on npm (Node.js package registry), \
                          ranked by popularity score. Includes metadata, licensing, and quality scores."
                .to_string(),
            column_descriptions: PACKAGE_FIELDS
                .iter()
                .map(|spec| ColumnDescription {
                    name: spec.column.to_string(),
                    description: spec.description.to_string(),
                })
                .collect(),
        }
    }
}
