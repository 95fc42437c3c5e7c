use super::table::DataType;

/// Smallest acceptable npm_popular_packages dataset
pub const DEFAULT_MIN_ROWS: usize = 5000;

/// Leading key values checked for emptiness
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Data-quality expectations for one published table.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaContract {
    /// Expected column name and type
    pub columns: Vec<(String, DataType)>,
    pub not_null: Vec<String>,
    pub unique: Vec<String>,
    pub min_rows: usize,
    /// Numeric columns that must be >= 0 (zero allowed)
    pub non_negative: Vec<String>,
    /// Column and number of leading values that must be non-empty
    pub sample_non_empty: Option<(String, usize)>,
}

impl SchemaContract {
    /// Contract for npm_popular_packages.
    ///
    /// Declared independently of the rule table; the two must agree.
    pub fn popular_packages(min_rows: usize) -> Self {
        let columns = [
            ("name", DataType::String),
            ("version", DataType::String),
            ("description", DataType::String),
            ("license", DataType::String),
            ("date", DataType::String),
            ("publisher_username", DataType::String),
            ("maintainers_count", DataType::Int),
            ("keywords", DataType::StringList),
            ("repository_url", DataType::String),
            ("homepage_url", DataType::String),
            ("npm_url", DataType::String),
            ("score_final", DataType::Double),
            ("score_quality", DataType::Double),
            ("score_popularity", DataType::Double),
            ("score_maintenance", DataType::Double),
        ];

        Self {
            columns: columns
                .iter()
                .map(|(name, data_type)| (name.to_string(), *data_type))
                .collect(),
            not_null: vec!["name".to_string()],
            unique: vec!["name".to_string()],
            min_rows,
            non_negative: vec!["maintainers_count".to_string()],
            sample_non_empty: Some(("name".to_string(), DEFAULT_SAMPLE_SIZE)),
        }
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}
