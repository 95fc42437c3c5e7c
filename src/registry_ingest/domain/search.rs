use super::PackageRecord;

/// Ranking weights accepted by the npm search endpoint, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingWeights {
    pub quality: f64,
    pub popularity: f64,
    pub maintenance: f64,
}

impl Default for RankingWeights {
    /// Ranks purely by popularity.
    fn default() -> Self {
        Self {
            quality: 0.0,
            popularity: 1.0,
            maintenance: 0.0,
        }
    }
}

/// One page request against the search endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub size: u32,
    pub from: u32,
    pub weights: RankingWeights,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, size: u32, from: u32, weights: RankingWeights) -> Self {
        Self {
            text: text.into(),
            size,
            from,
            weights,
        }
    }

    /// Query string parameters in the order the registry documents them.
    pub fn to_params(&self) -> Vec<(String, String)> {
        vec![
            ("text".to_string(), self.text.clone()),
            ("size".to_string(), self.size.to_string()),
            ("from".to_string(), self.from.to_string()),
            ("quality".to_string(), format_weight(self.weights.quality)),
            (
                "popularity".to_string(),
                format_weight(self.weights.popularity),
            ),
            (
                "maintenance".to_string(),
                format_weight(self.weights.maintenance),
            ),
        ]
    }
}

/// At least one decimal (`1.0`), otherwise the exact value (`0.25`).
fn format_weight(weight: f64) -> String {
    let exact = weight.to_string();
    if exact.contains('.') {
        exact
    } else {
        format!("{:.1}", weight)
    }
}

/// One page of search results.
///
/// `object_count` is the number of hits the registry returned, including hits
/// that carried no usable name and were therefore left out of `records`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchPage {
    pub object_count: usize,
    pub records: Vec<PackageRecord>,
}

impl SearchPage {
    pub fn new(object_count: usize, records: Vec<PackageRecord>) -> Self {
        Self {
            object_count,
            records,
        }
    }

    /// True when the registry has no more results at this offset
    pub fn is_empty(&self) -> bool {
        self.object_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_use_popularity_ranking() {
        let query = SearchQuery::new("npm", 250, 500, RankingWeights::default());
        let params = query.to_params();

        assert_eq!(
            params,
            vec![
                ("text".to_string(), "npm".to_string()),
                ("size".to_string(), "250".to_string()),
                ("from".to_string(), "500".to_string()),
                ("quality".to_string(), "0.0".to_string()),
                ("popularity".to_string(), "1.0".to_string()),
                ("maintenance".to_string(), "0.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_keep_weight_precision() {
        let weights = RankingWeights {
            quality: 0.25,
            popularity: 0.75,
            maintenance: 0.05,
        };
        let params = SearchQuery::new("npm", 250, 0, weights).to_params();

        assert_eq!(
            &params[3..],
            &[
                ("quality".to_string(), "0.25".to_string()),
                ("popularity".to_string(), "0.75".to_string()),
                ("maintenance".to_string(), "0.05".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_with_unnamed_hits_is_not_empty() {
        let page = SearchPage::new(3, vec![]);
        assert!(!page.is_empty());
        assert!(SearchPage::default().is_empty());
    }
}
