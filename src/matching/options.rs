use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SCORE: f64 = 50.0;

fn default_min_score() -> f64 {
    DEFAULT_MIN_SCORE
}

/// Filtering and truncation applied to ranked match searches.
///
/// Example YAML:
/// ```yaml
/// matching:
///   min_score: 60
///   limit: 10
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SearchOptions {
    /// Minimum score (inclusive) a match needs to be returned (default: 50)
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Maximum number of matches to return. `None` returns every match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            limit: None,
        }
    }
}

impl SearchOptions {
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Truncate a ranked list. A limit of 0 leaves the list untouched.
    pub(crate) fn truncate<T>(&self, matches: &mut Vec<T>) {
        if let Some(limit) = self.limit.filter(|&n| n > 0) {
            matches.truncate(limit);
        }
    }
}

/// Validate search options loaded from config.
/// Returns all validation errors at once (not just the first).
pub fn validate_search_options(options: &SearchOptions) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !(0.0..=100.0).contains(&options.min_score) {
        errors.push(format!(
            "matching.min_score: must be between 0 and 100, got {}",
            options.min_score
        ));
    }

    if options.limit == Some(0) {
        errors.push("matching.limit: must be greater than 0".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
