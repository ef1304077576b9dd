use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::matching::SearchOptions;

/// Application configuration.
///
/// Example YAML:
/// ```yaml
/// candidates_path: /srv/goldsmith/candidates.json
/// clients_path: /srv/goldsmith/clients.json
/// matching:
///   min_score: 60
///   limit: 10
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Candidate store snapshot (default: candidates.json in the config dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates_path: Option<PathBuf>,

    /// Client store snapshot (default: clients.json in the config dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clients_path: Option<PathBuf>,

    /// Default search options for match commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching: Option<SearchOptions>,
}

impl Config {
    pub fn candidates_path(&self) -> PathBuf {
        self.candidates_path
            .clone()
            .unwrap_or_else(|| super::get_config_dir().join("candidates.json"))
    }

    pub fn clients_path(&self) -> PathBuf {
        self.clients_path
            .clone()
            .unwrap_or_else(|| super::get_config_dir().join("clients.json"))
    }

    pub fn search_options(&self) -> SearchOptions {
        self.matching.clone().unwrap_or_default()
    }
}
