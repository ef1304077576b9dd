use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::{get_config_dir, get_config_path, Config};
use crate::matching::SearchOptions;

/// Starter config pointing both stores at the config directory
fn starter_config(data_dir: &Path) -> Config {
    Config {
        candidates_path: Some(data_dir.join("candidates.json")),
        clients_path: Some(data_dir.join("clients.json")),
        matching: Some(SearchOptions::default()),
    }
}

/// Write a starter config file. Refuses to overwrite an existing file.
///
/// Returns the path that was written.
pub fn write_starter_config(path: Option<PathBuf>) -> Result<PathBuf> {
    let config_path = path.unwrap_or_else(get_config_path);

    if config_path.exists() {
        anyhow::bail!(
            "Config already exists at {}. Remove it first to start over.",
            config_path.display()
        );
    }

    let data_dir = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_dir);
    let config = starter_config(&data_dir);

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create directory {}", data_dir.display()))?;

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(config_path)
}
