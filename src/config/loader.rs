use std::fs;
use std::path::{Path, PathBuf};

use super::TidyConfig;
use crate::errors::{Result, SortError};

pub const CONFIG_FILE_NAME: &str = ".tidyclass.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse configuration from a TOML string.
pub fn parse_config(contents: &str) -> Result<TidyConfig> {
    toml::from_str::<TidyConfig>(contents)
        .map_err(|e| SortError::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))
}

/// Load an explicitly named config file. Any failure is an error.
pub fn load_config_from(path: &Path) -> Result<TidyConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        SortError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = parse_config(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try one candidate location during discovery. Missing files are silent;
/// unreadable or invalid ones are warnings.
fn try_load_config_from_path(config_path: &Path) -> Option<TidyConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// `start` and up to `max_depth - 1` of its parents.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the nearest config file.
pub fn load_config(start: &Path) -> TidyConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            TidyConfig::default()
        })
}
