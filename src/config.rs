//! Advisor configuration. The generator itself takes no configuration; this
//! covers the catalog source, search, and logging.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// JSON country catalog; compiled-in list when absent
    pub catalog_path: Option<PathBuf>,
    /// Search behavior
    pub search: SearchConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of matches returned for a query
    pub max_results: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            search: SearchConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: 15 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl AdvisorConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<AdvisorConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
