//! `prodsearch.toml` loading.
//!
//! Every key is optional. Unknown keys are reported with a "did you mean"
//! suggestion; `PRODSEARCH_API` overrides `api_base`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "prodsearch.toml";
pub const API_ENV: &str = "PRODSEARCH_API";

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_SEARCH_PATH: &str = "/api/semantic-search";
pub const DEFAULT_LISTS_PATH: &str = "/api/lists";

const KNOWN_CONFIG_KEYS: &[&str] = &["api_base", "search_path", "lists_path"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Where the search backend lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base: String,
    pub search_path: String,
    pub lists_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            lists_path: DEFAULT_LISTS_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn search_url(&self) -> String {
        join_url(&self.api_base, &self.search_path)
    }

    pub fn lists_url(&self) -> String {
        join_url(&self.api_base, &self.lists_path)
    }

    /// Parse a config file. A missing file is not an error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let table = content.parse::<toml::Table>()?;
        for key in table.keys() {
            warn_unknown_key(key);
        }
        toml::from_str(content)
    }

    /// Load `path` (or `./prodsearch.toml`), apply the env override, and fall
    /// back to defaults with a warning if the file is unusable.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        let mut config = match Self::from_file(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        };
        if let Ok(api) = std::env::var(API_ENV) {
            if !api.trim().is_empty() {
                config.api_base = api.trim().to_string();
            }
        }
        config
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{base}/{}", path.trim_start_matches('/'))
}

fn warn_unknown_key(key: &str) {
    if KNOWN_CONFIG_KEYS.contains(&key) {
        return;
    }
    let suggestion = KNOWN_CONFIG_KEYS
        .iter()
        .copied()
        .min_by_key(|k| edit_distance(key, k))
        .filter(|k| edit_distance(key, k) <= 3);
    match suggestion {
        Some(s) => warn!(key, suggestion = s, "unknown key in {CONFIG_FILE} (did you mean '{s}'?)"),
        None => warn!(key, "unknown key in {CONFIG_FILE}"),
    }
}

/// Levenshtein distance, for typo suggestions.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
