use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// One folder of published articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSetConfig {
    pub repo: String,
    pub path: PathBuf,
    pub url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_folders: Vec<String>,
}

/// A named group of search patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub name: String,
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub text_threshold: u32,
    /// Tag name to weight. Empty means the built-in weights.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub weights: BTreeMap<String, u32>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            text_threshold: 3,
            weights: BTreeMap::new(),
        }
    }
}

/// Forces a tag for lines of one article that start with `prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideConfig {
    pub file: String,
    pub prefix: String,
    pub tag: String,
}

// Plain values are declared before tables so the TOML writer emits them first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra fence languages on top of the built-in allow-list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    pub strict_utf8: bool,
    pub scoring: ScoringConfig,
    pub content: Vec<ContentSetConfig>,
    pub inventory: Vec<InventoryConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideConfig>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in content paths
        for set in &mut config.content {
            if let Some(expanded) = Self::expand_path(&set.path) {
                set.path = expanded;
            }
        }

        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-inventory");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// A starter config written by `init`.
    pub fn sample() -> Self {
        Self {
            content: vec![ContentSetConfig {
                repo: "azure-docs".into(),
                path: PathBuf::from("~/src/azure-docs/articles"),
                url: "https://learn.microsoft.com/azure".into(),
                exclude_folders: vec!["includes".into()],
            }],
            inventory: vec![
                InventoryConfig {
                    name: "python".into(),
                    terms: vec!["python".into(), r"\bpip\b".into()],
                },
                InventoryConfig {
                    name: "node".into(),
                    terms: vec![r"node\.?js".into(), r"\bnpm\b".into()],
                },
            ],
            ..Self::default()
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
