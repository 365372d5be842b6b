//! Application configuration

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::Context;
use serde::{Serialize, Deserialize};

use lv_data::LoaderConfig;
use lv_views::DashboardConfig;

/// Environment variable naming a JSON configuration file
pub const CONFIG_ENV: &str = "LAYOFFS_CONFIG";

/// Environment variable overriding the dataset path
pub const DATA_PATH_ENV: &str = "LAYOFFS_DATA_PATH";

/// Top-level configuration of the dashboard host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub description: String,
    pub loader: LoaderConfig,
    pub dashboard: DashboardConfig,
    /// Rows shown in the table preview
    pub preview_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Global Layoffs Dashboard".to_string(),
            description: "Layoff events by year, industry and country".to_string(),
            loader: LoaderConfig::default(),
            dashboard: DashboardConfig::default(),
            preview_rows: 10,
        }
    }
}

impl AppConfig {
    /// Resolve the configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        let config_path = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let data_path = env::var_os(DATA_PATH_ENV).map(PathBuf::from);
        Self::resolve(config_path.as_deref(), data_path)
    }

    /// Read the optional config file, then apply the data path override
    pub fn resolve(config_path: Option<&Path>, data_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };

        if let Some(path) = data_path {
            config.loader.path = path;
        }
        config.loader.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }
}
