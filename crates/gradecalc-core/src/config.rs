//! gradecalc configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides `records_file`.
pub const RECORDS_FILE_ENV: &str = "GRADECALC_RECORDS_FILE";

/// How the calculator prints a grade report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// Top-level gradecalc configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradecalcConfig {
    /// CSV file read by the `records` commands.
    #[serde(default = "default_records_file")]
    pub records_file: PathBuf,
    /// Output format for `calc` when `--format` is not given.
    #[serde(default)]
    pub default_format: ReportFormat,
    /// Ask before deleting a record in an edit session.
    #[serde(default = "default_true")]
    pub confirm_deletes: bool,
}

fn default_records_file() -> PathBuf {
    PathBuf::from("MOCK_DATA.csv")
}

fn default_true() -> bool {
    true
}

impl Default for GradecalcConfig {
    fn default() -> Self {
        Self {
            records_file: default_records_file(),
            default_format: ReportFormat::Text,
            confirm_deletes: true,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `gradecalc.toml` in the current directory
/// 2. `~/.config/gradecalc/config.toml`
///
/// `GRADECALC_RECORDS_FILE` overrides `records_file` either way.
pub fn load_config_from(path: Option<&Path>) -> Result<GradecalcConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradecalc.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradecalcConfig::default(),
    };

    if let Ok(file) = std::env::var(RECORDS_FILE_ENV) {
        if !file.trim().is_empty() {
            config.records_file = PathBuf::from(file);
        }
    }

    Ok(config)
}

pub fn parse_config_str(content: &str) -> Result<GradecalcConfig> {
    Ok(toml::from_str::<GradecalcConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradecalc"))
}
