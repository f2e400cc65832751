//! Configuration handling for the TUI

use crate::generation::DEFAULT_BASE_URL;
use anyhow::Result;
use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default HTTP timeout for generation requests
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Terminal front end for generating legal documents
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "legaldoc-tui", version, about, long_about = None)]
pub struct Cli {
    /// Open this document tool directly (e.g. will, nda, rental-agreement)
    #[arg(long)]
    pub tool: Option<String>,

    /// Base URL of the document generation service
    #[arg(long, env = "LEGALDOC_API_URL")]
    pub api_url: Option<String>,

    /// Directory downloaded documents are written to
    #[arg(long, env = "LEGALDOC_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Generation service base URL
    pub api_base_url: Option<String>,
    /// Where downloads are saved
    pub output_dir: Option<PathBuf>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Tool opened most recently
    pub last_tool: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "legaldoc", "legaldoc-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// CLI and environment values win over the file
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.api_url {
            self.api_base_url = Some(url.clone());
        }
        if let Some(dir) = &cli.output_dir {
            self.output_dir = Some(dir.clone());
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
