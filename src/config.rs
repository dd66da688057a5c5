use crate::constants::{
    DEFAULT_CSV_PREFIX, DEFAULT_EXPORT_DIR, DEFAULT_JSON_PREFIX, DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_SNAPSHOT_ROOT, DEFAULT_USER_AGENT, ENV_PREFIX,
};
use crate::error::{Result, ScraperError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub page_load_timeout_secs: u64,
    pub settle_delay_ms: u64,
    pub user_agent: String,
    pub snapshot_root: PathBuf,
    pub export_dir: PathBuf,
    pub csv_prefix: String,
    pub json_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_load_timeout_secs: DEFAULT_PAGE_LOAD_TIMEOUT_SECS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            snapshot_root: PathBuf::from(DEFAULT_SNAPSHOT_ROOT),
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            csv_prefix: DEFAULT_CSV_PREFIX.to_string(),
            json_prefix: DEFAULT_JSON_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from `config.toml` when present.
    ///
    /// An explicitly requested file that does not exist is an error; a missing
    /// default file just means defaults. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Apply `HIGHAPE_*` overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = var("PAGE_LOAD_TIMEOUT_SECS") {
            self.page_load_timeout_secs = parse_number("PAGE_LOAD_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = var("SETTLE_DELAY_MS") {
            self.settle_delay_ms = parse_number("SETTLE_DELAY_MS", &v)?;
        }
        if let Some(v) = var("USER_AGENT") {
            self.user_agent = v;
        }
        if let Some(v) = var("SNAPSHOT_ROOT") {
            self.snapshot_root = PathBuf::from(v);
        }
        if let Some(v) = var("EXPORT_DIR") {
            self.export_dir = PathBuf::from(v);
        }
        Ok(())
    }

    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

fn parse_number(name: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        ScraperError::Config(format!(
            "{ENV_PREFIX}{name} must be a whole number, got '{value}'"
        ))
    })
}
