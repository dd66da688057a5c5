use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Column '{column}' not found in CSV (available: {available})")]
    ColumnNotFound { column: String, available: String },

    #[error("Invalid selector '{0}'")]
    Selector(String),

    #[error("Failed to load {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Timed out after {seconds}s loading {url}")]
    Timeout { url: String, seconds: u64 },
}

impl ScraperError {
    /// Input validation failures abort the run before any URL is touched.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ScraperError::InputNotFound(_) | ScraperError::ColumnNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;
