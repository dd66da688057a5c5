use crate::error::Result;
use async_trait::async_trait;

/// Loads the rendered content of a single event page.
#[async_trait]
pub trait PageFetcherPort: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}
