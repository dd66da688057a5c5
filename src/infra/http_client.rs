use crate::app::ports::PageFetcherPort;
use crate::config::Config;
use crate::error::{Result, ScraperError};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{debug, instrument};
use uuid::Uuid;

static OPEN_SESSIONS: AtomicUsize = AtomicUsize::new(0);

/// Number of browsing sessions currently open in this process.
pub fn open_sessions() -> usize {
    OPEN_SESSIONS.load(Ordering::SeqCst)
}

/// A browsing session scoped to one page load.
///
/// Closed when dropped, so every exit path of the caller releases it.
pub struct BrowserSession {
    id: Uuid,
    client: Client,
    timeout: Duration,
    settle_delay: Duration,
}

impl BrowserSession {
    pub fn open(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.page_load_timeout())
            .build()?;
        let session = Self {
            id: Uuid::new_v4(),
            client,
            timeout: config.page_load_timeout(),
            settle_delay: config.settle_delay(),
        };
        OPEN_SESSIONS.fetch_add(1, Ordering::SeqCst);
        debug!(session = %session.id, "Opened browsing session");
        Ok(session)
    }

    /// Navigate to `url`, wait for the page to settle, and return its content.
    pub async fn load(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.load_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::Fetch {
                url: url.to_string(),
                message: format!("page responded with status {}", status),
            });
        }

        // The page-load timeout covers the body read; settling happens after it
        let html = response.text().await.map_err(|e| self.load_error(url, e))?;

        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }

        Ok(html)
    }

    fn load_error(&self, url: &str, err: reqwest::Error) -> ScraperError {
        if err.is_timeout() {
            ScraperError::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }
        } else {
            ScraperError::Fetch {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        OPEN_SESSIONS.fetch_sub(1, Ordering::SeqCst);
        debug!(session = %self.id, "Closed browsing session");
    }
}

/// Fetches each page in its own [`BrowserSession`].
pub struct BrowserFetcher {
    config: Config,
}

impl BrowserFetcher {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PageFetcherPort for BrowserFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String> {
        let session = BrowserSession::open(&self.config)?;
        session.load(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    // Session counting is process-wide; keep these tests from overlapping.
    static SESSION_LOCK: Mutex<()> = Mutex::const_new(());

    enum Reply {
        Ok(&'static str),
        NotFound,
        Hang,
    }

    /// Serve a single connection on a random local port.
    async fn serve_once(reply: Reply) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = match reply {
                Reply::Ok(body) => format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                ),
                Reply::NotFound => {
                    "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_string()
                }
                Reply::Hang => {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    return;
                }
            };
            let _ = socket.write_all(response.as_bytes()).await;
        });
        format!("http://{}/event", addr)
    }

    fn fetcher(timeout_secs: u64, settle_delay_ms: u64) -> BrowserFetcher {
        BrowserFetcher::new(Config {
            page_load_timeout_secs: timeout_secs,
            settle_delay_ms,
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn session_is_released_when_load_fails() {
        let _guard = SESSION_LOCK.lock().await;
        let fetcher = fetcher(5, 0);
        let before = open_sessions();

        let refused = fetcher.fetch("http://127.0.0.1:1/event").await;
        assert!(matches!(refused, Err(ScraperError::Fetch { .. })));
        assert_eq!(open_sessions(), before);

        let malformed = fetcher.fetch("not a url").await;
        assert!(malformed.is_err());
        assert_eq!(open_sessions(), before);
    }

    #[tokio::test]
    async fn stalled_page_maps_to_timeout() {
        let _guard = SESSION_LOCK.lock().await;
        let url = serve_once(Reply::Hang).await;
        let before = open_sessions();

        let result = fetcher(1, 0).fetch(&url).await;
        match result {
            Err(ScraperError::Timeout { url: failed, seconds }) => {
                assert_eq!(failed, url);
                assert_eq!(seconds, 1);
            }
            other => panic!("expected timeout, got {other:?}"),
        }
        assert_eq!(open_sessions(), before);
    }

    #[tokio::test]
    async fn error_status_maps_to_fetch_error() {
        let _guard = SESSION_LOCK.lock().await;
        let url = serve_once(Reply::NotFound).await;
        let before = open_sessions();

        let result = fetcher(5, 0).fetch(&url).await;
        match result {
            Err(ScraperError::Fetch { message, .. }) => assert!(message.contains("404")),
            other => panic!("expected fetch error, got {other:?}"),
        }
        assert_eq!(open_sessions(), before);
    }

    #[tokio::test]
    async fn settle_delay_does_not_count_against_load_timeout() {
        let _guard = SESSION_LOCK.lock().await;
        let url = serve_once(Reply::Ok("hello")).await;
        let before = open_sessions();

        let html = fetcher(1, 1500).fetch(&url).await.unwrap();
        assert_eq!(html, "hello");
        assert_eq!(open_sessions(), before);
    }
}
