use std::path::Path;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "scraper.log";

/// Install console logging plus a daily-rolling JSON log under `logs/`.
///
/// If the log directory cannot be created the run continues with console
/// logging only and says so.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("highape_scraper=info,warn"));

    match file_appender(Path::new(LOG_DIR)) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(writer))
                .with(console_layer())
                .init();
            // Flushes on drop; must live as long as the process
            std::mem::forget(guard);
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer())
                .init();
            tracing::warn!(dir = LOG_DIR, error = %e, "File logging disabled");
        }
    }
}

// Operator progress goes to stdout, so diagnostics stay on stderr
fn console_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
}

/// Daily-rolling appender in `dir`, creating the directory when missing.
fn file_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(dir)
}
