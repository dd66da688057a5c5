//! Output naming and scraping defaults shared across the crate

/// Timestamp format embedded in run directories and export file names
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub const RUN_DIR_PREFIX: &str = "run_";
pub const SNAPSHOT_PREFIX: &str = "event_";

pub const DEFAULT_SNAPSHOT_ROOT: &str = "event_json_files";
pub const DEFAULT_EXPORT_DIR: &str = ".";
pub const DEFAULT_CSV_PREFIX: &str = "highape_events_enriched";
pub const DEFAULT_JSON_PREFIX: &str = "highape_events_structured";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_PAGE_LOAD_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 5000;

/// Ticket amount recorded when the page shows no price
pub const FREE_ENTRY: &str = "Free Entry";

/// Feature-flag value used for every "enabled" raw flag
pub const FLAG_YES: &str = "Yes";

pub const DEFAULT_LANGUAGE: &str = "English";

/// Minimum age written when a policy term mentions "21+"
pub const ADULT_MINIMUM_AGE: &str = "21";

pub const LIST_SEPARATOR: &str = ", ";

/// Prefix for environment overrides of config values
pub const ENV_PREFIX: &str = "HIGHAPE_";
