//! Run-scoped output files.

use crate::constants::{RUN_DIR_PREFIX, SNAPSHOT_PREFIX, TIMESTAMP_FORMAT};
use crate::error::Result;
use crate::types::{EventSnapshot, PlurEvent, RawEvent};
use chrono::{DateTime, Local};
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn timestamp(at: DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Directory holding the per-event snapshots of one run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    dir: PathBuf,
}

impl RunOutput {
    /// Create `<root>/run_<started_at>`.
    pub fn create(root: &Path, started_at: DateTime<Local>) -> Result<Self> {
        let dir = root.join(format!("{}{}", RUN_DIR_PREFIX, timestamp(started_at)));
        fs::create_dir_all(&dir)?;
        info!(dir = %dir.display(), "Created run output directory");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `event_<id>.json` with the id, source link and page content.
    pub fn write_snapshot(&self, event: &RawEvent, raw_html: &str) -> Result<PathBuf> {
        let path = self
            .dir
            .join(format!("{}{}.json", SNAPSHOT_PREFIX, event.event_id));
        let snapshot = EventSnapshot {
            event_id: event.event_id.clone(),
            external_event_link: event.external_event_link.clone(),
            raw_html: raw_html.to_string(),
        };
        fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
        debug!(path = %path.display(), "Wrote event snapshot");
        Ok(path)
    }
}

/// Paths of the end-of-run exports.
#[derive(Debug, Clone)]
pub struct BatchArtifacts {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
}

/// Write the CSV of raw events and the JSON array of canonical events.
pub fn write_batch(
    export_dir: &Path,
    csv_prefix: &str,
    json_prefix: &str,
    finished_at: DateTime<Local>,
    events: &[RawEvent],
    plur_events: &[PlurEvent],
) -> Result<BatchArtifacts> {
    fs::create_dir_all(export_dir)?;
    let ts = timestamp(finished_at);

    let csv_path = export_dir.join(format!("{csv_prefix}_{ts}.csv"));
    write_events_csv(&csv_path, events)?;

    let json_path = export_dir.join(format!("{json_prefix}_{ts}.json"));
    write_plur_json(&json_path, plur_events)?;

    info!(
        csv = %csv_path.display(),
        json = %json_path.display(),
        events = events.len(),
        "Wrote batch exports"
    );
    Ok(BatchArtifacts { csv_path, json_path })
}

/// One quoted row per event, headed by every raw field name.
pub fn write_events_csv(path: &Path, events: &[RawEvent]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)?;
    if events.is_empty() {
        writer.write_record(raw_event_columns()?)?;
    }
    for event in events {
        writer.serialize(event)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_plur_json(path: &Path, plur_events: &[PlurEvent]) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(plur_events)?)?;
    Ok(())
}

/// Column names of the raw event export, in order.
pub fn raw_event_columns() -> Result<Vec<String>> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.serialize(RawEvent::new(""))?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    Ok(reader.headers()?.iter().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 16, 9, 5, 3).unwrap()
    }

    #[test]
    fn run_dir_embeds_start_timestamp() {
        let root = tempfile::tempdir().unwrap();
        let run = RunOutput::create(root.path(), fixed_time()).unwrap();
        assert!(run.dir().ends_with("run_20261016_090503"));
        assert!(run.dir().is_dir());
    }

    #[test]
    fn snapshot_contains_id_link_and_html() {
        let root = tempfile::tempdir().unwrap();
        let run = RunOutput::create(root.path(), fixed_time()).unwrap();
        let event = RawEvent::new("https://highape.com/e/1");

        let path = run.write_snapshot(&event, "<html>hi</html>").unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            format!("event_{}.json", event.event_id)
        );

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["eventId"], event.event_id.as_str());
        assert_eq!(value["externalEventLink"], "https://highape.com/e/1");
        assert_eq!(value["rawHtml"], "<html>hi</html>");
    }

    #[test]
    fn csv_quotes_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.csv");
        let mut event = RawEvent::new("https://highape.com/e/1");
        event.event_name = "Live, Loud".into();
        write_events_csv(&path, &[event]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("\"externalEventLink\",\"eventId\""));
        assert!(header.ends_with("\"Plur_json_format\",\"jsonFilePath\""));
        assert!(!header.contains("rawHtml"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("\"https://highape.com/e/1\""));
        assert!(row.contains("\"Live, Loud\""));
    }

    #[test]
    fn columns_follow_field_order() {
        let columns = raw_event_columns().unwrap();
        assert_eq!(columns.first().map(String::as_str), Some("externalEventLink"));
        assert_eq!(columns.last().map(String::as_str), Some("jsonFilePath"));
        assert!(columns.iter().any(|c| c == "policyAndConditions"));
        assert!(!columns.iter().any(|c| c == "rawHtml"));
    }

    #[test]
    fn empty_csv_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.csv");
        write_events_csv(&path, &[]).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("\"externalEventLink\""));
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn batch_files_share_completion_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts =
            write_batch(dir.path(), "enriched", "structured", fixed_time(), &[], &[]).unwrap();
        assert!(artifacts.csv_path.ends_with("enriched_20261016_090503.csv"));
        assert!(artifacts.json_path.ends_with("structured_20261016_090503.json"));
        assert_eq!(fs::read_to_string(&artifacts.json_path).unwrap(), "[]");
    }
}
