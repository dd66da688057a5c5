//! Event link loading from a CSV file.

use crate::error::{Result, ScraperError};
use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Read the `column` values of the CSV at `path` as unique links.
///
/// Both a missing file and a missing column are reported before anything
/// else happens. Empty cells are skipped and repeats keep their first
/// position.
pub fn load_links(path: &Path, column: &str) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ScraperError::InputNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ScraperError::ColumnNotFound {
            column: column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })?;

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record?;
        cells.push(record.get(index).map(str::to_string));
    }
    debug!(rows = cells.len(), column, "Read input rows");

    let links = unique_links(cells);
    info!(links = links.len(), path = %path.display(), "Loaded event links");
    Ok(links)
}

/// Drop missing or blank entries and repeats, keeping first-seen order.
pub fn unique_links<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for entry in entries.into_iter().flatten() {
        let link = entry.as_ref().trim();
        if link.is_empty() {
            continue;
        }
        if seen.insert(link.to_string()) {
            links.push(link.to_string());
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_selected_column_deduplicated() {
        let file = write_csv(
            "name,link\n\
             a,https://highape.com/e/1\n\
             b,\n\
             c,https://highape.com/e/2\n\
             d,https://highape.com/e/1\n\
             e\n",
        );
        let links = load_links(file.path(), "link").unwrap();
        assert_eq!(links, vec!["https://highape.com/e/1", "https://highape.com/e/2"]);
    }

    #[test]
    fn missing_file_is_input_error() {
        let err = load_links(Path::new("/no/such/links.csv"), "link").unwrap_err();
        assert!(matches!(err, ScraperError::InputNotFound(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn missing_column_lists_available_headers() {
        let file = write_csv("name,url\na,https://highape.com/e/1\n");
        let err = load_links(file.path(), "link").unwrap_err();
        match err {
            ScraperError::ColumnNotFound { column, available } => {
                assert_eq!(column, "link");
                assert_eq!(available, "name, url");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unique_links_keeps_first_occurrence_order() {
        let links = unique_links(vec![
            Some("b"),
            None,
            Some("a"),
            Some("  "),
            Some("b"),
            Some("c"),
        ]);
        assert_eq!(links, vec!["b", "a", "c"]);
    }
}
