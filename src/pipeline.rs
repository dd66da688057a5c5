use crate::app::ports::PageFetcherPort;
use crate::error::Result;
use crate::extract::extract_event;
use crate::input::unique_links;
use crate::normalize::to_plur_event;
use crate::output::{BatchArtifacts, RunOutput};
use crate::types::{BatchSummary, PlurEvent, RawEvent};
use metrics::{counter, histogram};
use std::time::Instant;
use tracing::{error, info, instrument};

/// Everything one run accumulates: counters plus the retained records.
#[derive(Debug, Default)]
pub struct RunContext {
    pub summary: BatchSummary,
    pub events: Vec<RawEvent>,
    pub plur_events: Vec<PlurEvent>,
}

/// Sequential batch scraper over a list of event links.
pub struct Pipeline<'a> {
    fetcher: &'a dyn PageFetcherPort,
    output: &'a RunOutput,
}

impl<'a> Pipeline<'a> {
    pub fn new(fetcher: &'a dyn PageFetcherPort, output: &'a RunOutput) -> Self {
        Self { fetcher, output }
    }

    /// Scrape every unique link in order, one at a time.
    ///
    /// Per-link failures are recorded in the summary and never abort the run.
    pub async fn run<S: AsRef<str>>(&self, urls: &[S]) -> RunContext {
        let links = unique_links(urls.iter().map(Some));
        info!(links = links.len(), "Starting batch");
        println!("🚀 Starting to scrape {} events...\n", links.len());

        let mut ctx = RunContext::default();
        for (i, url) in links.iter().enumerate() {
            ctx.summary.record_attempt();
            counter!("highape_urls_total").increment(1);
            let started = Instant::now();

            match self.scrape_event(url).await {
                Ok((event, plur)) => {
                    ctx.summary.record_success();
                    counter!("highape_urls_succeeded_total").increment(1);
                    println!("✅ [{}/{}] {}", i + 1, links.len(), url);
                    ctx.events.push(event);
                    ctx.plur_events.push(plur);
                }
                Err(e) => {
                    ctx.summary.record_failure(url);
                    counter!("highape_urls_failed_total").increment(1);
                    error!(url = %url, error = %e, "Failed to scrape event");
                    println!("❌ Failed to scrape: {}\n{}", url, e);
                }
            }

            histogram!("highape_extract_duration_seconds").record(started.elapsed().as_secs_f64());
        }

        info!(
            total = ctx.summary.total,
            success = ctx.summary.success,
            failed = ctx.summary.failed,
            "Batch finished"
        );
        ctx
    }

    /// Fetch, extract, snapshot and normalize a single event page.
    #[instrument(skip(self))]
    pub async fn scrape_event(&self, url: &str) -> Result<(RawEvent, PlurEvent)> {
        let html = self.fetcher.fetch(url).await?;
        let mut event = extract_event(url, &html)?;

        let snapshot = self.output.write_snapshot(&event, &html)?;
        event.json_file_path = snapshot.to_string_lossy().into_owned();

        let plur = to_plur_event(&event);
        event.plur_json_format = serde_json::to_string_pretty(&plur)?;
        event.raw_html = None;

        Ok((event, plur))
    }
}

/// Print the end-of-run summary for the operator.
pub fn report(summary: &BatchSummary, artifacts: &BatchArtifacts) {
    println!(
        "\n✅ Scraping completed. CSV saved as: {}",
        artifacts.csv_path.display()
    );
    println!("   Structured JSON: {}", artifacts.json_path.display());
    println!(
        "📊 Summary: {} succeeded, {} failed out of {}",
        summary.success, summary.failed, summary.total
    );
    if !summary.failed_links.is_empty() {
        println!("❗ Failed links:");
        for link in &summary.failed_links {
            println!("- {}", link);
        }
    }
}
