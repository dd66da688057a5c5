use anyhow::Context;
use chrono::Local;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

use highape_scraper::config::Config;
use highape_scraper::infra::http_client::BrowserFetcher;
use highape_scraper::input::load_links;
use highape_scraper::logging;
use highape_scraper::output::{write_batch, RunOutput};
use highape_scraper::pipeline::{report, Pipeline};

#[derive(Parser)]
#[command(name = "highape_scraper")]
#[command(about = "Scrape HighApe event pages into Plur event records")]
#[command(version = "0.1.0")]
struct Cli {
    /// CSV file containing event links (prompted for when omitted)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Column holding the event links (prompted for when omitted)
    #[arg(long)]
    column: Option<String>,
    /// Configuration file; defaults to ./config.toml when present
    #[arg(long)]
    config: Option<PathBuf>,
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    let input = match cli.input {
        Some(path) => path,
        None => PathBuf::from(prompt("📄 Enter the input CSV file name: ")?),
    };
    let column = match cli.column {
        Some(column) => column,
        None => prompt("🔍 Enter the column name containing event links: ")?,
    };

    let links = match load_links(&input, &column) {
        Ok(links) => links,
        Err(e) if e.is_input_error() => {
            error!(error = %e, "Input validation failed");
            println!("❌ {}", e);
            return Ok(());
        }
        Err(e) => return Err(e).context("reading input CSV"),
    };

    let run = RunOutput::create(&config.snapshot_root, Local::now())?;
    let fetcher = BrowserFetcher::new(config.clone());
    let ctx = Pipeline::new(&fetcher, &run).run(&links).await;

    let artifacts = write_batch(
        &config.export_dir,
        &config.csv_prefix,
        &config.json_prefix,
        Local::now(),
        &ctx.events,
        &ctx.plur_events,
    )
    .context("writing batch exports")?;

    info!(
        csv = %artifacts.csv_path.display(),
        json = %artifacts.json_path.display(),
        "Run complete"
    );
    report(&ctx.summary, &artifacts);
    Ok(())
}
