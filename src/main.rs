//! # News SEO
//!
//! Scrapes a news site's category listings, fetches every linked article, and
//! scores each one for sentiment, SEO keyword density, and readability.
//!
//! ## Usage
//!
//! ```sh
//! news_seo -c politics -c tech --csv ./abc_news_data.csv -m ./report.md
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Indexing**: fetch each category listing and extract article stubs
//! 2. **Fetching**: download each article and parse body text and meta tags
//! 3. **Scoring**: compute sentiment, keyword density, and Flesch scores
//! 4. **Output**: write CSV, JSON, and Markdown reports
//!
//! `--from-csv` skips steps 1-3 and renders the outputs from an earlier export.

use clap::Parser;
use std::error::Error;
use std::io;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod fetch;
mod metrics;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use config::Config;
use fetch::HttpFetcher;
use metrics::MetricsEngine;
use outputs::{csv_export, json, markdown};
use pipeline::{Pipeline, RunRequest, report_from_records};
use utils::{ensure_parent_dir, ensure_writable_dir};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_seo starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };

    // Fail before scraping if any output location is unusable
    if let Some(dir) = &args.json_output_dir {
        ensure_writable_dir(dir).await?;
    }
    for file in [&args.csv, &args.markdown].into_iter().flatten() {
        ensure_parent_dir(file).await?;
    }

    let request = RunRequest::new(args.selected_categories(), args.filter.clone());
    info!(categories = ?request.categories, filter = ?request.filter, "Starting run");

    let report = match &args.from_csv {
        Some(path) => {
            let records = csv_export::read_csv_file(path)?;
            report_from_records(&config.site_name, &request, records)
        }
        None => {
            let fetcher = HttpFetcher::new(&config)?;
            let engine = MetricsEngine::from_config(&config);
            let pipeline = Pipeline::new(fetcher, config, engine);
            pipeline.run(&request).await
        }
    };

    for category in &report.unavailable {
        warn!(%category, "No data for this category");
    }

    // ---- Outputs ----
    if let Some(path) = &args.csv {
        if let Err(e) = csv_export::write_csv_file(&report.records, path) {
            error!(path = %path.display(), error = %e, "Failed writing CSV");
        }
    }

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_report(&report, dir).await {
            error!(error = %e, "Failed to write JSON report");
        }
    }

    if let Some(path) = &args.markdown {
        let md = markdown::report_to_markdown(&report);
        match tokio::fs::write(path, md).await {
            Ok(()) => info!(path = %path.display(), "Wrote Markdown report"),
            Err(e) => error!(path = %path.display(), error = %e, "Failed writing Markdown"),
        }
    }

    if args.stdout_only() {
        csv_export::write_csv(&report.records, io::stdout().lock())?;
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = report.records.len(),
        unavailable = report.unavailable.len(),
        "Execution complete"
    );

    Ok(())
}
