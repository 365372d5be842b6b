//! Headless dashboard host: loads the dataset once and prints the
//! dashboard snapshot for a selection as JSON
//!
//! Usage: `layoffs-dashboard [SELECTION_JSON]`, for example
//! `layoffs-dashboard '{"years": [2022, 2023], "countries": ["United States"]}'`.

use anyhow::Result;
use arrow::util::pretty::pretty_format_batches;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lv_core::{FilterSelection, LoadReport};
use lv_data::{apply_filters, table_to_record_batch, CsvSource, FilterOptions, RecordStore};
use lv_views::{matching_records, DashboardSnapshot};

mod config;

use config::AppConfig;

/// Everything the host hands to the rendering layer
#[derive(Serialize)]
struct DashboardOutput<'a> {
    title: &'a str,
    description: &'a str,
    source: &'a str,
    report: LoadReport,
    options: &'a FilterOptions,
    snapshot: DashboardSnapshot,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;
    info!("Starting {}", config.title);

    let store = RecordStore::open(&CsvSource::new(config.loader.clone()))?;

    let selection = match std::env::args().nth(1) {
        Some(json) => FilterSelection::from_json(&json)?,
        None => FilterSelection::all(),
    };
    info!(
        "Selection matches {} of {} records",
        matching_records(store.table(), &selection),
        store.table().len()
    );

    let snapshot = DashboardSnapshot::build(store.table(), &selection, &config.dashboard);
    if snapshot.is_empty() {
        warn!("Selection matched no records");
    }

    if config.preview_rows > 0 {
        let batch = table_to_record_batch(&apply_filters(store.table(), &selection))?;
        let preview = batch.slice(0, config.preview_rows.min(batch.num_rows()));
        eprintln!("{}", pretty_format_batches(&[preview])?);
    }

    let output = DashboardOutput {
        title: &config.title,
        description: &config.description,
        source: store.source_name(),
        report: store.report(),
        options: store.filter_options(),
        snapshot,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
