mod analyzer;
mod board;
mod classifier;
mod config;
mod model;
mod normalizer;
mod parser;
mod source;
mod utils;

use analyzer::{Analyzer, AnalyzerImpl};
use board::{Board, Dataset, LoadState};
use classifier::StatusCategory;
use config::{AppConfig, load_config};
use normalizer::normalize_all;
use parser::{LicitacaoCsvParser, Parser};
use source::{CsvSource, HttpCsvSource, LocalFileSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use utils::format_brl;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let source: Box<dyn CsvSource> = match build_source(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Source setup error: {}", e);
            return;
        }
    };

    let board = Arc::new(Mutex::new(Board::new()));

    load_board(source.as_ref(), board.clone()).await;

    report(&*board.lock().await);
}

fn build_source(config: &AppConfig) -> Result<Box<dyn CsvSource>, String> {
    if let Some(url) = &config.csv_url {
        let timeout = Duration::from_secs(config.fetch_timeout_seconds);
        let http = HttpCsvSource::new(url.clone(), timeout).map_err(|e| e.to_string())?;
        return Ok(Box::new(http));
    }
    if let Some(path) = &config.csv_file {
        return Ok(Box::new(LocalFileSource::new(path)));
    }
    Err("config must set csv_url or csv_file".into())
}

/// Runs one full load: fetch, parse, normalize, aggregate, publish. Fetch
/// and header failures end in `fail_load`; per-row anomalies only warn.
async fn load_board(source: &dyn CsvSource, board: Arc<Mutex<Board>>) {
    let token = board.lock().await.begin_load();

    info!("Fetching CSV...");
    let csv_text = match source.fetch().await {
        Ok(text) => text,
        Err(e) => {
            warn!("Fetch error: {}", e);
            board.lock().await.fail_load(token, e.to_string());
            return;
        }
    };

    info!("Parsing CSV...");
    let outcome = match LicitacaoCsvParser::new().parse(&csv_text) {
        Ok(o) => o,
        Err(e) => {
            warn!("Parse error: {}", e);
            board.lock().await.fail_load(token, e.to_string());
            return;
        }
    };
    if outcome.malformed_rows > 0 {
        warn!("Skipped {} malformed rows", outcome.malformed_rows);
    }
    if outcome.filtered_rows > 0 {
        info!("Dropped {} rows without bidding_id", outcome.filtered_rows);
    }

    let records = normalize_all(outcome.rows);
    let stats = AnalyzerImpl::new().calculate_stats(&records);
    if stats.unparsed_values > 0 {
        warn!(
            "{} estimated values could not be parsed and counted as zero",
            stats.unparsed_values
        );
    }

    board.lock().await.complete_load(token, Dataset { records, stats });
}

/// The summary the dashboard header shows: record count, total value,
/// per-category breakdown.
fn report(board: &Board) {
    match board.state() {
        LoadState::Empty => info!("No dataset loaded yet."),
        LoadState::Failed(e) => error!("Dataset failed to load: {}", e),
        LoadState::Loaded(dataset) => {
            info!("Licitações encontradas: {}", dataset.stats.record_count);
            info!(
                "Valor estimado total: {}",
                format_brl(dataset.stats.total_estimated_value)
            );
            for category in StatusCategory::ALL {
                if let Some(count) = dataset.stats.status_counts.get(&category) {
                    info!("  {}: {}", category.display_name(), count);
                }
            }
        }
    }
}
