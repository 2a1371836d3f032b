//! Batch report for one or more identifiers.
//!
//! Usage: `stockpiler AAPL,MSFT` or `stockpiler symbols.txt` (one per line).
//! Data comes from the fixture directory in `STOCKPILER_DATA_DIR`.

use std::path::Path;
use std::sync::Arc;

use dotenvy::dotenv;
use stockpiler::config::AppConfig;
use stockpiler::indicators::IndicatorEngine;
use stockpiler::logging;
use stockpiler::models::{IndicatorReport, SecurityReport, SentimentAnalysis, SentimentOutcome};
use stockpiler::pipeline::{
    parse_symbol_list, read_symbol_file, Pipeline, PipelineContext, PipelineSettings,
};
use stockpiler::sentiment::SentimentAggregator;
use stockpiler::services::FixtureStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_cli_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let symbols = match args.as_slice() {
        [single] if Path::new(single).is_file() => read_symbol_file(Path::new(single))?,
        _ => parse_symbol_list(&args.join(",")),
    };
    if symbols.is_empty() {
        return Err("no valid entries provided; pass SYMBOL[,SYMBOL...] or a file path".into());
    }

    let config = AppConfig::from_env()?;
    info!(data_dir = %config.data_dir.display(), symbols = ?symbols, "Running batch");

    let store = Arc::new(FixtureStore::from_dir(config.data_dir.clone()));
    let pipeline = Pipeline::new(
        PipelineContext::new(store.clone(), store),
        IndicatorEngine::new(config.indicators.clone())?,
        SentimentAggregator::default(),
    )
    .with_settings(PipelineSettings {
        lookback: config.lookback,
        news_limit: config.news_limit,
    });

    for report in pipeline.analyze_batch(&symbols).await {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &SecurityReport) {
    println!("{}:", report.symbol);

    match report.indicators.result() {
        Some(indicators) => print_indicators(indicators),
        None => println!(
            "  Indicators unavailable: {}",
            report.indicators.error().unwrap_or("unknown error")
        ),
    }

    match report.sentiment.result() {
        Some(sentiment) => print_sentiment(sentiment),
        None => println!(
            "  Sentiment unavailable: {}",
            report.sentiment.error().unwrap_or("unknown error")
        ),
    }
    println!();
}

fn print_indicators(report: &IndicatorReport) {
    println!(
        "  MACD: {:.2} ({})",
        report.result.macd,
        report.trend.as_str()
    );
    println!("  Signal Line: {:.2}", report.result.signal_line);
    match (report.result.rsi, report.rsi_zone) {
        (Some(rsi), Some(zone)) => println!("  RSI: {:.2} ({})", rsi, zone.as_str()),
        _ => println!("  RSI: N/A"),
    }
}

fn print_sentiment(analysis: &SentimentAnalysis) {
    match analysis.outcome {
        SentimentOutcome::NoData => println!("  No recent news articles found."),
        SentimentOutcome::Summary(summary) => println!(
            "  Sentiment: {} (Negative: {}, Neutral: {}, Positive: {})",
            summary.overall.as_str(),
            summary.negative_count,
            summary.neutral_count,
            summary.positive_count
        ),
    }
}
