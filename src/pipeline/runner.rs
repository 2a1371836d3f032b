//! Per-symbol and batch analysis.
//!
//! For each symbol the indicator half (price history -> engine) and the
//! sentiment half (news search -> aggregator) run side by side. A failure in
//! one half is recorded in its section and never stops the other, and a
//! failing symbol never stops the batch.

use futures_util::future::{join, join_all};
use tracing::{debug, info, warn};

use crate::indicators::IndicatorEngine;
use crate::models::indicators::{IndicatorReport, PriceSeries};
use crate::models::report::{FailureStage, Section, SecurityReport};
use crate::models::sentiment::{SentimentAnalysis, SentimentSummary};
use crate::pipeline::context::PipelineContext;
use crate::sentiment::SentimentAggregator;
use crate::services::market_data::Lookback;

/// Request shape for every symbol in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub lookback: Lookback,
    pub news_limit: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            lookback: Lookback::default(),
            news_limit: crate::config::DEFAULT_NEWS_LIMIT,
        }
    }
}

pub struct Pipeline {
    context: PipelineContext,
    engine: IndicatorEngine,
    aggregator: SentimentAggregator,
    settings: PipelineSettings,
}

impl Pipeline {
    pub fn new(
        context: PipelineContext,
        engine: IndicatorEngine,
        aggregator: SentimentAggregator,
    ) -> Self {
        Self {
            context,
            engine,
            aggregator,
            settings: PipelineSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: PipelineSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn engine(&self) -> &IndicatorEngine {
        &self.engine
    }

    pub fn aggregator(&self) -> &SentimentAggregator {
        &self.aggregator
    }

    pub fn settings(&self) -> PipelineSettings {
        self.settings
    }

    /// Analyze one identifier. Never fails; failures live in the sections.
    pub async fn analyze_symbol(&self, symbol: &str) -> SecurityReport {
        debug!(symbol = %symbol, "analyzing symbol");
        let (indicators, sentiment) =
            join(self.indicator_section(symbol), self.sentiment_section(symbol)).await;

        SecurityReport {
            symbol: symbol.to_string(),
            indicators,
            sentiment,
        }
    }

    /// Analyze identifiers concurrently; reports follow input order. Blank
    /// identifiers are skipped.
    pub async fn analyze_batch<S: AsRef<str>>(&self, symbols: &[S]) -> Vec<SecurityReport> {
        let symbols: Vec<&str> = symbols
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| !s.trim().is_empty())
            .collect();
        info!(count = symbols.len(), "starting batch analysis");

        let reports = join_all(symbols.iter().map(|s| self.analyze_symbol(s))).await;

        let failed = reports
            .iter()
            .filter(|r| !r.indicators.is_ready() || !r.sentiment.is_ready())
            .count();
        info!(
            count = reports.len(),
            with_failures = failed,
            "batch analysis complete"
        );
        reports
    }

    async fn indicator_section(&self, symbol: &str) -> Section<IndicatorReport> {
        let entries = match self
            .context
            .prices
            .price_history(symbol, self.settings.lookback)
            .await
        {
            Ok(entries) => entries,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "price history unavailable");
                return self.failed("indicators", FailureStage::Provider, e.to_string());
            }
        };

        let evaluated = entries
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .and_then(PriceSeries::from_points)
            .and_then(|series| self.engine.evaluate(&series));

        match evaluated {
            Ok(report) => {
                if let Some(metrics) = &self.context.metrics {
                    metrics.indicator_runs_total.inc();
                }
                Section::Ready { result: report }
            }
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "indicator evaluation failed");
                self.failed("indicators", FailureStage::Analysis, e.to_string())
            }
        }
    }

    async fn sentiment_section(&self, symbol: &str) -> Section<SentimentAnalysis> {
        let entries = match self
            .context
            .news
            .search_news(symbol, self.settings.news_limit)
            .await
        {
            Ok(entries) => entries,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "news search unavailable");
                return self.failed("sentiment", FailureStage::Provider, e.to_string());
            }
        };

        let analysis = self.aggregator.analyze_entries(entries);
        let scored = analysis.outcome.summary().map_or(0, SentimentSummary::total);
        if analysis.outcome.is_no_data() {
            debug!(symbol = %symbol, snippets = analysis.verdicts.len(), "no scoreable news");
        }
        if let Some(metrics) = &self.context.metrics {
            metrics.sentiment_runs_total.inc();
            metrics.snippets_scored_total.inc_by(scored as u64);
        }
        Section::Ready { result: analysis }
    }

    fn failed<T>(&self, section: &str, stage: FailureStage, error: String) -> Section<T> {
        if let Some(metrics) = &self.context.metrics {
            let stage_label = match stage {
                FailureStage::Provider => "provider",
                FailureStage::Analysis => "analysis",
            };
            metrics.record_failure(section, stage_label);
        }
        Section::Failed { stage, error }
    }
}
