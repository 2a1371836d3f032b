//! Unit tests for per-symbol and batch analysis

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use serde_json::json;
use stockpiler::indicators::IndicatorEngine;
use stockpiler::metrics::Metrics;
use stockpiler::models::{
    FailureStage, PricePoint, Section, SentimentLabel, SentimentOutcome, SnippetVerdict,
};
use stockpiler::pipeline::{Pipeline, PipelineContext, PipelineSettings};
use stockpiler::sentiment::SentimentAggregator;
use stockpiler::services::{
    FixtureDocument, FixtureStore, Lookback, PriceEntry, PriceHistoryProvider, ProviderError,
};
use stockpiler::signals::TrendSignal;

fn rising_prices(count: u64) -> Vec<PricePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let date = start.checked_add_days(Days::new(i)).unwrap();
            let close = 100.0 + i as f64 + if i % 3 == 0 { -1.5 } else { 0.0 };
            PricePoint::new(date, close)
        })
        .collect()
}

fn store() -> FixtureStore {
    FixtureStore::in_memory()
        .with_document(
            "AAPL",
            FixtureDocument::default()
                .with_points(rising_prices(60))
                .with_article(None, Some("Apple shares surge to a record"))
                .with_article(None, Some("Analysts upgrade Apple"))
                .with_article(None, Some("Supply concerns weigh on Apple")),
        )
        .with_document("EMPTY", FixtureDocument::default())
}

fn pipeline_with(store: FixtureStore, metrics: Option<Arc<Metrics>>) -> Pipeline {
    let store = Arc::new(store);
    let mut context = PipelineContext::new(store.clone(), store);
    if let Some(metrics) = metrics {
        context = context.with_metrics(metrics);
    }
    Pipeline::new(
        context,
        IndicatorEngine::default(),
        SentimentAggregator::default(),
    )
}

struct OutagePrices;

#[async_trait]
impl PriceHistoryProvider for OutagePrices {
    async fn price_history(
        &self,
        _symbol: &str,
        _lookback: Lookback,
    ) -> Result<Vec<PriceEntry>, ProviderError> {
        Err(ProviderError::Unavailable("quote service down".to_string()))
    }
}

#[tokio::test]
async fn test_analyze_symbol_fills_both_sections() {
    let report = pipeline_with(store(), None).analyze_symbol("AAPL").await;

    assert_eq!(report.symbol, "AAPL");
    let indicators = report.indicators.result().unwrap();
    assert_eq!(indicators.trend, TrendSignal::Bullish);
    assert_eq!(indicators.observations, 60);
    assert!(indicators.result.rsi.is_some());

    let sentiment = report.sentiment.result().unwrap();
    let summary = sentiment.outcome.summary().unwrap();
    assert_eq!(summary.positive_count, 2);
    assert_eq!(summary.negative_count, 1);
    assert_eq!(summary.overall, SentimentLabel::Positive);
}

#[tokio::test]
async fn test_unknown_symbol_fails_at_provider() {
    let report = pipeline_with(store(), None).analyze_symbol("MISSING").await;

    assert!(matches!(
        report.indicators,
        Section::Failed {
            stage: FailureStage::Provider,
            ..
        }
    ));
    assert!(matches!(
        report.sentiment,
        Section::Failed {
            stage: FailureStage::Provider,
            ..
        }
    ));
    assert_eq!(report.indicators.error(), Some("unknown symbol 'MISSING'"));
}

#[tokio::test]
async fn test_empty_history_fails_analysis_but_not_sentiment() {
    let report = pipeline_with(store(), None).analyze_symbol("EMPTY").await;

    assert_eq!(
        report.indicators,
        Section::Failed {
            stage: FailureStage::Analysis,
            error: "price series is empty".to_string(),
        }
    );
    assert_eq!(
        report.sentiment.result().map(|s| s.outcome),
        Some(SentimentOutcome::NoData)
    );
}

#[tokio::test]
async fn test_bad_price_fails_only_the_indicator_section() {
    let mut document = FixtureDocument::default().with_article(None, Some("Shares soar"));
    document.prices = vec![json!({ "close": 10.0 }), json!({ "close": "abc" })];
    let store = FixtureStore::in_memory().with_document("BADP", document);

    let report = pipeline_with(store, None).analyze_symbol("BADP").await;

    match &report.indicators {
        Section::Failed { stage, error } => {
            assert_eq!(*stage, FailureStage::Analysis);
            assert!(error.starts_with("invalid price input"), "{}", error);
        }
        other => panic!("expected a failed indicator section, got {:?}", other),
    }
    let sentiment = report.sentiment.result().unwrap();
    assert_eq!(
        sentiment.outcome.summary().map(|s| s.overall),
        Some(SentimentLabel::Positive)
    );
}

#[tokio::test]
async fn test_bad_description_rejects_only_that_snippet() {
    let mut document = FixtureDocument::default()
        .with_points([PricePoint::undated(10.0), PricePoint::undated(11.0)]);
    document.news.push(json!({ "description": 42 }));
    let document = document.with_article(None, Some("Profits plunge"));
    let store = FixtureStore::in_memory().with_document("BADN", document);

    let report = pipeline_with(store, None).analyze_symbol("BADN").await;

    let indicators = report.indicators.result().unwrap();
    assert_eq!(indicators.observations, 2);
    assert_eq!(indicators.trend, TrendSignal::Bullish);

    let sentiment = report.sentiment.result().unwrap();
    assert!(matches!(
        sentiment.verdicts[0],
        SnippetVerdict::Rejected { .. }
    ));
    let summary = sentiment.outcome.summary().unwrap();
    assert_eq!(summary.total(), 1);
    assert_eq!(summary.overall, SentimentLabel::Negative);
}

#[tokio::test]
async fn test_price_outage_leaves_sentiment_intact() {
    let news = Arc::new(store());
    let context = PipelineContext::new(Arc::new(OutagePrices), news);
    let pipeline = Pipeline::new(
        context,
        IndicatorEngine::default(),
        SentimentAggregator::default(),
    );

    let report = pipeline.analyze_symbol("AAPL").await;
    assert_eq!(
        report.indicators.error(),
        Some("provider unavailable: quote service down")
    );
    assert!(report.sentiment.is_ready());
}

#[tokio::test]
async fn test_batch_keeps_order_and_skips_blanks() {
    let pipeline = pipeline_with(store(), None);
    let reports = pipeline
        .analyze_batch(&["EMPTY", " ", "MISSING", "AAPL"])
        .await;

    let symbols: Vec<&str> = reports.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["EMPTY", "MISSING", "AAPL"]);
    assert!(reports[2].indicators.is_ready());
    assert!(reports[2].sentiment.is_ready());
}

#[tokio::test]
async fn test_news_limit_and_lookback_settings_apply() {
    let pipeline = pipeline_with(store(), None).with_settings(PipelineSettings {
        lookback: Lookback::Days(19),
        news_limit: 1,
    });

    let report = pipeline.analyze_symbol("AAPL").await;
    assert_eq!(report.indicators.result().unwrap().observations, 20);

    let sentiment = report.sentiment.result().unwrap();
    assert_eq!(sentiment.verdicts.len(), 1);
    assert_eq!(pipeline.settings().news_limit, 1);
}

#[tokio::test]
async fn test_metrics_track_runs_and_failures() {
    let metrics = Arc::new(Metrics::new().unwrap());
    let pipeline = pipeline_with(store(), Some(metrics.clone()));

    pipeline.analyze_batch(&["AAPL", "EMPTY", "MISSING"]).await;

    assert_eq!(metrics.indicator_runs_total.get(), 1);
    assert_eq!(metrics.sentiment_runs_total.get(), 2);
    assert_eq!(metrics.snippets_scored_total.get(), 3);
    assert_eq!(
        metrics
            .analysis_failures_total
            .with_label_values(&["indicators", "analysis"])
            .get(),
        1
    );
    assert_eq!(
        metrics
            .analysis_failures_total
            .with_label_values(&["indicators", "provider"])
            .get(),
        1
    );
    assert_eq!(
        metrics
            .analysis_failures_total
            .with_label_values(&["sentiment", "provider"])
            .get(),
        1
    );

    let exported = metrics.export().unwrap();
    assert!(exported.contains("analysis_failures_total"));
}
