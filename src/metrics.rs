//! Prometheus metrics for the API surface and the analysis pipeline.

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub indicator_runs_total: IntCounter,
    pub sentiment_runs_total: IntCounter,
    pub snippets_scored_total: IntCounter,
    pub analysis_failures_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total HTTP requests served")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently in flight")?;
        let indicator_runs_total = IntCounter::new(
            "indicator_runs_total",
            "Indicator engine evaluations completed",
        )?;
        let sentiment_runs_total = IntCounter::new(
            "sentiment_runs_total",
            "Sentiment aggregations completed",
        )?;
        let snippets_scored_total =
            IntCounter::new("snippets_scored_total", "News snippets assigned a label")?;
        let analysis_failures_total = IntCounterVec::new(
            Opts::new(
                "analysis_failures_total",
                "Per-symbol analysis sections that failed",
            ),
            &["section", "stage"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(indicator_runs_total.clone()))?;
        registry.register(Box::new(sentiment_runs_total.clone()))?;
        registry.register(Box::new(snippets_scored_total.clone()))?;
        registry.register(Box::new(analysis_failures_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            indicator_runs_total,
            sentiment_runs_total,
            snippets_scored_total,
            analysis_failures_total,
        })
    }

    pub fn record_failure(&self, section: &str, stage: &str) {
        self.analysis_failures_total
            .with_label_values(&[section, stage])
            .inc();
    }

    /// Render every registered metric in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
