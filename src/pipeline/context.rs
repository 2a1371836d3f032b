//! Collaborators handed to the pipeline.

use std::sync::Arc;

use crate::metrics::Metrics;
use crate::services::market_data::PriceHistoryProvider;
use crate::services::news::NewsProvider;

/// Read-only access to the data providers and, optionally, metrics.
#[derive(Clone)]
pub struct PipelineContext {
    pub prices: Arc<dyn PriceHistoryProvider>,
    pub news: Arc<dyn NewsProvider>,
    pub metrics: Option<Arc<Metrics>>,
}

impl PipelineContext {
    pub fn new(prices: Arc<dyn PriceHistoryProvider>, news: Arc<dyn NewsProvider>) -> Self {
        Self {
            prices,
            news,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }
}
