//! File-backed providers serving recorded price history and news.
//!
//! A fixture directory holds one `<SYMBOL>.json` document per identifier:
//!
//! ```json
//! {
//!   "prices": [{ "date": "2024-01-02", "close": 185.64 }],
//!   "news": [{ "title": "...", "description": "..." }]
//! }
//! ```

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::models::indicators::PricePoint;
use crate::models::sentiment::NewsSnippet;
use crate::sentiment::SentimentError;
use crate::services::market_data::{Lookback, PriceEntry, PriceHistoryProvider};
use crate::services::news::{NewsEntry, NewsProvider};
use crate::services::ProviderError;

/// Recorded data for one identifier.
///
/// Entries stay raw JSON until they are served, so one bad price or article
/// only affects the half of the analysis that consumes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureDocument {
    #[serde(default)]
    pub prices: Vec<Value>,
    #[serde(default)]
    pub news: Vec<Value>,
}

impl FixtureDocument {
    pub fn with_points(mut self, points: impl IntoIterator<Item = PricePoint>) -> Self {
        self.prices.extend(points.into_iter().map(|point| json!(point)));
        self
    }

    pub fn with_article(mut self, title: Option<&str>, description: Option<&str>) -> Self {
        self.news.push(json!({ "title": title, "description": description }));
        self
    }

    fn price_entries(&self) -> Vec<PriceEntry> {
        self.prices
            .iter()
            .enumerate()
            .map(|(index, value)| PricePoint::decode(index, value))
            .collect()
    }
}

/// Snippet text of one article: its description.
fn article_snippet(index: usize, article: &Value) -> NewsEntry {
    match article {
        Value::Object(fields) => {
            NewsSnippet::from_json_value(fields.get("description").unwrap_or(&Value::Null))
        }
        _ => Err(SentimentError::InvalidInput(format!(
            "news item {} is not an article",
            index
        ))),
    }
}

#[derive(Debug, Clone)]
enum FixtureSource {
    Directory(PathBuf),
    InMemory(HashMap<String, FixtureDocument>),
}

/// Serves both price history and news from fixture documents.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    source: FixtureSource,
}

impl FixtureStore {
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: FixtureSource::Directory(dir.into()),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            source: FixtureSource::InMemory(HashMap::new()),
        }
    }

    /// Add a document to an in-memory store. Ignored for directory stores.
    pub fn with_document(mut self, symbol: &str, document: FixtureDocument) -> Self {
        if let FixtureSource::InMemory(documents) = &mut self.source {
            documents.insert(symbol.to_string(), document);
        }
        self
    }

    async fn load(&self, symbol: &str) -> Result<FixtureDocument, ProviderError> {
        match &self.source {
            FixtureSource::InMemory(documents) => documents
                .get(symbol)
                .cloned()
                .ok_or_else(|| ProviderError::UnknownSymbol(symbol.to_string())),
            FixtureSource::Directory(dir) => read_document(dir, symbol).await,
        }
    }
}

async fn read_document(dir: &Path, symbol: &str) -> Result<FixtureDocument, ProviderError> {
    if symbol.is_empty() || symbol.contains(['/', '\\']) || symbol.starts_with('.') {
        return Err(ProviderError::UnknownSymbol(symbol.to_string()));
    }

    let path = dir.join(format!("{}.json", symbol));
    debug!(symbol = %symbol, path = %path.display(), "loading fixture document");

    let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ProviderError::UnknownSymbol(symbol.to_string())
        } else {
            ProviderError::Unavailable(format!("{}: {}", path.display(), e))
        }
    })?;

    serde_json::from_str(&raw).map_err(|e| ProviderError::Malformed {
        symbol: symbol.to_string(),
        message: e.to_string(),
    })
}

#[async_trait]
impl PriceHistoryProvider for FixtureStore {
    async fn price_history(
        &self,
        symbol: &str,
        lookback: Lookback,
    ) -> Result<Vec<PriceEntry>, ProviderError> {
        let document = self.load(symbol).await?;
        Ok(lookback.apply_entries(document.price_entries()))
    }
}

#[async_trait]
impl NewsProvider for FixtureStore {
    async fn search_news(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<NewsEntry>, ProviderError> {
        let document = self.load(symbol).await?;
        Ok(document
            .news
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, article)| article_snippet(index, article))
            .collect())
    }
}
