//! News-search provider interface.

use async_trait::async_trait;

use crate::models::sentiment::NewsSnippet;
use crate::sentiment::SentimentError;
use crate::services::ProviderError;

/// One delivered snippet; an entry that is not text carries the reason.
pub type NewsEntry = Result<NewsSnippet, SentimentError>;

#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Up to `limit` snippets relevant to `symbol`, most relevant first.
    /// An empty batch is a valid answer, and a bad entry only affects itself.
    async fn search_news(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<NewsEntry>, ProviderError>;
}
