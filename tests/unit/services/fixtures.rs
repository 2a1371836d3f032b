//! Unit tests for the fixture-backed providers

use std::fs;

use serde_json::json;
use stockpiler::indicators::IndicatorError;
use stockpiler::models::PricePoint;
use stockpiler::sentiment::SentimentError;
use stockpiler::services::{
    FixtureDocument, FixtureStore, Lookback, NewsProvider, PriceHistoryProvider, ProviderError,
};
use tempfile::TempDir;

const AAPL: &str = r#"{
  "prices": [
    { "date": "2024-01-02", "close": 185.64 },
    { "date": "2024-01-03", "close": 184.25 },
    { "date": "2024-01-04", "close": 181.91 }
  ],
  "news": [
    { "title": "Apple slips", "description": "Shares fell after a downgrade" },
    { "title": "No body" },
    { "title": "Apple rallies", "description": "Strong iPhone demand" }
  ]
}"#;

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("AAPL.json"), AAPL).unwrap();
    fs::write(dir.path().join("BROKEN.json"), "{ not json").unwrap();
    dir
}

#[tokio::test]
async fn test_reads_price_history_from_directory() {
    let dir = fixture_dir();
    let store = FixtureStore::from_dir(dir.path());

    let entries = store.price_history("AAPL", Lookback::Max).await.unwrap();
    let points: Vec<PricePoint> = entries.into_iter().map(Result::unwrap).collect();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].close, 185.64);
    assert!(points.iter().all(|p| p.date.is_some()));
}

#[tokio::test]
async fn test_news_uses_descriptions_and_limit() {
    let dir = fixture_dir();
    let store = FixtureStore::from_dir(dir.path());

    let news = store.search_news("AAPL", 10).await.unwrap();
    assert_eq!(news.len(), 3);
    assert_eq!(
        news[0].as_ref().unwrap().text(),
        Some("Shares fell after a downgrade")
    );
    assert!(!news[1].as_ref().unwrap().has_text());

    let limited = store.search_news("AAPL", 1).await.unwrap();
    assert_eq!(limited.len(), 1);
}

#[tokio::test]
async fn test_missing_symbol_is_unknown() {
    let dir = fixture_dir();
    let store = FixtureStore::from_dir(dir.path());

    assert_eq!(
        store.price_history("MSFT", Lookback::Max).await,
        Err(ProviderError::UnknownSymbol("MSFT".to_string()))
    );
}

#[tokio::test]
async fn test_path_like_symbols_are_unknown() {
    let dir = fixture_dir();
    let store = FixtureStore::from_dir(dir.path());

    for symbol in ["../AAPL", "a/b", ".hidden", ""] {
        let result = store.search_news(symbol, 5).await;
        assert!(
            matches!(result, Err(ProviderError::UnknownSymbol(_))),
            "{} accepted",
            symbol
        );
    }
}

#[tokio::test]
async fn test_invalid_document_is_malformed() {
    let dir = fixture_dir();
    let store = FixtureStore::from_dir(dir.path());

    let result = store.price_history("BROKEN", Lookback::Max).await;
    assert!(matches!(result, Err(ProviderError::Malformed { .. })));
}

#[tokio::test]
async fn test_in_memory_store() {
    let store = FixtureStore::in_memory().with_document(
        "TSLA",
        FixtureDocument::default().with_article(Some("t"), Some("d")),
    );

    assert!(store
        .price_history("TSLA", Lookback::default())
        .await
        .unwrap()
        .is_empty());
    assert_eq!(store.search_news("TSLA", 0).await.unwrap().len(), 0);
    assert!(store.search_news("NVDA", 5).await.is_err());
}

#[tokio::test]
async fn test_bad_price_is_delivered_as_an_entry() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("BADP.json"),
        r#"{
          "prices": [{ "close": 10.0 }, { "close": "abc" }, { "close": 11.0 }],
          "news": [{ "description": "Shares soar" }]
        }"#,
    )
    .unwrap();
    let store = FixtureStore::from_dir(dir.path());

    let entries = store.price_history("BADP", Lookback::Days(1)).await.unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].is_ok());
    assert!(matches!(entries[1], Err(IndicatorError::InvalidInput(_))));

    let news = store.search_news("BADP", 10).await.unwrap();
    assert_eq!(news[0].as_ref().unwrap().text(), Some("Shares soar"));
}

#[tokio::test]
async fn test_bad_article_only_affects_itself() {
    let mut document = FixtureDocument::default()
        .with_points([PricePoint::undated(10.0), PricePoint::undated(11.0)]);
    document.news.push(json!({ "title": "odd", "description": 42 }));
    document.news.push(json!("not an article"));
    let document = document.with_article(None, Some("Profits beat estimates"));
    let store = FixtureStore::in_memory().with_document("BADN", document);

    let news = store.search_news("BADN", 10).await.unwrap();
    assert_eq!(news.len(), 3);
    assert!(matches!(news[0], Err(SentimentError::InvalidInput(_))));
    assert!(matches!(news[1], Err(SentimentError::InvalidInput(_))));
    assert_eq!(
        news[2].as_ref().unwrap().text(),
        Some("Profits beat estimates")
    );

    let prices = store.price_history("BADN", Lookback::Max).await.unwrap();
    assert_eq!(prices, vec![Ok(PricePoint::undated(10.0)), Ok(PricePoint::undated(11.0))]);
}
