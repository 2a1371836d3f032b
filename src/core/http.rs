//! HTTP endpoint server using Axum

use axum::{
    extract::{rejection::JsonRejection, Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::config::{AppConfig, IndicatorConfig};
use crate::indicators::{IndicatorEngine, IndicatorError};
use crate::metrics::Metrics;
use crate::models::indicators::{IndicatorReport, PricePoint, PriceSeries};
use crate::models::report::SecurityReport;
use crate::models::sentiment::{NewsSnippet, SentimentAnalysis, SentimentSummary};
use crate::pipeline::{Pipeline, PipelineContext, PipelineSettings};
use crate::sentiment::SentimentAggregator;
use crate::services::FixtureStore;

pub const SERVICE_NAME: &str = "stockpiler-analytics";

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub pipeline: Arc<Pipeline>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Error body returned by the analysis endpoints.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl From<IndicatorError> for ApiError {
    fn from(error: IndicatorError) -> Self {
        let kind = match error {
            IndicatorError::InsufficientData => "insufficient_data",
            IndicatorError::InvalidInput(_) => "invalid_input",
            IndicatorError::InvalidConfig(_) => "invalid_config",
        };
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            kind,
            message: error.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            kind: "invalid_request",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({ "error": self.message, "kind": self.kind })),
        )
            .into_response()
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Prices stay raw JSON so a bad entry is reported as `invalid_input`.
#[derive(Debug, Deserialize)]
pub struct IndicatorRequest {
    #[serde(default)]
    pub closes: Option<Vec<Value>>,
    #[serde(default)]
    pub points: Option<Vec<Value>>,
    #[serde(default)]
    pub config: Option<IndicatorConfig>,
}

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    #[serde(default)]
    pub snippets: Vec<Value>,
}

/// Evaluate indicators for a posted price series
async fn evaluate_indicators(
    State(state): State<AppState>,
    payload: Result<Json<IndicatorRequest>, JsonRejection>,
) -> Result<Json<IndicatorReport>, ApiError> {
    let Json(request) = payload?;
    let points = match (request.points, request.closes) {
        (Some(points), _) => decode_all(&points, PricePoint::decode)?,
        (None, Some(closes)) => decode_all(&closes, PricePoint::decode_close)?,
        (None, None) => Vec::new(),
    };
    let series = PriceSeries::from_points(points)?;

    let report = match request.config {
        Some(config) => IndicatorEngine::new(config)?.evaluate(&series)?,
        None => state.pipeline.engine().evaluate(&series)?,
    };
    state.metrics.indicator_runs_total.inc();

    Ok(Json(report))
}

fn decode_all<F>(values: &[Value], decode: F) -> Result<Vec<PricePoint>, IndicatorError>
where
    F: Fn(usize, &Value) -> Result<PricePoint, IndicatorError>,
{
    values
        .iter()
        .enumerate()
        .map(|(index, value)| decode(index, value))
        .collect()
}

/// Score and aggregate a posted batch of snippets
async fn evaluate_sentiment(
    State(state): State<AppState>,
    payload: Result<Json<SentimentRequest>, JsonRejection>,
) -> Result<Json<SentimentAnalysis>, ApiError> {
    let Json(request) = payload?;
    let analysis = state.pipeline.aggregator().analyze_entries(
        request.snippets.iter().map(NewsSnippet::from_json_value),
    );

    state.metrics.sentiment_runs_total.inc();
    let scored = analysis.outcome.summary().map_or(0, SentimentSummary::total);
    state.metrics.snippets_scored_total.inc_by(scored as u64);

    Ok(Json(analysis))
}

/// Full report for one identifier from the configured providers
async fn security_report(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Json<SecurityReport> {
    Json(state.pipeline.analyze_symbol(&symbol).await)
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/indicators", post(evaluate_indicators))
        .route("/api/sentiment", post(evaluate_sentiment))
        .route("/api/securities/{symbol}/report", get(security_report))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Wire the fixture-backed pipeline described by `config` into app state.
pub fn build_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let store = Arc::new(FixtureStore::from_dir(config.data_dir.clone()));
    let context = PipelineContext::new(store.clone(), store).with_metrics(metrics.clone());
    let pipeline = Pipeline::new(
        context,
        IndicatorEngine::new(config.indicators.clone())?,
        SentimentAggregator::default(),
    )
    .with_settings(PipelineSettings {
        lookback: config.lookback,
        news_limit: config.news_limit,
    });

    Ok(AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        pipeline: Arc::new(pipeline),
    })
}

pub async fn start_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_state(&config)?;
    info!(
        scorer = state.pipeline.aggregator().scorer_name(),
        lookback = %state.pipeline.settings().lookback,
        "Analysis pipeline ready"
    );
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        data_dir = %config.data_dir.display(),
        "Serving security reports from fixture directory"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
