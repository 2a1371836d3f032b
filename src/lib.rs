//! Technical indicators and news sentiment for listed securities.
//!
//! The two engines are independent and pure:
//!
//! - [`indicators::IndicatorEngine`] turns a [`models::PriceSeries`] into the
//!   current MACD, signal line and RSI with trend and RSI-zone tags.
//! - [`sentiment::SentimentAggregator`] scores a batch of
//!   [`models::NewsSnippet`]s with a pluggable [`sentiment::PolarityScorer`]
//!   and reports a plurality label, or "no data".
//!
//! [`pipeline::Pipeline`] runs both per identifier against the provider traits
//! in [`services`], and [`core::http`] exposes them over HTTP.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod sentiment;
pub mod services;
pub mod signals;
