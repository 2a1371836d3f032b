//! Price-history provider interface.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::indicators::IndicatorError;
use crate::models::indicators::PricePoint;
use crate::services::ProviderError;

const TRADING_DAYS_PER_MONTH: usize = 21;
const TRADING_DAYS_PER_YEAR: usize = 252;

/// One delivered observation; an undecodable one carries the engine error.
pub type PriceEntry = Result<PricePoint, IndicatorError>;

/// How much history to request, e.g. `5d`, `6mo`, `1y`, `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Lookback {
    Days(u32),
    Months(u32),
    Years(u32),
    Max,
}

impl Default for Lookback {
    fn default() -> Self {
        Lookback::Months(6)
    }
}

impl Lookback {
    /// First calendar day inside the lookback ending at `last`.
    pub fn window_start(&self, last: NaiveDate) -> Option<NaiveDate> {
        match *self {
            Lookback::Days(n) => last.checked_sub_days(Days::new(u64::from(n))),
            Lookback::Months(n) => last.checked_sub_months(Months::new(n)),
            Lookback::Years(n) => last.checked_sub_months(Months::new(n.saturating_mul(12))),
            Lookback::Max => None,
        }
    }

    /// Approximate number of trading days, for series without dates.
    pub fn trading_days(&self) -> Option<usize> {
        match *self {
            Lookback::Days(n) => Some(n as usize),
            Lookback::Months(n) => Some(n as usize * TRADING_DAYS_PER_MONTH),
            Lookback::Years(n) => Some(n as usize * TRADING_DAYS_PER_YEAR),
            Lookback::Max => None,
        }
    }

    /// Restrict chronological observations to this lookback, measured back
    /// from the last one. Undated observations are cut by trading-day count.
    pub fn apply(&self, mut points: Vec<PricePoint>) -> Vec<PricePoint> {
        let Some(last) = points.last().copied() else {
            return points;
        };

        match last.date {
            Some(last_date) => {
                if let Some(start) = self.window_start(last_date) {
                    points.retain(|p| p.date.map_or(true, |d| d >= start));
                }
                points
            }
            None => match self.trading_days() {
                Some(days) if days < points.len() => points.split_off(points.len() - days),
                _ => points,
            },
        }
    }
}

impl Lookback {
    /// [`apply`](Self::apply) for delivered entries. History holding an
    /// undecodable entry is returned untouched so the engine reports it.
    pub fn apply_entries(&self, entries: Vec<PriceEntry>) -> Vec<PriceEntry> {
        if entries.iter().any(Result::is_err) {
            return entries;
        }
        let points = entries.into_iter().flatten().collect();
        self.apply(points).into_iter().map(Ok).collect()
    }
}

impl FromStr for Lookback {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_ascii_lowercase();
        if value == "max" {
            return Ok(Lookback::Max);
        }

        let split = value
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| format!("lookback '{}' is missing a unit", value))?;
        let (count, unit) = value.split_at(split);
        let count: u32 = count
            .parse()
            .map_err(|_| format!("lookback '{}' must start with a count", value))?;
        if count == 0 {
            return Err(format!("lookback '{}' must be positive", value));
        }

        match unit {
            "d" => Ok(Lookback::Days(count)),
            "mo" => Ok(Lookback::Months(count)),
            "y" => Ok(Lookback::Years(count)),
            other => Err(format!("unknown lookback unit '{}'", other)),
        }
    }
}

impl TryFrom<String> for Lookback {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Lookback> for String {
    fn from(value: Lookback) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookback::Days(n) => write!(f, "{}d", n),
            Lookback::Months(n) => write!(f, "{}mo", n),
            Lookback::Years(n) => write!(f, "{}y", n),
            Lookback::Max => write!(f, "max"),
        }
    }
}

#[async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Daily observations for `symbol` covering `lookback`, oldest first.
    /// Only acquisition failures are errors here; a bad observation is
    /// delivered as an `Err` entry for the indicator engine to report.
    async fn price_history(
        &self,
        symbol: &str,
        lookback: Lookback,
    ) -> Result<Vec<PriceEntry>, ProviderError>;
}
