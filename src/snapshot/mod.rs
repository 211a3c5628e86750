//! Portfolio snapshot: the immutable input describing current financial state
//!
//! A snapshot is constructed once per request by the caller (the engine
//! never fetches or persists anything) and passed by shared reference into
//! the computation components.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::forecast::GrowthModel;

/// A single portfolio holding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    /// Display name (e.g., property address or fund name)
    pub name: String,

    /// Units held (1.0 for whole properties)
    pub amount: f64,

    /// Current market value of the position
    pub value_at_market: f64,
}

/// One observation of a historical metric series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Period label, e.g. "2024-07" or "2023"
    pub period: String,

    /// Observed value for the period
    pub value: f64,
}

/// Immutable point-in-time view of portfolio financial state
///
/// Never mutated by the engine; every component takes it (or a subset of
/// it) by shared reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Total periodic income across all streams
    pub income: f64,

    /// Total periodic costs (operating, financing, taxes paid)
    pub costs: f64,

    /// Current holdings, in caller-defined order
    pub holdings: Vec<Holding>,

    /// Historical metric observations, oldest first
    pub historical_series: Vec<HistoricalPoint>,
}

impl PortfolioSnapshot {
    /// Create a snapshot with no holdings or history
    pub fn new(income: f64, costs: f64) -> Self {
        Self {
            income,
            costs,
            holdings: Vec::new(),
            historical_series: Vec::new(),
        }
    }

    /// Net periodic cash flow (income minus costs)
    pub fn net_cash_flow(&self) -> f64 {
        self.income - self.costs
    }

    /// Sum of market values across all holdings
    pub fn total_market_value(&self) -> f64 {
        self.holdings.iter().map(|h| h.value_at_market).sum()
    }

    /// Average period-over-period growth rate of the historical series
    ///
    /// Returns `None` when the series has fewer than two points or any
    /// interior value is zero (the ratio would be undefined).
    pub fn historical_growth_rate(&self) -> Option<f64> {
        if self.historical_series.len() < 2 {
            return None;
        }
        let mut total = 0.0;
        let mut steps = 0u32;
        for pair in self.historical_series.windows(2) {
            if pair[0].value == 0.0 {
                return None;
            }
            total += pair[1].value / pair[0].value - 1.0;
            steps += 1;
        }
        Some(total / steps as f64)
    }

    /// Build a growth model for this snapshot's metric from its own history
    ///
    /// Base value is the latest observation; the rate is the average
    /// historical period-over-period growth.
    pub fn growth_model_from_history(
        &self,
        variance_band: f64,
        period_labels: Vec<String>,
    ) -> EngineResult<GrowthModel> {
        let rate = self.historical_growth_rate().ok_or_else(|| {
            EngineError::invalid(
                "historical_series",
                self.historical_series.len(),
                "needs at least two points with non-zero values to fit a growth rate",
            )
        })?;
        let base = self
            .historical_series
            .last()
            .map(|p| p.value)
            .unwrap_or_default();
        GrowthModel::new(base, rate, variance_band, period_labels)
    }
}
