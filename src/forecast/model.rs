//! Growth model describing a forecast trajectory

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Parameters for a multi-period projection
///
/// `rate` is the periodic compound growth (may be negative); `variance_band`
/// bounds the additive stochastic noise per period (0 gives a fully
/// deterministic trajectory).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthModel {
    /// Starting value (period 0, not itself emitted)
    pub base_value: f64,

    /// Periodic growth rate, e.g. 0.05 for +5% per period
    pub rate: f64,

    /// Bound on additive noise per period, in value units
    pub variance_band: f64,

    /// Number of periods to project
    pub periods: u32,

    /// One label per projected period, in order
    pub period_labels: Vec<String>,
}

impl GrowthModel {
    /// Create a model whose period count is taken from the label sequence
    pub fn new(
        base_value: f64,
        rate: f64,
        variance_band: f64,
        period_labels: Vec<String>,
    ) -> EngineResult<Self> {
        let model = Self {
            base_value,
            rate,
            variance_band,
            periods: period_labels.len() as u32,
            period_labels,
        };
        model.validate()?;
        Ok(model)
    }

    /// Create a model with monthly labels ("YYYY-MM") starting from a date
    pub fn monthly(
        base_value: f64,
        rate: f64,
        variance_band: f64,
        start: NaiveDate,
        periods: u32,
    ) -> EngineResult<Self> {
        Self::new(base_value, rate, variance_band, monthly_labels(start, periods))
    }

    /// Create a model with yearly labels starting from a calendar year
    pub fn yearly(
        base_value: f64,
        rate: f64,
        variance_band: f64,
        start_year: i32,
        periods: u32,
    ) -> EngineResult<Self> {
        Self::new(base_value, rate, variance_band, yearly_labels(start_year, periods))
    }

    /// Check every model invariant, reporting the first violation
    pub fn validate(&self) -> EngineResult<()> {
        if self.periods == 0 {
            return Err(EngineError::invalid(
                "periods",
                self.periods,
                "must be at least 1",
            ));
        }
        if !self.base_value.is_finite() {
            return Err(EngineError::invalid(
                "base_value",
                self.base_value,
                "must be finite",
            ));
        }
        if !self.rate.is_finite() {
            return Err(EngineError::invalid("rate", self.rate, "must be finite"));
        }
        if !self.variance_band.is_finite() || self.variance_band < 0.0 {
            return Err(EngineError::invalid(
                "variance_band",
                self.variance_band,
                "must be finite and >= 0",
            ));
        }
        if self.period_labels.len() != self.periods as usize {
            return Err(EngineError::invalid(
                "period_labels",
                self.period_labels.len(),
                "length must equal `periods`",
            ));
        }
        Ok(())
    }
}

/// Generate "YYYY-MM" labels for `periods` months starting at `start`
pub fn monthly_labels(start: NaiveDate, periods: u32) -> Vec<String> {
    (0..periods)
        .map(|i| {
            let date = start
                .checked_add_months(Months::new(i))
                .unwrap_or(NaiveDate::MAX);
            date.format("%Y-%m").to_string()
        })
        .collect()
}

/// Generate year labels for `periods` years starting at `start_year`
pub fn yearly_labels(start_year: i32, periods: u32) -> Vec<String> {
    (0..periods)
        .map(|i| (start_year + i as i32).to_string())
        .collect()
}
