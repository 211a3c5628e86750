//! Forecast engine: compound growth plus bounded, seedable noise
//!
//! Each projected period applies `value = prev * (1 + rate) + noise`, where
//! noise is uniform on `[-variance_band, variance_band]`. The first emitted
//! period is already grown once, i.e. `base_value * (1 + rate) + noise`.
//!
//! Calls with `seed: Some(s)` are fully reproducible. Calls with `None`
//! draw a fresh entropy-based seed per call and are non-deterministic by
//! design; the RNG is always local to the call, never shared.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use super::model::GrowthModel;
use crate::error::EngineResult;
use crate::util::round2;

/// One projected period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub period: String,
    pub value: f64,
}

/// Complete forecast output, in period order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub points: Vec<ForecastPoint>,
}

impl ForecastResult {
    /// Value at the final projected period
    pub fn final_value(&self) -> f64 {
        self.points.last().map(|p| p.value).unwrap_or(0.0)
    }

    /// Summary statistics over the projection
    pub fn summary(&self, base_value: f64) -> ForecastSummary {
        let final_value = self.final_value();
        let total_growth_pct = if base_value != 0.0 {
            (final_value / base_value - 1.0) * 100.0
        } else {
            0.0
        };

        ForecastSummary {
            periods: self.points.len() as u32,
            final_value,
            total_growth_pct,
        }
    }
}

/// Summary statistics for a forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub periods: u32,
    pub final_value: f64,
    pub total_growth_pct: f64,
}

/// Projection engine for a single validated growth model
pub struct ForecastEngine {
    model: GrowthModel,
}

impl ForecastEngine {
    /// Create an engine, rejecting invalid models up front
    pub fn new(model: GrowthModel) -> EngineResult<Self> {
        model.validate()?;
        Ok(Self { model })
    }

    /// Run the projection
    ///
    /// `seed` controls the noise stream: `Some(s)` yields identical output
    /// for identical `(model, s)`; `None` seeds from OS entropy and is
    /// intentionally non-deterministic.
    pub fn forecast(&self, seed: Option<u64>) -> ForecastResult {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        self.run(&mut rng)
    }

    /// Borrow the model this engine projects
    pub fn model(&self) -> &GrowthModel {
        &self.model
    }

    fn run(&self, rng: &mut StdRng) -> ForecastResult {
        // Uniform bounds are only constructed when noise is enabled, so the
        // zero-variance path stays exact
        let noise = if self.model.variance_band > 0.0 {
            Some(Uniform::new_inclusive(
                -self.model.variance_band,
                self.model.variance_band,
            ))
        } else {
            None
        };

        let mut value = self.model.base_value;
        let mut points = Vec::with_capacity(self.model.periods as usize);

        for label in &self.model.period_labels {
            value *= 1.0 + self.model.rate;
            if let Some(dist) = &noise {
                value += dist.sample(rng);
            }
            points.push(ForecastPoint {
                period: label.clone(),
                value: round2(value),
            });
        }

        ForecastResult { points }
    }
}

/// Project a growth model in one call (validates, then forecasts)
pub fn forecast(model: &GrowthModel, seed: Option<u64>) -> EngineResult<ForecastResult> {
    ForecastEngine::new(model.clone()).map(|engine| engine.forecast(seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn deterministic_model(base: f64, rate: f64, periods: u32) -> GrowthModel {
        GrowthModel::yearly(base, rate, 0.0, 2025, periods).unwrap()
    }

    #[test]
    fn test_zero_variance_matches_closed_form() {
        let engine = ForecastEngine::new(deterministic_model(1000.0, 0.05, 3)).unwrap();
        let result = engine.forecast(None);

        let values: Vec<f64> = result.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![1050.00, 1102.50, 1157.63]);
    }

    #[test]
    fn test_zero_variance_every_period_compounds() {
        let engine = ForecastEngine::new(deterministic_model(50_000.0, 0.02, 24)).unwrap();
        let result = engine.forecast(None);

        for (i, point) in result.points.iter().enumerate() {
            let closed_form = 50_000.0 * 1.02f64.powi(i as i32 + 1);
            assert_relative_eq!(point.value, round2(closed_form), epsilon = 0.011);
        }
    }

    #[test]
    fn test_seeded_forecast_is_reproducible() {
        let model = GrowthModel::yearly(1000.0, 0.05, 25.0, 2025, 12).unwrap();
        let engine = ForecastEngine::new(model).unwrap();

        let a = engine.forecast(Some(42));
        let b = engine.forecast(Some(42));
        let c = engine.forecast(Some(43));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_noise_stays_within_band() {
        let band = 10.0;
        let model = GrowthModel::yearly(1000.0, 0.0, band, 2025, 100).unwrap();
        let engine = ForecastEngine::new(model).unwrap();

        let result = engine.forecast(Some(7));
        let mut prev = 1000.0;
        for point in &result.points {
            // Rate is zero, so each step moves by at most the band
            // (plus a cent of rounding)
            assert!((point.value - prev).abs() <= band + 0.01);
            prev = point.value;
        }
    }

    #[test]
    fn test_single_period_boundary() {
        let engine = ForecastEngine::new(deterministic_model(1000.0, 0.05, 1)).unwrap();
        let result = engine.forecast(None);

        assert_eq!(result.points.len(), 1);
        assert_relative_eq!(result.points[0].value, 1050.0);
    }

    #[test]
    fn test_zero_base_value_stays_zero_without_noise() {
        let engine = ForecastEngine::new(deterministic_model(0.0, 0.05, 6)).unwrap();
        let result = engine.forecast(None);

        assert!(result.points.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn test_negative_rate_decays() {
        let engine = ForecastEngine::new(deterministic_model(1000.0, -0.10, 2)).unwrap();
        let values: Vec<f64> = engine.forecast(None).points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![900.0, 810.0]);
    }

    #[test]
    fn test_summary() {
        let engine = ForecastEngine::new(deterministic_model(1000.0, 0.05, 3)).unwrap();
        let summary = engine.forecast(None).summary(1000.0);

        assert_eq!(summary.periods, 3);
        assert_relative_eq!(summary.final_value, 1157.63);
        assert_relative_eq!(summary.total_growth_pct, 15.763, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_invalid_model() {
        let model = GrowthModel {
            base_value: 1000.0,
            rate: 0.05,
            variance_band: -1.0,
            periods: 3,
            period_labels: crate::forecast::yearly_labels(2025, 3),
        };
        assert!(ForecastEngine::new(model).is_err());
    }
}
