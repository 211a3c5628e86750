//! Multi-period forecasting: growth models and the projection engine

mod engine;
mod model;

pub use engine::{forecast, ForecastEngine, ForecastPoint, ForecastResult, ForecastSummary};
pub use model::{monthly_labels, yearly_labels, GrowthModel};
