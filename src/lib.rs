//! Portfolio Analytics - Financial projection and benchmarking engine for real-estate portfolios
//!
//! This library provides:
//! - Multi-period cash-flow/tax/wealth forecasts with a seedable stochastic model
//! - Named what-if scenario evaluation (gross income, tax, net)
//! - Peer benchmarking via percentile ranks against a reference distribution
//! - Return attribution into percentage shares with drift correction
//! - Sensitivity simulation over ordered rate perturbations
//!
//! Every component is a pure function from (snapshot, parameters) to a
//! result structure: no I/O, no shared state, no authorization. The host
//! application supplies the data and wraps the results in whatever
//! transport it uses.

pub mod attribution;
pub mod benchmark;
pub mod error;
pub mod forecast;
pub mod scenario;
pub mod sensitivity;
pub mod snapshot;
pub mod util;

// Re-export commonly used types
pub use attribution::{decompose, AttributionConfig, AttributionShare, AttributionSource};
pub use benchmark::{compare, BenchmarkMetric, BenchmarkRanking, LabelBands, ReferenceDistribution};
pub use error::{EngineError, EngineResult};
pub use forecast::{ForecastEngine, ForecastResult, GrowthModel};
pub use scenario::{evaluate_scenarios, Scenario, ScenarioOutcome};
pub use sensitivity::{simulate, Perturbation, PerturbationKind, SimulationParameters};
pub use snapshot::{HistoricalPoint, Holding, PortfolioSnapshot};
