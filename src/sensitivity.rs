//! Sensitivity simulator: what-if perturbations over a baseline
//!
//! Perturbations are applied multiplicatively in the fixed order of
//! `PerturbationKind` (rent increase, cost inflation, interest rate,
//! vacancy), never in input order, so the result is independent of how the
//! caller assembled the list. Uplift kinds multiply by `(1 + delta)`,
//! drag kinds by `(1 - delta)`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};
use crate::util::round2;

/// Perturbation kinds, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerturbationKind {
    /// Rent uplift: baseline * (1 + delta)
    RentIncrease,
    /// Operating cost inflation drag: baseline * (1 - delta)
    CostInflation,
    /// Financing rate drag: baseline * (1 - delta)
    InterestRate,
    /// Occupancy discount: baseline * (1 - delta)
    VacancyRate,
}

impl PerturbationKind {
    /// Multiplicative factor this kind contributes for a fractional delta
    fn factor(self, delta: f64) -> f64 {
        match self {
            Self::RentIncrease => 1.0 + delta,
            Self::CostInflation | Self::InterestRate | Self::VacancyRate => 1.0 - delta,
        }
    }
}

/// One named rate delta, expressed in percent (5.0 means 5%)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Perturbation {
    pub kind: PerturbationKind,
    pub delta_pct: f64,
}

/// Baseline plus the perturbations to apply to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Starting value (money or rate); must be non-zero
    pub baseline: f64,
    pub perturbations: Vec<Perturbation>,
}

/// Projected outcome of a what-if simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub projected_value: f64,
    pub percent_change: f64,
}

/// Apply the perturbations and report the projected value and percent change
pub fn simulate(params: &SimulationParameters) -> EngineResult<SimulationOutcome> {
    if !params.baseline.is_finite() {
        return Err(EngineError::invalid(
            "baseline",
            params.baseline,
            "must be finite",
        ));
    }
    if params.baseline == 0.0 {
        return Err(EngineError::UndefinedResult {
            context: "sensitivity simulation",
            reason: "percent change from a zero baseline is undefined",
        });
    }

    let mut seen = HashSet::new();
    for perturbation in &params.perturbations {
        if !perturbation.delta_pct.is_finite() {
            return Err(EngineError::invalid(
                "delta_pct",
                perturbation.delta_pct,
                "must be finite",
            ));
        }
        if !seen.insert(perturbation.kind) {
            return Err(EngineError::AmbiguousInput {
                kind: "perturbation",
                name: format!("{:?}", perturbation.kind),
            });
        }
    }

    let mut ordered = params.perturbations.clone();
    ordered.sort_by_key(|p| p.kind);

    let mut projected = params.baseline;
    for perturbation in &ordered {
        projected *= perturbation.kind.factor(perturbation.delta_pct / 100.0);
    }

    let percent_change = (projected - params.baseline) / params.baseline * 100.0;

    Ok(SimulationOutcome {
        projected_value: round2(projected),
        percent_change: round2(percent_change),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rent_and_vacancy_example() {
        let params = SimulationParameters {
            baseline: 120_000.0,
            perturbations: vec![
                Perturbation {
                    kind: PerturbationKind::RentIncrease,
                    delta_pct: 5.0,
                },
                Perturbation {
                    kind: PerturbationKind::VacancyRate,
                    delta_pct: 2.0,
                },
            ],
        };

        let outcome = simulate(&params).unwrap();
        assert_relative_eq!(outcome.projected_value, 123_480.0);
        assert_relative_eq!(outcome.percent_change, 2.9);
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let forward = SimulationParameters {
            baseline: 80_000.0,
            perturbations: vec![
                Perturbation {
                    kind: PerturbationKind::RentIncrease,
                    delta_pct: 3.0,
                },
                Perturbation {
                    kind: PerturbationKind::InterestRate,
                    delta_pct: 1.5,
                },
                Perturbation {
                    kind: PerturbationKind::VacancyRate,
                    delta_pct: 4.0,
                },
            ],
        };
        let mut reversed = forward.clone();
        reversed.perturbations.reverse();

        assert_eq!(simulate(&forward).unwrap(), simulate(&reversed).unwrap());
    }

    #[test]
    fn test_zero_baseline_rejected() {
        let params = SimulationParameters {
            baseline: 0.0,
            perturbations: vec![],
        };
        let err = simulate(&params).unwrap_err();
        assert!(matches!(err, EngineError::UndefinedResult { .. }));
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let params = SimulationParameters {
            baseline: 1000.0,
            perturbations: vec![
                Perturbation {
                    kind: PerturbationKind::RentIncrease,
                    delta_pct: 5.0,
                },
                Perturbation {
                    kind: PerturbationKind::RentIncrease,
                    delta_pct: 2.0,
                },
            ],
        };
        assert!(matches!(
            simulate(&params).unwrap_err(),
            EngineError::AmbiguousInput { .. }
        ));
    }

    #[test]
    fn test_no_perturbations_is_identity() {
        let params = SimulationParameters {
            baseline: 5_000.0,
            perturbations: vec![],
        };
        let outcome = simulate(&params).unwrap();
        assert_relative_eq!(outcome.projected_value, 5_000.0);
        assert_relative_eq!(outcome.percent_change, 0.0);
    }

    #[test]
    fn test_negative_baseline_percent_change() {
        // A loss baseline still has a well-defined percent change
        let params = SimulationParameters {
            baseline: -10_000.0,
            perturbations: vec![Perturbation {
                kind: PerturbationKind::CostInflation,
                delta_pct: 10.0,
            }],
        };
        let outcome = simulate(&params).unwrap();
        assert_relative_eq!(outcome.projected_value, -9_000.0);
        assert_relative_eq!(outcome.percent_change, -10.0);
    }
}
