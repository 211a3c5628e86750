//! Scenario evaluator: N named parameter sets through one valuation formula
//!
//! Each scenario's income components are summed to a gross income, taxed at
//! the scenario's rate, and netted. Evaluation is fully deterministic and
//! preserves input order; duplicate scenario names (or duplicate component
//! names within one scenario) are a hard error rather than a silent
//! overwrite.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};

/// One named income stream within a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeComponent {
    pub name: String,
    pub amount: f64,
}

/// A named what-if parameter set, constructed per request and discarded
/// after the response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique within a single evaluation request
    pub name: String,

    /// Income streams, in caller-defined order
    pub income_components: Vec<IncomeComponent>,

    /// Flat tax rate in [0, 1]
    pub tax_rate: f64,
}

impl Scenario {
    pub fn new(name: impl Into<String>, tax_rate: f64) -> Self {
        Self {
            name: name.into(),
            income_components: Vec::new(),
            tax_rate,
        }
    }

    /// Append an income component (builder style)
    pub fn with_component(mut self, name: impl Into<String>, amount: f64) -> Self {
        self.income_components.push(IncomeComponent {
            name: name.into(),
            amount,
        });
        self
    }

    fn validate(&self) -> EngineResult<()> {
        if !self.tax_rate.is_finite() || !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(EngineError::invalid(
                "tax_rate",
                self.tax_rate,
                "must be within [0, 1]",
            ));
        }

        let mut seen = HashSet::new();
        for component in &self.income_components {
            if !component.amount.is_finite() {
                return Err(EngineError::invalid(
                    "income_components",
                    component.amount,
                    "amounts must be finite",
                ));
            }
            if !seen.insert(component.name.as_str()) {
                return Err(EngineError::AmbiguousInput {
                    kind: "income component",
                    name: component.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Derived results for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub gross_income: f64,
    pub tax: f64,
    pub net: f64,
}

/// Evaluate scenarios in input order
///
/// Rejects any out-of-range tax rate and any name collision before
/// computing, so a returned `Ok` covers every scenario.
pub fn evaluate_scenarios(scenarios: &[Scenario]) -> EngineResult<Vec<ScenarioOutcome>> {
    let mut seen = HashSet::new();
    for scenario in scenarios {
        scenario.validate()?;
        if !seen.insert(scenario.name.as_str()) {
            return Err(EngineError::AmbiguousInput {
                kind: "scenario",
                name: scenario.name.clone(),
            });
        }
    }

    Ok(scenarios
        .iter()
        .map(|scenario| {
            let gross_income: f64 = scenario.income_components.iter().map(|c| c.amount).sum();
            let tax = gross_income * scenario.tax_rate;

            ScenarioOutcome {
                name: scenario.name.clone(),
                gross_income,
                tax,
                net: gross_income - tax,
            }
        })
        .collect())
}
