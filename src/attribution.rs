//! Attribution decomposer: split a total into named sources with shares
//!
//! Shares are rounded to one decimal place; rounding drift is corrected by
//! assigning the residual to the largest share (largest-remainder style,
//! ties broken by input position) so the emitted shares always sum to
//! exactly 100.0.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};
use crate::util::to_tenths;

/// One contributing source of a total return or value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributionSource {
    pub name: String,
    pub value: f64,
}

/// A source with its corrected percentage share of the total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionShare {
    pub name: String,
    pub value: f64,
    /// One-decimal percentage; all shares in a decomposition sum to 100.0
    pub share_pct: f64,
}

/// Decomposition policy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributionConfig {
    /// Permit negative source values (e.g., a loss-making property)
    pub allow_negative: bool,
}

/// Decompose sources into percentage shares, preserving input order
pub fn decompose(
    sources: &[AttributionSource],
    config: &AttributionConfig,
) -> EngineResult<Vec<AttributionShare>> {
    if sources.is_empty() {
        return Err(EngineError::invalid(
            "sources",
            0,
            "at least one attribution source is required",
        ));
    }

    let mut seen = HashSet::new();
    for source in sources {
        if !source.value.is_finite() {
            return Err(EngineError::invalid(
                "value",
                source.value,
                "must be finite",
            ));
        }
        if source.value < 0.0 && !config.allow_negative {
            return Err(EngineError::invalid(
                "value",
                source.value,
                "negative contributions are disabled by configuration",
            ));
        }
        if !seen.insert(source.name.as_str()) {
            return Err(EngineError::AmbiguousInput {
                kind: "attribution source",
                name: source.name.clone(),
            });
        }
    }

    let total: f64 = sources.iter().map(|s| s.value).sum();
    if total == 0.0 {
        return Err(EngineError::UndefinedResult {
            context: "attribution",
            reason: "total of sources is zero, shares are undefined",
        });
    }

    // Work in integer tenths of a percent so the corrected shares sum to
    // exactly 1000 tenths
    let mut tenths: Vec<i64> = sources
        .iter()
        .map(|s| to_tenths(s.value / total * 100.0))
        .collect();

    let drift: i64 = 1000 - tenths.iter().sum::<i64>();
    if drift != 0 {
        // First source wins a tie so reordered inputs stay consistent
        let mut largest = 0;
        for (i, source) in sources.iter().enumerate().skip(1) {
            if source.value > sources[largest].value {
                largest = i;
            }
        }
        tenths[largest] += drift;
    }

    Ok(sources
        .iter()
        .zip(tenths)
        .map(|(source, t)| AttributionShare {
            name: source.name.clone(),
            value: source.value,
            share_pct: t as f64 / 10.0,
        })
        .collect())
}
