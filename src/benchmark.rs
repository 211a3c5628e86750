//! Benchmark comparator: percentile rank against a reference distribution
//!
//! Percentile convention (applied everywhere): the fraction of reference
//! values less than or equal to the metric value, expressed as an integer
//! 0-100 rounded half-up. For `[1,2,3,4,5]` and value 3 the rank is 60.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::util::percentile_from_fraction;

/// Reference population to rank against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReferenceDistribution {
    /// Raw peer observations (order irrelevant)
    Samples(Vec<f64>),

    /// Precomputed table of (percentile, value at that percentile),
    /// ascending by percentile
    PercentileTable(Vec<(u8, f64)>),
}

impl ReferenceDistribution {
    fn is_empty(&self) -> bool {
        match self {
            Self::Samples(values) => values.is_empty(),
            Self::PercentileTable(rows) => rows.is_empty(),
        }
    }
}

/// A portfolio metric to benchmark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetric {
    pub name: String,
    pub value: f64,
    /// Display unit, e.g. "%" or "EUR"
    pub unit: String,
    pub reference: ReferenceDistribution,
}

/// Monotonic percentile -> label step function
///
/// Thresholds are configuration, tunable per metric; `bands` holds
/// (minimum percentile, label) pairs and `fallback` covers everything
/// below the lowest band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelBands {
    bands: Vec<(u8, String)>,
    fallback: String,
}

impl LabelBands {
    /// Create bands; sorted descending by threshold internally so lookup
    /// is a single scan
    pub fn new(mut bands: Vec<(u8, String)>, fallback: impl Into<String>) -> Self {
        bands.sort_by(|a, b| b.0.cmp(&a.0));
        Self {
            bands,
            fallback: fallback.into(),
        }
    }

    /// Label for a percentile rank
    pub fn label_for(&self, percentile: u8) -> &str {
        self.bands
            .iter()
            .find(|(threshold, _)| percentile >= *threshold)
            .map(|(_, label)| label.as_str())
            .unwrap_or(&self.fallback)
    }
}

impl Default for LabelBands {
    fn default() -> Self {
        Self::new(
            vec![
                (80, "excellent".to_string()),
                (60, "above average".to_string()),
                (40, "average".to_string()),
            ],
            "below average",
        )
    }
}

/// Percentile rank plus qualitative label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRanking {
    /// Integer 0-100
    pub percentile: u8,
    pub label: String,
}

/// Rank a metric against its reference distribution
pub fn compare(metric: &BenchmarkMetric, bands: &LabelBands) -> EngineResult<BenchmarkRanking> {
    if !metric.value.is_finite() {
        return Err(EngineError::invalid(
            "value",
            metric.value,
            "must be finite",
        ));
    }
    if metric.reference.is_empty() {
        return Err(EngineError::invalid(
            "reference",
            "empty",
            "reference distribution must contain at least one value",
        ));
    }

    let percentile = match &metric.reference {
        ReferenceDistribution::Samples(values) => {
            let at_or_below = values.iter().filter(|&&v| v <= metric.value).count();
            percentile_from_fraction(at_or_below as f64 / values.len() as f64)
        }
        ReferenceDistribution::PercentileTable(rows) => rows
            .iter()
            .filter(|(_, value)| *value <= metric.value)
            .map(|(percentile, _)| *percentile)
            .max()
            .unwrap_or(0)
            .min(100),
    };

    Ok(BenchmarkRanking {
        percentile,
        label: bands.label_for(percentile).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(value: f64, reference: ReferenceDistribution) -> BenchmarkMetric {
        BenchmarkMetric {
            name: "net yield".to_string(),
            value,
            unit: "%".to_string(),
            reference,
        }
    }

    #[test]
    fn test_percentile_inclusive_convention() {
        let reference = ReferenceDistribution::Samples(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let ranking = compare(&metric(3.0, reference), &LabelBands::default()).unwrap();

        // 3 of 5 values <= 3
        assert_eq!(ranking.percentile, 60);
        assert_eq!(ranking.label, "above average");
    }

    #[test]
    fn test_percentile_extremes() {
        let samples = vec![10.0, 20.0, 30.0];

        let below_all = metric(5.0, ReferenceDistribution::Samples(samples.clone()));
        assert_eq!(compare(&below_all, &LabelBands::default()).unwrap().percentile, 0);

        let above_all = metric(99.0, ReferenceDistribution::Samples(samples));
        let ranking = compare(&above_all, &LabelBands::default()).unwrap();
        assert_eq!(ranking.percentile, 100);
        assert_eq!(ranking.label, "excellent");
    }

    #[test]
    fn test_percentile_table_lookup() {
        let table = ReferenceDistribution::PercentileTable(vec![
            (25, 100.0),
            (50, 200.0),
            (75, 300.0),
        ]);

        assert_eq!(compare(&metric(250.0, table.clone()), &LabelBands::default()).unwrap().percentile, 50);
        assert_eq!(compare(&metric(50.0, table.clone()), &LabelBands::default()).unwrap().percentile, 0);
        assert_eq!(compare(&metric(300.0, table), &LabelBands::default()).unwrap().percentile, 75);
    }

    #[test]
    fn test_empty_reference_rejected() {
        let empty = metric(1.0, ReferenceDistribution::Samples(vec![]));
        assert!(compare(&empty, &LabelBands::default()).is_err());

        let empty_table = metric(1.0, ReferenceDistribution::PercentileTable(vec![]));
        assert!(compare(&empty_table, &LabelBands::default()).is_err());
    }

    #[test]
    fn test_custom_bands() {
        let strict = LabelBands::new(
            vec![(90, "top decile".to_string()), (50, "upper half".to_string())],
            "lower half",
        );

        assert_eq!(strict.label_for(95), "top decile");
        assert_eq!(strict.label_for(60), "upper half");
        assert_eq!(strict.label_for(49), "lower half");
    }

    #[test]
    fn test_default_band_boundaries() {
        let bands = LabelBands::default();
        assert_eq!(bands.label_for(80), "excellent");
        assert_eq!(bands.label_for(79), "above average");
        assert_eq!(bands.label_for(60), "above average");
        assert_eq!(bands.label_for(40), "average");
        assert_eq!(bands.label_for(39), "below average");
    }
}
