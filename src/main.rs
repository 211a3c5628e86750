//! Portfolio Analytics CLI
//!
//! Runs every engine component over a sample portfolio and prints the
//! results, writing the forecast to CSV.

use portfolio_analytics::{
    attribution::{decompose, AttributionConfig, AttributionSource},
    benchmark::{compare, BenchmarkMetric, LabelBands, ReferenceDistribution},
    forecast::{ForecastEngine, GrowthModel},
    scenario::{evaluate_scenarios, Scenario},
    sensitivity::{simulate, Perturbation, PerturbationKind, SimulationParameters},
    snapshot::{HistoricalPoint, Holding, PortfolioSnapshot},
};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    println!("Portfolio Analytics v0.1.0");
    println!("==========================\n");

    // Sample portfolio: two properties plus a REIT position
    let snapshot = PortfolioSnapshot {
        income: 12_000.0,
        costs: 4_500.0,
        holdings: vec![
            Holding {
                name: "12 Elm St".to_string(),
                amount: 1.0,
                value_at_market: 450_000.0,
            },
            Holding {
                name: "7 Birch Ave".to_string(),
                amount: 1.0,
                value_at_market: 310_000.0,
            },
            Holding {
                name: "REIT units".to_string(),
                amount: 320.0,
                value_at_market: 28_800.0,
            },
        ],
        historical_series: vec![
            HistoricalPoint { period: "2024".to_string(), value: 86_000.0 },
            HistoricalPoint { period: "2025".to_string(), value: 90_000.0 },
        ],
    };

    println!("Snapshot:");
    println!("  Net cash flow: ${:.2}/month", snapshot.net_cash_flow());
    println!("  Market value:  ${:.2}", snapshot.total_market_value());
    println!();

    // --- Forecast: 24 months of net cash flow, seeded so the demo is stable
    let model = GrowthModel::monthly(
        snapshot.net_cash_flow(),
        0.004, // 0.4% monthly growth
        50.0,  // +/- $50 noise band
        chrono::NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid date"),
        24,
    )
    .expect("valid growth model");
    let engine = ForecastEngine::new(model.clone()).expect("validated above");
    let forecast = engine.forecast(Some(2026));

    println!("Cash-flow forecast ({} months, seed 2026):", forecast.points.len());
    println!("{:>8} {:>12}", "Period", "Value");
    for point in forecast.points.iter().take(6) {
        println!("{:>8} {:>12.2}", point.period, point.value);
    }
    if forecast.points.len() > 6 {
        println!("... ({} more periods)", forecast.points.len() - 6);
    }
    let summary = forecast.summary(model.base_value);
    println!(
        "Final: ${:.2} ({:+.1}% total growth)\n",
        summary.final_value, summary.total_growth_pct
    );

    // Write full forecast to CSV
    let csv_path = "forecast_output.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");
    writeln!(file, "Period,Value").unwrap();
    for point in &forecast.points {
        writeln!(file, "{},{:.2}", point.period, point.value).unwrap();
    }
    println!("Full forecast written to: {}\n", csv_path);

    // --- Scenario comparison
    let scenarios = vec![
        Scenario::new("hold", 0.30)
            .with_component("rent", 10_500.0)
            .with_component("parking", 1_500.0),
        Scenario::new("raise rents", 0.30)
            .with_component("rent", 11_200.0)
            .with_component("parking", 1_500.0),
        Scenario::new("sell 7 Birch Ave", 0.26)
            .with_component("rent", 7_800.0)
            .with_component("sale proceeds yield", 900.0),
    ];
    let outcomes = evaluate_scenarios(&scenarios).expect("scenarios are valid");

    println!("Scenario comparison:");
    println!("{:<20} {:>12} {:>10} {:>12}", "Scenario", "Gross", "Tax", "Net");
    for outcome in &outcomes {
        println!(
            "{:<20} {:>12.2} {:>10.2} {:>12.2}",
            outcome.name, outcome.gross_income, outcome.tax, outcome.net
        );
    }
    println!();

    // --- Benchmark: net yield against a peer distribution
    let metric = BenchmarkMetric {
        name: "net yield".to_string(),
        value: 5.4,
        unit: "%".to_string(),
        reference: ReferenceDistribution::Samples(vec![
            3.1, 3.8, 4.2, 4.5, 4.9, 5.1, 5.6, 6.0, 6.4, 7.2,
        ]),
    };
    let ranking = compare(&metric, &LabelBands::default()).expect("non-empty reference");
    println!(
        "Benchmark: {} {}{} -> {}th percentile ({})\n",
        metric.name, metric.value, metric.unit, ranking.percentile, ranking.label
    );

    // --- Attribution of annual return
    let sources = vec![
        AttributionSource { name: "rental income".to_string(), value: 54_000.0 },
        AttributionSource { name: "appreciation".to_string(), value: 27_000.0 },
        AttributionSource { name: "tax relief".to_string(), value: 9_000.0 },
    ];
    let shares = decompose(&sources, &AttributionConfig::default()).expect("valid sources");
    println!("Return attribution:");
    for share in &shares {
        println!("  {:<16} ${:>10.2}  {:>5.1}%", share.name, share.value, share.share_pct);
    }
    println!();

    // --- Sensitivity: rent increase vs vacancy
    let params = SimulationParameters {
        baseline: 120_000.0,
        perturbations: vec![
            Perturbation { kind: PerturbationKind::RentIncrease, delta_pct: 5.0 },
            Perturbation { kind: PerturbationKind::VacancyRate, delta_pct: 2.0 },
        ],
    };
    let outcome = simulate(&params).expect("valid parameters");
    println!(
        "What-if (+5% rent, 2% vacancy): ${:.2} ({:+.1}%)\n",
        outcome.projected_value, outcome.percent_change
    );

    // JSON view of the scenario outcomes, as a host transport would emit
    let json = serde_json::to_string_pretty(&outcomes).expect("outcomes serialize");
    println!("Scenario outcomes as JSON:\n{}", json);
}
