//! Load portfolio snapshots from CSV files
//!
//! A snapshot directory holds `cashflow.csv` (single income/costs row),
//! `holdings.csv`, and `history.csv`. Benchmark reference distributions are
//! a single-column `value` file loadable from anywhere.

use csv::Reader;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use super::{HistoricalPoint, Holding, PortfolioSnapshot};

/// Default path to snapshot data directory
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/snapshot";

/// Raw CSV row for holdings.csv
#[derive(Debug, serde::Deserialize)]
struct HoldingRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "ValueAtMarket")]
    value_at_market: f64,
}

/// Raw CSV row for history.csv
#[derive(Debug, serde::Deserialize)]
struct HistoryRow {
    #[serde(rename = "Period")]
    period: String,
    #[serde(rename = "Value")]
    value: f64,
}

/// Load holdings from holdings.csv in the given directory
pub fn load_holdings(path: &Path) -> Result<Vec<Holding>, Box<dyn Error>> {
    let file = File::open(path.join("holdings.csv"))?;
    let mut reader = Reader::from_reader(file);

    let mut holdings = Vec::new();
    for result in reader.deserialize() {
        let row: HoldingRow = result?;
        holdings.push(Holding {
            name: row.name,
            amount: row.amount,
            value_at_market: row.value_at_market,
        });
    }

    Ok(holdings)
}

/// Load a historical metric series from history.csv, preserving file order
pub fn load_history(path: &Path) -> Result<Vec<HistoricalPoint>, Box<dyn Error>> {
    let file = File::open(path.join("history.csv"))?;
    let mut reader = Reader::from_reader(file);

    let mut series = Vec::new();
    for result in reader.deserialize() {
        let row: HistoryRow = result?;
        series.push(HistoricalPoint {
            period: row.period,
            value: row.value,
        });
    }

    Ok(series)
}

/// Load income/costs from cashflow.csv (expects exactly one data row)
pub fn load_cashflow(path: &Path) -> Result<(f64, f64), Box<dyn Error>> {
    let file = File::open(path.join("cashflow.csv"))?;
    let mut reader = Reader::from_reader(file);

    for result in reader.records() {
        let record = result?;
        let income: f64 = record[0].parse()?;
        let costs: f64 = record[1].parse()?;
        return Ok((income, costs));
    }

    Err("cashflow.csv contains no data rows".into())
}

/// Load a benchmark reference distribution (single `Value` column)
pub fn load_reference_distribution<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, Box<dyn Error>> {
    let file = File::open(path.as_ref())?;
    let mut reader = Reader::from_reader(file);

    let mut values = Vec::new();
    for result in reader.records() {
        let record = result?;
        values.push(record[0].parse()?);
    }

    Ok(values)
}

/// Load a full snapshot from a directory of CSV files
pub fn load_snapshot(path: &Path) -> Result<PortfolioSnapshot, Box<dyn Error>> {
    let (income, costs) = load_cashflow(path)?;

    Ok(PortfolioSnapshot {
        income,
        costs,
        holdings: load_holdings(path)?,
        historical_series: load_history(path)?,
    })
}

/// Load a snapshot from the default location (data/snapshot/)
pub fn load_default_snapshot() -> Result<PortfolioSnapshot, Box<dyn Error>> {
    load_snapshot(Path::new(DEFAULT_SNAPSHOT_PATH))
}
