//! CSV dataset loading with schema validation and a load-once cache.
//!
//! Each dataset is validated against its declared schema exactly once, at
//! load time. A missing file or missing column is a recoverable
//! [`DatasetIssue`]; callers warn the user and disable the dependent
//! sections instead of aborting. Outcomes (including absence) are memoized,
//! so a dataset is read from disk at most once per process.

use crate::core::cache::Cache;
use crate::core::history::PriceSeries;
use crate::core::states::{PurchaseTable, StatePurchase};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub const PRICE_COLUMN: &str = "Silver_Price_INR_per_kg";
pub const STATE_COLUMN: &str = "State";
pub const PURCHASED_COLUMN: &str = "Silver_Purchased_kg";

/// Why a dataset could not be produced from its file.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetIssue {
    /// The CSV file does not exist. Recoverable: dependent features are
    /// disabled for the run.
    FileMissing(PathBuf),
    /// The header row lacks a required column. Same recovery policy.
    ColumnMissing {
        path: PathBuf,
        column: &'static str,
    },
    /// The file is unreadable or a cell failed to parse. Commands treat
    /// this as fatal.
    Malformed { path: PathBuf, message: String },
}

impl std::fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileMissing(path) => write!(f, "{} not found", path.display()),
            Self::ColumnMissing { path, column } => {
                write!(f, "{} has no '{column}' column", path.display())
            }
            Self::Malformed { path, message } => {
                write!(f, "failed to read {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for DatasetIssue {}

impl DatasetIssue {
    /// Recoverable issues disable features; malformed data does not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Malformed { .. })
    }
}

pub type DatasetResult<T> = Result<Arc<T>, DatasetIssue>;

/// Loads and memoizes the two datasets. Each path is read at most once;
/// repeated calls return the same `Arc` (or the same issue).
pub struct DataStore {
    prices_path: PathBuf,
    purchases_path: PathBuf,
    prices: Cache<PathBuf, DatasetResult<PriceSeries>>,
    purchases: Cache<PathBuf, DatasetResult<PurchaseTable>>,
}

impl DataStore {
    pub fn new(prices_path: impl Into<PathBuf>, purchases_path: impl Into<PathBuf>) -> Self {
        Self {
            prices_path: prices_path.into(),
            purchases_path: purchases_path.into(),
            prices: Cache::new(),
            purchases: Cache::new(),
        }
    }

    /// The historical price series, loaded on first access.
    pub fn price_series(&self) -> DatasetResult<PriceSeries> {
        if let Some(cached) = self.prices.get(&self.prices_path) {
            return cached;
        }
        debug!("Loading price series from {}", self.prices_path.display());
        let loaded = read_price_series(&self.prices_path).map(Arc::new);
        self.prices.put(self.prices_path.clone(), loaded.clone());
        loaded
    }

    /// The state purchase table, loaded on first access.
    pub fn purchases(&self) -> DatasetResult<PurchaseTable> {
        if let Some(cached) = self.purchases.get(&self.purchases_path) {
            return cached;
        }
        debug!(
            "Loading purchase table from {}",
            self.purchases_path.display()
        );
        let loaded = read_purchase_table(&self.purchases_path).map(Arc::new);
        self.purchases.put(self.purchases_path.clone(), loaded.clone());
        loaded
    }
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>, DatasetIssue> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            DatasetIssue::FileMissing(path.to_path_buf())
        } else {
            DatasetIssue::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;
    Ok(ReaderBuilder::new().trim(Trim::All).from_reader(file))
}

fn malformed(path: &Path, message: impl ToString) -> DatasetIssue {
    DatasetIssue::Malformed {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Position of `column` in the header row. Extra columns are ignored; rows
/// are addressed by header name, never by fixed index.
fn column_index(
    path: &Path,
    headers: &StringRecord,
    column: &'static str,
) -> Result<usize, DatasetIssue> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or(DatasetIssue::ColumnMissing {
            path: path.to_path_buf(),
            column,
        })
}

fn parse_number(path: &Path, record: &StringRecord, index: usize) -> Result<f64, DatasetIssue> {
    let raw = record
        .get(index)
        .ok_or_else(|| malformed(path, format!("row is missing field {index}")))?;
    raw.parse::<f64>()
        .map_err(|e| malformed(path, format!("'{raw}' is not a number: {e}")))
}

fn read_price_series(path: &Path) -> Result<PriceSeries, DatasetIssue> {
    let mut rdr = open_reader(path)?;
    let headers = rdr.headers().map_err(|e| malformed(path, e))?.clone();
    let price_idx = column_index(path, &headers, PRICE_COLUMN)?;

    let mut prices = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| malformed(path, e))?;
        prices.push(parse_number(path, &record, price_idx)?);
    }
    debug!("Loaded {} price records", prices.len());
    Ok(PriceSeries::new(prices))
}

fn read_purchase_table(path: &Path) -> Result<PurchaseTable, DatasetIssue> {
    let mut rdr = open_reader(path)?;
    let headers = rdr.headers().map_err(|e| malformed(path, e))?.clone();
    let state_idx = column_index(path, &headers, STATE_COLUMN)?;
    let purchased_idx = column_index(path, &headers, PURCHASED_COLUMN)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| malformed(path, e))?;
        let state = record
            .get(state_idx)
            .ok_or_else(|| malformed(path, format!("row is missing field {state_idx}")))?
            .to_string();
        let purchased_kg = parse_number(path, &record, purchased_idx)?;
        rows.push(StatePurchase {
            state,
            purchased_kg,
        });
    }
    debug!("Loaded {} purchase records", rows.len());
    Ok(PurchaseTable::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    #[test]
    fn test_price_series_load() {
        let dir = TempDir::new().unwrap();
        let prices = write_file(
            &dir,
            "historical_silver_price.csv",
            "Date,Silver_Price_INR_per_kg\n2024-01-01,15000\n2024-01-02,25000\n2024-01-03,35000\n",
        );
        let store = DataStore::new(&prices, dir.path().join("missing.csv"));

        let series = store.price_series().unwrap();
        assert_eq!(series.prices(), &[15_000.0, 25_000.0, 35_000.0]);
    }

    #[test]
    fn test_load_is_memoized() {
        let dir = TempDir::new().unwrap();
        let prices = write_file(
            &dir,
            "historical_silver_price.csv",
            "Silver_Price_INR_per_kg\n10000\n",
        );
        let store = DataStore::new(&prices, dir.path().join("missing.csv"));

        let first = store.price_series().unwrap();
        // Replacing the file has no effect; the first read is cached.
        fs::write(&prices, "Silver_Price_INR_per_kg\n99999\n").unwrap();
        let second = store.price_series().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_missing_file_is_recoverable() {
        let dir = TempDir::new().unwrap();
        let store = DataStore::new(dir.path().join("nope.csv"), dir.path().join("nope2.csv"));

        let issue = store.price_series().unwrap_err();
        assert!(matches!(issue, DatasetIssue::FileMissing(_)));
        assert!(issue.is_recoverable());
        // The absence itself is memoized.
        assert_eq!(store.price_series().unwrap_err(), issue);
    }

    #[test]
    fn test_missing_column_is_recoverable() {
        let dir = TempDir::new().unwrap();
        let prices = write_file(&dir, "prices.csv", "Date,Price\n2024-01-01,15000\n");
        let store = DataStore::new(&prices, dir.path().join("missing.csv"));

        let issue = store.price_series().unwrap_err();
        assert_eq!(
            issue,
            DatasetIssue::ColumnMissing {
                path: prices.clone(),
                column: PRICE_COLUMN
            }
        );
        assert!(issue.is_recoverable());
    }

    #[test]
    fn test_unparsable_cell_is_malformed() {
        let dir = TempDir::new().unwrap();
        let prices = write_file(
            &dir,
            "prices.csv",
            "Silver_Price_INR_per_kg\n15000\nnot-a-number\n",
        );
        let store = DataStore::new(&prices, dir.path().join("missing.csv"));

        let issue = store.price_series().unwrap_err();
        assert!(matches!(issue, DatasetIssue::Malformed { .. }));
        assert!(!issue.is_recoverable());
    }

    #[test]
    fn test_purchase_table_load() {
        let dir = TempDir::new().unwrap();
        let purchases = write_file(
            &dir,
            "state_wise_silver_purchased_kg.csv",
            "State,Silver_Purchased_kg\nGujarat,540\nKerala,120\n",
        );
        let store = DataStore::new(dir.path().join("missing.csv"), &purchases);

        let table = store.purchases().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].state, "Gujarat");
        assert_eq!(table.rows()[0].purchased_kg, 540.0);
    }
}
