use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate};
use csv::Reader;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::models::{SalesDataset, SalesRecord};

/// Errors raised while loading the sales data file.
///
/// All of them are fatal: the process refuses to start without a complete,
/// well-formed dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("sales data file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("failed to open sales data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read sales data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unparseable date '{value}' (expected YYYY-MM-DD or RFC 3339)")]
    InvalidDate { row: usize, value: String },
}

/// One raw CSV row, column names as they appear in the file header.
#[derive(Debug, Deserialize)]
struct RawSalesRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Salesperson")]
    salesperson: String,
    #[serde(rename = "Sales")]
    sales: f64,
}

/// CSV-based sales dataset repository.
#[derive(Debug, Clone)]
pub struct SalesDataRepository {
    path: PathBuf,
}

impl SalesDataRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the whole file into an in-memory dataset, preserving row order.
    pub fn load_dataset(&self) -> Result<SalesDataset, DatasetError> {
        if !self.path.exists() {
            return Err(DatasetError::FileNotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut records = Vec::new();
        for (index, result) in csv_reader.deserialize::<RawSalesRow>().enumerate() {
            // Row 1 is the header, so data rows start at 2.
            let row = index + 2;
            let raw = result?;
            let date = parse_date(&raw.date).ok_or_else(|| DatasetError::InvalidDate {
                row,
                value: raw.date.clone(),
            })?;
            records.push(SalesRecord {
                date,
                region: raw.region,
                category: raw.category,
                salesperson: raw.salesperson,
                amount: raw.sales,
            });
        }

        info!(
            "Loaded {} sales records from {}",
            records.len(),
            self.path.display()
        );
        Ok(SalesDataset::new(records))
    }
}

/// Parse a date cell. Plain `YYYY-MM-DD` is the expected form; a full
/// RFC 3339 timestamp is accepted and reduced to its date part.
fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;

    #[test]
    fn loads_well_formed_file_in_row_order() {
        let env = TestEnvironment::new().unwrap();
        let path = env.write_dataset(
            "sales_data.csv",
            "Date,Region,Category,Salesperson,Sales\n\
             2024-01-02,West,Furniture,Bob,430.50\n\
             2024-01-01,East,Electronics,Alice,1250.00\n",
        );

        let dataset = SalesDataRepository::new(&path).load_dataset().unwrap();

        assert_eq!(dataset.len(), 2);
        let first = &dataset.records()[0];
        assert_eq!(first.region, "West");
        assert_eq!(first.category, "Furniture");
        assert_eq!(first.salesperson, "Bob");
        assert_eq!(first.amount, 430.50);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        // File order survives even though the second row is dated earlier.
        assert_eq!(dataset.records()[1].region, "East");
    }

    #[test]
    fn missing_file_is_a_startup_error() {
        let env = TestEnvironment::new().unwrap();
        let path = env.base_path.join("does_not_exist.csv");

        let err = SalesDataRepository::new(&path).load_dataset().unwrap_err();
        assert!(matches!(err, DatasetError::FileNotFound(_)));
    }

    #[test]
    fn header_only_file_yields_empty_dataset() {
        let env = TestEnvironment::new().unwrap();
        let path = env.write_dataset(
            "sales_data.csv",
            "Date,Region,Category,Salesperson,Sales\n",
        );

        let dataset = SalesDataRepository::new(&path).load_dataset().unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn rfc3339_timestamp_reduces_to_date_part() {
        let env = TestEnvironment::new().unwrap();
        let path = env.write_dataset(
            "sales_data.csv",
            "Date,Region,Category,Salesperson,Sales\n\
             2024-03-05T14:30:00-05:00,East,Electronics,Alice,10\n",
        );

        let dataset = SalesDataRepository::new(&path).load_dataset().unwrap();
        assert_eq!(
            dataset.records()[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
        );
    }

    #[test]
    fn unparseable_date_reports_row_number() {
        let env = TestEnvironment::new().unwrap();
        let path = env.write_dataset(
            "sales_data.csv",
            "Date,Region,Category,Salesperson,Sales\n\
             2024-01-01,East,Electronics,Alice,10\n\
             01/02/2024,West,Furniture,Bob,20\n",
        );

        let err = SalesDataRepository::new(&path).load_dataset().unwrap_err();
        match err {
            DatasetError::InvalidDate { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "01/02/2024");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_sales_value_is_an_error() {
        let env = TestEnvironment::new().unwrap();
        let path = env.write_dataset(
            "sales_data.csv",
            "Date,Region,Category,Salesperson,Sales\n\
             2024-01-01,East,Electronics,Alice,lots\n",
        );

        let err = SalesDataRepository::new(&path).load_dataset().unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }
}
