//! # CSV Storage Module
//!
//! CSV-based loading of the sales dataset.
//!
//! ## File Format
//!
//! The input file carries one row per sale with the following header:
//! ```csv
//! Date,Region,Category,Salesperson,Sales
//! 2024-01-15,East,Electronics,Alice,1250.00
//! 2024-01-16,West,Furniture,Bob,430.50
//! ```
//!
//! `Date` is `YYYY-MM-DD` (an RFC 3339 timestamp is accepted and reduced
//! to its date part). `Sales` must parse as a number. The file is read
//! once at startup; any malformed row aborts the load.

pub mod sales_repository;

#[cfg(test)]
pub mod test_utils;

pub use sales_repository::{DatasetError, SalesDataRepository};
