//! # Storage Module
//!
//! Loading of the sales dataset from disk. The dashboard never writes:
//! the dataset is read once at startup and shared read-only for the
//! lifetime of the process.

pub mod csv;

pub use csv::{DatasetError, SalesDataRepository};
