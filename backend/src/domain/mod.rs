//! # Domain Module
//!
//! Business logic for the sales dashboard. The whole domain is one
//! service: filter the startup dataset by the current selection and
//! aggregate the result into KPI values and chart series. It knows nothing
//! about HTTP or about how the dataset was loaded.

pub mod dashboard_service;
pub mod models;

pub use dashboard_service::{format_currency, DashboardComputation, DashboardService};
