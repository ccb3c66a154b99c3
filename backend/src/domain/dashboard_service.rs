//! Dashboard filtering and aggregation logic.
//!
//! This is the one piece of real business logic in the application: given
//! the immutable dataset and a filter selection, produce the filtered
//! subset, the two KPI values and the two chart-ready series. Everything
//! here is a pure function of its inputs; handlers call it once per filter
//! change and the result fully replaces the previous render.

use std::sync::Arc;

use shared::{CategoryPoint, DashboardResponse, FilterOptions, FilterSelection, KpiSummary, TrendPoint};

use crate::domain::models::{SalesDataset, SalesRecord};

/// Result of one filtering/aggregation pass over the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardComputation {
    /// The filtered subset, in dataset order
    pub records: Vec<SalesRecord>,
    /// Sum of amounts over the subset (0 when empty)
    pub total_sales: f64,
    /// Mean amount over the subset (0 when empty)
    pub average_sales: f64,
    /// (date, amount) per record, chronological
    pub trend_series: Vec<TrendPoint>,
    /// (category, amount) per record, dataset order
    pub category_series: Vec<CategoryPoint>,
}

/// Service answering dashboard queries against the startup dataset.
#[derive(Clone)]
pub struct DashboardService {
    dataset: Arc<SalesDataset>,
}

impl DashboardService {
    pub fn new(dataset: Arc<SalesDataset>) -> Self {
        Self { dataset }
    }

    /// Filter the dataset by `selection` and compute the aggregates and
    /// chart series.
    ///
    /// A selection matching zero records is not an error: both KPIs come
    /// back as 0 and the series are empty.
    pub fn compute(&self, selection: &FilterSelection) -> DashboardComputation {
        let records: Vec<SalesRecord> = self
            .dataset
            .records()
            .iter()
            .filter(|record| record.matches(selection))
            .cloned()
            .collect();

        let total_sales: f64 = records.iter().map(|r| r.amount).sum();
        let average_sales = if records.is_empty() {
            0.0
        } else {
            total_sales / records.len() as f64
        };

        // One point per record; stable sort keeps dataset order within a
        // date so same-day records stay distinct points.
        let mut trend_series: Vec<TrendPoint> = records
            .iter()
            .map(|r| TrendPoint {
                date: r.date,
                amount: r.amount,
            })
            .collect();
        trend_series.sort_by_key(|point| point.date);

        let category_series: Vec<CategoryPoint> = records
            .iter()
            .map(|r| CategoryPoint {
                category: r.category.clone(),
                amount: r.amount,
            })
            .collect();

        DashboardComputation {
            records,
            total_sales,
            average_sales,
            trend_series,
            category_series,
        }
    }

    /// Build the wire response for a selection.
    pub fn dashboard(&self, selection: &FilterSelection) -> DashboardResponse {
        let computation = self.compute(selection);
        DashboardResponse {
            summary: KpiSummary {
                total_sales: computation.total_sales,
                average_sales: computation.average_sales,
                formatted_total: format_currency(computation.total_sales),
                formatted_average: format_currency(computation.average_sales),
                record_count: computation.records.len(),
            },
            trend: computation.trend_series,
            by_category: computation.category_series,
        }
    }

    /// Distinct values per dimension over the FULL dataset, sorted
    /// ascending. Selecting all of them is equivalent to selecting none.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            regions: distinct_sorted(self.dataset.records(), |r| &r.region),
            categories: distinct_sorted(self.dataset.records(), |r| &r.category),
            salespeople: distinct_sorted(self.dataset.records(), |r| &r.salesperson),
        }
    }
}

fn distinct_sorted<F>(records: &[SalesRecord], field: F) -> Vec<String>
where
    F: Fn(&SalesRecord) -> &String,
{
    let mut values: Vec<String> = records.iter().map(|r| field(r).clone()).collect();
    values.sort();
    values.dedup();
    values
}

/// Format an amount as whole-dollar currency with thousands separators,
/// e.g. `1234567.4` -> `"$1,234,567"`. Negative amounts carry a leading
/// minus sign.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
