use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Selected filter values for a dashboard query.
///
/// Each field is an independent set of allowed labels for one dimension.
/// An empty set means "no restriction" on that dimension; a non-empty set
/// keeps only records whose field value is one of the listed labels.
/// Filtering is conjunctive across dimensions and inclusive within one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Allowed region labels (empty = all regions)
    #[serde(default)]
    pub regions: Vec<String>,
    /// Allowed category labels (empty = all categories)
    #[serde(default)]
    pub categories: Vec<String>,
    /// Allowed salesperson labels (empty = all salespeople)
    #[serde(default)]
    pub salespeople: Vec<String>,
}

impl FilterSelection {
    /// True when no dimension restricts anything (the full dataset matches).
    pub fn is_unrestricted(&self) -> bool {
        self.regions.is_empty() && self.categories.is_empty() && self.salespeople.is_empty()
    }
}

/// Distinct values available for each filter control, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub categories: Vec<String>,
    pub salespeople: Vec<String>,
}

/// KPI values for the current filter selection.
///
/// Carries both raw numbers and display-ready strings so the frontend
/// renders exactly what the backend formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    /// Sum of sales amounts over the filtered subset (0 when empty)
    pub total_sales: f64,
    /// Arithmetic mean of sales amounts (0 when the subset is empty)
    pub average_sales: f64,
    /// Total formatted as currency, e.g. "$12,346"
    pub formatted_total: String,
    /// Average formatted as currency, e.g. "$75"
    pub formatted_average: String,
    /// Number of records in the filtered subset
    pub record_count: usize,
}

/// One point of the sales-over-time line chart.
///
/// Points arrive in chronological order; records sharing a date each keep
/// their own point (no bucketing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: f64,
}

/// One record's contribution to the sales-by-category bar chart.
///
/// Per-record on the wire; summation by category is the chart's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub category: String,
    pub amount: f64,
}

/// Full dashboard payload for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub summary: KpiSummary,
    pub trend: Vec<TrendPoint>,
    pub by_category: Vec<CategoryPoint>,
}
