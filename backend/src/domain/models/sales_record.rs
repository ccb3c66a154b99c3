//! Domain model for a single sales transaction and the loaded dataset.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::FilterSelection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Calendar date of the sale (no time component)
    pub date: NaiveDate,
    pub region: String,
    pub category: String,
    pub salesperson: String,
    /// Sale amount, non-negative
    pub amount: f64,
}

impl SalesRecord {
    /// Whether this record survives the given filter selection.
    ///
    /// A dimension with an empty selection set keeps every record; a
    /// non-empty set keeps records whose label is a member. All three
    /// dimensions must pass.
    pub fn matches(&self, selection: &FilterSelection) -> bool {
        let region_ok =
            selection.regions.is_empty() || selection.regions.iter().any(|r| *r == self.region);
        let category_ok = selection.categories.is_empty()
            || selection.categories.iter().any(|c| *c == self.category);
        let salesperson_ok = selection.salespeople.is_empty()
            || selection.salespeople.iter().any(|s| *s == self.salesperson);
        region_ok && category_ok && salesperson_ok
    }
}

/// The full dataset, loaded once at startup and read-only afterwards.
///
/// Record order is the order rows appeared in the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
}

impl SalesDataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, category: &str, salesperson: &str) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            region: region.to_string(),
            category: category.to_string(),
            salesperson: salesperson.to_string(),
            amount: 100.0,
        }
    }

    #[test]
    fn empty_selection_matches_everything() {
        let rec = record("East", "Electronics", "Alice");
        assert!(rec.matches(&FilterSelection::default()));
    }

    #[test]
    fn selection_is_inclusive_within_a_dimension() {
        let rec = record("East", "Electronics", "Alice");
        let selection = FilterSelection {
            regions: vec!["West".to_string(), "East".to_string()],
            ..Default::default()
        };
        assert!(rec.matches(&selection));
    }

    #[test]
    fn selection_is_conjunctive_across_dimensions() {
        let rec = record("East", "Electronics", "Alice");
        let selection = FilterSelection {
            regions: vec!["East".to_string()],
            categories: vec!["Furniture".to_string()],
            ..Default::default()
        };
        // Region passes but category does not, so the record is out.
        assert!(!rec.matches(&selection));
    }

    #[test]
    fn non_member_label_excludes_record() {
        let rec = record("East", "Electronics", "Alice");
        let selection = FilterSelection {
            salespeople: vec!["Bob".to_string()],
            ..Default::default()
        };
        assert!(!rec.matches(&selection));
    }
}
