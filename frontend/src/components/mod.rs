pub mod category_chart;
pub mod filter_select;
pub mod kpi_cards;
pub mod trend_chart;

pub use category_chart::CategoryChart;
pub use filter_select::FilterSelect;
pub use kpi_cards::KpiCards;
pub use trend_chart::TrendChart;
