use shared::KpiSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KpiCardsProps {
    /// None until the first dashboard response arrives
    pub summary: Option<KpiSummary>,
}

/// The two KPI cards: total and average sales for the current filters.
/// Values render exactly as the backend formatted them.
#[function_component(KpiCards)]
pub fn kpi_cards(props: &KpiCardsProps) -> Html {
    let (total, average) = match &props.summary {
        Some(summary) => (
            summary.formatted_total.clone(),
            summary.formatted_average.clone(),
        ),
        None => ("...".to_string(), "...".to_string()),
    };

    html! {
        <div class="kpi-cards">
            <div class="kpi-card">
                <h4>{"Total Sales"}</h4>
                <h2>{total}</h2>
            </div>
            <div class="kpi-card">
                <h4>{"Average Sale"}</h4>
                <h2>{average}</h2>
            </div>
        </div>
    }
}
