use shared::{DashboardResponse, FilterOptions, FilterSelection};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod components;
mod services;

use components::{CategoryChart, FilterSelect, KpiCards, TrendChart};
use services::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let filter_options = use_state(FilterOptions::default);
    let selection = use_state(FilterSelection::default);
    let dashboard = use_state(|| Option::<DashboardResponse>::None);
    let loading = use_state(|| true);

    // Re-query the backend for a selection; the response fully replaces
    // the previous dashboard state
    let refresh_dashboard = {
        let api_client = api_client.clone();
        let dashboard = dashboard.clone();
        let loading = loading.clone();

        Callback::from(move |selection: FilterSelection| {
            let api_client = api_client.clone();
            let dashboard = dashboard.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.compute_dashboard(&selection).await {
                    Ok(data) => dashboard.set(Some(data)),
                    Err(e) => gloo::console::error!("Failed to fetch dashboard:", e),
                }

                loading.set(false);
            });
        })
    };

    // Initial load: filter options plus the unfiltered dashboard
    {
        let api_client = api_client.clone();
        let filter_options = filter_options.clone();
        let refresh_dashboard = refresh_dashboard.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.get_filter_options().await {
                    Ok(options) => filter_options.set(options),
                    Err(e) => gloo::console::error!("Failed to fetch filter options:", e),
                }
            });
            refresh_dashboard.emit(FilterSelection::default());
            || ()
        });
    }

    // One callback per dimension; every control change triggers exactly
    // one recompute
    let on_regions_change = {
        let selection = selection.clone();
        let refresh_dashboard = refresh_dashboard.clone();
        Callback::from(move |regions: Vec<String>| {
            let mut next = (*selection).clone();
            next.regions = regions;
            selection.set(next.clone());
            refresh_dashboard.emit(next);
        })
    };
    let on_categories_change = {
        let selection = selection.clone();
        let refresh_dashboard = refresh_dashboard.clone();
        Callback::from(move |categories: Vec<String>| {
            let mut next = (*selection).clone();
            next.categories = categories;
            selection.set(next.clone());
            refresh_dashboard.emit(next);
        })
    };
    let on_salespeople_change = {
        let selection = selection.clone();
        let refresh_dashboard = refresh_dashboard.clone();
        Callback::from(move |salespeople: Vec<String>| {
            let mut next = (*selection).clone();
            next.salespeople = salespeople;
            selection.set(next.clone());
            refresh_dashboard.emit(next);
        })
    };

    let summary = dashboard.as_ref().map(|d| d.summary.clone());
    let trend = dashboard
        .as_ref()
        .map(|d| d.trend.clone())
        .unwrap_or_default();
    let by_category = dashboard
        .as_ref()
        .map(|d| d.by_category.clone())
        .unwrap_or_default();

    html! {
        <div class="dashboard">
            <h1 class="dashboard-title">{"Interactive Sales Dashboard"}</h1>

            <div class="filter-grid">
                <FilterSelect
                    label="Region"
                    options={filter_options.regions.clone()}
                    selected={selection.regions.clone()}
                    on_change={on_regions_change}
                />
                <FilterSelect
                    label="Category"
                    options={filter_options.categories.clone()}
                    selected={selection.categories.clone()}
                    on_change={on_categories_change}
                />
                <FilterSelect
                    label="Salesperson"
                    options={filter_options.salespeople.clone()}
                    selected={selection.salespeople.clone()}
                    on_change={on_salespeople_change}
                />
            </div>

            <KpiCards summary={summary} />

            <TrendChart points={trend} loading={*loading} />
            <CategoryChart points={by_category} loading={*loading} />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
