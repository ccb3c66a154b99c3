use gloo::net::http::Request;
use shared::{DashboardResponse, FilterOptions, FilterSelection};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for same-origin requests (the backend serves the
    /// built app, so relative URLs resolve against it).
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a client with an explicit base URL (separate dev servers).
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Get the distinct values for the three filter controls
    pub async fn get_filter_options(&self) -> Result<FilterOptions, String> {
        let url = format!("{}/api/filters", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<FilterOptions>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse filter options: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch filter options: {}", e)),
        }
    }

    /// Recompute the dashboard for a filter selection
    pub async fn compute_dashboard(
        &self,
        selection: &FilterSelection,
    ) -> Result<DashboardResponse, String> {
        let url = format!("{}/api/dashboard", self.base_url);

        match Request::post(&url)
            .json(selection)
            .map_err(|e| format!("Failed to serialize selection: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<DashboardResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse dashboard: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
