//! Mock Data Client
//!
//! Fetches the generated datasets served next to the app.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use agriboard::datasets::{DatasetIndex, EnvPoint, YieldStats};

/// Default site root the `mock/` paths are relative to
pub const DEFAULT_MOCK_BASE: &str = ".";

/// Get the dataset base URL from local storage or use default
pub fn get_mock_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("agriboard_mock_base").ok().flatten())
        .unwrap_or_else(|| DEFAULT_MOCK_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = format!("{}/{}", get_mock_base(), path);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("{} returned HTTP {}", path, response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error in {}: {}", path, e))
}

/// Fetch the environment time series
pub async fn fetch_env_timeseries() -> Result<Vec<EnvPoint>, String> {
    fetch_json(&DatasetIndex::default().env).await
}

/// Fetch daily yield statistics
pub async fn fetch_yield_stats() -> Result<YieldStats, String> {
    fetch_json(&DatasetIndex::default().yield_stats).await
}
