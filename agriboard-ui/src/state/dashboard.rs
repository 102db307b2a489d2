//! Dashboard State
//!
//! Reactive state shared by the dashboard's panels.

use agriboard::config::ResizeConfig;
use agriboard::datasets::{EnvPoint, YieldStats};
use leptos::*;

/// State provided to all dashboard components
#[derive(Clone)]
pub struct DashboardState {
    /// Environment time series
    pub env: RwSignal<Vec<EnvPoint>>,
    /// Daily yield per crop
    pub yields: RwSignal<Option<YieldStats>>,
    /// Whether the side panel is collapsed
    pub sidebar_collapsed: RwSignal<bool>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Chart resize tuning shared by every panel
    pub resize: ResizeConfig,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    let state = DashboardState {
        env: create_rw_signal(Vec::new()),
        yields: create_rw_signal(None),
        sidebar_collapsed: create_rw_signal(false),
        loading: create_rw_signal(true),
        error: create_rw_signal(None),
        resize: ResizeConfig::default(),
    };

    provide_context(state);
}

impl DashboardState {
    /// Project one field of the environment series as `(ts, value)` points
    pub fn env_points(&self, field: fn(&EnvPoint) -> f64) -> Vec<(i64, f64)> {
        self.env
            .with(|points| points.iter().map(|p| (p.ts, field(p))).collect())
    }

    /// Daily tonnage of one crop
    pub fn crop_points(&self, crop: &str) -> Vec<(i64, f64)> {
        self.yields
            .with(|stats| stats.as_ref().map(|s| s.crop_series(crop)).unwrap_or_default())
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.update(|collapsed| *collapsed = !*collapsed);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
