//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod sidebar;

pub use chart::{ChartPanel, Series, SERIES_COLORS};
pub use loading::{ChartSkeleton, Loading};
pub use sidebar::Sidebar;
