//! State Management
//!
//! Dashboard-wide reactive state.

pub mod dashboard;

pub use dashboard::{provide_dashboard_state, DashboardState};
