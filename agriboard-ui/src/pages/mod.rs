//! Pages
//!
//! Top-level views of the application.

mod dashboard;

pub use dashboard::Dashboard;
