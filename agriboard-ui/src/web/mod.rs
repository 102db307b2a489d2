//! Browser bindings for the resize core.

pub mod host;

pub use host::{PanelElement, WebHost};
