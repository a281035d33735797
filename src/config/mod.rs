//! Widget settings: labels, sentinel, and measurement metrics.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Labels, LayoutMetrics, WidgetSettings};
