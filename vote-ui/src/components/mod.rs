//! Reusable Dioxus RSX components for vote trend pages.

mod chart_header;
mod error_display;
mod sort_selector;
mod trend_display;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use sort_selector::{display_label, menu_rows, select, SortRow, SortSelector};
pub use trend_display::TrendDisplay;
