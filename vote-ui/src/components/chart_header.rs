//! Section header for a trend chart.

use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// Secondary line under the title (e.g., "Daily votes, last 30 days")
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Title with an optional muted subtitle.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let subtitle_style = format!("margin: 0; font-size: 12px; color: {};", theme::TEXT_MUTED);

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "{subtitle_style}",
                    "{props.subtitle}"
                }
            }
        }
    }
}
