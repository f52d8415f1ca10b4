//! Inline error banner.

use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Bold lead-in before the message
    #[props(default = "Error".to_string())]
    pub title: String,
}

/// Shows a failure the page cannot recover from on its own.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let style = format!(
        "padding: {} {}; margin: 8px 0; background: {}; color: {}; border-radius: {}; border: 1px solid {};",
        theme::SPACE_MD,
        theme::SPACE_MD,
        theme::DANGER_TINT,
        theme::DANGER,
        theme::RADIUS,
        theme::DANGER,
    );

    rsx! {
        div {
            role: "alert",
            style: "{style}",
            strong { "{props.title}: " }
            "{props.message}"
        }
    }
}
