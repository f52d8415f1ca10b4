//! Vote trend line chart.

use crate::chart::{TrendChart, DEFAULT_HEIGHT};
use crate::js_bridge;
use crate::model::VoteTrendSample;
use dioxus::prelude::*;

/// Props for TrendDisplay
#[derive(Props, Clone, PartialEq)]
pub struct TrendDisplayProps {
    /// Samples plotted left to right in the given order
    pub data: Vec<VoteTrendSample>,
    /// Line color; falls back to the theme primary token
    #[props(default)]
    pub color: Option<String>,
    /// The DOM id for the chart container (D3 will render into this)
    #[props(default = "vote-trend-chart".to_string())]
    pub id: String,
    /// Fixed chart height in pixels
    #[props(default = DEFAULT_HEIGHT)]
    pub height: u32,
}

/// Full-width, fixed-height line chart of a single "votes" series.
///
/// Stateless: the chart is redrawn whenever data, color or id change.
#[component]
pub fn TrendDisplay(props: TrendDisplayProps) -> Element {
    let chart = TrendChart::with_height(&props.data, props.color.as_deref(), props.height);
    let data_json = chart.data_json();
    let config_json = chart.config_json();
    let id = props.id.clone();

    use_effect(use_reactive!(|(id, data_json, config_json)| {
        log::debug!("rendering trend chart #{}", id);
        js_bridge::init_charts();
        js_bridge::render_trend_chart(&id, &data_json, &config_json);
    }));

    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    let style = format!(
        "width: 100%; height: {}px; position: relative;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
