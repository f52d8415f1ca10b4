//! Fixed-configuration description of the vote trend line chart.
//!
//! `TrendChart` is what the D3 script in `assets/js/trend-chart.js` draws.
//! It is built from the component props on every render and serialized
//! into the two JSON strings the script takes.

use crate::model::VoteTrendSample;
use crate::theme;
use serde::Serialize;

/// Name of the single plotted series (also the legend entry).
pub const SERIES_NAME: &str = "votes";

pub const DEFAULT_HEIGHT: u32 = 300;

/// One plotted point, x is the time label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: String,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<ChartPoint>,
}

/// Visual settings shared by every trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub color: String,
    pub height: u32,
    pub width: &'static str,
    pub grid_dash: &'static str,
    pub grid_color: &'static str,
    pub x_key: &'static str,
    pub y_key: &'static str,
    pub curve: &'static str,
    pub stroke_width: u32,
    pub dot_radius: u32,
    pub active_dot_radius: u32,
    pub legend_position: &'static str,
    pub tooltip: TooltipStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub border_radius: &'static str,
    pub box_shadow: &'static str,
    pub color: &'static str,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            background: theme::SURFACE,
            border: theme::BORDER,
            border_radius: theme::RADIUS,
            box_shadow: theme::SHADOW,
            color: theme::TEXT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub series: Vec<Series>,
    pub config: ChartConfig,
}

impl TrendChart {
    /// Build the chart for `data`, stroking with `color` or the theme primary.
    pub fn new(data: &[VoteTrendSample], color: Option<&str>) -> Self {
        Self::with_height(data, color, DEFAULT_HEIGHT)
    }

    pub fn with_height(data: &[VoteTrendSample], color: Option<&str>, height: u32) -> Self {
        let points = data
            .iter()
            .map(|s| ChartPoint {
                x: s.time.clone(),
                y: s.votes,
            })
            .collect();

        Self {
            series: vec![Series {
                name: SERIES_NAME,
                points,
            }],
            config: ChartConfig {
                color: color.unwrap_or(theme::PRIMARY).to_string(),
                height,
                width: "100%",
                grid_dash: "3 3",
                grid_color: theme::GRID,
                x_key: "time",
                y_key: "votes",
                curve: "monotoneX",
                stroke_width: 2,
                dot_radius: 3,
                active_dot_radius: 8,
                legend_position: "top",
                tooltip: TooltipStyle::default(),
            },
        }
    }

    /// Series payload for the D3 script.
    pub fn data_json(&self) -> String {
        serde_json::to_string(&self.series).unwrap_or_default()
    }

    pub fn config_json(&self) -> String {
        serde_json::to_string(&self.config).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(pairs: &[(&str, i64)]) -> Vec<VoteTrendSample> {
        pairs
            .iter()
            .map(|(t, v)| VoteTrendSample::new(*t, *v))
            .collect()
    }

    #[test]
    fn test_two_points_in_order() {
        let chart = TrendChart::new(&samples(&[("t1", 5), ("t2", 9)]), None);
        assert_eq!(chart.series.len(), 1);
        let pts = &chart.series[0].points;
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0], ChartPoint { x: "t1".to_string(), y: 5 });
        assert_eq!(pts[1], ChartPoint { x: "t2".to_string(), y: 9 });
    }

    #[test]
    fn test_empty_data_has_one_empty_series() {
        let chart = TrendChart::new(&[], None);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "votes");
        assert!(chart.series[0].points.is_empty());
        assert_eq!(chart.data_json(), r#"[{"name":"votes","points":[]}]"#);
    }

    #[test]
    fn test_always_exactly_one_series() {
        for n in [0usize, 1, 2, 17, 365] {
            let data: Vec<VoteTrendSample> = (0..n)
                .map(|i| VoteTrendSample::new(format!("d{}", i), i as i64))
                .collect();
            let chart = TrendChart::new(&data, Some("red"));
            assert_eq!(chart.series.len(), 1);
            assert_eq!(chart.series[0].points.len(), n);
        }
    }

    #[test]
    fn test_unsorted_and_duplicate_labels_kept_as_given() {
        let chart = TrendChart::new(&samples(&[("b", 1), ("a", 2), ("b", 3)]), None);
        let xs: Vec<&str> = chart.series[0].points.iter().map(|p| p.x.as_str()).collect();
        assert_eq!(xs, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_default_color_is_theme_primary() {
        let chart = TrendChart::new(&samples(&[("t1", 1)]), None);
        assert_eq!(chart.config.color, theme::PRIMARY);

        let chart = TrendChart::new(&samples(&[("t1", 1)]), Some("#2196F3"));
        assert_eq!(chart.config.color, "#2196F3");
    }

    #[test]
    fn test_config_json_fields() {
        let chart = TrendChart::with_height(&[], None, 240);
        let cfg: serde_json::Value = serde_json::from_str(&chart.config_json()).unwrap();
        assert_eq!(cfg["height"], 240);
        assert_eq!(cfg["gridDash"], "3 3");
        assert_eq!(cfg["curve"], "monotoneX");
        assert_eq!(cfg["strokeWidth"], 2);
        assert_eq!(cfg["activeDotRadius"], 8);
        assert_eq!(cfg["legendPosition"], "top");
        assert_eq!(cfg["xKey"], "time");
        assert_eq!(cfg["yKey"], "votes");
        assert_eq!(cfg["tooltip"]["borderRadius"], theme::RADIUS);
    }

    #[test]
    fn test_input_untouched() {
        let data = samples(&[("t1", 5)]);
        let before = data.clone();
        let _ = TrendChart::new(&data, None);
        assert_eq!(data, before);
    }
}
