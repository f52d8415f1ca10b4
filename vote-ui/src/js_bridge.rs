//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The trend chart is drawn by D3.js code in `assets/js/*.js`, embedded at
//! compile time and evaluated as globals (no ES modules) exposed on `window.*`.
//! D3 itself is loaded by the host page.

use wasm_bindgen::JsValue;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('vote-ui JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("eval failed: {}", describe(&e));
    }
}

/// Escape a JSON payload for embedding in a single-quoted JS string.
pub(crate) fn escape_js_string(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Evaluate the chart scripts once D3 has loaded.
///
/// Function declarations are evaluated at global scope via indirect eval
/// and then promoted to `window.*` explicitly. Safe to call more than once.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, TREND_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__voteChartsReady && !window.__voteChartScripts) {{ window.__voteChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    if let Err(e) = js_sys::eval(&store_js) {
        log::warn!("failed to stage chart scripts: {}", describe(&e));
        return;
    }

    let init_js = r#"
        (function() {
            if (window.__voteChartsPolling || window.__voteChartsReady) return;
            window.__voteChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__voteChartScripts);
                    delete window.__voteChartScripts;
                    if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__voteChartsReady = true;
                    delete window.__voteChartsPolling;
                }
            }, 100);
        })();
    "#;
    if let Err(e) = js_sys::eval(init_js) {
        log::warn!("failed to start chart init loop: {}", describe(&e));
    }
}

/// Render the vote trend chart into `container_id`.
///
/// Polls until D3, the chart scripts and the container element exist.
pub fn render_trend_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = escape_js_string(data_json);
    let escaped_config = escape_js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__voteChartsReady &&
                    typeof window.renderTrendChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderTrendChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[vote-ui] renderTrendChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Clear whatever was drawn in the given container.
pub fn destroy_chart(container_id: &str) {
    let el = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(el) = el {
        el.set_inner_html("");
    }
}
