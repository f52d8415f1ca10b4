//! Vote Trends Board
//!
//! Lists votable items in the order picked with the sort selector and charts
//! the daily votes of the selected item.
//!
//! Data flow:
//! 1. `include_str!` embeds the item and vote CSV fixtures into the WASM binary.
//! 2. On mount: parse both into `Item`s (votes summed per day).
//! 3. On sort change: the selector reports the new id, the board stores it and
//!    re-renders the list and the selector with the new value.
//! 4. On item click: the trend chart is redrawn for that item.

mod board;
mod data;
mod state;

use crate::data::Item;
use crate::state::BoardState;
use dioxus::prelude::*;
use vote_ui::components::{ChartHeader, ErrorDisplay, SortSelector, TrendDisplay};
use vote_ui::theme;

pub(crate) const ITEMS_CSV: &str = include_str!("../../fixtures/items.csv");
pub(crate) const VOTES_CSV: &str = include_str!("../../fixtures/votes.csv");

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "item-trend-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("vote-board-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(BoardState::new);

    // ─── Parse fixtures once on mount ───
    use_effect(move || {
        match data::load_board(ITEMS_CSV, VOTES_CSV) {
            Ok(items) => {
                if items.is_empty() {
                    state.error_msg.set(Some("No items to show.".to_string()));
                }
                state.items.set(items);
            }
            Err(e) => {
                log::error!("failed to load board: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    let sort = (state.sort)();
    let muted = format!("color: {};", theme::TEXT_MUTED);
    let page_style = format!(
        "max-width: 900px; margin: 0 auto; padding: {}; font-family: system-ui, -apple-system, sans-serif; color: {};",
        theme::SPACE_MD,
        theme::TEXT
    );

    rsx! {
        div {
            style: "{page_style}",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone(), title: "Could not load votes".to_string() }
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h2 { style: "margin: 0;", "Feature requests" }
                SortSelector {
                    value: sort,
                    on_change: move |id: String| {
                        log::info!("sort changed to {}", id);
                        state.sort.set(id);
                    },
                }
            }

            if *state.loading.read() {
                p { style: "{muted}", "Loading votes..." }
            } else {
                TrendPanel {}
                ItemList {}
            }
        }
    }
}

/// Items in the current sort order; the selected one is highlighted.
#[component]
fn ItemList() -> Element {
    let mut state = use_context::<BoardState>();
    let sorted = board::sort_items(&state.items.read(), &(state.sort)());
    let current = current_item_id(&sorted, (state.selected)());

    rsx! {
        ol {
            style: "list-style: none; padding: 0; margin: 12px 0 0 0;",
            for item in sorted.into_iter() {
                ItemRow {
                    key: "{item.id}",
                    active: current.as_deref() == Some(item.id.as_str()),
                    on_pick: move |id: String| state.selected.set(Some(id)),
                    item: item.clone(),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ItemRowProps {
    item: Item,
    active: bool,
    on_pick: EventHandler<String>,
}

#[component]
fn ItemRow(props: ItemRowProps) -> Element {
    let id = props.item.id.clone();
    let on_pick = props.on_pick;
    let total = props.item.total_votes();
    let muted = format!("color: {};", theme::TEXT_MUTED);
    let background = if props.active { theme::PRIMARY_TINT } else { "transparent" };
    let style = format!(
        "display: flex; justify-content: space-between; padding: {}; border-bottom: 1px solid {}; cursor: pointer; background: {};",
        theme::SPACE_SM,
        theme::BORDER,
        background
    );

    rsx! {
        li {
            style: "{style}",
            onclick: move |_| on_pick.call(id.clone()),
            span { "{props.item.title}" }
            span {
                style: "{muted}",
                "{total} votes · since {props.item.created}"
            }
        }
    }
}

/// Trend chart for the selected item (first in sort order by default).
#[component]
fn TrendPanel() -> Element {
    let state = use_context::<BoardState>();
    let sorted = board::sort_items(&state.items.read(), &(state.sort)());
    let current = current_item_id(&sorted, (state.selected)());
    let Some(item) = sorted.into_iter().find(|i| Some(&i.id) == current.as_ref()) else {
        return rsx! {};
    };

    rsx! {
        ChartHeader {
            title: item.title.clone(),
            subtitle: "Daily votes".to_string(),
        }
        TrendDisplay {
            id: CHART_CONTAINER_ID.to_string(),
            data: item.trend(),
        }
    }
}

/// The explicitly selected item if it is still on the board, else the first.
fn current_item_id(sorted: &[Item], selected: Option<String>) -> Option<String> {
    selected
        .filter(|id| sorted.iter().any(|i| &i.id == id))
        .or_else(|| sorted.first().map(|i| i.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_item_defaults_to_first() {
        let items = data::load_board(ITEMS_CSV, VOTES_CSV).unwrap();
        let sorted = board::sort_items(&items, "alpha");
        assert_eq!(current_item_id(&sorted, None), Some(sorted[0].id.clone()));
        assert_eq!(
            current_item_id(&sorted, Some("missing".to_string())),
            Some(sorted[0].id.clone())
        );
        assert_eq!(
            current_item_id(&sorted, Some(sorted[2].id.clone())),
            Some(sorted[2].id.clone())
        );
        assert_eq!(current_item_id(&[], None), None);
    }
}
