//! Board state managed via Dioxus context.
//!
//! `BoardState` bundles the page's signals into one `Copy` struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<BoardState>()`.
//! The shared components never see it: they get plain values and callbacks.

use crate::data::Item;
use dioxus::prelude::*;
use vote_ui::SortOption;

#[derive(Clone, Copy)]
pub struct BoardState {
    /// Items in fixture order
    pub items: Signal<Vec<Item>>,
    /// Current sort identifier handed to the SortSelector
    pub sort: Signal<String>,
    /// Item whose trend is charted; None means the first in sort order
    pub selected: Signal<Option<String>>,
    pub loading: Signal<bool>,
    pub error_msg: Signal<Option<String>>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            sort: Signal::new(SortOption::Trending.id().to_string()),
            selected: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}
