//! Hover-revealed sort order dropdown.
//!
//! The selector holds no state of its own: the caller owns the current
//! value and passes the new one back in after `on_change` fires. The menu
//! is opened purely by CSS (`:hover` / `:focus-within`).

use crate::model::SortOption;
use crate::theme;
use dioxus::prelude::*;

static SORT_SELECTOR_CSS: &str = include_str!("../../assets/css/sort-selector.css");

/// One menu row as derived from the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRow {
    pub option: SortOption,
    pub highlighted: bool,
}

/// Rows in fixed menu order; a row is highlighted iff its id equals `value`.
pub fn menu_rows(value: &str) -> [SortRow; 4] {
    SortOption::ALL.map(|option| SortRow {
        option,
        highlighted: option.id() == value,
    })
}

/// Trigger label: dashes become spaces, first letter upper-cased.
pub fn display_label(value: &str) -> String {
    let spaced = value.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Forward a row activation to the caller's callback.
pub fn select(option: SortOption, on_change: impl FnOnce(String)) {
    log::debug!("sort option selected: {}", option);
    on_change(option.id().to_string());
}

fn row_style(highlighted: bool) -> String {
    if highlighted {
        format!(
            "color: {}; background: {}; font-weight: 600;",
            theme::PRIMARY,
            theme::PRIMARY_TINT
        )
    } else {
        format!("color: {};", theme::TEXT_MUTED)
    }
}

/// Props for SortSelector
#[derive(Props, Clone, PartialEq)]
pub struct SortSelectorProps {
    /// Identifier of the active sort; unknown values highlight nothing
    pub value: String,
    /// Receives the chosen option id
    pub on_change: EventHandler<String>,
}

/// Button showing the current sort with a menu of the four fixed options.
#[component]
pub fn SortSelector(props: SortSelectorProps) -> Element {
    let on_change = props.on_change;
    let label = display_label(&props.value);
    let rows = menu_rows(&props.value);

    rsx! {
        style { {SORT_SELECTOR_CSS} }
        div {
            class: "vote-sort",
            button {
                class: "vote-sort__trigger",
                r#type: "button",
                "aria-haspopup": "listbox",
                span { "{label}" }
                i { class: "fa-solid fa-chevron-down" }
            }
            ul {
                class: "vote-sort__menu",
                role: "listbox",
                {rows.into_iter().map(|row| {
                    let option = row.option;
                    let id = option.id();
                    let name = option.label();
                    let selected = if row.highlighted { "true" } else { "false" };
                    rsx! {
                        li {
                            key: "{id}",
                            button {
                                class: "vote-sort__option",
                                r#type: "button",
                                role: "option",
                                "aria-selected": selected,
                                style: row_style(row.highlighted),
                                onclick: move |_| select(option, |id| on_change.call(id)),
                                i { class: option.icon() }
                                span { "{name}" }
                            }
                        }
                    }
                })}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighted(value: &str) -> Vec<&'static str> {
        menu_rows(value)
            .iter()
            .filter(|r| r.highlighted)
            .map(|r| r.option.id())
            .collect()
    }

    #[test]
    fn test_each_known_value_highlights_its_row() {
        for opt in SortOption::ALL {
            assert_eq!(highlighted(opt.id()), vec![opt.id()]);
        }
    }

    #[test]
    fn test_unknown_value_highlights_nothing() {
        assert!(highlighted("foo").is_empty());
        assert!(highlighted("").is_empty());
        // matching is exact
        assert!(highlighted("Trending").is_empty());
        assert!(highlighted("most voted").is_empty());
    }

    #[test]
    fn test_rows_keep_fixed_order() {
        for value in ["trending", "most-voted", "newest", "alpha", "foo"] {
            let ids: Vec<&str> = menu_rows(value).iter().map(|r| r.option.id()).collect();
            assert_eq!(ids, vec!["trending", "most-voted", "newest", "alpha"]);
        }
    }

    #[test]
    fn test_select_emits_id_once() {
        for opt in SortOption::ALL {
            let mut calls = Vec::new();
            select(opt, |id| calls.push(id));
            assert_eq!(calls, vec![opt.id().to_string()]);
        }
    }

    #[test]
    fn test_select_does_not_change_label() {
        let value = "trending".to_string();
        let mut calls = Vec::new();
        select(SortOption::Newest, |id| calls.push(id));
        assert_eq!(calls, vec!["newest".to_string()]);
        assert_eq!(display_label(&value), "Trending");
        assert_eq!(highlighted(&value), vec!["trending"]);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("trending"), "Trending");
        assert_eq!(display_label("most-voted"), "Most voted");
        assert_eq!(display_label("alpha"), "Alpha");
        assert_eq!(display_label("foo"), "Foo");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_row_styles_differ() {
        let on = row_style(true);
        let off = row_style(false);
        assert!(on.contains(theme::PRIMARY));
        assert!(on.contains(theme::PRIMARY_TINT));
        assert!(off.contains(theme::TEXT_MUTED));
        assert_ne!(on, off);
    }
}
