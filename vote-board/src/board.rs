//! Ordering of board items for the selected sort.

use crate::data::Item;
use std::cmp::Ordering;
use vote_ui::SortOption;

/// Days counted towards the "trending" score.
pub const TRENDING_WINDOW_DAYS: i64 = 7;

fn by_title(a: &Item, b: &Item) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}

/// Return `items` ordered for `sort`. Unknown values keep the input order.
///
/// Trending compares votes over the last week ending at the newest vote
/// anywhere on the board.
pub fn sort_items(items: &[Item], sort: &str) -> Vec<Item> {
    let mut sorted = items.to_vec();
    let Some(option) = SortOption::from_id(sort) else {
        return sorted;
    };

    match option {
        SortOption::Trending => {
            let as_of = items.iter().filter_map(Item::last_vote_date).max();
            if let Some(as_of) = as_of {
                sorted.sort_by(|a, b| {
                    b.recent_votes(as_of, TRENDING_WINDOW_DAYS)
                        .cmp(&a.recent_votes(as_of, TRENDING_WINDOW_DAYS))
                        .then_with(|| by_title(a, b))
                });
            } else {
                sorted.sort_by(by_title);
            }
        }
        SortOption::MostVoted => {
            sorted.sort_by(|a, b| {
                b.total_votes()
                    .cmp(&a.total_votes())
                    .then_with(|| by_title(a, b))
            });
        }
        SortOption::Newest => {
            sorted.sort_by(|a, b| b.created.cmp(&a.created).then_with(|| by_title(a, b)));
        }
        SortOption::Alpha => sorted.sort_by(by_title),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_board;

    const ITEMS: &str = "\
id,title,created
old,zebra crossing,2026-01-01
mid,Apple pie,2026-05-01
new,mango,2026-09-01
";
    // old: most total votes, all of them long ago
    // new: fewest total, but the most in the last week
    const VOTES: &str = "\
item_id,date,votes
old,2026-08-01,100
mid,2026-09-20,4
mid,2026-09-29,5
new,2026-09-28,6
new,2026-09-30,6
";

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    fn board() -> Vec<Item> {
        load_board(ITEMS, VOTES).unwrap()
    }

    #[test]
    fn test_trending() {
        assert_eq!(ids(&sort_items(&board(), "trending")), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_most_voted() {
        assert_eq!(ids(&sort_items(&board(), "most-voted")), vec!["old", "new", "mid"]);
    }

    #[test]
    fn test_newest() {
        assert_eq!(ids(&sort_items(&board(), "newest")), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_alpha_is_case_insensitive() {
        assert_eq!(ids(&sort_items(&board(), "alpha")), vec!["mid", "new", "old"]);
    }

    #[test]
    fn test_unknown_keeps_input_order() {
        assert_eq!(ids(&sort_items(&board(), "foo")), vec!["old", "mid", "new"]);
        assert_eq!(ids(&sort_items(&board(), "Alpha")), vec!["old", "mid", "new"]);
    }

    #[test]
    fn test_ties_break_by_title() {
        let items = load_board(
            "id,title,created\nb,Bravo,2026-01-01\na,alpha,2026-01-01\n",
            "item_id,date,votes\n",
        )
        .unwrap();
        assert_eq!(ids(&sort_items(&items, "most-voted")), vec!["a", "b"]);
        assert_eq!(ids(&sort_items(&items, "newest")), vec!["a", "b"]);
        assert_eq!(ids(&sort_items(&items, "trending")), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_board() {
        assert!(sort_items(&[], "trending").is_empty());
    }
}
