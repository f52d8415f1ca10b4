//! Plain data types bound to the components.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One (time label, vote count) point of a trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTrendSample {
    /// Display label for the point in time (e.g. "Oct 03")
    pub time: String,
    pub votes: i64,
}

impl VoteTrendSample {
    pub fn new(time: impl Into<String>, votes: i64) -> Self {
        Self {
            time: time.into(),
            votes,
        }
    }
}

/// The fixed set of orderings offered by the sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOption {
    Trending,
    MostVoted,
    Newest,
    Alpha,
}

impl SortOption {
    /// Menu order. Adding an option means adding it here.
    pub const ALL: [SortOption; 4] = [
        SortOption::Trending,
        SortOption::MostVoted,
        SortOption::Newest,
        SortOption::Alpha,
    ];

    /// Stable identifier passed to the change callback.
    pub fn id(self) -> &'static str {
        match self {
            SortOption::Trending => "trending",
            SortOption::MostVoted => "most-voted",
            SortOption::Newest => "newest",
            SortOption::Alpha => "alpha",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOption::Trending => "Trending",
            SortOption::MostVoted => "Most Voted",
            SortOption::Newest => "Newest",
            SortOption::Alpha => "Alphabetical",
        }
    }

    /// Font Awesome classes for the row glyph.
    pub fn icon(self) -> &'static str {
        match self {
            SortOption::Trending => "fa-solid fa-arrow-trend-up",
            SortOption::MostVoted => "fa-solid fa-fire",
            SortOption::Newest => "fa-solid fa-clock",
            SortOption::Alpha => "fa-solid fa-arrow-down-a-z",
        }
    }

    /// Exact match on the identifier, no case folding.
    pub fn from_id(id: &str) -> Option<SortOption> {
        SortOption::ALL.into_iter().find(|opt| opt.id() == id)
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when parsing an identifier outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortOption(pub String);

impl fmt::Display for UnknownSortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort option: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSortOption {}

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::from_id(s).ok_or_else(|| UnknownSortOption(s.to_string()))
    }
}
