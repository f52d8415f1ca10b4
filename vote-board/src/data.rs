//! Fixture parsing: items and their daily vote counts.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use serde::Deserialize;
use std::collections::BTreeMap;
use vote_ui::VoteTrendSample;

/// A votable item with its per-day vote totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub created: NaiveDate,
    /// Votes per day, ascending by date
    pub daily: BTreeMap<NaiveDate, i64>,
}

impl Item {
    pub fn total_votes(&self) -> i64 {
        self.daily.values().sum()
    }

    /// Votes in the `days`-long window ending at `as_of` (inclusive).
    pub fn recent_votes(&self, as_of: NaiveDate, days: i64) -> i64 {
        let from = as_of - Duration::days(days - 1);
        self.daily.range(from..=as_of).map(|(_, v)| v).sum()
    }

    pub fn last_vote_date(&self) -> Option<NaiveDate> {
        self.daily.keys().next_back().copied()
    }

    /// Chart samples labelled like "Oct 03".
    pub fn trend(&self) -> Vec<VoteTrendSample> {
        self.daily
            .iter()
            .map(|(date, votes)| VoteTrendSample::new(date.format("%b %d").to_string(), *votes))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: String,
    title: String,
    created: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct VoteRecord {
    item_id: String,
    date: NaiveDate,
    votes: i64,
}

/// Parse `id,title,created` rows.
pub fn parse_items(csv_data: &str) -> Result<Vec<Item>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let mut items = Vec::new();
    for (idx, result) in rdr.deserialize::<ItemRecord>().enumerate() {
        let record = result.with_context(|| format!("invalid item row {}", idx + 1))?;
        items.push(Item {
            id: record.id,
            title: record.title,
            created: record.created,
            daily: BTreeMap::new(),
        });
    }
    Ok(items)
}

/// Add `item_id,date,votes` rows to their items, summing per day.
///
/// Rows for ids not in `items` are skipped with a warning.
pub fn attach_votes(items: &mut [Item], csv_data: &str) -> Result<()> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    for (idx, result) in rdr.deserialize::<VoteRecord>().enumerate() {
        let record = result.with_context(|| format!("invalid vote row {}", idx + 1))?;
        match items.iter_mut().find(|item| item.id == record.item_id) {
            Some(item) => *item.daily.entry(record.date).or_insert(0) += record.votes,
            None => log::warn!("skipping votes for unknown item {:?}", record.item_id),
        }
    }
    Ok(())
}

/// Load the full board from the two fixture files.
pub fn load_board(items_csv: &str, votes_csv: &str) -> Result<Vec<Item>> {
    let mut items = parse_items(items_csv).context("failed to parse items")?;
    attach_votes(&mut items, votes_csv).context("failed to parse votes")?;
    log::info!("loaded {} items", items.len());
    Ok(items)
}
