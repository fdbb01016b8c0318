//! Move history filtering and display ordering.
//!
//! Filters narrow what the host displays. They never touch the move log
//! or its cursor, so the board cannot jump while a query is edited.

use super::{MoveRecord, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Parsed form of a history search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Empty or whitespace-only; matches everything.
    Blank,
    /// A `row,col` coordinate, with or without parentheses.
    Location {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
    /// Anything else; lowercased for substring matching.
    Text(String),
}

impl SearchQuery {
    /// Parses user input.
    ///
    /// Parentheses are stripped, then the remainder must be exactly two
    /// comma-separated integers to count as a location. Anything else
    /// falls back to text search on the trimmed input.
    #[instrument]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return SearchQuery::Blank;
        }

        let stripped: String = trimmed.chars().filter(|c| !matches!(c, '(' | ')')).collect();
        let mut parts = stripped.split(',');
        let coords = match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => {
                let row = row.trim().parse::<i64>().ok();
                let col = col.trim().parse::<i64>().ok();
                row.zip(col)
            }
            _ => None,
        };

        match coords {
            Some((row, col)) => SearchQuery::Location { row, col },
            None => SearchQuery::Text(trimmed.to_lowercase()),
        }
    }

    /// Whether `record` satisfies this query. Game start always matches.
    pub fn matches(&self, record: &MoveRecord) -> bool {
        if record.is_game_start() {
            return true;
        }
        match self {
            SearchQuery::Blank => true,
            SearchQuery::Location { row, col } => record
                .location()
                .is_some_and(|loc| loc.row as i64 == *row && loc.col as i64 == *col),
            SearchQuery::Text(needle) => record
                .description()
                .to_lowercase()
                .contains(needle.as_str()),
        }
    }
}

/// Player filter plus search text, as entered in the host UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FilterState {
    /// Only show this player's moves; `None` shows both.
    player: Option<Player>,
    /// Raw search text.
    query: String,
}

impl FilterState {
    /// Creates a filter state.
    pub fn new(player: Option<Player>, query: impl Into<String>) -> Self {
        Self {
            player,
            query: query.into(),
        }
    }

    /// Replaces the player filter.
    pub fn set_player(&mut self, player: Option<Player>) {
        self.player = player;
    }

    /// Replaces the search text.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// True when neither filter narrows anything.
    pub fn is_clear(&self) -> bool {
        self.player.is_none() && self.query.trim().is_empty()
    }

    /// Applies this filter to `records`.
    pub fn apply(&self, records: &[MoveRecord]) -> Vec<MoveRecord> {
        filter_moves(records, self.player, &self.query)
    }
}

/// Display order of the move list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// The opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Narrows `records` by player and then by search query.
///
/// The game-start record survives both passes. Input order is kept.
#[instrument(skip(records), fields(len = records.len()))]
pub fn filter_moves(records: &[MoveRecord], player: Option<Player>, query: &str) -> Vec<MoveRecord> {
    let query = SearchQuery::parse(query);
    let filtered: Vec<MoveRecord> = records
        .iter()
        .filter(|r| match player {
            Some(p) => r.is_game_start() || *r.player() == Some(p),
            None => true,
        })
        .filter(|r| query.matches(r))
        .cloned()
        .collect();
    debug!(kept = filtered.len(), "Filtered move records");
    filtered
}

/// Returns `records` in display order. Filtering itself never reorders.
pub fn order_moves(mut records: Vec<MoveRecord>, order: SortOrder) -> Vec<MoveRecord> {
    if order == SortOrder::Descending {
        records.reverse();
    }
    records
}
