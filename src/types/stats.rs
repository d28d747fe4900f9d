//! Statistics and query result shapes

use chrono::NaiveDateTime;

/// One entry of the top-players table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopPlayer {
    pub player_id: i64,
    pub balance: i64,
    /// `None` is rendered as "N/A" by the report writer
    pub first_seen: Option<NaiveDateTime>,
    pub last_seen: Option<NaiveDateTime>,
}

/// One `(item_type_id, timestamp)` entry of the first/last distinct-item lists
pub type ItemMention = (i64, NaiveDateTime);

/// The full statistics report computed over the aggregated state
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    /// Top 10 items by occurrence count, ties in first-encounter order
    pub top_items: Vec<(i64, u64)>,
    /// Top 10 players by balance, descending
    pub top_players: Vec<TopPlayer>,
    /// First 10 distinct items to appear, chronological
    pub first_items: Vec<ItemMention>,
    /// Last 10 distinct items to appear, chronological
    pub last_items: Vec<ItemMention>,
}

/// Answer to an interactive item lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
    pub item_type_id: i64,
    /// Sum of the item's counts across every player
    pub total_count: i64,
    /// Number of players holding a positive count
    pub players_with_item: usize,
    /// Top 10 `(player_id, count)` pairs, descending by count
    pub top_holders: Vec<(i64, i64)>,
}
