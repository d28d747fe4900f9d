//! Log processor - Core aggregation engine
//!
//! Replays the two parsed event streams into per-player ledgers, then answers
//! merge, statistics and lookup requests over the finished state.

mod aggregate;
mod combined;
mod query;
mod stats;

use std::collections::HashMap;

use crate::types::{
    CombinedLine, InventoryEvent, ItemMention, ItemQuery, MoneyEvent, PlayerLedger, Statistics,
};

pub(crate) use stats::TOP_N;

/// Aggregated state built from one batch run over both logs
///
/// `process_logs` is the only mutating operation; everything else is a pure
/// read over the finished state.
pub struct LogProcessor {
    pub(crate) players: HashMap<i64, PlayerLedger>,
    pub(crate) inventory_events: Vec<InventoryEvent>,
    pub(crate) money_events: Vec<MoneyEvent>,
    pub(crate) item_occurrence: HashMap<i64, u64>,
    /// Items in the order they were first encountered, for stable tie-breaks
    pub(crate) encounter_order: Vec<i64>,
    /// Every item occurrence in file-encounter order
    pub(crate) first_mentions: Vec<ItemMention>,
    /// Same content as `first_mentions`; consumed in reverse for "last" stats
    pub(crate) last_mentions: Vec<ItemMention>,
}

impl LogProcessor {
    /// Create an empty processor
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
            inventory_events: Vec::new(),
            money_events: Vec::new(),
            item_occurrence: HashMap::new(),
            encounter_order: Vec::new(),
            first_mentions: Vec::new(),
            last_mentions: Vec::new(),
        }
    }

    /// Number of distinct players seen in either stream
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up one player's ledger
    pub fn player(&self, player_id: i64) -> Option<&PlayerLedger> {
        self.players.get(&player_id)
    }
}

impl Default for LogProcessor {
    fn default() -> Self {
        Self::new()
    }
}

// Re-export methods from submodules by implementing them here
impl LogProcessor {
    /// Replay both event streams into the ledger set (from aggregate.rs)
    pub fn process_logs(&mut self, inventory: Vec<InventoryEvent>, money: Vec<MoneyEvent>) {
        aggregate::process_logs(self, inventory, money)
    }

    /// Merge both streams into one ordered formatted log (from combined.rs)
    pub fn combined_log(&self) -> Vec<CombinedLine> {
        combined::combined_log(self)
    }

    /// Compute the four summary statistics (from stats.rs)
    pub fn generate_statistics(&self) -> Statistics {
        stats::generate_statistics(self)
    }

    /// Answer an item lookup over the ledger set (from query.rs)
    pub fn query_item(&self, item_type_id: i64) -> ItemQuery {
        query::query_item(self, item_type_id)
    }
}
