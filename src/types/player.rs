//! Per-player running aggregate

use std::collections::HashMap;

use chrono::NaiveDateTime;

/// Running economic state for one player
///
/// Created lazily the first time a player id appears in either log stream.
/// `balance` may go negative; item holdings never do (a remove that would
/// drive a count below zero clamps it to 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLedger {
    pub player_id: i64,
    pub balance: i64,
    pub holdings: HashMap<i64, i64>,
    pub first_seen: Option<NaiveDateTime>,
    pub last_seen: Option<NaiveDateTime>,
}

impl PlayerLedger {
    /// Create an empty ledger for a player
    pub fn new(player_id: i64) -> Self {
        Self {
            player_id,
            balance: 0,
            holdings: HashMap::new(),
            first_seen: None,
            last_seen: None,
        }
    }

    /// Credit the balance
    pub fn add_money(&mut self, amount: i64, timestamp: NaiveDateTime) {
        self.balance += amount;
        self.touch(timestamp);
    }

    /// Debit the balance; no floor, the balance may go negative
    pub fn remove_money(&mut self, amount: i64, timestamp: NaiveDateTime) {
        self.balance -= amount;
        self.touch(timestamp);
    }

    /// Add `amount` of an item to the holdings
    pub fn add_item(&mut self, item_type_id: i64, amount: i64, timestamp: NaiveDateTime) {
        *self.holdings.entry(item_type_id).or_insert(0) += amount;
        self.touch(timestamp);
    }

    /// Remove `amount` of an item, clamping the count at zero
    pub fn remove_item(&mut self, item_type_id: i64, amount: i64, timestamp: NaiveDateTime) {
        let count = self.holdings.entry(item_type_id).or_insert(0);
        *count -= amount;
        if *count < 0 {
            *count = 0;
        }
        self.touch(timestamp);
    }

    /// Current count of an item, zero when never held
    pub fn item_count(&self, item_type_id: i64) -> i64 {
        self.holdings.get(&item_type_id).copied().unwrap_or(0)
    }

    /// Extend the first/last-seen bounds with an event timestamp
    fn touch(&mut self, timestamp: NaiveDateTime) {
        match self.first_seen {
            Some(first) if first <= timestamp => {}
            _ => self.first_seen = Some(timestamp),
        }
        match self.last_seen {
            Some(last) if last >= timestamp => {}
            _ => self.last_seen = Some(timestamp),
        }
    }
}
