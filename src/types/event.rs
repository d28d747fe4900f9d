//! Event records parsed from the two source logs

use chrono::NaiveDateTime;

/// Inventory mutation kind, from the `ITEM_ADD` / `ITEM_REMOVE` tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryAction {
    Add,
    Remove,
}

impl InventoryAction {
    /// Parse the literal action token, `None` for anything else
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ITEM_ADD" => Some(InventoryAction::Add),
            "ITEM_REMOVE" => Some(InventoryAction::Remove),
            _ => None,
        }
    }

    /// The literal token as it appears in the logs
    pub fn as_token(&self) -> &'static str {
        match self {
            InventoryAction::Add => "ITEM_ADD",
            InventoryAction::Remove => "ITEM_REMOVE",
        }
    }
}

/// Currency mutation kind, from the `MONEY_ADD` / `MONEY_REMOVE` tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyAction {
    Add,
    Remove,
}

impl MoneyAction {
    /// Parse the literal action token, `None` for anything else
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "MONEY_ADD" => Some(MoneyAction::Add),
            "MONEY_REMOVE" => Some(MoneyAction::Remove),
            _ => None,
        }
    }

    /// The literal token as it appears in the logs
    pub fn as_token(&self) -> &'static str {
        match self {
            MoneyAction::Add => "MONEY_ADD",
            MoneyAction::Remove => "MONEY_REMOVE",
        }
    }
}

/// One parsed inventory log line
///
/// A single line may carry several `(item_type_id, amount)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEvent {
    pub timestamp: NaiveDateTime,
    pub action: InventoryAction,
    pub player_id: i64,
    pub items: Vec<(i64, i64)>,
    /// 1-based line number in the source file
    pub source_line: usize,
}

/// One parsed currency log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyEvent {
    pub timestamp: NaiveDateTime,
    pub action: MoneyAction,
    pub player_id: i64,
    pub amount: i64,
    pub reason: String,
    /// 1-based line number in the source file
    pub source_line: usize,
}

/// Which source stream a combined-log line came from
///
/// Used as the secondary sort key when merging: inventory lines sort strictly
/// before money lines at equal timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOrigin {
    Inventory,
    Money,
}

impl LogOrigin {
    /// Sort rank within a timestamp tie
    pub fn rank(&self) -> u8 {
        match self {
            LogOrigin::Inventory => 0,
            LogOrigin::Money => 1,
        }
    }
}

/// One formatted line of the combined log, built only for sorting and emission
#[derive(Debug, Clone)]
pub struct CombinedLine {
    pub timestamp: NaiveDateTime,
    pub text: String,
    pub origin: LogOrigin,
    pub source_line: usize,
}
