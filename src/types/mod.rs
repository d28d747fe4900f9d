//! Data types for the econ-ledger pipeline
//!
//! This module contains all the core data structures used throughout the
//! application.

mod event;
mod player;
mod stats;

pub use event::{
    CombinedLine, InventoryAction, InventoryEvent, LogOrigin, MoneyAction, MoneyEvent,
};
pub use player::PlayerLedger;
pub use stats::{ItemMention, ItemQuery, Statistics, TopPlayer};

/// Result type for pipeline operations
pub type LedgerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
