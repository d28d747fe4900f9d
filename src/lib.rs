//! Econ Ledger
//!
//! Reconciles two game-server text logs (inventory mutations and currency
//! mutations) into per-player economic ledgers, then derives a combined
//! chronological log, summary statistics and an interactive item lookup.
//!
//! # Features
//!
//! - **Tolerant parsing**: malformed lines are reported and skipped, never
//!   fatal
//! - **Deterministic merge**: timestamp, origin stream and source line form a
//!   total order over the combined log
//! - **Clamped holdings**: item counts never go negative; balances may
//! - **Top-N statistics**: items by occurrence, players by balance,
//!   first/last distinct items
//!
//! # Modules
//!
//! - `types`: Core data structures (events, ledgers, statistics)
//! - `reader`: Tolerant line-level log parsers
//! - `processor`: Aggregation engine, merger, statistics and lookups
//! - `writer`: Plain-text output for the combined log and the report
//! - `console`: Interactive query loop
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use econ_ledger::reader::{InventoryLogReader, LogReader, MoneyLogReader};
//! use econ_ledger::LogProcessor;
//!
//! fn main() -> econ_ledger::LedgerResult<()> {
//!     let inventory = InventoryLogReader::new().read_logs(Path::new("inventory_logs.txt"))?;
//!     let money = MoneyLogReader::new().read_logs(Path::new("money_logs.txt"))?;
//!
//!     let mut processor = LogProcessor::new();
//!     processor.process_logs(inventory, money);
//!
//!     let stats = processor.generate_statistics();
//!     println!("{} distinct players", processor.player_count());
//!     println!("{} top items", stats.top_items.len());
//!     Ok(())
//! }
//! ```

pub mod console;
pub mod processor;
pub mod reader;
pub mod types;
pub mod writer;

// Re-export commonly used items at crate root
pub use console::QueryConsole;
pub use processor::LogProcessor;
pub use reader::{InventoryLogReader, LogReader, MoneyLogReader, ReadError};
pub use types::{
    CombinedLine, InventoryAction, InventoryEvent, ItemQuery, LedgerResult, LogOrigin,
    MoneyAction, MoneyEvent, PlayerLedger, Statistics, TopPlayer,
};
pub use writer::{CombinedLogWriter, ReportWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
