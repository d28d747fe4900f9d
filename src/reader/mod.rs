//! Log reading layer
//!
//! One concrete reader per source log format, behind a common `LogReader`
//! trait. Readers are tolerant: a line that does not match its format is
//! reported on stdout and dropped, and the rest of the file is still
//! processed. Only a missing or unreadable file aborts the run.

mod inventory;
mod money;
mod timestamp;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::LedgerResult;

pub use inventory::InventoryLogReader;
pub use money::MoneyLogReader;
pub use timestamp::parse_timestamp;

/// Errors local to a single log line
///
/// Every variant is non-fatal: the enclosing read reports the line and moves
/// on.
#[derive(Debug)]
pub enum ReadError {
    /// The line does not match the structural pattern of its log format
    Structure(String),
    /// A matched position held something other than an integer
    Integer(std::num::ParseIntError),
    /// The timestamp text matched none of the accepted formats
    TimestampFormat(String),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadError::Structure(msg) => write!(f, "structural mismatch: {}", msg),
            ReadError::Integer(e) => write!(f, "invalid integer: {}", e),
            ReadError::TimestampFormat(raw) => write!(f, "unrecognized timestamp: {}", raw),
        }
    }
}

impl std::error::Error for ReadError {}

impl From<std::num::ParseIntError> for ReadError {
    fn from(e: std::num::ParseIntError) -> Self {
        ReadError::Integer(e)
    }
}

/// Capability to read one kind of log file into typed events
pub trait LogReader {
    /// The event record this reader produces
    type Event;

    /// Short label used in skip diagnostics ("inventory", "money")
    fn kind(&self) -> &'static str;

    /// Parse one non-blank line; `line_num` is the 1-based file position
    fn parse_line(&self, line: &str, line_num: usize) -> Result<Self::Event, ReadError>;

    /// Read a whole log file in file order
    ///
    /// Blank lines are skipped silently; unparseable lines are reported on
    /// stdout with their raw text and excluded from the result.
    fn read_logs(&self, path: &Path) -> LedgerResult<Vec<Self::Event>> {
        let file = File::open(path)
            .map_err(|e| format!("cannot open {}: {}", path.display(), e))?;
        let reader = BufReader::new(file);

        let mut events = Vec::new();
        for (idx, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.parse_line(line, idx + 1) {
                Ok(event) => events.push(event),
                Err(_) => println!("Failed to parse {} log line: {}", self.kind(), line),
            }
        }

        Ok(events)
    }
}
