//! Output writers
//!
//! Thin I/O layer that renders the combined log and the statistics report to
//! plain text files. All timestamps are rendered through `format_timestamp`
//! regardless of how the source log spelled them.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::types::{CombinedLine, LedgerResult, Statistics};

/// Canonical timestamp rendering: `[yy-mm-dd HH:MM:SS]`
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("[%y-%m-%d %H:%M:%S]").to_string()
}

/// Render an optional instant, "N/A" when never set
pub fn format_timestamp_opt(timestamp: Option<NaiveDateTime>) -> String {
    match timestamp {
        Some(ts) => format_timestamp(ts),
        None => "N/A".to_string(),
    }
}

/// Writer for the merged chronological log
#[derive(Debug, Default)]
pub struct CombinedLogWriter;

impl CombinedLogWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write one formatted line per event, no header
    pub fn write_logs(&self, lines: &[CombinedLine], path: &Path) -> LedgerResult<()> {
        let mut content = String::new();
        for line in lines {
            content.push_str(&line.text);
            content.push('\n');
        }
        fs::write(path, content)?;
        Ok(())
    }
}

/// Writer for the statistics report
#[derive(Debug, Default)]
pub struct ReportWriter;

impl ReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the four report sections in fixed order
    pub fn write_report(&self, stats: &Statistics, path: &Path) -> LedgerResult<()> {
        fs::write(path, Self::render(stats))?;
        Ok(())
    }

    fn render(stats: &Statistics) -> String {
        let mut out = String::new();

        out.push_str("Top 10 items by occurrence count:\n");
        out.push_str("Item id, count\n");
        for (item_type_id, count) in &stats.top_items {
            out.push_str(&format!("{}, {}\n", item_type_id, count));
        }
        out.push('\n');

        out.push_str("Top 10 players by balance:\n");
        out.push_str("Player id, balance, first seen, last seen\n");
        for player in &stats.top_players {
            out.push_str(&format!(
                "{}, {}, {}, {}\n",
                player.player_id,
                player.balance,
                format_timestamp_opt(player.first_seen),
                format_timestamp_opt(player.last_seen)
            ));
        }
        out.push('\n');

        out.push_str("First 10 items in order of appearance:\n");
        out.push_str("Item id, date\n");
        for (item_type_id, timestamp) in &stats.first_items {
            out.push_str(&format!("{}, {}\n", item_type_id, format_timestamp(*timestamp)));
        }
        out.push('\n');

        out.push_str("Last 10 items in order of appearance:\n");
        out.push_str("Item id, date\n");
        for (item_type_id, timestamp) in &stats.last_items {
            out.push_str(&format!("{}, {}\n", item_type_id, format_timestamp(*timestamp)));
        }

        out
    }
}
