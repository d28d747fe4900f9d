//! Inventory log reader
//!
//! Line format: `[timestamp] ACTION player_id (id,amt, id,amt, ...)` with
//! actions `ITEM_ADD` / `ITEM_REMOVE`.

use super::{parse_timestamp, LogReader, ReadError};
use crate::types::{InventoryAction, InventoryEvent};

/// Reader for the inventory mutation log
#[derive(Debug, Default)]
pub struct InventoryLogReader;

impl InventoryLogReader {
    pub fn new() -> Self {
        Self
    }

    /// Parse the flat `id,amt, id,amt, ...` item list, parenthesized or not
    ///
    /// Tokens are consumed two at a time; a dangling unpaired trailing token
    /// is silently dropped. That mirrors the server's own quirk and is kept
    /// so that downstream output stays byte-for-byte comparable.
    fn parse_items(items_raw: &str) -> Result<Vec<(i64, i64)>, ReadError> {
        let trimmed = items_raw.trim().trim_matches(|c| c == '(' || c == ')');
        let tokens: Vec<&str> = trimmed
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        let mut items = Vec::with_capacity(tokens.len() / 2);
        for pair in tokens.chunks_exact(2) {
            items.push((pair[0].parse()?, pair[1].parse()?));
        }
        Ok(items)
    }
}

impl LogReader for InventoryLogReader {
    type Event = InventoryEvent;

    fn kind(&self) -> &'static str {
        "inventory"
    }

    fn parse_line(&self, line: &str, line_num: usize) -> Result<InventoryEvent, ReadError> {
        let rest = line
            .strip_prefix('[')
            .ok_or_else(|| ReadError::Structure("missing [timestamp]".to_string()))?;
        let (ts_raw, rest) = rest
            .split_once(']')
            .ok_or_else(|| ReadError::Structure("unterminated [timestamp]".to_string()))?;

        let timestamp = parse_timestamp(ts_raw)?;

        let rest = rest.trim();
        let (action_tok, rest) = rest
            .split_once(char::is_whitespace)
            .ok_or_else(|| ReadError::Structure("missing action".to_string()))?;
        let action = InventoryAction::from_token(action_tok)
            .ok_or_else(|| ReadError::Structure(format!("unknown action {}", action_tok)))?;

        let (player_tok, items_raw) = rest
            .trim_start()
            .split_once(char::is_whitespace)
            .ok_or_else(|| ReadError::Structure("missing item list".to_string()))?;
        let player_id = player_tok.parse()?;

        let items = Self::parse_items(items_raw)?;

        Ok(InventoryEvent {
            timestamp,
            action,
            player_id,
            items,
            source_line: line_num,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_epoch_line() {
        let reader = InventoryLogReader::new();
        let event = reader.parse_line("[100] ITEM_ADD 1 (5, 3)", 1).unwrap();
        assert_eq!(event.action, InventoryAction::Add);
        assert_eq!(event.player_id, 1);
        assert_eq!(event.items, vec![(5, 3)]);
        assert_eq!(event.source_line, 1);
    }

    #[test]
    fn test_parses_multiple_item_pairs() {
        let reader = InventoryLogReader::new();
        let event = reader
            .parse_line("[23-04-05 06:07:08] ITEM_REMOVE 42 (5, 3, 9, 1)", 7)
            .unwrap();
        assert_eq!(event.items, vec![(5, 3), (9, 1)]);
        assert_eq!(event.source_line, 7);
    }

    #[test]
    fn test_dangling_trailing_token_is_dropped() {
        let reader = InventoryLogReader::new();
        let event = reader.parse_line("[100] ITEM_ADD 1 (5, 3, 9)", 1).unwrap();
        assert_eq!(event.items, vec![(5, 3)]);
    }

    #[test]
    fn test_unparenthesized_item_list() {
        let reader = InventoryLogReader::new();
        let event = reader.parse_line("[100] ITEM_ADD 1 5,3", 1).unwrap();
        assert_eq!(event.items, vec![(5, 3)]);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let reader = InventoryLogReader::new();
        assert!(reader.parse_line("[100] ITEM_GIVE 1 (5, 3)", 1).is_err());
    }

    #[test]
    fn test_non_integer_player_is_rejected() {
        let reader = InventoryLogReader::new();
        assert!(matches!(
            reader.parse_line("[100] ITEM_ADD bob (5, 3)", 1),
            Err(ReadError::Integer(_))
        ));
    }

    #[test]
    fn test_missing_item_list_is_rejected() {
        let reader = InventoryLogReader::new();
        assert!(matches!(
            reader.parse_line("[100] ITEM_ADD 1", 1),
            Err(ReadError::Structure(_))
        ));
    }
}
