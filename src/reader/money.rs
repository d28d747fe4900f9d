//! Currency log reader
//!
//! Line format: `timestamp | player_id | ACTION | amount,reason` with actions
//! `MONEY_ADD` / `MONEY_REMOVE`.

use super::{parse_timestamp, LogReader, ReadError};
use crate::types::{MoneyAction, MoneyEvent};

/// Reader for the currency mutation log
#[derive(Debug, Default)]
pub struct MoneyLogReader;

impl MoneyLogReader {
    pub fn new() -> Self {
        Self
    }

    /// Split the `amount,reason` field on its first comma
    ///
    /// The reason is free text and may itself contain commas; everything
    /// after the first comma belongs to it. A field with no comma at all is
    /// NOT a parse failure: the line is kept with amount 0 and reason
    /// "unknown", and a diagnostic is printed. This asymmetry with the
    /// inventory reader is intentional.
    fn parse_amount_reason(raw: &str) -> Result<(i64, String), ReadError> {
        match raw.split_once(',') {
            Some((amount, reason)) => Ok((amount.trim().parse()?, reason.trim().to_string())),
            None => {
                println!("Failed to parse amount/reason field: {}", raw);
                Ok((0, "unknown".to_string()))
            }
        }
    }
}

impl LogReader for MoneyLogReader {
    type Event = MoneyEvent;

    fn kind(&self) -> &'static str {
        "money"
    }

    fn parse_line(&self, line: &str, line_num: usize) -> Result<MoneyEvent, ReadError> {
        let parts: Vec<&str> = line.split('|').collect();
        if parts.len() < 4 {
            return Err(ReadError::Structure(format!(
                "expected 4 pipe-delimited fields, got {}",
                parts.len()
            )));
        }

        let timestamp = parse_timestamp(parts[0])?;
        let player_id = parts[1].trim().parse()?;
        let action_tok = parts[2].trim();
        let action = MoneyAction::from_token(action_tok)
            .ok_or_else(|| ReadError::Structure(format!("unknown action {}", action_tok)))?;
        let (amount, reason) = Self::parse_amount_reason(parts[3].trim())?;

        Ok(MoneyEvent {
            timestamp,
            action,
            player_id,
            amount,
            reason,
            source_line: line_num,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_epoch_line() {
        let reader = MoneyLogReader::new();
        let event = reader.parse_line("100 | 7 | MONEY_ADD | 50,salary", 1).unwrap();
        assert_eq!(event.action, MoneyAction::Add);
        assert_eq!(event.player_id, 7);
        assert_eq!(event.amount, 50);
        assert_eq!(event.reason, "salary");
    }

    #[test]
    fn test_reason_keeps_later_commas() {
        let reader = MoneyLogReader::new();
        let event = reader
            .parse_line("100 | 7 | MONEY_REMOVE | 80,fine, late, again", 2)
            .unwrap();
        assert_eq!(event.amount, 80);
        assert_eq!(event.reason, "fine, late, again");
    }

    #[test]
    fn test_missing_comma_defaults_and_keeps_line() {
        let reader = MoneyLogReader::new();
        let event = reader.parse_line("100 | 7 | MONEY_ADD | 30", 3).unwrap();
        assert_eq!(event.amount, 0);
        assert_eq!(event.reason, "unknown");
    }

    #[test]
    fn test_too_few_fields_is_rejected() {
        let reader = MoneyLogReader::new();
        assert!(matches!(
            reader.parse_line("100 | 7 | MONEY_ADD", 1),
            Err(ReadError::Structure(_))
        ));
    }

    #[test]
    fn test_fields_past_the_fourth_are_ignored() {
        let reader = MoneyLogReader::new();
        let event = reader
            .parse_line("100 | 7 | MONEY_ADD | 50,salary | extra", 1)
            .unwrap();
        assert_eq!(event.amount, 50);
        assert_eq!(event.reason, "salary");
    }

    #[test]
    fn test_date_timestamp() {
        let reader = MoneyLogReader::new();
        let event = reader
            .parse_line("2023-04-05 06:07:08 | 9 | MONEY_ADD | 1,loot", 1)
            .unwrap();
        assert_eq!(event.timestamp.to_string(), "2023-04-05 06:07:08");
    }
}
