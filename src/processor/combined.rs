//! Combined-log merge
//!
//! Interleaves the two event streams into one chronological log. The sort key
//! is a three-level total order: timestamp, then origin (inventory before
//! money), then source line number. Equal-timestamp runs therefore come out
//! the same way on every run, whatever the input file order was.

use crate::types::{CombinedLine, LogOrigin};
use crate::writer::format_timestamp;

use super::LogProcessor;

/// Format and merge both event streams into one ordered log
pub fn combined_log(p: &LogProcessor) -> Vec<CombinedLine> {
    let mut lines = Vec::with_capacity(p.inventory_events.len() + p.money_events.len());

    for event in &p.inventory_events {
        let items_str = event
            .items
            .iter()
            .map(|(id, amount)| format!("({}, {})", id, amount))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(CombinedLine {
            timestamp: event.timestamp,
            text: format!(
                "{} {} | {} {}",
                format_timestamp(event.timestamp),
                event.player_id,
                event.action.as_token(),
                items_str
            ),
            origin: LogOrigin::Inventory,
            source_line: event.source_line,
        });
    }

    for event in &p.money_events {
        lines.push(CombinedLine {
            timestamp: event.timestamp,
            text: format!(
                "{} {} | {} | {} | {}",
                format_timestamp(event.timestamp),
                event.player_id,
                event.action.as_token(),
                event.amount,
                event.reason
            ),
            origin: LogOrigin::Money,
            source_line: event.source_line,
        });
    }

    lines.sort_by_key(|line| (line.timestamp, line.origin.rank(), line.source_line));
    lines
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use crate::types::{InventoryAction, InventoryEvent, MoneyAction, MoneyEvent};

    use super::*;

    fn ts(secs: i64) -> NaiveDateTime {
        chrono::DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
    }

    fn processor_with(inventory: Vec<InventoryEvent>, money: Vec<MoneyEvent>) -> LogProcessor {
        let mut p = LogProcessor::new();
        p.process_logs(inventory, money);
        p
    }

    #[test]
    fn test_inventory_line_format() {
        let p = processor_with(
            vec![InventoryEvent {
                timestamp: ts(100),
                action: InventoryAction::Add,
                player_id: 1,
                items: vec![(5, 3), (9, 1)],
                source_line: 1,
            }],
            vec![],
        );
        let lines = p.combined_log();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "[70-01-01 00:01:40] 1 | ITEM_ADD (5, 3) (9, 1)");
    }

    #[test]
    fn test_money_line_format() {
        let p = processor_with(
            vec![],
            vec![MoneyEvent {
                timestamp: ts(100),
                action: MoneyAction::Remove,
                player_id: 7,
                amount: 80,
                reason: "fine, late".to_string(),
                source_line: 4,
            }],
        );
        let lines = p.combined_log();
        assert_eq!(lines[0].text, "[70-01-01 00:01:40] 7 | MONEY_REMOVE | 80 | fine, late");
    }

    #[test]
    fn test_inventory_precedes_money_at_equal_timestamp() {
        let p = processor_with(
            vec![InventoryEvent {
                timestamp: ts(100),
                action: InventoryAction::Add,
                player_id: 1,
                items: vec![(5, 3)],
                source_line: 9,
            }],
            vec![MoneyEvent {
                timestamp: ts(100),
                action: MoneyAction::Add,
                player_id: 1,
                amount: 10,
                reason: "loot".to_string(),
                source_line: 1,
            }],
        );
        let lines = p.combined_log();
        assert_eq!(lines[0].origin, LogOrigin::Inventory);
        assert_eq!(lines[1].origin, LogOrigin::Money);
    }

    #[test]
    fn test_source_line_breaks_remaining_ties() {
        let make = |source_line| InventoryEvent {
            timestamp: ts(100),
            action: InventoryAction::Add,
            player_id: 1,
            items: vec![(5, 1)],
            source_line,
        };
        let p = processor_with(vec![make(3), make(1), make(2)], vec![]);
        let order: Vec<usize> = p.combined_log().iter().map(|l| l.source_line).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_by_timestamp_across_streams() {
        let p = processor_with(
            vec![InventoryEvent {
                timestamp: ts(300),
                action: InventoryAction::Add,
                player_id: 1,
                items: vec![(5, 1)],
                source_line: 1,
            }],
            vec![MoneyEvent {
                timestamp: ts(200),
                action: MoneyAction::Add,
                player_id: 1,
                amount: 10,
                reason: "loot".to_string(),
                source_line: 1,
            }],
        );
        let lines = p.combined_log();
        assert_eq!(lines[0].origin, LogOrigin::Money);
        assert_eq!(lines[1].origin, LogOrigin::Inventory);
    }
}
