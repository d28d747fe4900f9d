//! Event replay into per-player ledgers
//!
//! A one-pass fold with no rollback: inventory events first in their list
//! order, then money events in theirs. List order is file order, which is not
//! necessarily chronological; first/last-seen bounds therefore always use the
//! event's own timestamp, never the replay position.

use crate::types::{InventoryAction, InventoryEvent, MoneyAction, MoneyEvent, PlayerLedger};

use super::LogProcessor;

/// Replay both event streams, mutating the ledger set
pub fn process_logs(
    p: &mut LogProcessor,
    inventory: Vec<InventoryEvent>,
    money: Vec<MoneyEvent>,
) {
    p.inventory_events = inventory;
    p.money_events = money;

    for event in &p.inventory_events {
        let ledger = p
            .players
            .entry(event.player_id)
            .or_insert_with(|| PlayerLedger::new(event.player_id));

        for &(item_type_id, amount) in &event.items {
            let counter = p.item_occurrence.entry(item_type_id).or_insert(0);
            if *counter == 0 {
                p.encounter_order.push(item_type_id);
            }
            *counter += 1;

            p.first_mentions.push((item_type_id, event.timestamp));
            p.last_mentions.push((item_type_id, event.timestamp));

            match event.action {
                InventoryAction::Add => ledger.add_item(item_type_id, amount, event.timestamp),
                InventoryAction::Remove => {
                    ledger.remove_item(item_type_id, amount, event.timestamp)
                }
            }
        }
    }

    for event in &p.money_events {
        let ledger = p
            .players
            .entry(event.player_id)
            .or_insert_with(|| PlayerLedger::new(event.player_id));

        match event.action {
            MoneyAction::Add => ledger.add_money(event.amount, event.timestamp),
            MoneyAction::Remove => ledger.remove_money(event.amount, event.timestamp),
        }
    }
}
