//! Summary statistics over the aggregated state
//!
//! Four read-only queries: top items by occurrence, top players by balance,
//! and the first/last distinct items to appear in the logs.

use std::collections::HashSet;

use crate::types::{ItemMention, Statistics, TopPlayer};

use super::LogProcessor;

/// Entry cap for every ranked list in the report
pub(crate) const TOP_N: usize = 10;

/// Compute the full statistics report
pub fn generate_statistics(p: &LogProcessor) -> Statistics {
    // Stable sort over first-encounter order, so ties keep that order.
    let mut top_items: Vec<(i64, u64)> = p
        .encounter_order
        .iter()
        .map(|&item| (item, p.item_occurrence[&item]))
        .collect();
    top_items.sort_by(|a, b| b.1.cmp(&a.1));
    top_items.truncate(TOP_N);

    let mut ledgers: Vec<_> = p.players.values().collect();
    ledgers.sort_by(|a, b| {
        b.balance
            .cmp(&a.balance)
            .then(a.player_id.cmp(&b.player_id))
    });
    let top_players = ledgers
        .into_iter()
        .take(TOP_N)
        .map(|ledger| TopPlayer {
            player_id: ledger.player_id,
            balance: ledger.balance,
            first_seen: ledger.first_seen,
            last_seen: ledger.last_seen,
        })
        .collect();

    let first_items = distinct_prefix(p.first_mentions.iter());

    // The last-mention list is scanned backwards so each item keeps its
    // chronologically last occurrence, then flipped back for reporting.
    let mut last_items = distinct_prefix(p.last_mentions.iter().rev());
    last_items.reverse();

    Statistics {
        top_items,
        top_players,
        first_items,
        last_items,
    }
}

/// First `TOP_N` distinct items of a mention scan, in scan order
fn distinct_prefix<'a, I>(mentions: I) -> Vec<ItemMention>
where
    I: Iterator<Item = &'a ItemMention>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for &(item_type_id, timestamp) in mentions {
        if seen.insert(item_type_id) {
            out.push((item_type_id, timestamp));
            if out.len() >= TOP_N {
                break;
            }
        }
    }
    out
}
