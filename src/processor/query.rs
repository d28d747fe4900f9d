//! Point lookups over the ledger set

use crate::types::ItemQuery;

use super::{LogProcessor, TOP_N};

/// Who holds an item, how much, and the top holders ranked by count
///
/// Only positive counts participate; a clamped-to-zero holding is
/// indistinguishable from never having held the item.
pub fn query_item(p: &LogProcessor, item_type_id: i64) -> ItemQuery {
    let mut total_count = 0;
    let mut holders = Vec::new();

    for ledger in p.players.values() {
        let count = ledger.item_count(item_type_id);
        if count > 0 {
            total_count += count;
            holders.push((ledger.player_id, count));
        }
    }

    let players_with_item = holders.len();
    holders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    holders.truncate(TOP_N);

    ItemQuery {
        item_type_id,
        total_count,
        players_with_item,
        top_holders: holders,
    }
}
