//! Pure aggregation of inventory and transaction history.

use std::cmp::Reverse;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use stockroom_core::{Item, Transaction, TransactionKind};

use crate::window::Window;

/// Items at or below this quantity are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// How many transactions the recent-activity list carries.
const RECENT_LIMIT: usize = 10;

/// Derived analytics over one window.
///
/// The serialized field names are a compatibility contract with existing
/// consumers. `recentTransactions` is computed over the whole history, not
/// just the window; everything else counting transactions is in-window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_items: usize,
    pub low_stock_items: usize,
    pub total_transactions: usize,
    pub items_consumed: i64,
    pub items_added: i64,
    pub active_users: usize,
    pub recent_transactions: Vec<Transaction>,
    pub low_stock_alerts: Vec<Item>,
}

/// Compute the summary for one point-in-time snapshot of both collections.
///
/// Deterministic given its inputs. Empty collections produce zeroes and
/// empty sequences. A transaction whose timestamp does not parse is
/// excluded from window filtering but still participates in the recency
/// ordering, sorting as the earliest possible instant.
pub fn build_summary(items: &[Item], transactions: &[Transaction], window: Window) -> Summary {
    let in_window: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.parsed_timestamp().is_some_and(|at| window.contains(at)))
        .collect();

    let low_stock_alerts: Vec<Item> = items
        .iter()
        .filter(|i| i.quantity <= LOW_STOCK_THRESHOLD)
        .cloned()
        .collect();

    let items_consumed = kind_total(&in_window, TransactionKind::Taken);
    let items_added = kind_total(&in_window, TransactionKind::Added);

    let active_users = in_window
        .iter()
        .map(|t| t.user.as_str())
        .collect::<HashSet<_>>()
        .len();

    // Stable sort: equal timestamps keep their stored relative order.
    let mut recent_transactions = transactions.to_vec();
    recent_transactions.sort_by_key(|t| Reverse(t.timestamp_or_earliest()));
    recent_transactions.truncate(RECENT_LIMIT);

    Summary {
        total_items: items.len(),
        low_stock_items: low_stock_alerts.len(),
        total_transactions: in_window.len(),
        items_consumed,
        items_added,
        active_users,
        recent_transactions,
        low_stock_alerts,
    }
}

fn kind_total(transactions: &[&Transaction], kind: TransactionKind) -> i64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.quantity)
        .sum()
}
