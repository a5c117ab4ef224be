//! Store-reading front end for the aggregation.

use chrono::{DateTime, Utc};

use stockroom_core::{Item, LedgerError, LedgerResult, Transaction};
use stockroom_store::Collection;

use crate::summary::{Summary, build_summary};
use crate::window::Window;

/// Read-only analytics over the item and transaction collections.
///
/// Reads a point-in-time snapshot of each collection and hands it to the
/// pure aggregation. No locks are taken; a summary computed concurrently
/// with ledger writes may be momentarily stale, which is acceptable.
#[derive(Debug)]
pub struct Analytics<I, T> {
    items: I,
    transactions: T,
}

impl<I, T> Analytics<I, T>
where
    I: Collection<Item>,
    T: Collection<Transaction>,
{
    pub fn new(items: I, transactions: T) -> Self {
        Self {
            items,
            transactions,
        }
    }

    /// Summarize the half-open window `[start, end)`.
    pub fn summarize(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> LedgerResult<Summary> {
        self.summarize_window(Window::new(start, end))
    }

    /// Summarize the calendar month containing `t`, the window the
    /// consumption reports were originally computed over.
    pub fn summarize_month_of(&self, t: DateTime<Utc>) -> LedgerResult<Summary> {
        self.summarize_window(Window::calendar_month(t))
    }

    fn summarize_window(&self, window: Window) -> LedgerResult<Summary> {
        let items = self
            .items
            .read()
            .map_err(|e| LedgerError::storage(e.to_string()))?;
        let transactions = self
            .transactions
            .read()
            .map_err(|e| LedgerError::storage(e.to_string()))?;
        Ok(build_summary(&items, &transactions, window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use stockroom_core::{ItemId, TransactionId, TransactionKind};
    use stockroom_store::InMemoryCollection;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn summarize_reads_both_collections() {
        let items = Arc::new(InMemoryCollection::new());
        let transactions = Arc::new(InMemoryCollection::new());

        let now = at("2026-03-01T00:00:00Z");
        items
            .write(&[Item {
                id: ItemId::new(1),
                name: "Bolt".to_string(),
                make: "Acme".to_string(),
                model: "X".to_string(),
                specification: "std".to_string(),
                rack: "R1".to_string(),
                bin: "B1".to_string(),
                quantity: 2,
                created_at: now,
                updated_at: now,
                updated_by: "alice".to_string(),
            }])
            .unwrap();
        transactions
            .write(&[Transaction {
                id: TransactionId::new(1),
                item_id: ItemId::new(1),
                item_name: "Bolt".to_string(),
                kind: TransactionKind::Added,
                quantity: 2,
                user: "alice".to_string(),
                timestamp: "2026-03-02T10:00:00Z".to_string(),
            }])
            .unwrap();

        let analytics = Analytics::new(Arc::clone(&items), Arc::clone(&transactions));
        let summary = analytics
            .summarize(at("2026-03-01T00:00:00Z"), at("2026-04-01T00:00:00Z"))
            .unwrap();

        assert_eq!(summary.total_items, 1);
        assert_eq!(summary.low_stock_items, 1);
        assert_eq!(summary.items_added, 2);
        assert_eq!(summary.total_transactions, 1);
    }

    #[test]
    fn month_helper_uses_the_containing_month() {
        let analytics = Analytics::new(
            InMemoryCollection::<Item>::new(),
            InMemoryCollection::<Transaction>::new(),
        );
        let summary = analytics
            .summarize_month_of(at("2026-03-15T12:00:00Z"))
            .unwrap();
        assert_eq!(summary.total_items, 0);
    }
}
