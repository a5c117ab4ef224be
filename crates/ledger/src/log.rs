//! Append-only transaction log.

use std::cmp::Reverse;
use std::sync::Mutex;

use tracing::debug;

use stockroom_core::{LedgerError, LedgerResult, PendingTransaction, Transaction, TransactionId};
use stockroom_store::Collection;

use crate::alloc;

/// The audit log: an append-only collection of transaction records.
///
/// Only the ledger appends; everything else reads. Appends are serialized
/// by an internal lock so identifier allocation over the snapshot stays
/// race-free, giving strictly increasing identifiers in creation order.
#[derive(Debug)]
pub struct TransactionLog<S> {
    store: S,
    lock: Mutex<()>,
}

impl<S> TransactionLog<S>
where
    S: Collection<Transaction>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Append one transaction, assigning the next identifier.
    ///
    /// The allocated identifier is `max(existing) + 1` over the snapshot
    /// read under the lock, so it is strictly greater than every stored
    /// identifier.
    pub fn append(&self, draft: PendingTransaction) -> LedgerResult<Transaction> {
        draft.validate()?;

        let _guard = self
            .lock
            .lock()
            .map_err(|_| LedgerError::storage("transaction collection lock poisoned"))?;

        let mut records = crate::read_store(&self.store)?;
        let id = TransactionId::new(alloc::next_id(records.iter().map(|t| t.id.get())));
        let transaction = draft.into_transaction(id);

        records.push(transaction.clone());
        crate::write_store(&self.store, &records)?;

        debug!(
            transaction_id = %transaction.id,
            item_id = %transaction.item_id,
            kind = ?transaction.kind,
            "transaction appended"
        );
        Ok(transaction)
    }

    /// All transactions in insertion order.
    pub fn list(&self) -> LedgerResult<Vec<Transaction>> {
        crate::read_store(&self.store)
    }

    /// All transactions, most recent first.
    ///
    /// Ordered by timestamp descending; ties (and unparseable timestamps,
    /// which order as the earliest instant) break by identifier descending.
    pub fn list_recent(&self) -> LedgerResult<Vec<Transaction>> {
        let mut records = crate::read_store(&self.store)?;
        records.sort_by_key(|t| (Reverse(t.timestamp_or_earliest()), Reverse(t.id)));
        Ok(records)
    }
}
