//! The inventory ledger: authoritative item state plus audit emission.

use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use tracing::{info, warn};

use stockroom_core::{
    Item, ItemId, ItemPatch, LedgerError, LedgerResult, NewItem, PendingTransaction, Transaction,
    TransactionKind,
};
use stockroom_store::Collection;

use crate::alloc;
use crate::log::TransactionLog;

/// Timestamp format shared with the persisted data files.
fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The ledger owning the item collection and the transaction log.
///
/// Each operation performs at most one item-collection write followed by at
/// most one transaction append, in that order. The item lock is held from
/// the snapshot read until the transaction append has been attempted, so
/// concurrent operations cannot interleave their read-modify-write cycles
/// or allocate duplicate identifiers.
///
/// There is no cross-collection rollback: when the item write succeeds but
/// the transaction append fails, the operation returns
/// [`LedgerError::PartialWrite`] and leaves the item state in place.
#[derive(Debug)]
pub struct Ledger<I, T> {
    items: I,
    items_lock: Mutex<()>,
    log: TransactionLog<T>,
}

impl<I, T> Ledger<I, T>
where
    I: Collection<Item>,
    T: Collection<Transaction>,
{
    pub fn new(items: I, transactions: T) -> Self {
        Self {
            items,
            items_lock: Mutex::new(()),
            log: TransactionLog::new(transactions),
        }
    }

    /// Read access to the audit log.
    pub fn transactions(&self) -> &TransactionLog<T> {
        &self.log
    }

    /// Create an item and record its initial stock.
    ///
    /// Emits one `added` transaction for the initial quantity. A creation
    /// with zero stock changes no quantity and emits nothing.
    pub fn create_item(&self, new: NewItem, actor: &str) -> LedgerResult<Item> {
        new.validate()?;

        let _guard = self.lock_items()?;
        let mut items = crate::read_store(&self.items)?;

        let id = ItemId::new(alloc::next_id(items.iter().map(|i| i.id.get())));
        let now = Utc::now();
        let item = Item {
            id,
            name: new.name,
            make: new.make,
            model: new.model,
            specification: new.specification,
            rack: new.rack,
            bin: new.bin,
            quantity: new.quantity,
            created_at: now,
            updated_at: now,
            updated_by: actor.to_string(),
        };

        items.push(item.clone());
        crate::write_store(&self.items, &items)?;
        info!(item_id = %item.id, actor, quantity = item.quantity, "inventory item created");

        if item.quantity > 0 {
            self.append_or_partial(PendingTransaction {
                item_id: id,
                item_name: item.name.clone(),
                kind: TransactionKind::Added,
                quantity: item.quantity,
                user: actor.to_string(),
                timestamp: now_stamp(),
            })?;
        }

        Ok(item)
    }

    /// Apply a partial update, recording the quantity delta if any.
    pub fn update_item(&self, id: ItemId, patch: ItemPatch, actor: &str) -> LedgerResult<Item> {
        let _guard = self.lock_items()?;
        let mut items = crate::read_store(&self.items)?;

        let index = items
            .iter()
            .position(|i| i.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        patch.validate()?;

        let quantity_before = items[index].quantity;
        patch.apply_to(&mut items[index]);
        items[index].updated_at = Utc::now();
        items[index].updated_by = actor.to_string();

        let updated = items[index].clone();
        crate::write_store(&self.items, &items)?;
        info!(item_id = %id, actor, "inventory item updated");

        let delta = updated.quantity - quantity_before;
        if delta != 0 {
            let kind = if delta > 0 {
                TransactionKind::Added
            } else {
                TransactionKind::Taken
            };
            self.append_or_partial(PendingTransaction {
                item_id: id,
                item_name: updated.name.clone(),
                kind,
                quantity: delta.abs(),
                user: actor.to_string(),
                timestamp: now_stamp(),
            })?;
        }

        Ok(updated)
    }

    /// Remove an item, recording its final stock in the audit trail.
    ///
    /// Hard delete: no tombstone remains in the item collection. The
    /// `deleted` transaction carries the item's last known name and
    /// quantity so history survives the removal.
    pub fn delete_item(&self, id: ItemId, actor: &str) -> LedgerResult<()> {
        let _guard = self.lock_items()?;
        let mut items = crate::read_store(&self.items)?;

        let index = items
            .iter()
            .position(|i| i.id == id)
            .ok_or(LedgerError::NotFound(id))?;

        let removed = items.remove(index);
        crate::write_store(&self.items, &items)?;
        info!(item_id = %id, actor, "inventory item deleted");

        self.append_or_partial(PendingTransaction {
            item_id: id,
            item_name: removed.name,
            kind: TransactionKind::Deleted,
            quantity: removed.quantity,
            user: actor.to_string(),
            timestamp: now_stamp(),
        })?;

        Ok(())
    }

    /// All items in insertion order.
    pub fn list_items(&self) -> LedgerResult<Vec<Item>> {
        crate::read_store(&self.items)
    }

    /// Items matching a case-insensitive substring query over the
    /// descriptive and location fields. A blank query matches everything.
    pub fn search_items(&self, query: &str) -> LedgerResult<Vec<Item>> {
        let items = crate::read_store(&self.items)?;
        if query.trim().is_empty() {
            return Ok(items);
        }
        Ok(items.into_iter().filter(|i| i.matches(query)).collect())
    }

    fn lock_items(&self) -> LedgerResult<std::sync::MutexGuard<'_, ()>> {
        self.items_lock
            .lock()
            .map_err(|_| LedgerError::storage("item collection lock poisoned"))
    }

    /// Append after a successful item write. A failure here means the
    /// collections have diverged, which is surfaced distinctly instead of
    /// being folded into a plain storage error.
    fn append_or_partial(&self, draft: PendingTransaction) -> LedgerResult<Transaction> {
        self.log.append(draft).map_err(|e| {
            warn!(error = %e, "item collection updated but transaction append failed");
            LedgerError::partial_write(e.to_string())
        })
    }
}
