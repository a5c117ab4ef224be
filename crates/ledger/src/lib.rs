//! `stockroom-ledger` — the inventory ledger and its transaction log.
//!
//! The ledger owns the item collection and is the only writer of the
//! transaction log. Every quantity-changing operation persists the item
//! collection first and then appends exactly one audit transaction, under
//! a per-collection locking discipline that serializes the non-atomic
//! read-modify-write cycles against the store adapter.

pub mod alloc;
pub mod ledger;
pub mod log;

pub use ledger::Ledger;
pub use log::TransactionLog;

use stockroom_core::{LedgerError, LedgerResult};
use stockroom_store::{Collection, StoreError};

fn storage_error(e: StoreError) -> LedgerError {
    LedgerError::storage(e.to_string())
}

pub(crate) fn read_store<R, S: Collection<R>>(store: &S) -> LedgerResult<Vec<R>> {
    store.read().map_err(storage_error)
}

pub(crate) fn write_store<R, S: Collection<R>>(store: &S, records: &[R]) -> LedgerResult<()> {
    store.write(records).map_err(storage_error)
}
