//! Ledger error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the ledger layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error returned by ledger operations.
///
/// `Validation` and `NotFound` are the caller's fault and leave no state
/// behind. `Storage` means the adapter failed before the collections could
/// diverge. `PartialWrite` is the one case where they already have.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A field failed validation (e.g. empty name, negative quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// No item with the given identifier exists.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// The store adapter failed; no state was changed by this operation.
    #[error("storage failure: {0}")]
    Storage(String),

    /// The item collection was persisted but the transaction append failed.
    ///
    /// The item state and the audit trail have diverged; the ledger does not
    /// roll back the item write. Callers must reconcile manually.
    #[error("partial write: item collection updated, transaction log not updated: {0}")]
    PartialWrite(String),
}

impl LedgerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn partial_write(msg: impl Into<String>) -> Self {
        Self::PartialWrite(msg.into())
    }
}
