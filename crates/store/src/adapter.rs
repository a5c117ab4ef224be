//! Collection read/write contract.

use std::sync::Arc;

use thiserror::Error;

/// Store adapter failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("collection read failed: {0}")]
    Read(String),

    #[error("collection write failed: {0}")]
    Write(String),
}

impl StoreError {
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }

    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }
}

/// A named collection of records, read and written as an ordered whole.
///
/// Semantics required of implementations:
/// - `read` returns an empty sequence when the collection has never been
///   written; missing backing storage is not an error.
/// - `write` replaces the full collection (last writer wins) and must not
///   leave a partially-written sequence behind on failure.
///
/// The read-modify-write cycle built on top of this contract is **not**
/// atomic across concurrent callers; serializing those cycles is the
/// caller's responsibility (the ledger holds a per-collection lock).
pub trait Collection<R>: Send + Sync {
    fn read(&self) -> Result<Vec<R>, StoreError>;
    fn write(&self, records: &[R]) -> Result<(), StoreError>;
}

impl<R, S> Collection<R> for Arc<S>
where
    S: Collection<R> + ?Sized,
{
    fn read(&self) -> Result<Vec<R>, StoreError> {
        (**self).read()
    }

    fn write(&self, records: &[R]) -> Result<(), StoreError> {
        (**self).write(records)
    }
}
