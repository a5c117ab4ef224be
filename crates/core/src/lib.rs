//! `stockroom-core` — domain types for the inventory ledger.
//!
//! This crate contains **pure domain** data and rules (no IO, no locking,
//! no storage concerns): item and transaction records, the patch structure
//! used for updates, and the error taxonomy shared across the workspace.

pub mod error;
pub mod id;
pub mod item;
pub mod transaction;

pub use error::{LedgerError, LedgerResult};
pub use id::{ItemId, TransactionId};
pub use item::{Item, ItemPatch, NewItem};
pub use transaction::{PendingTransaction, Transaction, TransactionKind};
