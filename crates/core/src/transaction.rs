//! Immutable audit records for quantity-changing events.
//!
//! A transaction goes through two shapes: [`PendingTransaction`] is the
//! draft produced by a ledger operation, and [`Transaction`] is the stored
//! record after the log has assigned its identifier. The item name is
//! deliberately denormalized into the record so history survives deletion
//! of the item it describes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::id::{ItemId, TransactionId};

/// What a transaction did to the item's quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Quantity increased (including the initial stock at creation).
    Added,
    /// Quantity decreased.
    Taken,
    /// The item was removed; quantity is the stock at deletion time.
    Deleted,
}

/// A stored, immutable transaction record.
///
/// Timestamps persist as RFC 3339 strings; the log may hold legacy records
/// with unparseable values, which consumers tolerate via
/// [`Transaction::parsed_timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub item_id: ItemId,
    pub item_name: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Magnitude of the quantity change (stock at deletion for `deleted`).
    pub quantity: i64,
    pub user: String,
    pub timestamp: String,
}

impl Transaction {
    /// Parse the stored timestamp, if well-formed.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Timestamp for ordering purposes. Unparseable values sort as the
    /// earliest possible instant so one bad record cannot fail a whole
    /// aggregation.
    pub fn timestamp_or_earliest(&self) -> DateTime<Utc> {
        self.parsed_timestamp().unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// A transaction draft awaiting an identifier from the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    pub item_id: ItemId,
    pub item_name: String,
    pub kind: TransactionKind,
    pub quantity: i64,
    pub user: String,
    pub timestamp: String,
}

impl PendingTransaction {
    /// Quantity rules per kind: `added`/`taken` carry a strictly positive
    /// delta; `deleted` records the stock at deletion, which may be zero.
    pub fn validate(&self) -> LedgerResult<()> {
        match self.kind {
            TransactionKind::Added | TransactionKind::Taken if self.quantity <= 0 => Err(
                LedgerError::validation("transaction quantity must be positive"),
            ),
            TransactionKind::Deleted if self.quantity < 0 => Err(LedgerError::validation(
                "transaction quantity cannot be negative",
            )),
            _ => Ok(()),
        }
    }

    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            item_id: self.item_id,
            item_name: self.item_name,
            kind: self.kind,
            quantity: self.quantity,
            user: self.user,
            timestamp: self.timestamp,
        }
    }
}
