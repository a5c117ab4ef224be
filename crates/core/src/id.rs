//! Strongly-typed record identifiers.
//!
//! Identifiers are small integers allocated as `max(existing) + 1` over a
//! collection snapshot (see the ledger crate's allocator). They serialize
//! transparently as plain numbers for compatibility with existing data.

use serde::{Deserialize, Serialize};

/// Identifier of an inventory item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

/// Identifier of a transaction record (strictly increasing per log).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

macro_rules! impl_integer_id {
    ($t:ty) => {
        impl $t {
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn get(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_integer_id!(ItemId);
impl_integer_id!(TransactionId);
