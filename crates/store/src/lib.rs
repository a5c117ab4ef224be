//! `stockroom-store` — the store adapter.
//!
//! A collection is an ordered sequence of records read and written as a
//! whole. The ledger and the analytics layer are written against the
//! [`Collection`] trait only, so the backing medium (memory, JSON file,
//! something else) is swappable without touching their logic.

pub mod adapter;
pub mod json_file;
pub mod memory;

pub use adapter::{Collection, StoreError};
pub use json_file::JsonFileCollection;
pub use memory::InMemoryCollection;
