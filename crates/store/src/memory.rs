//! In-memory collection for tests/dev.

use std::sync::RwLock;

use crate::adapter::{Collection, StoreError};

/// In-memory collection backed by an `RwLock<Vec<R>>`.
///
/// Intended for tests and development. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryCollection<R> {
    records: RwLock<Vec<R>>,
}

impl<R> InMemoryCollection<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Start from existing records (seeding fixtures).
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<R> Collection<R> for InMemoryCollection<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn read(&self) -> Result<Vec<R>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::read("lock poisoned"))?;
        Ok(records.clone())
    }

    fn write(&self, records: &[R]) -> Result<(), StoreError> {
        let mut slot = self
            .records
            .write()
            .map_err(|_| StoreError::write("lock poisoned"))?;
        *slot = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_collection_reads_empty() {
        let store: InMemoryCollection<u32> = InMemoryCollection::new();
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn write_replaces_the_full_sequence() {
        let store = InMemoryCollection::new();
        store.write(&[1u32, 2, 3]).unwrap();
        store.write(&[7u32]).unwrap();
        assert_eq!(store.read().unwrap(), vec![7]);
    }

    #[test]
    fn seeded_records_are_visible() {
        let store = InMemoryCollection::with_records(vec!["a", "b"]);
        assert_eq!(store.read().unwrap(), vec!["a", "b"]);
    }
}
