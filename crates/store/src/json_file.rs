//! JSON-file-backed collection.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::adapter::{Collection, StoreError};

/// One collection persisted as a pretty-printed JSON array in a single file.
///
/// Reads of a file that does not exist yet yield an empty collection.
/// Writes serialize to a sibling temp file and rename it over the target,
/// so a crashed write never leaves a truncated collection behind.
#[derive(Debug)]
pub struct JsonFileCollection<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonFileCollection<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl<R> Collection<R> for JsonFileCollection<R>
where
    R: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    fn read(&self) -> Result<Vec<R>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::read(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&data)
            .map_err(|e| StoreError::read(format!("{}: {e}", self.path.display())))
    }

    fn write(&self, records: &[R]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::write(format!("serialization: {e}")))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .map_err(|e| StoreError::write(format!("{}: {e}", temp.display())))?;
        fs::rename(&temp, &self.path)
            .map_err(|e| StoreError::write(format!("{}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Record {
        id: u64,
        label: String,
    }

    fn record(id: u64, label: &str) -> Record {
        Record {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileCollection<Record> =
            JsonFileCollection::new(dir.path().join("inventory.json"));
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileCollection::new(dir.path().join("inventory.json"));

        let records = vec![record(1, "bolt"), record(2, "nut")];
        store.write(&records).unwrap();
        assert_eq!(store.read().unwrap(), records);
    }

    #[test]
    fn rewrite_replaces_the_whole_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileCollection::new(dir.path().join("inventory.json"));

        store.write(&[record(1, "bolt")]).unwrap();
        store.write(&[record(2, "nut"), record(3, "washer")]).unwrap();
        assert_eq!(
            store.read().unwrap(),
            vec![record(2, "nut"), record(3, "washer")]
        );
    }

    #[test]
    fn corrupt_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let store: JsonFileCollection<Record> = JsonFileCollection::new(&path);
        assert!(matches!(store.read(), Err(StoreError::Read(_))));
    }

    #[test]
    fn no_temp_file_is_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileCollection::new(dir.path().join("inventory.json"));
        store.write(&[record(1, "bolt")]).unwrap();
        assert!(!store.temp_path().exists());
    }
}
