use super::{record_file_name, RecordStore, DEFAULT_FILE_EXT};
use crate::error::{IngestError, Result};
use crate::model::PersonRecord;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Keeps appended lines in memory, keyed by the file name a [`super::fs::FileStore`]
/// would have used.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<String, Vec<String>>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every append fails like a read-only filesystem.
    pub fn failing() -> Self {
        Self {
            files: HashMap::new(),
            fail_writes: true,
        }
    }

    pub fn lines(&self, surname: &str) -> &[String] {
        self.files
            .get(&record_file_name(surname, DEFAULT_FILE_EXT))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl RecordStore for InMemoryStore {
    fn append(&mut self, record: &PersonRecord) -> Result<PathBuf> {
        let name = record_file_name(&record.surname, DEFAULT_FILE_EXT);
        if self.fail_writes {
            return Err(IngestError::Io {
                path: PathBuf::from(name),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only store"),
            });
        }

        self.files
            .entry(name.clone())
            .or_default()
            .push(record.to_line());
        Ok(PathBuf::from(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_record;

    #[test]
    fn groups_lines_by_surname() {
        let mut store = InMemoryStore::new();
        store
            .append(&parse_record("Smith John Doe 01.01.1990 1 m").unwrap())
            .unwrap();
        store
            .append(&parse_record("Smith Jane Doe 02.02.1992 2 f").unwrap())
            .unwrap();
        store
            .append(&parse_record("Jones Bob Roe 03.03.1993 3 m").unwrap())
            .unwrap();

        assert_eq!(store.file_count(), 2);
        assert_eq!(
            store.lines("Smith"),
            ["Smith John Doe 01.01.1990 1 м", "Smith Jane Doe 02.02.1992 2 ж"]
        );
        assert_eq!(store.lines("Jones").len(), 1);
        assert!(store.lines("Nobody").is_empty());
    }

    #[test]
    fn failing_store_writes_nothing() {
        let mut store = InMemoryStore::failing();
        let record = parse_record("Smith John Doe 01.01.1990 1 m").unwrap();

        assert!(matches!(store.append(&record), Err(IngestError::Io { .. })));
        assert!(store.is_empty());
    }
}
