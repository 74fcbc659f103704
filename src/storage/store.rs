//! File-backed accessor for the library document
//!
//! The store is bound to an explicit path; there is no process-wide
//! default. Load reads and deserializes the whole file, save serializes
//! and overwrites it. A crash mid-write can corrupt the store; hardening
//! that is out of scope for a single-user tool.

use std::fs;
use std::path::{Path, PathBuf};

use super::document::LibraryDocument;
use super::errors::{StorageError, StorageResult};

/// Whole-file accessor for one library document.
#[derive(Debug, Clone)]
pub struct LibraryStore {
    path: PathBuf,
}

impl LibraryStore {
    /// Bind a store to a storage file path. The file is not touched
    /// until the first load, save, or init.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the storage file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the whole document.
    ///
    /// A missing file, an unreadable file, and malformed JSON are all
    /// corruption: the accessor has no way to tell them apart and no
    /// recovery for any of them.
    pub fn load(&self) -> StorageResult<LibraryDocument> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::corrupt(&self.path, e.to_string()))?;

        serde_json::from_str(&content)
            .map_err(|e| StorageError::corrupt(&self.path, format!("invalid JSON: {}", e)))
    }

    /// Serialize and overwrite the whole document
    pub fn save(&self, doc: &LibraryDocument) -> StorageResult<()> {
        let content = serde_json::to_string(doc).map_err(|e| {
            StorageError::write_failed(
                &self.path,
                std::io::Error::new(std::io::ErrorKind::Other, e),
            )
        })?;

        fs::write(&self.path, content).map_err(|e| StorageError::write_failed(&self.path, e))
    }

    /// Write an empty document (counter at zero, no books)
    pub fn init(&self) -> StorageResult<()> {
        self.save(&LibraryDocument::new())
    }

    /// Create an empty document if the storage file does not exist yet.
    /// An existing file is left untouched.
    pub fn init_if_missing(&self) -> StorageResult<()> {
        if self.path.exists() {
            return Ok(());
        }
        self.init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> LibraryStore {
        LibraryStore::open(dir.path().join("library.json"))
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let mut doc = LibraryDocument::new();
        let id = doc.allocate_id();
        doc.books.push(Book::new(id, "Война и Мир", "Толстой Л.Н.", 1873));
        store.save(&doc).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_missing_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let err = store.load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn test_malformed_json_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        std::fs::write(store.path(), r#"{"books": "nope"}"#).unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_init_writes_empty_document() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        store.init().unwrap();
        let doc = store.load().unwrap();
        assert_eq!(doc, LibraryDocument::new());
    }

    #[test]
    fn test_init_if_missing_keeps_existing_data() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let mut doc = LibraryDocument::new();
        let id = doc.allocate_id();
        doc.books.push(Book::new(id, "t", "a", 2000));
        store.save(&doc).unwrap();

        store.init_if_missing().unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let mut doc = LibraryDocument::new();
        let id = doc.allocate_id();
        doc.books.push(Book::new(id, "t", "a", 2000));
        store.save(&doc).unwrap();

        store.save(&LibraryDocument::new()).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.id_count, 0);
        assert!(loaded.books.is_empty());
    }
}
