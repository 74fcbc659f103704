//! Whole-file JSON storage
//!
//! The entire catalog lives in one JSON document: an id counter plus the
//! id-sorted book array. Load reads and parses the whole file; save
//! rewrites it. There are no partial writes.

mod document;
mod errors;
mod store;

pub use document::LibraryDocument;
pub use errors::{StorageError, StorageResult};
pub use store::LibraryStore;
