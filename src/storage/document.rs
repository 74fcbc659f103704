//! The persisted library document
//!
//! Layout on disk:
//!
//! ```json
//! {
//!   "id_count": 2,
//!   "books": [ { "id": 1, ... }, { "id": 2, ... } ]
//! }
//! ```
//!
//! `id_count` is the source of truth for the next id and never decreases,
//! even across deletions. `books` stays sorted ascending by id; since ids
//! strictly increase, appending new books preserves the order.

use serde::{Deserialize, Serialize};

use crate::book::Book;

/// The whole catalog as persisted: id counter plus id-sorted book array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryDocument {
    /// Monotonic id counter; survives deletions
    pub id_count: u64,

    /// All book records, sorted ascending by id
    pub books: Vec<Book>,
}

impl LibraryDocument {
    /// Empty document: counter at zero, no books
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id by incrementing the counter in memory.
    ///
    /// Counter increment and the corresponding book append are persisted
    /// together in one save, so a crash can never leave the counter
    /// advanced without its book.
    pub fn allocate_id(&mut self) -> u64 {
        self.id_count += 1;
        self.id_count
    }

    /// Whether the book array is sorted strictly ascending by id
    pub fn is_sorted_by_id(&self) -> bool {
        self.books.windows(2).all(|pair| pair[0].id < pair[1].id)
    }
}
