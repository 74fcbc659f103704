//! Catalog operations
//!
//! Each operation loads the document fresh, mutates it in memory, and
//! saves it back in one write. Id allocation happens inside the same
//! load/save cycle as the book append, so the counter can never advance
//! without its book.

use crate::book::{Book, Status};
use crate::index::find_by_id;
use crate::storage::LibraryStore;

use super::errors::{CatalogError, CatalogResult};

/// The catalog service. Holds the store it operates on; the storage
/// path is injected at construction, never a process-wide default.
#[derive(Debug)]
pub struct Catalog {
    store: LibraryStore,
}

impl Catalog {
    /// Build a catalog over the given store
    pub fn new(store: LibraryStore) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &LibraryStore {
        &self.store
    }

    /// Add a new book. Allocates the next id, appends the record (ids
    /// strictly increase, so the sort order holds), persists, and
    /// returns the created book.
    pub fn add(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> CatalogResult<Book> {
        let title = title.into();
        let author = author.into();

        if title.trim().is_empty() {
            return Err(CatalogError::InvalidArgument("title must not be empty".into()));
        }
        if author.trim().is_empty() {
            return Err(CatalogError::InvalidArgument("author must not be empty".into()));
        }

        let mut doc = self.store.load()?;
        let id = doc.allocate_id();
        let book = Book::new(id, title, author, year);
        doc.books.push(book.clone());
        self.store.save(&doc)?;

        Ok(book)
    }

    /// Delete the book with the given id and return the removed record.
    pub fn delete(&self, id: i64) -> CatalogResult<Book> {
        let id = validate_id(id)?;

        let mut doc = self.store.load()?;
        let position = find_by_id(&doc.books, id).ok_or(CatalogError::BookNotFound(id))?;
        let removed = doc.books.remove(position);
        self.store.save(&doc)?;

        Ok(removed)
    }

    /// Find books matching every supplied criterion exactly (AND
    /// semantics, no substring or fuzzy matching).
    ///
    /// An empty criteria set vacuously matches every book, so calling
    /// this with no criteria is equivalent to `list_all`. Returns an
    /// empty vector when nothing matches.
    pub fn find(
        &self,
        title: Option<&str>,
        author: Option<&str>,
        year: Option<i32>,
    ) -> CatalogResult<Vec<Book>> {
        let doc = self.store.load()?;

        let matches = doc
            .books
            .into_iter()
            .filter(|book| {
                title.map_or(true, |t| book.title == t)
                    && author.map_or(true, |a| book.author == a)
                    && year.map_or(true, |y| book.year == y)
            })
            .collect();

        Ok(matches)
    }

    /// All books in storage order (ascending id)
    pub fn list_all(&self) -> CatalogResult<Vec<Book>> {
        Ok(self.store.load()?.books)
    }

    /// Assign a status, given by its display label, to the book with
    /// the given id. The record is persisted in place and returned.
    ///
    /// Same-status assignment is permitted and still bumps
    /// `status_changed`.
    pub fn set_status(&self, id: i64, label: &str) -> CatalogResult<Book> {
        let id = validate_id(id)?;
        let status =
            Status::parse_label(label).ok_or_else(|| CatalogError::InvalidStatus(label.into()))?;

        let mut doc = self.store.load()?;
        let position = find_by_id(&doc.books, id).ok_or(CatalogError::BookNotFound(id))?;
        doc.books[position].change_status(status);
        let updated = doc.books[position].clone();
        self.store.save(&doc)?;

        Ok(updated)
    }
}

/// Reject non-positive ids before any storage access
fn validate_id(id: i64) -> CatalogResult<u64> {
    if id < 1 {
        return Err(CatalogError::InvalidArgument(format!(
            "book id must be >= 1, got {}",
            id
        )));
    }
    Ok(id as u64)
}
