//! The book record
//!
//! Field order matches the on-disk layout:
//! id, title, author, year, status, status_changed, created_at.
//! Timestamps serialize as RFC 3339 strings via chrono's serde support.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Status;

/// A single book record.
///
/// `id` and `created_at` are assigned once at creation and never change.
/// `status_changed` starts equal to `created_at` and is bumped on every
/// status assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned from the document counter
    pub id: u64,

    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Year of publication
    pub year: i32,

    /// Current lifecycle status
    pub status: Status,

    /// When the status was last assigned
    pub status_changed: DateTime<Utc>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Create a new book with creation-time defaults: status Available,
    /// both timestamps set to now.
    pub fn new(id: u64, title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: Status::Available,
            status_changed: now,
            created_at: now,
        }
    }

    /// Assign a status and bump `status_changed`.
    ///
    /// Assigning the current status is permitted and still advances the
    /// timestamp.
    pub fn change_status(&mut self, status: Status) {
        self.status = status;
        self.status_changed = Utc::now();
    }

    /// Verbose all-fields form for diagnostics
    pub fn diagnostic(&self) -> String {
        format!(
            "Book(id={}, title={:?}, author={:?}, year={}, status={:?}, \
             created_at={}, status_changed={})",
            self.id,
            self.title,
            self.author,
            self.year,
            self.status,
            self.created_at.to_rfc3339(),
            self.status_changed.to_rfc3339(),
        )
    }
}

impl fmt::Display for Book {
    /// One-line summary: title, author, year, and the date the status
    /// last changed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\", {}, {} (с {} {})",
            self.title,
            self.author,
            self.year,
            self.status_changed.format("%Y-%m-%d"),
            self.status,
        )
    }
}
