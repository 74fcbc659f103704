//! libris - a single-user command-line book catalog manager
//!
//! Book records live in a single JSON document on disk. Every operation
//! loads the whole document, mutates it in memory, and rewrites it.

pub mod book;
pub mod catalog;
pub mod cli;
pub mod index;
pub mod observability;
pub mod storage;
