//! Catalog service
//!
//! Orchestrates add/delete/find/list/set-status over the storage
//! accessor, the id index, and the book entity. Every operation is one
//! whole-document load plus one whole-document save.

mod errors;
mod service;

pub use errors::{CatalogError, CatalogResult};
pub use service::Catalog;
