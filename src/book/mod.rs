//! Book entity and status lifecycle
//!
//! A book is created once, mutated only through status changes, and
//! removed by the catalog. Status is a closed two-value set persisted
//! under human-readable labels.

mod entity;
mod status;

pub use entity::Book;
pub use status::Status;
