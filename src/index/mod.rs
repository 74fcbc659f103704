//! Id index over the book array
//!
//! The book array is kept sorted ascending by id, so lookup is a plain
//! binary search. There is no separate index structure to maintain.

mod lookup;

pub use lookup::find_by_id;
