//! CLI module for libris
//!
//! Provides the five user actions:
//! - add: prompt for fields and create a book
//! - delete: remove a book by id
//! - find: exact-match search by title/author/year
//! - all: list every book
//! - status: assign a status to a book

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
