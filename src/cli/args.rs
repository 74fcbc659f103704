//! CLI argument definitions using clap
//!
//! Commands:
//! - libris add [-f <path>]
//! - libris delete [-f <path>]
//! - libris find [-f <path>]
//! - libris all [-f <path>]
//! - libris status [-f <path>]
//!
//! Field values are prompted interactively on stdin.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// libris - a single-user book catalog manager
#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new book to the catalog
    Add {
        /// Path to the storage file
        #[arg(short, long, default_value = "library.json")]
        file: PathBuf,
    },

    /// Delete a book by id
    Delete {
        /// Path to the storage file
        #[arg(short, long, default_value = "library.json")]
        file: PathBuf,
    },

    /// Find books by exact title, author and/or year
    Find {
        /// Path to the storage file
        #[arg(short, long, default_value = "library.json")]
        file: PathBuf,
    },

    /// List all books
    All {
        /// Path to the storage file
        #[arg(short, long, default_value = "library.json")]
        file: PathBuf,
    },

    /// Assign a status to a book
    Status {
        /// Path to the storage file
        #[arg(short, long, default_value = "library.json")]
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
