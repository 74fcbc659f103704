//! CLI command implementations
//!
//! Each command binds a store to the `--file` path, creates the storage
//! file on first use, prompts for its fields, and prints the catalog's
//! result. "Not found" and unknown-status results are user-facing
//! outcomes: they are printed and the invocation exits cleanly.

use std::path::Path;

use crate::book::Status;
use crate::catalog::{Catalog, CatalogError};
use crate::observability::{Logger, Severity};
use crate::storage::LibraryStore;

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::{prompt, prompt_id, prompt_optional, prompt_optional_year, prompt_year};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Add { file } => add(&file),
        Command::Delete { file } => delete(&file),
        Command::Find { file } => find(&file),
        Command::All { file } => all(&file),
        Command::Status { file } => status(&file),
    }
}

/// Bind a catalog to the storage file, creating an empty document on
/// first use so a fresh path is immediately usable.
fn open_catalog(file: &Path) -> CliResult<Catalog> {
    let store = LibraryStore::open(file);
    store.init_if_missing().map_err(CatalogError::from)?;
    Ok(Catalog::new(store))
}

fn add(file: &Path) -> CliResult<()> {
    let catalog = open_catalog(file)?;

    let title = prompt("Название книги: ")?;
    let author = prompt("Автор книги: ")?;
    let year = prompt_year("Год выхода книги: ")?;
    println!();

    let book = catalog.add(title, author, year)?;
    Logger::event(
        Severity::Info,
        "book_added",
        &[("id", &book.id.to_string()), ("file", &file.display().to_string())],
    );
    println!("Добавлена книга: {}", book);

    Ok(())
}

fn delete(file: &Path) -> CliResult<()> {
    let catalog = open_catalog(file)?;

    let id = prompt_id("ID книги, которую нужно удалить: ")?;
    println!();

    match catalog.delete(id) {
        Ok(book) => {
            Logger::event(
                Severity::Info,
                "book_deleted",
                &[("id", &book.id.to_string()), ("file", &file.display().to_string())],
            );
            println!("Удалена книга: {}", book);
            Ok(())
        }
        Err(CatalogError::BookNotFound(id)) => {
            print_not_found(id);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn find(file: &Path) -> CliResult<()> {
    let catalog = open_catalog(file)?;

    let title = prompt_optional("Название книги: ")?;
    let author = prompt_optional("Автор книги: ")?;
    let year = prompt_optional_year("Год выхода книги: ")?;
    println!();

    let books = catalog.find(title.as_deref(), author.as_deref(), year)?;
    if books.is_empty() {
        println!("Ни одной книги не найдено");
    } else {
        for book in books {
            println!("{}", book);
        }
    }

    Ok(())
}

fn all(file: &Path) -> CliResult<()> {
    let catalog = open_catalog(file)?;

    for book in catalog.list_all()? {
        println!("{}", book);
    }

    Ok(())
}

fn status(file: &Path) -> CliResult<()> {
    let catalog = open_catalog(file)?;

    let id = prompt_id("ID книги: ")?;
    println!("Доступные статусы: {}", Status::labels().join(", "));
    let label = prompt("Присвоить статус: ")?;
    println!();

    match catalog.set_status(id, &label) {
        Ok(book) => {
            Logger::event(
                Severity::Info,
                "status_changed",
                &[("id", &book.id.to_string()), ("status", book.status.label())],
            );
            println!("Статус обновлён: {}", book);
            Ok(())
        }
        Err(CatalogError::BookNotFound(id)) => {
            print_not_found(id);
            Ok(())
        }
        Err(CatalogError::InvalidStatus(label)) => {
            Logger::event(Severity::Warn, "invalid_status", &[("status", &label)]);
            println!(
                "Неизвестный статус \"{}\". Доступные статусы: {}",
                label,
                Status::labels().join(", ")
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_not_found(id: u64) {
    Logger::event(Severity::Warn, "book_not_found", &[("id", &id.to_string())]);
    println!("Книга с ID {} не найдена", id);
}
