//! Interactive prompt handling for the CLI
//!
//! Field values are read line by line from stdin. The prompt text goes
//! to stdout and is flushed before reading so it appears even without a
//! trailing newline.

use std::io::{self, BufRead, Write};

use super::errors::CliResult;

/// Print a prompt and read one trimmed line from stdin
pub fn prompt(label: &str) -> CliResult<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", label)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Prompt for an optional value: an empty answer means "not supplied"
pub fn prompt_optional(label: &str) -> CliResult<Option<String>> {
    let answer = prompt(label)?;
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(answer))
    }
}

/// Prompt for a book id
pub fn prompt_id(label: &str) -> CliResult<i64> {
    let answer = prompt(label)?;
    Ok(answer.trim().parse()?)
}

/// Prompt for a year
pub fn prompt_year(label: &str) -> CliResult<i32> {
    let answer = prompt(label)?;
    Ok(answer.trim().parse()?)
}

/// Prompt for an optional year: an empty answer means "not supplied"
pub fn prompt_optional_year(label: &str) -> CliResult<Option<i32>> {
    match prompt_optional(label)? {
        Some(answer) => Ok(Some(answer.trim().parse()?)),
        None => Ok(None),
    }
}
