//! Structured JSON event logger
//!
//! - One log line = one event
//! - Deterministic key ordering (event, severity, then fields sorted)
//! - Synchronous, no buffering
//! - Events go to stderr; stdout belongs to the user interface

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues (not-found results, rejected input)
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured event logger
pub struct Logger;

impl Logger {
    /// Emit one event line to stderr.
    ///
    /// Fields are output in deterministic order (alphabetical by key).
    pub fn event(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::write_event(severity, event, fields, &mut io::stderr());
    }

    fn write_event<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut output = String::with_capacity(128);

        output.push_str("{\"event\":\"");
        escape_json_string(&mut output, event);
        output.push_str("\",\"severity\":\"");
        output.push_str(severity.as_str());
        output.push('"');

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push_str(",\"");
            escape_json_string(&mut output, key);
            output.push_str("\":\"");
            escape_json_string(&mut output, value);
            output.push('"');
        }

        output.push_str("}\n");

        // One write_all call per event
        let _ = writer.write_all(output.as_bytes());
        let _ = writer.flush();
    }
}

fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buf = Vec::new();
        Logger::write_event(severity, event, fields, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_event_is_one_json_line() {
        let line = capture(Severity::Info, "book_added", &[("id", "1")]);
        assert!(line.ends_with('\n'));

        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["event"], "book_added");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["id"], "1");
    }

    #[test]
    fn test_fields_sorted_alphabetically() {
        let line = capture(
            Severity::Warn,
            "e",
            &[("zulu", "1"), ("alpha", "2"), ("mike", "3")],
        );
        let alpha = line.find("alpha").unwrap();
        let mike = line.find("mike").unwrap();
        let zulu = line.find("zulu").unwrap();
        assert!(alpha < mike && mike < zulu);
    }

    #[test]
    fn test_escaping() {
        let line = capture(Severity::Error, "e", &[("msg", "a \"b\"\nc\\d")]);
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["msg"], "a \"b\"\nc\\d");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let line = capture(Severity::Info, "e", &[("title", "Война и Мир")]);
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["title"], "Война и Мир");
    }
}
