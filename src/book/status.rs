//! Book status enumeration
//!
//! Logic works with the symbolic variants; the persisted and
//! input-facing representation is the display label. Parsing validates
//! against exactly the label set, nothing else.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle flag of a book: on the shelf or checked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Book is on the shelf
    #[serde(rename = "в наличии")]
    Available,
    /// Book has been checked out
    #[serde(rename = "выдана")]
    CheckedOut,
}

impl Status {
    /// Returns the display label, which is also the persisted form
    pub fn label(&self) -> &'static str {
        match self {
            Status::Available => "в наличии",
            Status::CheckedOut => "выдана",
        }
    }

    /// All known labels, in declaration order (for prompts and errors)
    pub fn labels() -> [&'static str; 2] {
        [Status::Available.label(), Status::CheckedOut.label()]
    }

    /// Parse a display label. Returns None for anything outside the
    /// closed label set; no trimming, no case folding.
    pub fn parse_label(label: &str) -> Option<Status> {
        match label {
            "в наличии" => Some(Status::Available),
            "выдана" => Some(Status::CheckedOut),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        assert_eq!(Status::parse_label("в наличии"), Some(Status::Available));
        assert_eq!(Status::parse_label("выдана"), Some(Status::CheckedOut));
    }

    #[test]
    fn test_parse_rejects_unknown_labels() {
        assert_eq!(Status::parse_label("available"), None);
        assert_eq!(Status::parse_label("ВЫДАНА"), None);
        assert_eq!(Status::parse_label(" в наличии"), None);
        assert_eq!(Status::parse_label(""), None);
    }

    #[test]
    fn test_serialized_form_is_the_label() {
        let json = serde_json::to_string(&Status::Available).unwrap();
        assert_eq!(json, "\"в наличии\"");

        let json = serde_json::to_string(&Status::CheckedOut).unwrap();
        assert_eq!(json, "\"выдана\"");
    }

    #[test]
    fn test_deserialize_from_label() {
        let status: Status = serde_json::from_str("\"выдана\"").unwrap();
        assert_eq!(status, Status::CheckedOut);

        let result: Result<Status, _> = serde_json::from_str("\"checked_out\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_labels_cover_both_variants() {
        let labels = Status::labels();
        assert_eq!(labels, ["в наличии", "выдана"]);
        for label in labels {
            assert!(Status::parse_label(label).is_some());
        }
    }
}
