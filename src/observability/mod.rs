//! Structured logging
//!
//! One log line = one event, written synchronously to stderr so it
//! never mixes with user-facing output on stdout.

mod logger;

pub use logger::{Logger, Severity};
