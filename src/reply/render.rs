//! Plain-text rendering of replies and failures
//!
//! Produces the display strings used by the interactive session. Kept
//! apart from the types so that other hosts can format replies their own
//! way.

use super::types::{EngineError, Reply};

/// Render a reply for display.
///
/// Array elements are numbered from 1, one per line.
pub fn render_reply(reply: &Reply) -> String {
    match reply {
        Reply::Simple(s) => s.clone(),
        Reply::Bulk(b) => format!("\"{}\"", String::from_utf8_lossy(b)),
        Reply::Integer(i) => format!("(integer) {}", i),
        Reply::Nil => "(nil)".to_string(),
        Reply::EmptyArray => "(empty array)".to_string(),
        Reply::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}) {}", i + 1, render_reply(item)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render a failure for display
pub fn render_error(err: &EngineError) -> String {
    format!("(error) {}", err)
}
