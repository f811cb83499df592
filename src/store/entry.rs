//! Entry structure for key-value pairs

use super::value::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// Current time as fractional seconds since the Unix epoch.
pub fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// A stored value together with its optional expiration.
///
/// Keeping the expiration inside the entry makes removing a key and its
/// expiration a single step: an expiration can never outlive its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The value
    pub value: Value,

    /// Optional expiration time, fractional seconds since the Unix epoch
    pub expire_at: Option<f64>,
}

impl Entry {
    /// Create a new entry without expiration
    pub fn new(value: Value) -> Self {
        Entry {
            value,
            expire_at: None,
        }
    }

    /// Check if the entry has expired at the given time
    pub fn is_expired(&self, now: f64) -> bool {
        matches!(self.expire_at, Some(at) if at <= now)
    }
}
