//! Command execution module
//!
//! Provides a unified interface for all commands through the Command trait.
//! Each command family is implemented in a separate file for high cohesion.

mod context;
mod registry;

// Command implementations
mod string;
mod key;
mod list;
mod hash;
mod admin;

pub use context::CommandContext;
pub use registry::CommandRegistry;

use crate::reply::{EngineError, EngineResult};
use bytes::Bytes;

/// Command execution trait
///
/// All commands implement this trait with a single execute method.
/// This provides loose coupling between command implementations and the
/// dispatcher.
pub trait Command: Send + Sync {
    /// Execute the command with the given context and arguments
    ///
    /// Arguments:
    /// - ctx: mutable reference to the command context (store + session flag)
    /// - args: raw argument tokens (excluding the command name itself)
    ///
    /// Returns the structured reply, or exactly one failure kind. A failing
    /// command must not leave a partial write in the store.
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult;

    /// Get the command name (for lookup and diagnostics)
    fn name(&self) -> &'static str;

    /// Get the one-paragraph description shown by HELP
    fn description(&self) -> &'static str;

    /// Get the minimum number of arguments required
    fn min_args(&self) -> usize {
        0
    }

    /// Get the maximum number of arguments (None = unlimited)
    fn max_args(&self) -> Option<usize> {
        None
    }
}

/// Helper function to decode an argument token as UTF-8 (option keywords)
pub(crate) fn token_str(arg: &Bytes) -> Result<&str, EngineError> {
    std::str::from_utf8(arg).map_err(|_| EngineError::Syntax)
}

/// Helper function to parse a signed integer argument.
///
/// Accepted grammar: an optional leading '-' followed by digits only.
pub(crate) fn parse_integer(arg: &Bytes) -> Result<i64, EngineError> {
    let s = std::str::from_utf8(arg).map_err(|_| EngineError::NotAnInteger)?;
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::NotAnInteger);
    }
    s.parse::<i64>().map_err(|_| EngineError::NotAnInteger)
}

/// Helper function to parse a non-negative integer argument (digits only)
pub(crate) fn parse_unsigned(arg: &Bytes) -> Result<u64, EngineError> {
    let s = std::str::from_utf8(arg).map_err(|_| EngineError::NotAnInteger)?;
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::NotAnInteger);
    }
    s.parse::<u64>().map_err(|_| EngineError::NotAnInteger)
}
