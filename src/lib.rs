//! CobaltDB - a lightweight, single-threaded in-memory key-value engine
//!
//! The engine is a single-caller library: one command is fully validated,
//! executed against the store and answered before the next is accepted.
//! - `store` owns the key/value and expiration state
//! - `reply` defines the structured results and their text rendering
//! - `commands` implements one operation per command behind a common trait
//! - `dispatch` resolves names, checks arity and runs the expiration sweep
//! - `repl` is the line-oriented front-end over the engine

pub mod reply;
pub mod store;
pub mod commands;
pub mod dispatch;
pub mod repl;

/// Re-export commonly used types
pub use store::{MemoryStore, Entry, Value};
pub use reply::{Reply, EngineError, EngineResult};
pub use commands::{Command, CommandContext, CommandRegistry};
pub use dispatch::Dispatcher;
