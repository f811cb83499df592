//! Command execution context

use crate::store::MemoryStore;

/// Context provided to commands during execution
///
/// Owns the store and the session flag; there is no process-wide state,
/// so independent engines can coexist in tests or multi-session hosts.
pub struct CommandContext {
    /// The memory store
    pub store: MemoryStore,

    /// Session flag, cleared by QUIT/END; the host loop stops once false
    pub active: bool,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> Self {
        CommandContext {
            store: MemoryStore::new(),
            active: true,
        }
    }

    /// Create a context with a specific store capacity
    pub fn with_capacity(capacity: usize) -> Self {
        CommandContext {
            store: MemoryStore::with_capacity(capacity),
            active: true,
        }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}
