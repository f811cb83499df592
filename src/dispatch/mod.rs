//! Command dispatcher
//!
//! Routes incoming commands to the appropriate handler.
//! This module provides loose coupling between the front-end and command
//! implementations.

use crate::commands::{CommandContext, CommandRegistry};
use crate::reply::{EngineError, EngineResult};
use crate::store::epoch_seconds;
use bytes::Bytes;
use tracing::{debug, warn};

/// Command dispatcher
///
/// Receives a command name with raw argument tokens, validates them, and
/// routes to the appropriate handler. The expiration sweep runs at the top
/// of every execution, so no command ever observes a logically expired key.
pub struct Dispatcher {
    /// Command registry
    registry: CommandRegistry,

    /// Command execution context
    context: CommandContext,
}

impl Dispatcher {
    /// Create a new dispatcher
    pub fn new() -> Self {
        Dispatcher {
            registry: CommandRegistry::new(),
            context: CommandContext::new(),
        }
    }

    /// Create a dispatcher with specified store capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Dispatcher {
            registry: CommandRegistry::new(),
            context: CommandContext::with_capacity(capacity),
        }
    }

    /// Execute a command
    ///
    /// The name is matched case-insensitively against the command table;
    /// args are raw tokens, already split on whitespace by the caller.
    pub fn execute(&mut self, name: &str, args: &[Bytes]) -> EngineResult {
        self.context.store.sweep_expired(epoch_seconds());

        let command = match self.registry.get(name) {
            Some(command) => command,
            None => {
                warn!("Unknown command: {}", name);
                return Err(EngineError::unknown_command(name, args));
            }
        };

        debug!("Dispatching command: {}", command.name());

        if args.len() < command.min_args() {
            return Err(EngineError::wrong_arity(command.name()));
        }
        if let Some(max) = command.max_args() {
            if args.len() > max {
                return Err(EngineError::wrong_arity(command.name()));
            }
        }

        command.execute(&mut self.context, args)
    }

    /// Whether the session is still active (QUIT/END clears this)
    pub fn is_active(&self) -> bool {
        self.context.active
    }

    /// Get reference to the context (for testing/inspection)
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Get mutable reference to the context (for testing/inspection)
    pub fn context_mut(&mut self) -> &mut CommandContext {
        &mut self.context
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
