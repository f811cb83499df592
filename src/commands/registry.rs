//! Command registry
//!
//! Centralized registry for all available commands.
//! This allows loose coupling between command implementations and the
//! dispatcher.

use super::{Command, admin, hash, key, list, string};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of all available commands
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new command registry and register all commands
    pub fn new() -> Self {
        let mut registry = CommandRegistry {
            commands: HashMap::new(),
        };

        registry.register(Arc::new(admin::HelpCommand));

        // Register string commands
        registry.register(Arc::new(string::SetCommand));
        registry.register(Arc::new(string::GetCommand));
        registry.register(Arc::new(string::MGetCommand));

        // Register key commands
        registry.register(Arc::new(key::DelCommand));

        // Register list commands
        registry.register(Arc::new(list::LPushCommand));
        registry.register(Arc::new(list::LPopCommand));
        registry.register(Arc::new(list::LRangeCommand));

        // Register hash commands
        registry.register(Arc::new(hash::HSetCommand));
        registry.register(Arc::new(hash::HGetCommand));

        // Register session commands; END is the historical alias of QUIT
        registry.register(Arc::new(admin::QuitCommand));
        registry.alias("END", "QUIT");

        registry
    }

    /// Register a command
    fn register(&mut self, command: Arc<dyn Command>) {
        let name = command.name().to_uppercase();
        self.commands.insert(name, command);
    }

    /// Register an additional name for an already registered command
    fn alias(&mut self, alias: &str, target: &str) {
        if let Some(command) = self.commands.get(&target.to_uppercase()).cloned() {
            self.commands.insert(alias.to_uppercase(), command);
        }
    }

    /// Get a command by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(&name.to_uppercase()).cloned()
    }

    /// Check if a command exists
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_uppercase())
    }

    /// Get all command names
    pub fn command_names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
