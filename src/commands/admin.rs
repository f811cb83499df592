//! Session commands (HELP, QUIT)

use super::{hash, key, list, string, Command, CommandContext, token_str};
use crate::reply::{EngineError, EngineResult, Reply};
use bytes::Bytes;

pub(crate) const HELP_DOC: &str = "  Show every command with its description, or the description of each\n  named command in the order given.";

pub(crate) const QUIT_DOC: &str =
    "  Terminate the interactive session. END is accepted as an alias.";

/// Command name and description, in the order HELP lists them
const CATALOG: &[(&str, &str)] = &[
    ("HELP", HELP_DOC),
    ("SET", string::SET_DOC),
    ("GET", string::GET_DOC),
    ("MGET", string::MGET_DOC),
    ("DEL", key::DEL_DOC),
    ("LPUSH", list::LPUSH_DOC),
    ("LPOP", list::LPOP_DOC),
    ("LRANGE", list::LRANGE_DOC),
    ("HSET", hash::HSET_DOC),
    ("HGET", hash::HGET_DOC),
    ("QUIT", QUIT_DOC),
];

/// Find the description for a command name, honoring the END alias
fn catalog_lookup(name: &str) -> Option<&'static str> {
    let upper = name.to_uppercase();
    let canonical: &str = if upper == "END" { "QUIT" } else { &upper };
    CATALOG
        .iter()
        .find(|(entry, _)| *entry == canonical)
        .map(|(_, doc)| *doc)
}

/// HELP command - Describe commands
///
/// Syntax: HELP [command ...]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult {
        let mut entries = Vec::new();

        if args.is_empty() {
            for (name, doc) in CATALOG {
                entries.push(format!("{}\n{}", name, doc));
            }
        } else {
            for arg in args {
                let name = token_str(arg)
                    .map_err(|_| EngineError::unknown_command(String::from_utf8_lossy(arg), &[]))?;
                let doc = catalog_lookup(name)
                    .ok_or_else(|| EngineError::unknown_command(name, &[]))?;
                entries.push(format!("{}\n{}", name.to_uppercase(), doc));
            }
        }

        Ok(Reply::simple(entries.join("\n")))
    }

    fn name(&self) -> &'static str {
        "HELP"
    }

    fn description(&self) -> &'static str {
        HELP_DOC
    }
}

/// QUIT command - End the interactive session
///
/// Syntax: QUIT (alias: END). Trailing arguments are ignored.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn execute(&self, ctx: &mut CommandContext, _args: &[Bytes]) -> EngineResult {
        ctx.active = false;
        Ok(Reply::ok())
    }

    fn name(&self) -> &'static str {
        "QUIT"
    }

    fn description(&self) -> &'static str {
        QUIT_DOC
    }
}
