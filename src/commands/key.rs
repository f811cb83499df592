//! Key commands (DEL)

use super::{Command, CommandContext};
use crate::reply::{EngineError, EngineResult, Reply};
use bytes::Bytes;

pub(crate) const DEL_DOC: &str = "  Remove the specified keys. A key that does not exist is ignored.\n  Reports the number of keys actually removed.";

/// DEL command - Delete one or more keys
///
/// Syntax: DEL key [key ...]
pub struct DelCommand;

impl Command for DelCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult {
        if args.is_empty() {
            return Err(EngineError::wrong_arity(self.name()));
        }

        let mut deleted = 0;
        for key in args {
            if ctx.store.delete(key) {
                deleted += 1;
            }
        }

        Ok(Reply::integer(deleted))
    }

    fn name(&self) -> &'static str {
        "DEL"
    }

    fn description(&self) -> &'static str {
        DEL_DOC
    }

    fn min_args(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Value;

    fn argv(parts: &[&str]) -> Vec<Bytes> {
        parts
            .iter()
            .map(|p| Bytes::copy_from_slice(p.as_bytes()))
            .collect()
    }

    #[test]
    fn test_del_counts_present_keys_only() {
        let mut ctx = CommandContext::new();
        ctx.store.set("key1", Value::string("value1"));
        ctx.store.set("key2", Value::string("value2"));

        let result = DelCommand.execute(&mut ctx, &argv(&["key1", "key2", "key3"]));
        assert_eq!(result, Ok(Reply::integer(2)));
        assert!(ctx.store.is_empty());
    }

    #[test]
    fn test_del_missing_keys_is_zero() {
        let mut ctx = CommandContext::new();
        let result = DelCommand.execute(&mut ctx, &argv(&["nope"]));
        assert_eq!(result, Ok(Reply::integer(0)));
    }

    #[test]
    fn test_del_requires_a_key() {
        let mut ctx = CommandContext::new();
        let result = DelCommand.execute(&mut ctx, &[]);
        assert!(matches!(result, Err(EngineError::WrongArity { .. })));
    }
}
