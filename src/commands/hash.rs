//! Hash commands (HSET, HGET)

use super::{Command, CommandContext};
use crate::reply::{EngineError, EngineResult, Reply};
use crate::store::Value;
use bytes::Bytes;

pub(crate) const HSET_DOC: &str = "  Set the given field/value pairs in the hash stored at key, creating the\n  hash when the key does not exist. A trailing field without a value is\n  ignored. Reports the number of pairs processed.";

pub(crate) const HGET_DOC: &str = "  Return the value of field in the hash stored at key, or nil when the key\n  or field does not exist.";

/// HSET command - Set fields in the hash stored at key
///
/// Syntax: HSET key field value [field value ...]
pub struct HSetCommand;

impl Command for HSetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult {
        if args.len() < 3 {
            return Err(EngineError::wrong_arity(self.name()));
        }

        let key = args[0].clone();

        // Field/value tokens pair left to right; a trailing field with no
        // value is dropped
        let elements = &args[1..];
        let pairs = elements.len() / 2;

        // The type check happens before any field is written
        if ctx.store.get(&key).is_none() {
            ctx.store.set(key.clone(), Value::empty_hash());
        }
        let hash = ctx
            .store
            .get_mut(&key)
            .and_then(Value::as_hash_mut)
            .ok_or(EngineError::TypeMismatch)?;

        for pair in elements.chunks_exact(2) {
            hash.insert(pair[0].clone(), pair[1].clone());
        }

        Ok(Reply::integer(pairs as i64))
    }

    fn name(&self) -> &'static str {
        "HSET"
    }

    fn description(&self) -> &'static str {
        HSET_DOC
    }

    fn min_args(&self) -> usize {
        3
    }
}

/// HGET command - Get the value of a hash field
///
/// Syntax: HGET key field
pub struct HGetCommand;

impl Command for HGetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult {
        if args.len() != 2 {
            return Err(EngineError::wrong_arity(self.name()));
        }

        match ctx.store.get(&args[0]) {
            Some(value) => {
                let hash = value.as_hash().ok_or(EngineError::TypeMismatch)?;
                Ok(hash
                    .get(&args[1])
                    .map(|v| Reply::Bulk(v.clone()))
                    .unwrap_or(Reply::Nil))
            }
            None => Ok(Reply::Nil),
        }
    }

    fn name(&self) -> &'static str {
        "HGET"
    }

    fn description(&self) -> &'static str {
        HGET_DOC
    }

    fn min_args(&self) -> usize {
        2
    }

    fn max_args(&self) -> Option<usize> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<Bytes> {
        parts
            .iter()
            .map(|p| Bytes::copy_from_slice(p.as_bytes()))
            .collect()
    }

    #[test]
    fn test_hset_hget_roundtrip() {
        let mut ctx = CommandContext::new();

        let result = HSetCommand.execute(&mut ctx, &argv(&["h", "f1", "v1", "f2", "v2"]));
        assert_eq!(result, Ok(Reply::integer(2)));

        let result = HGetCommand.execute(&mut ctx, &argv(&["h", "f1"]));
        assert_eq!(result, Ok(Reply::bulk("v1")));

        let result = HGetCommand.execute(&mut ctx, &argv(&["h", "f2"]));
        assert_eq!(result, Ok(Reply::bulk("v2")));
    }

    #[test]
    fn test_hset_drops_trailing_field() {
        let mut ctx = CommandContext::new();

        // The unmatched trailing field is ignored and only one pair counts
        let result = HSetCommand.execute(&mut ctx, &argv(&["h", "f1", "v1", "f2"]));
        assert_eq!(result, Ok(Reply::integer(1)));

        let result = HGetCommand.execute(&mut ctx, &argv(&["h", "f1"]));
        assert_eq!(result, Ok(Reply::bulk("v1")));

        let result = HGetCommand.execute(&mut ctx, &argv(&["h", "f2"]));
        assert_eq!(result, Ok(Reply::Nil));
    }

    #[test]
    fn test_hset_counts_pairs_processed_not_new_fields() {
        let mut ctx = CommandContext::new();
        HSetCommand
            .execute(&mut ctx, &argv(&["h", "f1", "v1"]))
            .unwrap();

        // Overwriting an existing field still counts the pair
        let result = HSetCommand.execute(&mut ctx, &argv(&["h", "f1", "v2"]));
        assert_eq!(result, Ok(Reply::integer(1)));

        let result = HGetCommand.execute(&mut ctx, &argv(&["h", "f1"]));
        assert_eq!(result, Ok(Reply::bulk("v2")));
    }

    #[test]
    fn test_hset_too_few_args() {
        let mut ctx = CommandContext::new();
        let result = HSetCommand.execute(&mut ctx, &argv(&["h", "f1"]));
        assert!(matches!(result, Err(EngineError::WrongArity { .. })));
    }

    #[test]
    fn test_hset_wrong_type_leaves_value() {
        let mut ctx = CommandContext::new();
        ctx.store.set("a", Value::string("1"));

        let result = HSetCommand.execute(&mut ctx, &argv(&["a", "f", "v"]));
        assert_eq!(result, Err(EngineError::TypeMismatch));
        assert_eq!(ctx.store.get(&Bytes::from("a")), Some(&Value::string("1")));
    }

    #[test]
    fn test_hget_missing_key_and_field() {
        let mut ctx = CommandContext::new();

        let result = HGetCommand.execute(&mut ctx, &argv(&["nope", "f"]));
        assert_eq!(result, Ok(Reply::Nil));

        HSetCommand
            .execute(&mut ctx, &argv(&["h", "f1", "v1"]))
            .unwrap();
        let result = HGetCommand.execute(&mut ctx, &argv(&["h", "other"]));
        assert_eq!(result, Ok(Reply::Nil));
    }

    #[test]
    fn test_hget_wrong_type() {
        let mut ctx = CommandContext::new();
        ctx.store.set("a", Value::string("1"));

        let result = HGetCommand.execute(&mut ctx, &argv(&["a", "f"]));
        assert_eq!(result, Err(EngineError::TypeMismatch));
    }
}
