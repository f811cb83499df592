//! List commands (LPUSH, LPOP, LRANGE)

use super::{Command, CommandContext, parse_integer, parse_unsigned};
use crate::reply::{EngineError, EngineResult, Reply};
use crate::store::Value;
use bytes::Bytes;

pub(crate) const LPUSH_DOC: &str = "  Insert all the specified elements at the head of the list stored at key,\n  creating the list when the key does not exist. Reports the new length.";

pub(crate) const LPOP_DOC: &str = "  Remove and return the first elements of the list stored at key. With the\n  optional count, up to count elements are returned as a list.";

pub(crate) const LRANGE_DOC: &str = "  Return the elements of the list between the zero-based offsets start and\n  stop, inclusive. Negative offsets count from the end of the list.";

/// LPUSH command - Prepend one or multiple elements to a list
///
/// Syntax: LPUSH key element [element ...]
pub struct LPushCommand;

impl Command for LPushCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult {
        if args.len() < 2 {
            return Err(EngineError::wrong_arity(self.name()));
        }

        let key = args[0].clone();

        // The type check happens before any element is inserted
        if ctx.store.get(&key).is_none() {
            ctx.store.set(key.clone(), Value::empty_list());
        }
        let list = ctx
            .store
            .get_mut(&key)
            .and_then(Value::as_list_mut)
            .ok_or(EngineError::TypeMismatch)?;

        // Each successive element lands at the very front, so arguments
        // a b c end up in head order c b a
        for element in &args[1..] {
            list.push_front(element.clone());
        }

        Ok(Reply::integer(list.len() as i64))
    }

    fn name(&self) -> &'static str {
        "LPUSH"
    }

    fn description(&self) -> &'static str {
        LPUSH_DOC
    }

    fn min_args(&self) -> usize {
        2
    }
}

/// LPOP command - Remove and return elements from the head of a list
///
/// Syntax: LPOP key [count]
pub struct LPopCommand;

impl Command for LPopCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult {
        if args.is_empty() || args.len() > 2 {
            return Err(EngineError::wrong_arity(self.name()));
        }

        let key = &args[0];
        let count_given = args.len() == 2;
        let count = if count_given {
            parse_unsigned(&args[1]).map_err(|_| EngineError::OutOfRange)? as usize
        } else {
            1
        };

        let Some(value) = ctx.store.get_mut(key) else {
            // Absent key: nil for the single-element form, the empty array
            // with an explicit count
            return Ok(if count_given {
                Reply::EmptyArray
            } else {
                Reply::Nil
            });
        };
        let list = value.as_list_mut().ok_or(EngineError::TypeMismatch)?;

        let take = count.min(list.len());
        let popped: Vec<Bytes> = list.drain(..take).collect();

        // An emptied list does not linger as an empty container
        if list.is_empty() {
            ctx.store.delete(key);
        }

        if count_given {
            Ok(Reply::list(popped.into_iter().map(Reply::Bulk).collect()))
        } else {
            Ok(popped
                .into_iter()
                .next()
                .map(Reply::Bulk)
                .unwrap_or(Reply::Nil))
        }
    }

    fn name(&self) -> &'static str {
        "LPOP"
    }

    fn description(&self) -> &'static str {
        LPOP_DOC
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(2)
    }
}

/// LRANGE command - Get a range of elements from a list
///
/// Syntax: LRANGE key start stop
pub struct LRangeCommand;

impl Command for LRangeCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult {
        if args.len() != 3 {
            return Err(EngineError::wrong_arity(self.name()));
        }

        let start = parse_integer(&args[1])?;
        let stop = parse_integer(&args[2])?;

        let Some(value) = ctx.store.get(&args[0]) else {
            return Ok(Reply::EmptyArray);
        };
        let list = value.as_list().ok_or(EngineError::TypeMismatch)?;

        let len = list.len() as i64;
        if start >= len {
            return Ok(Reply::EmptyArray);
        }

        // Negative offsets count from the end; both bounds then clamp
        // into [0, len-1]
        let start = if start < 0 { (start + len).max(0) } else { start };
        let stop = if stop < 0 {
            (stop + len).max(0)
        } else {
            stop.min(len - 1)
        };
        if start > stop {
            return Ok(Reply::EmptyArray);
        }

        let items = list
            .iter()
            .skip(start as usize)
            .take((stop - start + 1) as usize)
            .map(|element| Reply::Bulk(element.clone()))
            .collect();

        Ok(Reply::list(items))
    }

    fn name(&self) -> &'static str {
        "LRANGE"
    }

    fn description(&self) -> &'static str {
        LRANGE_DOC
    }

    fn min_args(&self) -> usize {
        3
    }

    fn max_args(&self) -> Option<usize> {
        Some(3)
    }
}
