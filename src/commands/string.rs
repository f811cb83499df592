//! String commands (SET, GET, MGET)

use super::{Command, CommandContext, parse_unsigned, token_str};
use crate::reply::{EngineError, EngineResult, Reply};
use crate::store::{epoch_seconds, Value};
use bytes::Bytes;

pub(crate) const SET_DOC: &str = "  Set key to hold the string value, discarding any previous time to live.\n  Options: [NX|XX] [GET] [EX seconds | PX milliseconds | EXAT unix-seconds |\n  PXAT unix-milliseconds | KEEPTTL].";

pub(crate) const GET_DOC: &str =
    "  Get the string value of key, or nil when the key does not exist.";

pub(crate) const MGET_DOC: &str = "  Get the values of all specified keys. Keys that are missing or do not\n  hold a string report nil, so the operation never fails.";

/// Existence restriction on the write (NX / XX)
enum ExistsCond {
    IfAbsent,
    IfPresent,
}

/// How the write treats the key's time to live
enum TtlRule {
    /// Expire at an absolute timestamp, epoch seconds
    ExpireAt(f64),
    /// KEEPTTL: leave whatever expiration the key already had
    Keep,
}

/// Parsed SET options
struct SetOptions {
    cond: Option<ExistsCond>,
    read_old: bool,
    ttl: Option<TtlRule>,
}

/// Parse the option tokens following `SET key value`.
///
/// At most one of NX/XX and at most one of the TTL group may appear; a
/// second token from either group, an unrecognized token, or a TTL option
/// missing its numeric argument is a syntax failure. EX/PX/EXAT/PXAT
/// arguments must be non-negative integers.
fn parse_set_options(opts: &[Bytes]) -> Result<SetOptions, EngineError> {
    let mut parsed = SetOptions {
        cond: None,
        read_old: false,
        ttl: None,
    };

    let mut iter = opts.iter();
    while let Some(token) = iter.next() {
        let option = token_str(token)?.to_uppercase();
        match option.as_str() {
            "NX" | "XX" => {
                if parsed.cond.is_some() {
                    return Err(EngineError::Syntax);
                }
                parsed.cond = Some(if option == "NX" {
                    ExistsCond::IfAbsent
                } else {
                    ExistsCond::IfPresent
                });
            }
            "GET" => {
                parsed.read_old = true;
            }
            "EX" | "PX" | "EXAT" | "PXAT" => {
                if parsed.ttl.is_some() {
                    return Err(EngineError::Syntax);
                }
                let raw = iter.next().ok_or(EngineError::Syntax)?;
                let n = parse_unsigned(raw)? as f64;
                let at = match option.as_str() {
                    "EX" => epoch_seconds() + n,
                    "PX" => epoch_seconds() + n / 1000.0,
                    "EXAT" => n,
                    _ => n / 1000.0, // PXAT
                };
                parsed.ttl = Some(TtlRule::ExpireAt(at));
            }
            "KEEPTTL" => {
                if parsed.ttl.is_some() {
                    return Err(EngineError::Syntax);
                }
                parsed.ttl = Some(TtlRule::Keep);
            }
            _ => return Err(EngineError::Syntax),
        }
    }

    Ok(parsed)
}

/// SET command - Set a key to a string value
///
/// Syntax: SET key value [NX|XX] [GET] [EX s|PX ms|EXAT ts|PXAT ts|KEEPTTL]
pub struct SetCommand;

impl Command for SetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult {
        if args.len() < 2 {
            return Err(EngineError::wrong_arity(self.name()));
        }

        let key = args[0].clone();
        let value = args[1].clone();

        // The whole option grammar is validated before any write
        let opts = parse_set_options(&args[2..])?;

        // GET captures the pre-write value and insists the key holds a string
        let prior = if opts.read_old {
            match ctx.store.get(&key) {
                Some(Value::String(b)) => Some(b.clone()),
                Some(_) => return Err(EngineError::TypeMismatch),
                None => None,
            }
        } else {
            None
        };

        // An unmet NX/XX restriction writes nothing and replies nil
        let met = match opts.cond {
            Some(ExistsCond::IfAbsent) => !ctx.store.contains(&key),
            Some(ExistsCond::IfPresent) => ctx.store.contains(&key),
            None => true,
        };
        if !met {
            return Ok(Reply::Nil);
        }

        ctx.store.set(key.clone(), Value::String(value));
        match opts.ttl {
            Some(TtlRule::ExpireAt(at)) => {
                ctx.store.set_expiration(&key, at);
            }
            Some(TtlRule::Keep) => {}
            None => {
                ctx.store.clear_expiration(&key);
            }
        }

        Ok(match prior {
            Some(old) => Reply::Bulk(old),
            None if opts.read_old => Reply::Nil,
            None => Reply::ok(),
        })
    }

    fn name(&self) -> &'static str {
        "SET"
    }

    fn description(&self) -> &'static str {
        SET_DOC
    }

    fn min_args(&self) -> usize {
        2
    }
}

/// GET command - Get the value of a key
///
/// Syntax: GET key
pub struct GetCommand;

impl Command for GetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult {
        if args.len() != 1 {
            return Err(EngineError::wrong_arity(self.name()));
        }

        match ctx.store.get(&args[0]) {
            Some(Value::String(b)) => Ok(Reply::Bulk(b.clone())),
            Some(_) => Err(EngineError::TypeMismatch),
            None => Ok(Reply::Nil),
        }
    }

    fn name(&self) -> &'static str {
        "GET"
    }

    fn description(&self) -> &'static str {
        GET_DOC
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

/// MGET command - Get the values of all specified keys
///
/// Syntax: MGET [key ...]
pub struct MGetCommand;

impl Command for MGetCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> EngineResult {
        let values = args
            .iter()
            .map(|key| match ctx.store.get(key) {
                Some(Value::String(b)) => Reply::Bulk(b.clone()),
                _ => Reply::Nil,
            })
            .collect();

        Ok(Reply::list(values))
    }

    fn name(&self) -> &'static str {
        "MGET"
    }

    fn description(&self) -> &'static str {
        MGET_DOC
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
    fn test_set_get_roundtrip() {
        let mut ctx = CommandContext::new();

        let result = SetCommand.execute(&mut ctx, &argv(&["a", "1"]));
        assert_eq!(result, Ok(Reply::ok()));

        let result = GetCommand.execute(&mut ctx, &argv(&["a"]));
        assert_eq!(result, Ok(Reply::bulk("1")));
    }

    #[test]
    fn test_get_missing_is_nil() {
        let mut ctx = CommandContext::new();
        let result = GetCommand.execute(&mut ctx, &argv(&["missing"]));
        assert_eq!(result, Ok(Reply::Nil));
    }

    #[test]
    fn test_get_wrong_type() {
        let mut ctx = CommandContext::new();
        ctx.store.set("l", Value::empty_list());

        let result = GetCommand.execute(&mut ctx, &argv(&["l"]));
        assert_eq!(result, Err(EngineError::TypeMismatch));
    }

    #[test]
    fn test_set_too_few_args() {
        let mut ctx = CommandContext::new();
        let result = SetCommand.execute(&mut ctx, &argv(&["a"]));
        assert!(matches!(result, Err(EngineError::WrongArity { .. })));
    }

    #[test]
    fn test_set_nx_xx_conflict() {
        let mut ctx = CommandContext::new();

        // The conflict fires whether or not the key exists
        let result = SetCommand.execute(&mut ctx, &argv(&["a", "1", "NX", "XX"]));
        assert_eq!(result, Err(EngineError::Syntax));

        SetCommand.execute(&mut ctx, &argv(&["a", "1"])).unwrap();
        let result = SetCommand.execute(&mut ctx, &argv(&["a", "2", "XX", "NX"]));
        assert_eq!(result, Err(EngineError::Syntax));
    }

    #[test]
    fn test_set_duplicate_ttl_option() {
        let mut ctx = CommandContext::new();
        let result = SetCommand.execute(&mut ctx, &argv(&["a", "1", "EX", "10", "KEEPTTL"]));
        assert_eq!(result, Err(EngineError::Syntax));
    }

    #[test]
    fn test_set_unknown_option() {
        let mut ctx = CommandContext::new();
        let result = SetCommand.execute(&mut ctx, &argv(&["a", "1", "BOGUS"]));
        assert_eq!(result, Err(EngineError::Syntax));
    }

    #[test]
    fn test_set_ttl_missing_argument() {
        let mut ctx = CommandContext::new();
        let result = SetCommand.execute(&mut ctx, &argv(&["a", "1", "EX"]));
        assert_eq!(result, Err(EngineError::Syntax));
    }

    #[test]
    fn test_set_ttl_bad_argument() {
        let mut ctx = CommandContext::new();

        let result = SetCommand.execute(&mut ctx, &argv(&["a", "1", "EX", "soon"]));
        assert_eq!(result, Err(EngineError::NotAnInteger));

        let result = SetCommand.execute(&mut ctx, &argv(&["a", "1", "PX", "-5"]));
        assert_eq!(result, Err(EngineError::NotAnInteger));

        // The failed command wrote nothing
        assert!(!ctx.store.contains(&Bytes::from("a")));
    }

    #[test]
    fn test_set_nx_on_existing_is_nil() {
        let mut ctx = CommandContext::new();
        SetCommand.execute(&mut ctx, &argv(&["a", "1"])).unwrap();

        let result = SetCommand.execute(&mut ctx, &argv(&["a", "2", "NX"]));
        assert_eq!(result, Ok(Reply::Nil));

        // Value untouched
        let result = GetCommand.execute(&mut ctx, &argv(&["a"]));
        assert_eq!(result, Ok(Reply::bulk("1")));
    }

    #[test]
    fn test_set_xx_on_missing_is_nil() {
        let mut ctx = CommandContext::new();

        let result = SetCommand.execute(&mut ctx, &argv(&["a", "1", "XX"]));
        assert_eq!(result, Ok(Reply::Nil));
        assert!(!ctx.store.contains(&Bytes::from("a")));
    }

    #[test]
    fn test_set_get_option_returns_prior() {
        let mut ctx = CommandContext::new();
        SetCommand.execute(&mut ctx, &argv(&["a", "old"])).unwrap();

        let result = SetCommand.execute(&mut ctx, &argv(&["a", "new", "GET"]));
        assert_eq!(result, Ok(Reply::bulk("old")));

        // GET on a fresh key replies nil but still writes
        let result = SetCommand.execute(&mut ctx, &argv(&["b", "1", "GET"]));
        assert_eq!(result, Ok(Reply::Nil));
        assert!(ctx.store.contains(&Bytes::from("b")));
    }

    #[test]
    fn test_set_get_option_wrong_type() {
        let mut ctx = CommandContext::new();
        ctx.store.set("l", Value::empty_list());

        let result = SetCommand.execute(&mut ctx, &argv(&["l", "v", "GET"]));
        assert_eq!(result, Err(EngineError::TypeMismatch));

        // Aborted before the write
        assert_eq!(ctx.store.get(&Bytes::from("l")), Some(&Value::empty_list()));
    }

    #[test]
    fn test_set_ex_attaches_expiration() {
        let mut ctx = CommandContext::new();
        SetCommand
            .execute(&mut ctx, &argv(&["a", "1", "EX", "100"]))
            .unwrap();

        let at = ctx.store.expiration(&Bytes::from("a")).unwrap();
        assert!(at > epoch_seconds());
    }

    #[test]
    fn test_set_exat_is_absolute() {
        let mut ctx = CommandContext::new();
        SetCommand
            .execute(&mut ctx, &argv(&["a", "1", "EXAT", "2000000000"]))
            .unwrap();

        assert_eq!(ctx.store.expiration(&Bytes::from("a")), Some(2_000_000_000.0));
    }

    #[test]
    fn test_set_pxat_scales_to_seconds() {
        let mut ctx = CommandContext::new();
        SetCommand
            .execute(&mut ctx, &argv(&["a", "1", "PXAT", "2000000000000"]))
            .unwrap();

        assert_eq!(ctx.store.expiration(&Bytes::from("a")), Some(2_000_000_000.0));
    }

    #[test]
    fn test_plain_set_discards_ttl() {
        let mut ctx = CommandContext::new();
        SetCommand
            .execute(&mut ctx, &argv(&["a", "1", "EX", "100"]))
            .unwrap();
        SetCommand.execute(&mut ctx, &argv(&["a", "2"])).unwrap();

        assert_eq!(ctx.store.expiration(&Bytes::from("a")), None);
    }

    #[test]
    fn test_set_keepttl_preserves_ttl() {
        let mut ctx = CommandContext::new();
        SetCommand
            .execute(&mut ctx, &argv(&["a", "1", "EXAT", "2000000000"]))
            .unwrap();
        SetCommand
            .execute(&mut ctx, &argv(&["a", "2", "KEEPTTL"]))
            .unwrap();

        assert_eq!(ctx.store.expiration(&Bytes::from("a")), Some(2_000_000_000.0));
        let result = GetCommand.execute(&mut ctx, &argv(&["a"]));
        assert_eq!(result, Ok(Reply::bulk("2")));
    }

    #[test]
    fn test_set_options_are_case_insensitive() {
        let mut ctx = CommandContext::new();
        let result = SetCommand.execute(&mut ctx, &argv(&["a", "1", "ex", "100", "nx"]));
        assert_eq!(result, Ok(Reply::ok()));
        assert!(ctx.store.expiration(&Bytes::from("a")).is_some());
    }

    #[test]
    fn test_mget_mixed_keys() {
        let mut ctx = CommandContext::new();
        SetCommand.execute(&mut ctx, &argv(&["a", "1"])).unwrap();
        ctx.store.set("l", Value::empty_list());

        let result = MGetCommand.execute(&mut ctx, &argv(&["a", "missing", "l"]));
        assert_eq!(
            result,
            Ok(Reply::Array(vec![Reply::bulk("1"), Reply::Nil, Reply::Nil]))
        );
    }

    #[test]
    fn test_mget_no_keys_is_empty_array() {
        let mut ctx = CommandContext::new();
        let result = MGetCommand.execute(&mut ctx, &[]);
        assert_eq!(result, Ok(Reply::EmptyArray));
    }
}
