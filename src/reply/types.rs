//! Reply and failure types

use bytes::Bytes;
use std::fmt;

/// Structured success result of a command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Status text rendered verbatim ("OK", HELP output)
    Simple(String),

    /// String payload
    Bulk(Bytes),

    /// Integer result (lengths, counts)
    Integer(i64),

    /// The nil value
    Nil,

    /// Ordered list of results, 1-indexed for presentation
    Array(Vec<Reply>),

    /// Explicit empty-result marker
    EmptyArray,
}

impl Reply {
    /// The standard acknowledgment
    pub fn ok() -> Self {
        Reply::Simple("OK".to_string())
    }

    /// Create a status reply
    pub fn simple(s: impl Into<String>) -> Self {
        Reply::Simple(s.into())
    }

    /// Create a string payload reply
    pub fn bulk(b: impl Into<Bytes>) -> Self {
        Reply::Bulk(b.into())
    }

    /// Create an integer reply
    pub fn integer(i: i64) -> Self {
        Reply::Integer(i)
    }

    /// Create an array reply, collapsing to the empty-array marker
    pub fn list(items: Vec<Reply>) -> Self {
        if items.is_empty() {
            Reply::EmptyArray
        } else {
            Reply::Array(items)
        }
    }
}

/// Structured non-success result of a command
///
/// One kind per situation; every failure is recovered at the per-command
/// boundary and never leaves a partial write behind.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Command name not in the table; carries the name and arguments
    UnknownCommand { name: String, args: Vec<String> },

    /// Too few or too many arguments for the resolved command
    WrongArity { command: String },

    /// Option grammar violated
    Syntax,

    /// The key's stored variant does not match what the command requires
    TypeMismatch,

    /// A numeric argument fails the accepted integer grammar
    NotAnInteger,

    /// A syntactically valid number outside the operation's domain
    OutOfRange,

    /// Unexpected internal condition, normalized instead of panicking
    Internal(String),
}

impl EngineError {
    /// Build an unknown-command failure echoing the raw arguments
    pub fn unknown_command(name: impl Into<String>, args: &[Bytes]) -> Self {
        EngineError::UnknownCommand {
            name: name.into(),
            args: args
                .iter()
                .map(|a| String::from_utf8_lossy(a).into_owned())
                .collect(),
        }
    }

    /// Build an arity failure for the named command
    pub fn wrong_arity(command: &str) -> Self {
        EngineError::WrongArity {
            command: command.to_lowercase(),
        }
    }

    /// Normalize an unexpected internal condition
    pub fn internal(msg: impl Into<String>) -> Self {
        EngineError::Internal(msg.into())
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownCommand { name, args } => {
                let echoed = args
                    .iter()
                    .map(|a| format!("'{}'", a))
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(
                    f,
                    "ERR unknown command '{}', with args beginning with: {}",
                    name, echoed
                )
            }
            EngineError::WrongArity { command } => {
                write!(f, "ERR wrong number of arguments for '{}' command", command)
            }
            EngineError::Syntax => write!(f, "ERR syntax error"),
            EngineError::TypeMismatch => write!(
                f,
                "WRONGTYPE Operation against a key holding the wrong kind of value"
            ),
            EngineError::NotAnInteger => {
                write!(f, "ERR value is not an integer or out of range")
            }
            EngineError::OutOfRange => {
                write!(f, "ERR value is out of range, must be positive")
            }
            EngineError::Internal(msg) => write!(f, "ERR internal error: {}", msg),
        }
    }
}

impl std::error::Error for EngineError {}

/// Result of a command execution
pub type EngineResult = Result<Reply, EngineError>;
