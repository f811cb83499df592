//! Interactive session front-end
//!
//! A line-oriented read loop over the engine: tokenize user input, execute
//! through the dispatcher, render the reply or failure. All command
//! semantics live behind the dispatcher; this module only does text.

use crate::dispatch::Dispatcher;
use crate::reply::{render_error, render_reply};
use anyhow::Result;
use bytes::Bytes;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Split an input line into a command name and raw argument tokens.
///
/// Returns None for blank lines. Tokens are split on whitespace; there is
/// no quoting or escaping.
pub(crate) fn split_line(line: &str) -> Option<(&str, Vec<Bytes>)> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?;
    let args = parts
        .map(|token| Bytes::copy_from_slice(token.as_bytes()))
        .collect();
    Some((name, args))
}

fn print_banner() {
    println!("------------------------------------------------------");
    println!("                     CobaltDB CLI                     ");
    println!("------------------------------------------------------");
    println!("Enter HELP to see all commands with descriptions");
    println!("Enter HELP <command> to see a description of a command");
    println!("Enter QUIT to terminate the session");
    println!("------------------------------------------------------");
}

/// Run the interactive session until QUIT/END or end of input
pub async fn run(dispatcher: &mut Dispatcher) -> Result<()> {
    print_banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while dispatcher.is_active() {
        print!("command> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // end of input closes the session
        };
        let Some((name, args)) = split_line(&line) else {
            continue;
        };

        match dispatcher.execute(name, &args) {
            Ok(reply) => println!("{}", render_reply(&reply)),
            Err(err) => println!("{}", render_error(&err)),
        }
    }

    info!("Session closed");
    Ok(())
}
