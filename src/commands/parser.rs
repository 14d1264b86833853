//! Console command parsing
//!
//! Commands use the in-game developer syntax: `::name arg1 arg2`.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COMMAND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^::(\S+)(?:\s+(.*))?$").expect("command regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Lowercased command name
    pub name: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Usage: ::decant <doses>")]
    MissingArgument,
    #[error("Invalid amount of doses")]
    NotANumber(String),
    #[error("Amount of doses must be at least 1")]
    NotPositive(i32),
}

/// Split a console line into a command; `None` if it is not a `::` command
pub fn parse_command(input: &str) -> Option<Command> {
    let captures = COMMAND_RE.captures(input.trim())?;
    let name = captures.get(1)?.as_str().to_lowercase();
    let args = captures
        .get(2)
        .map(|m| m.as_str().split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    Some(Command { name, args })
}

/// Read the target dose count from the `decant` command's first argument
pub fn parse_target_doses(args: &[String]) -> Result<i32, CommandError> {
    let raw = args.first().ok_or(CommandError::MissingArgument)?;
    let doses: i32 = raw
        .parse()
        .map_err(|_| CommandError::NotANumber(raw.clone()))?;
    if doses <= 0 {
        return Err(CommandError::NotPositive(doses));
    }
    Ok(doses)
}
