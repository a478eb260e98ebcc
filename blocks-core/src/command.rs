//! Command line parsing.
//!
//! ```text
//! move <a> onto <b>
//! move <a> over <b>
//! pile <a> onto <b>
//! pile <a> over <b>
//! quit
//! ```
//!
//! Checks run in a fixed order: token count, numeric operands, operand range,
//! then the verb/preposition pair. The first failing check is reported.

use thiserror::Error;

use crate::{Block, Operator};

/// A parsed input line.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// End the session.
    Quit,
    /// Run one operator on two blocks.
    Apply { op: Operator, a: Block, b: Block },
}

/// Why an input line was refused. The message is shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("wrong number of parameters (expected 4, got {found}), try again")]
    WrongArity { found: usize },

    #[error("the second and fourth arguments must be numbers (got `{0}`), try again")]
    NotANumber(String),

    #[error("the second and fourth arguments must be >= 0 and < {blocks} (got `{value}`), try again")]
    OutOfRange { value: String, blocks: usize },

    #[error("unknown command `{verb} <a> {preposition} <b>`, try again")]
    UnknownCommand { verb: String, preposition: String },
}

impl Command {
    /// Parse one line against a world of `blocks` blocks.
    pub fn parse(line: &str, blocks: usize) -> Result<Command, CommandError> {
        let line = line.trim();
        if line == "quit" {
            return Ok(Command::Quit);
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let [verb, a, preposition, b] = words[..] else {
            return Err(CommandError::WrongArity { found: words.len() });
        };

        for operand in [a, b] {
            if !is_number(operand) {
                return Err(CommandError::NotANumber(operand.to_string()));
            }
        }
        let a = parse_operand(a, blocks)?;
        let b = parse_operand(b, blocks)?;

        let op = Operator::from_words(verb, preposition).ok_or_else(|| {
            CommandError::UnknownCommand {
                verb: verb.to_string(),
                preposition: preposition.to_string(),
            }
        })?;

        Ok(Command::Apply { op, a, b })
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Quit => write!(f, "quit"),
            Command::Apply { op, a, b } => {
                let (verb, preposition) = op.words();
                write!(f, "{} {} {} {}", verb, a, preposition, b)
            }
        }
    }
}

/// Plain decimal digits only: no sign, no whitespace.
fn is_number(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|c| c.is_ascii_digit())
}

/// Digits that overflow `usize` are out of range like any other large value.
fn parse_operand(word: &str, blocks: usize) -> Result<Block, CommandError> {
    match word.parse::<usize>() {
        Ok(value) if value < blocks => Ok(Block(value)),
        _ => Err(CommandError::OutOfRange {
            value: word.to_string(),
            blocks,
        }),
    }
}
