//! Commands understood by the interactive form session.

use thiserror::Error;

use crate::request::{Field, InputError};

pub const HELP: &str = "\
Commands:
  show                   list the current input values
  set <field> <value>    change one input (e.g. `set budget 2000000`)
  reset                  restore the default inputs
  compute                compute the optimal production plan (alias: run)
  help                   show this message
  quit                   leave the session (alias: exit)

Fields: capacity, budget, cost-sweet, cost-plain, min-sweet, min-plain";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Show,
    Set(Field, f64),
    Reset,
    Compute,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    #[error("unknown command {0:?}, type `help` for a list")]
    Unknown(String),

    #[error("unknown field {0:?}")]
    UnknownField(String),

    #[error("usage: set <field> <value>")]
    SetUsage,

    #[error("`{0}` takes no arguments")]
    UnexpectedArguments(&'static str),

    #[error(transparent)]
    Input(#[from] InputError),
}

impl Command {
    /// Parses one line of input. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let bare = |command: Command, name: &'static str| {
            if rest.is_empty() {
                Ok(Some(command))
            } else {
                Err(CommandError::UnexpectedArguments(name))
            }
        };

        match head.to_ascii_lowercase().as_str() {
            "show" => bare(Command::Show, "show"),
            "reset" => bare(Command::Reset, "reset"),
            "compute" | "run" => bare(Command::Compute, "compute"),
            "help" | "?" => bare(Command::Help, "help"),
            "quit" | "exit" => bare(Command::Quit, "quit"),
            "set" => {
                let [name, value] = rest.as_slice() else {
                    return Err(CommandError::SetUsage);
                };
                let field = Field::from_name(name)
                    .ok_or_else(|| CommandError::UnknownField(name.to_string()))?;
                Ok(Some(Command::Set(field, field.parse(value)?)))
            }
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}
