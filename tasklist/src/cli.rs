//! Command-line input parsing for the REPL binding.
//!
//! Parse failures are reported to the user and never reach the store; the
//! store's own contract stays error-free.

use thiserror::Error;

/// One line of user input, parsed
///
/// Indices are the 1-based display numbers from the rendered snapshot;
/// resolving them against the snapshot happens in the binding, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Add a new task with the given raw title
    Add(String),
    /// Toggle the completed flag of the task at a display index
    Toggle(usize),
    /// Open an inline edit for the task at a display index
    Edit(usize),
    /// Commit the open edit, optionally replacing the draft first
    Save(Option<String>),
    /// Discard the open edit
    Cancel,
    /// Remove the task at a display index
    Remove(usize),
    /// Clear all completed tasks
    Clear,
    /// Re-render the current snapshot
    List,
    /// Show the command reference
    Help,
    /// Leave the REPL
    Quit,
}

/// Errors for malformed REPL input
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The line was empty or whitespace
    #[error("empty input")]
    Empty,

    /// The first word is not a known command
    #[error("unknown command `{0}`, type `help` for the command list")]
    UnknownCommand(String),

    /// The command requires an argument that was not given
    #[error("`{command}` needs {what}")]
    MissingArgument {
        /// The command that was invoked
        command: &'static str,
        /// Description of the missing argument
        what: &'static str,
    },

    /// The argument is not a positive task number
    #[error("`{0}` is not a valid task number")]
    InvalidIndex(String),
}

/// Command reference printed by `help`
pub const HELP: &str = "Commands:
  add <title>     add a new task
  toggle <n>      flip the completed flag of task n
  edit <n>        start editing task n
  save [title]    commit the edit (optionally with a new title)
  cancel          discard the edit
  rm <n>          remove task n
  clear           remove all completed tasks
  list            show the task list
  help            show this reference
  quit            exit";

/// Parse one line of user input
///
/// # Errors
///
/// Returns a [`ParseError`] when the line is empty, names an unknown
/// command, or is missing/malforming an argument.
pub fn parse(line: &str) -> Result<Input, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "add" | "a" => {
            if rest.is_empty() {
                Err(ParseError::MissingArgument {
                    command: "add",
                    what: "a title",
                })
            } else {
                Ok(Input::Add(rest.to_string()))
            }
        }
        "toggle" | "t" => parse_index("toggle", rest).map(Input::Toggle),
        "edit" | "e" => parse_index("edit", rest).map(Input::Edit),
        "save" | "s" => {
            if rest.is_empty() {
                Ok(Input::Save(None))
            } else {
                Ok(Input::Save(Some(rest.to_string())))
            }
        }
        "cancel" => Ok(Input::Cancel),
        "rm" | "remove" | "delete" => parse_index("rm", rest).map(Input::Remove),
        "clear" => Ok(Input::Clear),
        "list" | "ls" => Ok(Input::List),
        "help" | "h" | "?" => Ok(Input::Help),
        "quit" | "q" | "exit" => Ok(Input::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_index(command: &'static str, rest: &str) -> Result<usize, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            what: "a task number",
        });
    }
    match rest.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidIndex(rest.to_string())),
    }
}
