//! Command selection
//!
//! Turns the positional tokens `[COMMAND] [TAG] [NOTE...]` into an
//! [`Invocation`].

use std::fmt;

use crate::consts::ALL_TAGS;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    /// Start a timer for a tag
    Start,
    /// Stop the running timer of a tag
    Stop,
    /// Attach a note to the running timer of a tag
    Note,
    /// Print recorded intervals
    Show,
}

impl Command {
    fn parse(name: &str) -> Result<Self, AppError> {
        match name {
            "start" => Ok(Command::Start),
            "stop" => Ok(Command::Stop),
            "show" => Ok(Command::Show),
            "note" => Ok(Command::Note),
            _ => Err(AppError::InvalidCommand),
        }
    }

    /// Whether the command changes the store and has to be saved afterwards
    pub(crate) fn persists(self) -> bool {
        !matches!(self, Command::Show)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Note => "note",
            Command::Show => "show",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub(crate) command: Command,
    pub(crate) tag: String,
    /// Note text, only set for [`Command::Note`]
    pub(crate) note: Option<String>,
}

impl Invocation {
    /// Build an invocation from the arguments following the program name.
    ///
    /// No tokens means `show all`. A missing tag is an error for every
    /// command except `show`, and it takes precedence over a missing note.
    pub(crate) fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, AppError> {
        let Some(first) = tokens.first() else {
            return Ok(Invocation {
                command: Command::Show,
                tag: ALL_TAGS.to_string(),
                note: None,
            });
        };

        let command = Command::parse(first.as_ref())?;

        let tag = match (tokens.get(1), command) {
            (Some(tag), _) => tag.as_ref().to_string(),
            (None, Command::Show) => ALL_TAGS.to_string(),
            (None, _) => return Err(AppError::MissingTag),
        };

        let note = match command {
            Command::Note if tokens.len() < 3 => return Err(AppError::MissingNote),
            Command::Note => Some(
                tokens[2..]
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<&str>>()
                    .join(" "),
            ),
            _ => None,
        };

        Ok(Invocation { command, tag, note })
    }
}
