use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::{ConfigError, PreconditionError, SessionError, SubmitError, ValidationError};

pub type CommandResult = Result<(), CommandError>;

/// Fatal shell errors that end the process.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Per-command failures. These are reported and the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Rejected(#[from] ValidationError),
    #[error("ledger contract violated: {0}")]
    Integration(#[from] PreconditionError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<SubmitError> for CommandError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::Rejected(err) => CommandError::Rejected(err),
            SubmitError::Integration(err) => CommandError::Integration(err),
        }
    }
}
