// ABOUTME: Error types for the beamert application
// ABOUTME: Provides structured error handling for rendering, writing and compiling decks

use crate::diagnostics::Hint;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeamerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Title metadata mismatch: `{left}` has {left_len} entries but `{right}` has {right_len}"
    )]
    ValidationError {
        left: &'static str,
        right: &'static str,
        left_len: usize,
        right_len: usize,
    },

    #[error("File already exists and was not overwritten: {0}")]
    WriteConflict(PathBuf),

    #[error("External processor `{command}` failed (exit code {}): {}", display_code(.exit_code), display_hints(.hints))]
    ExternalProcessFailure {
        command: String,
        exit_code: Option<i32>,
        hints: Vec<Hint>,
    },

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),

    #[error("No template named \"{0}\"")]
    UnknownTemplate(String),

    #[error("Invalid processor command: {0:?}")]
    InvalidCommand(String),
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

fn display_hints(hints: &[Hint]) -> String {
    hints
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, BeamerError>;
