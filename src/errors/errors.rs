use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

use crate::Span;

/// A lexical diagnostic: what went wrong and which source bytes it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: LexError,
    position: Span,
}

impl Error {
    pub fn new(error_impl: LexError, position: Span) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Span {
        &self.position
    }

    pub fn get_kind(&self) -> LexError {
        self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            LexError::UnterminatedString => "UnterminatedString",
            LexError::UnterminatedChar => "UnterminatedChar",
            LexError::UnrecognisedCharacter => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            LexError::UnterminatedString => ErrorTip::Suggestion(String::from(
                "close the literal with `\"` before the end of the line",
            )),
            LexError::UnterminatedChar => ErrorTip::Suggestion(String::from(
                "a char literal holds exactly one character or escape sequence",
            )),
            LexError::UnrecognisedCharacter => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}",
            self.internal_error, self.position.start, self.position.end
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Reason carried by an error token. The messages are the text placed in the
/// token itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexError {
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated char literal")]
    UnterminatedChar,
    #[error("Unrecognised character")]
    UnrecognisedCharacter,
}

/// Failures of the surrounding program: reading sources, loading config,
/// writing reports.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
