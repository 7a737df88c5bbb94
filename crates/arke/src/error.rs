// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The arke authors

//! Error types for each layer of the library.
//!
//! Tokenizer errors nest inside parser errors, and everything folds into
//! [`Error`] for callers that just want one type.

use std::path::PathBuf;

use thiserror::Error;

use crate::tokenizer::Position;

/// Errors raised while splitting zone text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// A newline appeared inside a quoted string.
    #[error("unexpected end of line in quoted string at {position}")]
    UnexpectedEol { position: Position },

    /// Input ended inside parentheses or a quoted string.
    #[error("unexpected end of file at {position} (open parentheses: {depth})")]
    UnexpectedEof { position: Position, depth: usize },

    /// A closing parenthesis with no matching opener.
    #[error("unbalanced parentheses at {position}")]
    UnbalancedParentheses { position: Position },
}

/// Errors raised while building records out of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error("unexpected end of line at {position}")]
    UnexpectedEol { position: Position },

    #[error("unexpected end of file at {position}")]
    UnexpectedEof { position: Position },

    #[error("unexpected token {token:?} at {position}")]
    UnexpectedToken { token: String, position: Position },

    #[error("missing required data ({field}) at {position}")]
    MissingData { field: String, position: Position },

    #[error("invalid TTL {value:?} at {position}")]
    InvalidTtl { value: String, position: Position },

    #[error("unsupported directive {directive} at {position}")]
    UnsupportedDirective { directive: String, position: Position },

    #[error("{source} at {position}")]
    Record {
        source: RecordError,
        position: Position,
    },

    #[error("{source} at {position}")]
    Domain {
        source: DomainError,
        position: Position,
    },
}

impl ParserError {
    /// Position of the token that caused the error.
    pub fn position(&self) -> Position {
        match self {
            ParserError::Tokenizer(TokenizerError::UnexpectedEol { position })
            | ParserError::Tokenizer(TokenizerError::UnexpectedEof { position, .. })
            | ParserError::Tokenizer(TokenizerError::UnbalancedParentheses { position })
            | ParserError::UnexpectedEol { position }
            | ParserError::UnexpectedEof { position }
            | ParserError::UnexpectedToken { position, .. }
            | ParserError::MissingData { position, .. }
            | ParserError::InvalidTtl { position, .. }
            | ParserError::UnsupportedDirective { position, .. }
            | ParserError::Record { position, .. }
            | ParserError::Domain { position, .. } => *position,
        }
    }
}

/// Errors raised when constructing a resource record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unknown RR type {0:?}: expected a mnemonic (e.g. A, MX) or TYPE###")]
    UnknownType(String),

    #[error("unknown RR class {0:?}: expected a mnemonic (e.g. IN, CH) or CLASS###")]
    UnknownClass(String),

    #[error("rrclass {class} not valid for RR type {rtype}")]
    InvalidClass { rtype: String, class: String },

    #[error("rdata field {0:?} is required")]
    MissingField(&'static str),
}

/// Errors raised by domain name validation and wire conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("label {label:?} is {len} octets (max 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("name is {len} octets in wire form (max 255)")]
    NameTooLong { len: usize },

    #[error("empty label in domain name")]
    EmptyLabel,

    #[error("invalid escape sequence {0:?}")]
    InvalidEscape(String),
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Parse { path: PathBuf, source: ParserError },

    #[error(transparent)]
    Syntax(#[from] ParserError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Missing or conflicting command-line input.
    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes of the `arke` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Everything parsed.
    Success = 0,
    /// A zone file, token stream, or name failed to parse or validate.
    Failure = 1,
    /// Bad arguments or configuration.
    Usage = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}
