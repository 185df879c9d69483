//! Error types for path-data parsing.
//!
//! Parsing is whole-or-nothing: the first error abandons the entire path,
//! so a caller never renders truncated geometry.

use thiserror::Error;

/// A numeric token that could not be resolved into a finite value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed number `{text}` at offset {offset}")]
pub struct LexError {
    /// The offending substring, as scanned.
    pub text: String,
    /// Byte offset of the token start in the input.
    pub offset: usize,
}

/// Failure to turn a path-data string into a normalized path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("unknown command letter `{letter}` at offset {offset}")]
    UnknownCommand { letter: char, offset: usize },

    #[error(
        "command `{command}` at offset {offset} expects {expected} operands per group, found {found}"
    )]
    MissingOperands {
        command: char,
        offset: usize,
        expected: usize,
        found: usize,
    },

    #[error("path data must begin with a move-to command (offset {offset})")]
    MissingMoveTo { offset: usize },

    #[error("close-path must not carry operands (number at offset {offset})")]
    TrailingNumber { offset: usize },

    #[error("number at offset {offset} does not follow a command letter")]
    UnexpectedNumber { offset: usize },

    #[error("elliptical arc at offset {offset} has coincident endpoints; no unique center exists")]
    ZeroLengthArc { offset: usize },

    #[error("smooth command at offset {offset} reached the builder without being normalized")]
    UnnormalizedSmooth { offset: usize },
}
