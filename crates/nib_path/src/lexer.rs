//! Number lexer for the path-data grammar.
//!
//! Path data elides separators aggressively: a sign or a decimal point can
//! begin a new number with nothing in between, so `1.5.6` is `1.5` followed
//! by `0.6` and `-5-5` is `-5` followed by `-5`. The lexer resolves those
//! implicit-separator rules and hands finished tokens to the command
//! tokenizer, which owns the letters.

use std::ops::Range;

use tracing::trace;

use crate::error::LexError;

/// A floating-point operand together with the byte span it was scanned from.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericToken {
    pub value: f32,
    pub span: Range<usize>,
}

/// Scans numeric operands out of a path-data string.
///
/// One lexer is created per parse call. It owns the cursor over the input
/// and a local accumulation buffer, so concurrent parses never share
/// scratch state.
#[derive(Debug)]
pub struct NumberLexer<'a> {
    input: &'a [u8],
    pos: usize,
    buf: String,
}

fn is_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b',')
}

impl<'a> NumberLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            buf: String::new(),
        }
    }

    /// Current byte offset of the cursor.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Skip runs of explicit delimiters (whitespace and commas).
    pub fn skip_delimiters(&mut self) {
        while self.pos < self.input.len() && is_delimiter(self.input[self.pos]) {
            self.pos += 1;
        }
    }

    /// The next non-delimiter byte and its offset, without consuming it.
    pub fn peek_nondelim(&self) -> Option<(u8, usize)> {
        let mut p = self.pos;
        while p < self.input.len() && is_delimiter(self.input[p]) {
            p += 1;
        }
        self.input.get(p).map(|&b| (b, p))
    }

    /// True when only delimiters remain.
    pub fn is_at_end(&self) -> bool {
        self.peek_nondelim().is_none()
    }

    /// True when the next non-delimiter byte starts a number rather than a
    /// command letter.
    pub fn peek_is_number(&self) -> bool {
        matches!(self.peek_nondelim(), Some((b, _)) if !b.is_ascii_alphabetic())
    }

    /// Consume the next command letter, if one is next.
    pub fn next_letter(&mut self) -> Option<(char, usize)> {
        self.skip_delimiters();
        let &b = self.input.get(self.pos)?;
        if b.is_ascii_alphabetic() {
            let offset = self.pos;
            self.pos += 1;
            Some((b as char, offset))
        } else {
            None
        }
    }

    /// Produce the next numeric token.
    ///
    /// Returns `Ok(None)` when the next character is a command letter or
    /// the input is exhausted; the tokenizer decides whether that is legal.
    pub fn next_token(&mut self) -> Result<Option<NumericToken>, LexError> {
        self.skip_delimiters();
        let Some(&first) = self.input.get(self.pos) else {
            return Ok(None);
        };
        if first.is_ascii_alphabetic() {
            return Ok(None);
        }

        let start = self.pos;
        self.buf.clear();
        let mut has_dot = false;
        let mut in_exponent = false;
        // A sign directly after `e`/`E` belongs to the exponent, not to a
        // new token.
        let mut exponent_sign_ok = false;

        while let Some(&b) = self.input.get(self.pos) {
            match b {
                b'0'..=b'9' => {
                    self.buf.push(b as char);
                    self.pos += 1;
                    exponent_sign_ok = false;
                }
                b'+' | b'-' => {
                    if self.buf.is_empty() || exponent_sign_ok {
                        self.buf.push(b as char);
                        self.pos += 1;
                        exponent_sign_ok = false;
                    } else {
                        // Implicit separator: the sign starts the next token.
                        break;
                    }
                }
                b'.' => {
                    if has_dot || in_exponent {
                        // Implicit separator: `.` after a recorded decimal
                        // point opens the next token with its omitted
                        // leading zero.
                        break;
                    }
                    has_dot = true;
                    self.buf.push('.');
                    self.pos += 1;
                    exponent_sign_ok = false;
                }
                b'e' | b'E' => {
                    if in_exponent || self.buf.is_empty() {
                        break;
                    }
                    in_exponent = true;
                    exponent_sign_ok = true;
                    self.buf.push(b as char);
                    self.pos += 1;
                }
                _ => break,
            }
        }

        if self.buf.is_empty() {
            // Neither a number nor a letter; a character outside the grammar.
            self.pos += 1;
            return Err(LexError {
                text: (first as char).to_string(),
                offset: start,
            });
        }

        let value: f32 = self.buf.parse().map_err(|_| LexError {
            text: self.buf.clone(),
            offset: start,
        })?;
        if !value.is_finite() {
            return Err(LexError {
                text: self.buf.clone(),
                offset: start,
            });
        }

        trace!(value, start, end = self.pos, "lexed number");
        Ok(Some(NumericToken {
            value,
            span: start..self.pos,
        }))
    }
}
