//! Path-data parsing and normalization.
//!
//! Takes an SVG/vector-drawable path-data string (`"M0,0 L10,10 ..."`)
//! through three passes and hands back a flat list of absolute,
//! shorthand-free segments a rendering backend can consume directly:
//!
//! 1. [`tokenizer`] — lexes numbers with the grammar's implicit-separator
//!    rules and expands elided command repeats into explicit commands.
//! 2. [`normalize`] — rewrites the smooth shorthands `T`/`S` into plain
//!    `Q`/`C` by reflecting the previous curve's control point.
//! 3. [`builder`] — resolves relative coordinates against a cursor and
//!    converts elliptical arcs from endpoint to center parameterization.
//!
//! ```
//! use nib_path::{parse, Segment};
//!
//! let path = parse("M0,0 L10,10").unwrap();
//! assert_eq!(
//!     path.segments(),
//!     &[
//!         Segment::MoveTo { x: 0.0, y: 0.0 },
//!         Segment::LineTo { x: 10.0, y: 10.0 },
//!     ]
//! );
//! ```
//!
//! Grammar corners that dialects disagree on (paths that do not open with
//! a move-to, coordinate pairs after the first following `M`) are policy
//! knobs on [`ParseOptions`]; see [`parse_with`].

pub mod arc;
pub mod builder;
pub mod command;
pub mod error;
pub mod lexer;
pub mod normalize;
pub mod segment;
pub mod tokenizer;

pub use command::{Command, CommandKind};
pub use error::{LexError, ParseError};
pub use segment::{NormalizedPath, Segment};
pub use tokenizer::{MoveContinuation, ParseOptions};

/// Parse path data with default policies (strict leading move-to,
/// SVG-style implicit line-to continuation).
pub fn parse(input: &str) -> Result<NormalizedPath, ParseError> {
    parse_with(input, ParseOptions::default())
}

/// Parse path data under explicit grammar policies.
pub fn parse_with(input: &str, options: ParseOptions) -> Result<NormalizedPath, ParseError> {
    let commands = tokenizer::tokenize(input, options)?;
    let commands = normalize::normalize(commands);
    builder::build_path(&commands)
}
