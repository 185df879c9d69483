//! Command tokenizer: pairs command letters with their operand groups.
//!
//! The grammar lets a letter be elided when a command repeats (`L10,10
//! 20,20` is two line-tos). Rather than encoding that repetition into the
//! downstream passes, the tokenizer expands every complete operand group
//! into its own [`Command`], so the normalizer and the builder stay simple
//! linear consumers.

use smallvec::SmallVec;
use tracing::debug;

use crate::command::{Command, CommandKind};
use crate::error::ParseError;
use crate::lexer::NumberLexer;

/// How coordinate pairs beyond the first after `M`/`m` are read.
///
/// SVG itself treats them as implicit line-tos; some vector-drawable
/// dialects repeat the move instead, starting a new subpath per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveContinuation {
    /// Extra pairs draw lines (SVG semantics).
    #[default]
    ImplicitLine,
    /// Extra pairs repeat the move.
    RepeatMove,
}

/// Grammar policies the common path-data dialects leave open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Synthesize an absolute `M 0,0` when the data does not begin with a
    /// move-to, instead of rejecting it.
    pub implicit_move_to: bool,
    /// Reading of elided operand groups after a move command.
    pub move_continuation: MoveContinuation,
}

/// Scan the whole string into a flat, expanded command list.
pub fn tokenize(input: &str, options: ParseOptions) -> Result<Vec<Command>, ParseError> {
    let mut lexer = NumberLexer::new(input);
    let mut commands = Vec::new();

    // The first effective character must open a subpath.
    match lexer.peek_nondelim() {
        None => return Ok(commands),
        Some((b, offset)) if b != b'M' && b != b'm' => {
            if options.implicit_move_to {
                debug!(offset, "path data does not start with a move-to; synthesizing M 0,0");
                commands.push(Command::new(
                    CommandKind::MoveTo,
                    false,
                    SmallVec::from_slice(&[0.0, 0.0]),
                    offset,
                ));
            } else {
                return Err(ParseError::MissingMoveTo { offset });
            }
        }
        Some(_) => {}
    }

    while let Some((letter, offset)) = lexer.next_letter() {
        let Some((kind, relative)) = CommandKind::from_letter(letter) else {
            return Err(ParseError::UnknownCommand { letter, offset });
        };

        if kind == CommandKind::ClosePath {
            // Z takes no operands; anything before the next letter is a
            // syntax error, not an elided repeat. Lexing it tells a stray
            // number apart from a character outside the grammar.
            if lexer.peek_is_number() {
                if let Some(token) = lexer.next_token()? {
                    return Err(ParseError::TrailingNumber {
                        offset: token.span.start,
                    });
                }
            }
            commands.push(Command::new(kind, relative, SmallVec::new(), offset));
            continue;
        }

        let arity = kind.arity();
        let mut first = true;
        // One iteration per operand group; groups after the first come from
        // the elided-repeat shorthand.
        loop {
            if !first && !lexer.peek_is_number() {
                break;
            }

            let mut operands: SmallVec<[f32; 7]> = SmallVec::new();
            let mut group_offset = offset;
            for found in 0..arity {
                match lexer.next_token()? {
                    Some(token) => {
                        if found == 0 && !first {
                            group_offset = token.span.start;
                        }
                        operands.push(token.value);
                    }
                    None => {
                        return Err(ParseError::MissingOperands {
                            command: letter,
                            offset,
                            expected: arity,
                            found,
                        });
                    }
                }
            }

            let group_kind = if first || kind != CommandKind::MoveTo {
                kind
            } else {
                match options.move_continuation {
                    MoveContinuation::ImplicitLine => CommandKind::LineTo,
                    MoveContinuation::RepeatMove => CommandKind::MoveTo,
                }
            };
            commands.push(Command::new(group_kind, relative, operands, group_offset));
            first = false;
        }
    }

    // A command letter consumes everything up to the next letter, so
    // leftover input here is either a number with no command to attach to
    // (reachable when a move was synthesized for data that opens with a
    // digit) or a character the lexer rejects. Neither may pass silently:
    // the caller gets the whole path or an error.
    if let Some(token) = lexer.next_token()? {
        return Err(ParseError::UnexpectedNumber {
            offset: token.span.start,
        });
    }

    debug!(commands = commands.len(), "tokenized path data");
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize_default(input: &str) -> Result<Vec<Command>, ParseError> {
        tokenize(input, ParseOptions::default())
    }

    #[test]
    fn test_basic_commands() {
        let cmds = tokenize_default("M0,0L10,10").unwrap();
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].kind, CommandKind::MoveTo);
        assert!(!cmds[0].relative);
        assert_eq!(cmds[0].operands.as_slice(), &[0.0, 0.0]);
        assert_eq!(cmds[1].kind, CommandKind::LineTo);
        assert_eq!(cmds[1].operands.as_slice(), &[10.0, 10.0]);
    }

    #[test]
    fn test_relative_flag_from_case() {
        let cmds = tokenize_default("m1,1l2,2").unwrap();
        assert!(cmds[0].relative);
        assert!(cmds[1].relative);
    }

    #[test]
    fn test_elided_repeat_expansion() {
        let cmds = tokenize_default("M0,0L10,10 20,20 30,30").unwrap();
        assert_eq!(cmds.len(), 4);
        for cmd in &cmds[1..] {
            assert_eq!(cmd.kind, CommandKind::LineTo);
            assert_eq!(cmd.operands.len(), 2);
        }
        assert_eq!(cmds[3].operands.as_slice(), &[30.0, 30.0]);
    }

    #[test]
    fn test_move_continuation_implicit_line() {
        let cmds = tokenize_default("M0,0 10,10 20,20").unwrap();
        assert_eq!(cmds[0].kind, CommandKind::MoveTo);
        assert_eq!(cmds[1].kind, CommandKind::LineTo);
        assert_eq!(cmds[2].kind, CommandKind::LineTo);
    }

    #[test]
    fn test_move_continuation_repeat_move() {
        let options = ParseOptions {
            move_continuation: MoveContinuation::RepeatMove,
            ..ParseOptions::default()
        };
        let cmds = tokenize("M0,0 10,10", options).unwrap();
        assert_eq!(cmds[1].kind, CommandKind::MoveTo);
    }

    #[test]
    fn test_missing_move_to_rejected() {
        match tokenize_default("L5,5") {
            Err(ParseError::MissingMoveTo { offset: 0 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_move_to_synthesized() {
        let options = ParseOptions {
            implicit_move_to: true,
            ..ParseOptions::default()
        };
        let cmds = tokenize("L5,5", options).unwrap();
        assert_eq!(cmds[0].kind, CommandKind::MoveTo);
        assert_eq!(cmds[0].operands.as_slice(), &[0.0, 0.0]);
        assert_eq!(cmds[1].kind, CommandKind::LineTo);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize_default("").unwrap().is_empty());
        assert!(tokenize_default("  \t\n ").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_letter() {
        match tokenize_default("M0,0X1") {
            Err(ParseError::UnknownCommand { letter: 'X', offset: 4 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_partial_group_at_end() {
        match tokenize_default("M0,0L10") {
            Err(ParseError::MissingOperands {
                command: 'L',
                expected: 2,
                found: 1,
                ..
            }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_close_path_takes_no_operands() {
        let cmds = tokenize_default("M0,0L1,1Z").unwrap();
        assert_eq!(cmds[2].kind, CommandKind::ClosePath);
        assert!(cmds[2].operands.is_empty());

        match tokenize_default("M0,0Z5") {
            Err(ParseError::TrailingNumber { offset: 5 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_close_then_more_commands() {
        let cmds = tokenize_default("M0,0L1,1Z L5,5").unwrap();
        assert_eq!(cmds.len(), 4);
        assert_eq!(cmds[3].kind, CommandKind::LineTo);
    }

    #[test]
    fn test_arc_arity() {
        let cmds = tokenize_default("M0,0A25,25 -30 0 1 50,-25").unwrap();
        assert_eq!(cmds[1].kind, CommandKind::EllipticalArcTo);
        assert_eq!(
            cmds[1].operands.as_slice(),
            &[25.0, 25.0, -30.0, 0.0, 1.0, 50.0, -25.0]
        );
    }

    #[test]
    fn test_implicit_separators_inside_group() {
        let cmds = tokenize_default("M0,0L-5-5").unwrap();
        assert_eq!(cmds[1].operands.as_slice(), &[-5.0, -5.0]);

        let cmds = tokenize_default("M0,0 .5.6").unwrap();
        assert_eq!(cmds[1].kind, CommandKind::LineTo);
        assert_eq!(cmds[1].operands.as_slice(), &[0.5, 0.6]);
    }

    #[test]
    fn test_group_offsets_point_into_source() {
        let input = "M0,0L10,10 20,20";
        let cmds = tokenize_default(input).unwrap();
        assert_eq!(cmds[0].offset, 0);
        assert_eq!(cmds[1].offset, 4);
        // Second group's offset is its first operand, not the letter.
        assert_eq!(cmds[2].offset, 11);
    }

    #[test]
    fn test_stray_character_after_commands() {
        assert!(tokenize_default("M0,0 #").is_err());
    }

    #[test]
    fn test_leading_numbers_reject_even_with_synthesized_move() {
        let options = ParseOptions {
            implicit_move_to: true,
            ..ParseOptions::default()
        };
        // The synthesized move must not swallow data that never names a
        // command; nothing of the input survives.
        match tokenize("5,5L1,1", options) {
            Err(ParseError::UnexpectedNumber { offset: 0 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_garbage_after_close_is_a_lex_error() {
        match tokenize_default("M0,0Z#") {
            Err(ParseError::Lex(err)) => {
                assert_eq!(err.text, "#");
                assert_eq!(err.offset, 5);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
