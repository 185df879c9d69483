//! Raw path commands: a letter, its relativity, and one operand group.

use smallvec::SmallVec;

/// One letter-prefixed instruction scanned out of path data.
///
/// The tokenizer expands elided repeats, so a `Command` always carries
/// exactly one operand group. Commands are never mutated in place;
/// normalization produces new values.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub kind: CommandKind,
    /// Lower-case letters take operands relative to the current point.
    pub relative: bool,
    pub operands: SmallVec<[f32; 7]>,
    /// Byte offset of the command letter in the source string (for groups
    /// expanded out of an elided repeat, the offset of the group's first
    /// operand).
    pub offset: usize,
}

impl Command {
    pub fn new(kind: CommandKind, relative: bool, operands: SmallVec<[f32; 7]>, offset: usize) -> Self {
        Self {
            kind,
            relative,
            operands,
            offset,
        }
    }

    /// The command letter, cased by relativity.
    pub fn letter(&self) -> char {
        self.kind.letter(self.relative)
    }
}

/// The ten commands of the path-data grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicCurveTo,
    SmoothCubicCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    EllipticalArcTo,
    ClosePath,
}

impl CommandKind {
    /// Map a command letter to its kind and relativity. Returns `None` for
    /// letters outside the grammar.
    pub fn from_letter(c: char) -> Option<(CommandKind, bool)> {
        let kind = match c.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizontalLineTo,
            'V' => CommandKind::VerticalLineTo,
            'C' => CommandKind::CubicCurveTo,
            'S' => CommandKind::SmoothCubicCurveTo,
            'Q' => CommandKind::QuadraticCurveTo,
            'T' => CommandKind::SmoothQuadraticCurveTo,
            'A' => CommandKind::EllipticalArcTo,
            'Z' => CommandKind::ClosePath,
            _ => return None,
        };
        Some((kind, c.is_ascii_lowercase()))
    }

    /// Operand count of one parameter group.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticCurveTo => 2,
            CommandKind::QuadraticCurveTo | CommandKind::SmoothCubicCurveTo => 4,
            CommandKind::CubicCurveTo => 6,
            CommandKind::EllipticalArcTo => 7,
            CommandKind::ClosePath => 0,
        }
    }

    /// The upper-case letter of this kind, lower-cased when `relative`.
    pub fn letter(self, relative: bool) -> char {
        let upper = match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CubicCurveTo => 'C',
            CommandKind::SmoothCubicCurveTo => 'S',
            CommandKind::QuadraticCurveTo => 'Q',
            CommandKind::SmoothQuadraticCurveTo => 'T',
            CommandKind::EllipticalArcTo => 'A',
            CommandKind::ClosePath => 'Z',
        };
        if relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }
}

/// Minimal cursor for passes that only need to know where each command
/// ends: current point and the start of the open subpath.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
    pub start_x: f32,
    pub start_y: f32,
}

impl Cursor {
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Resolve an operand pair against the current point.
    pub fn resolve(&self, relative: bool, x: f32, y: f32) -> (f32, f32) {
        if relative {
            (self.x + x, self.y + y)
        } else {
            (x, y)
        }
    }

    /// Advance past `cmd`, updating the current point and subpath start.
    pub fn advance(&mut self, cmd: &Command) {
        let ops = &cmd.operands;
        match cmd.kind {
            CommandKind::MoveTo => {
                let (x, y) = self.resolve(cmd.relative, ops[0], ops[1]);
                self.x = x;
                self.y = y;
                self.start_x = x;
                self.start_y = y;
            }
            CommandKind::LineTo | CommandKind::SmoothQuadraticCurveTo => {
                let (x, y) = self.resolve(cmd.relative, ops[0], ops[1]);
                self.x = x;
                self.y = y;
            }
            CommandKind::HorizontalLineTo => {
                self.x = if cmd.relative { self.x + ops[0] } else { ops[0] };
            }
            CommandKind::VerticalLineTo => {
                self.y = if cmd.relative { self.y + ops[0] } else { ops[0] };
            }
            CommandKind::QuadraticCurveTo | CommandKind::SmoothCubicCurveTo => {
                let (x, y) = self.resolve(cmd.relative, ops[2], ops[3]);
                self.x = x;
                self.y = y;
            }
            CommandKind::CubicCurveTo => {
                let (x, y) = self.resolve(cmd.relative, ops[4], ops[5]);
                self.x = x;
                self.y = y;
            }
            CommandKind::EllipticalArcTo => {
                let (x, y) = self.resolve(cmd.relative, ops[5], ops[6]);
                self.x = x;
                self.y = y;
            }
            CommandKind::ClosePath => {
                self.x = self.start_x;
                self.y = self.start_y;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_letter_round_trip() {
        for c in "MmLlHhVvCcSsQqTtAaZz".chars() {
            let (kind, relative) = CommandKind::from_letter(c).unwrap();
            assert_eq!(kind.letter(relative), c);
        }
        assert!(CommandKind::from_letter('X').is_none());
        assert!(CommandKind::from_letter('e').is_none());
    }

    #[test]
    fn test_arity_table() {
        assert_eq!(CommandKind::HorizontalLineTo.arity(), 1);
        assert_eq!(CommandKind::VerticalLineTo.arity(), 1);
        assert_eq!(CommandKind::MoveTo.arity(), 2);
        assert_eq!(CommandKind::LineTo.arity(), 2);
        assert_eq!(CommandKind::SmoothQuadraticCurveTo.arity(), 2);
        assert_eq!(CommandKind::QuadraticCurveTo.arity(), 4);
        assert_eq!(CommandKind::SmoothCubicCurveTo.arity(), 4);
        assert_eq!(CommandKind::CubicCurveTo.arity(), 6);
        assert_eq!(CommandKind::EllipticalArcTo.arity(), 7);
        assert_eq!(CommandKind::ClosePath.arity(), 0);
    }

    #[test]
    fn test_cursor_close_returns_to_subpath_start() {
        let mut cursor = Cursor::default();
        cursor.advance(&Command::new(
            CommandKind::MoveTo,
            false,
            smallvec![3.0, 4.0],
            0,
        ));
        cursor.advance(&Command::new(
            CommandKind::LineTo,
            true,
            smallvec![10.0, 0.0],
            0,
        ));
        assert_eq!(cursor.position(), (13.0, 4.0));

        cursor.advance(&Command::new(CommandKind::ClosePath, false, smallvec![], 0));
        assert_eq!(cursor.position(), (3.0, 4.0));
    }

    #[test]
    fn test_cursor_axis_lines() {
        let mut cursor = Cursor::default();
        cursor.advance(&Command::new(
            CommandKind::MoveTo,
            false,
            smallvec![1.0, 2.0],
            0,
        ));
        cursor.advance(&Command::new(
            CommandKind::HorizontalLineTo,
            false,
            smallvec![9.0],
            0,
        ));
        assert_eq!(cursor.position(), (9.0, 2.0));
        cursor.advance(&Command::new(
            CommandKind::VerticalLineTo,
            true,
            smallvec![-2.0],
            0,
        ));
        assert_eq!(cursor.position(), (9.0, 0.0));
    }
}
