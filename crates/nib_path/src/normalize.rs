//! Shorthand curve rewriting.
//!
//! `T`/`t` and `S`/`s` take their first control point from a reflection of
//! the previous curve's control point about the current point. Rewriting
//! them into plain `Q`/`C` up front keeps the path builder free of any
//! look-behind. The pass is a single forward walk carrying the previous
//! *original* command kind and the last control point in absolute
//! coordinates, because consecutive shorthands chain their reflections.

use smallvec::{smallvec, SmallVec};

use crate::command::{Command, CommandKind, Cursor};

/// Rewrite smooth curve commands into their canonical forms.
///
/// The output stream contains only
/// {M, L, H, V, Q, C, A, Z}; relativity is preserved.
pub fn normalize(commands: Vec<Command>) -> Vec<Command> {
    let mut out = Vec::with_capacity(commands.len());
    let mut cursor = Cursor::default();
    // Absolute control point of the previous curve command. Meaningless
    // unless `prev_kind` is a curve; the reflection rule guards on that.
    let mut last_control = (0.0_f32, 0.0_f32);
    let mut prev_kind: Option<CommandKind> = None;

    for cmd in commands {
        let current = cursor.position();
        let original_kind = cmd.kind;
        let rewritten = match cmd.kind {
            CommandKind::SmoothQuadraticCurveTo => {
                let reflects = matches!(
                    prev_kind,
                    Some(CommandKind::QuadraticCurveTo | CommandKind::SmoothQuadraticCurveTo)
                );
                let control = reflect(reflects, current, last_control);
                let ops: SmallVec<[f32; 7]> = if cmd.relative {
                    smallvec![
                        control.0 - current.0,
                        control.1 - current.1,
                        cmd.operands[0],
                        cmd.operands[1],
                    ]
                } else {
                    smallvec![control.0, control.1, cmd.operands[0], cmd.operands[1]]
                };
                last_control = control;
                Command::new(CommandKind::QuadraticCurveTo, cmd.relative, ops, cmd.offset)
            }
            CommandKind::SmoothCubicCurveTo => {
                let reflects = matches!(
                    prev_kind,
                    Some(CommandKind::CubicCurveTo | CommandKind::SmoothCubicCurveTo)
                );
                let control = reflect(reflects, current, last_control);
                let second = cursor.resolve(cmd.relative, cmd.operands[0], cmd.operands[1]);
                let ops: SmallVec<[f32; 7]> = if cmd.relative {
                    smallvec![
                        control.0 - current.0,
                        control.1 - current.1,
                        cmd.operands[0],
                        cmd.operands[1],
                        cmd.operands[2],
                        cmd.operands[3],
                    ]
                } else {
                    smallvec![
                        control.0,
                        control.1,
                        cmd.operands[0],
                        cmd.operands[1],
                        cmd.operands[2],
                        cmd.operands[3],
                    ]
                };
                last_control = second;
                Command::new(CommandKind::CubicCurveTo, cmd.relative, ops, cmd.offset)
            }
            CommandKind::QuadraticCurveTo => {
                last_control = cursor.resolve(cmd.relative, cmd.operands[0], cmd.operands[1]);
                cmd
            }
            CommandKind::CubicCurveTo => {
                last_control = cursor.resolve(cmd.relative, cmd.operands[2], cmd.operands[3]);
                cmd
            }
            _ => cmd,
        };

        // The reflection rule keys on the *original* kind, not the
        // rewritten one, so chained shorthands keep reflecting.
        prev_kind = Some(original_kind);
        cursor.advance(&rewritten);
        out.push(rewritten);
    }
    out
}

fn reflect(reflects: bool, current: (f32, f32), control: (f32, f32)) -> (f32, f32) {
    if reflects {
        (2.0 * current.0 - control.0, 2.0 * current.1 - control.1)
    } else {
        current
    }
}
