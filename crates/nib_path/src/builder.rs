//! Walks the normalized command stream and assembles absolute segments.

use tracing::debug;

use crate::arc::{self, ArcParameters, ArcSolution};
use crate::command::{Command, CommandKind};
use crate::error::ParseError;
use crate::segment::{NormalizedPath, Segment};

/// The builder's working state: current point and the start of the open
/// subpath (where `Z` returns to).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CursorState {
    x: f32,
    y: f32,
    start_x: f32,
    start_y: f32,
}

impl CursorState {
    fn resolve(&self, relative: bool, x: f32, y: f32) -> (f32, f32) {
        if relative {
            (self.x + x, self.y + y)
        } else {
            (x, y)
        }
    }
}

/// Assemble a segment list from a normalized (shorthand-free) command
/// stream.
///
/// The stream must begin with a move-to; the tokenizer guarantees that for
/// streams it produced.
pub fn build_path(commands: &[Command]) -> Result<NormalizedPath, ParseError> {
    let mut path = NormalizedPath::default();
    let mut cursor = CursorState::default();

    for (index, cmd) in commands.iter().enumerate() {
        if index == 0 && cmd.kind != CommandKind::MoveTo {
            return Err(ParseError::MissingMoveTo { offset: cmd.offset });
        }

        let ops = &cmd.operands;
        match cmd.kind {
            CommandKind::MoveTo => {
                let (x, y) = cursor.resolve(cmd.relative, ops[0], ops[1]);
                path.push(Segment::MoveTo { x, y });
                cursor = CursorState {
                    x,
                    y,
                    start_x: x,
                    start_y: y,
                };
            }
            CommandKind::LineTo => {
                let (x, y) = cursor.resolve(cmd.relative, ops[0], ops[1]);
                path.push(Segment::LineTo { x, y });
                cursor.x = x;
                cursor.y = y;
            }
            CommandKind::HorizontalLineTo => {
                let x = if cmd.relative { cursor.x + ops[0] } else { ops[0] };
                path.push(Segment::LineTo { x, y: cursor.y });
                cursor.x = x;
            }
            CommandKind::VerticalLineTo => {
                let y = if cmd.relative { cursor.y + ops[0] } else { ops[0] };
                path.push(Segment::LineTo { x: cursor.x, y });
                cursor.y = y;
            }
            CommandKind::QuadraticCurveTo => {
                let (cx, cy) = cursor.resolve(cmd.relative, ops[0], ops[1]);
                let (x, y) = cursor.resolve(cmd.relative, ops[2], ops[3]);
                path.push(Segment::QuadTo { cx, cy, x, y });
                cursor.x = x;
                cursor.y = y;
            }
            CommandKind::CubicCurveTo => {
                let (c1x, c1y) = cursor.resolve(cmd.relative, ops[0], ops[1]);
                let (c2x, c2y) = cursor.resolve(cmd.relative, ops[2], ops[3]);
                let (x, y) = cursor.resolve(cmd.relative, ops[4], ops[5]);
                path.push(Segment::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                });
                cursor.x = x;
                cursor.y = y;
            }
            CommandKind::EllipticalArcTo => {
                let (x2, y2) = cursor.resolve(cmd.relative, ops[5], ops[6]);
                let params = ArcParameters {
                    x1: cursor.x as f64,
                    y1: cursor.y as f64,
                    rx: ops[0] as f64,
                    ry: ops[1] as f64,
                    // Wire form carries the rotation in degrees.
                    phi: (ops[2] as f64).to_radians(),
                    large_arc: ops[3] != 0.0,
                    sweep: ops[4] != 0.0,
                    x2: x2 as f64,
                    y2: y2 as f64,
                };
                match arc::endpoint_to_center(&params) {
                    Ok(ArcSolution::Center(c)) => {
                        path.push(Segment::ArcTo {
                            cx: c.cx as f32,
                            cy: c.cy as f32,
                            rx: c.rx as f32,
                            ry: c.ry as f32,
                            rotation: c.phi as f32,
                            start_angle: c.start_angle as f32,
                            sweep_angle: c.sweep_angle as f32,
                        });
                    }
                    Ok(ArcSolution::Line) => {
                        debug!(
                            offset = cmd.offset,
                            "degenerate arc radius; drawing a straight line"
                        );
                        path.push(Segment::LineTo { x: x2, y: y2 });
                    }
                    Err(_) => {
                        return Err(ParseError::ZeroLengthArc { offset: cmd.offset });
                    }
                }
                cursor.x = x2;
                cursor.y = y2;
            }
            CommandKind::ClosePath => {
                path.push(Segment::ClosePath);
                cursor.x = cursor.start_x;
                cursor.y = cursor.start_y;
            }
            CommandKind::SmoothQuadraticCurveTo | CommandKind::SmoothCubicCurveTo => {
                return Err(ParseError::UnnormalizedSmooth { offset: cmd.offset });
            }
        }
    }

    Ok(path)
}
