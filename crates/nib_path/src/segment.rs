//! Normalized, backend-ready path segments.

use std::f32::consts::PI;

use smallvec::SmallVec;

use crate::arc::ArcCenterForm;

/// One absolute-coordinate drawing instruction.
///
/// Every segment other than the opening move-to has a well-defined
/// predecessor end point; a rasterizer can consume the list without any
/// grammar knowledge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo {
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    QuadTo {
        cx: f32,
        cy: f32,
        x: f32,
        y: f32,
    },
    CubicTo {
        c1x: f32,
        c1y: f32,
        c2x: f32,
        c2y: f32,
        x: f32,
        y: f32,
    },
    /// Center-parameterized elliptical arc. `rotation` and the angles are
    /// in radians; `sweep_angle` is signed (negative counter-clockwise).
    ArcTo {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        rotation: f32,
        start_angle: f32,
        sweep_angle: f32,
    },
    ClosePath,
}

/// An ordered sequence of [`Segment`]s with absolute coordinates.
///
/// Append-only while the builder runs, immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedPath {
    segments: SmallVec<[Segment; 16]>,
}

impl NormalizedPath {
    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Re-serialize into an absolute, shorthand-free path-data string.
    ///
    /// Arcs are converted back to endpoint parameterization. Parsing the
    /// result reproduces this path within floating tolerance.
    pub fn to_path_data(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match *segment {
                Segment::MoveTo { x, y } => out.push_str(&format!("M{x} {y}")),
                Segment::LineTo { x, y } => out.push_str(&format!("L{x} {y}")),
                Segment::QuadTo { cx, cy, x, y } => {
                    out.push_str(&format!("Q{cx} {cy} {x} {y}"));
                }
                Segment::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => {
                    out.push_str(&format!("C{c1x} {c1y} {c2x} {c2y} {x} {y}"));
                }
                Segment::ArcTo {
                    cx,
                    cy,
                    rx,
                    ry,
                    rotation,
                    start_angle,
                    sweep_angle,
                } => {
                    let form = ArcCenterForm {
                        cx: cx as f64,
                        cy: cy as f64,
                        rx: rx as f64,
                        ry: ry as f64,
                        phi: rotation as f64,
                        start_angle: start_angle as f64,
                        sweep_angle: sweep_angle as f64,
                        end_angle: 0.0,
                    };
                    let (x2, y2) = form.point_at(form.start_angle + form.sweep_angle);
                    let large_arc = sweep_angle.abs() > PI;
                    let sweep = sweep_angle > 0.0;
                    out.push_str(&format!(
                        "A{rx} {ry} {} {} {} {} {}",
                        rotation.to_degrees(),
                        u8::from(large_arc),
                        u8::from(sweep),
                        x2 as f32,
                        y2 as f32,
                    ));
                }
                Segment::ClosePath => out.push('Z'),
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a NormalizedPath {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_serialize_lines_and_close() {
        let path = parse("M0,0 L10,10 Z").unwrap();
        assert_eq!(path.to_path_data(), "M0 0L10 10Z");
    }

    #[test]
    fn test_serialize_is_absolute_and_shorthand_free() {
        let path = parse("m1,1 l1,0 t1,1 s1,0 2,1").unwrap();
        let data = path.to_path_data();
        for c in data.chars().filter(|c| c.is_ascii_alphabetic()) {
            assert!(matches!(c, 'M' | 'L' | 'Q' | 'C' | 'A' | 'Z'), "letter {c}");
        }
    }

    #[test]
    fn test_empty_path_serializes_empty() {
        let path = parse("").unwrap();
        assert!(path.is_empty());
        assert_eq!(path.to_path_data(), "");
    }

    fn assert_paths_close(a: &NormalizedPath, b: &NormalizedPath) {
        assert_eq!(a.len(), b.len());
        for (left, right) in a.iter().zip(b.iter()) {
            match (*left, *right) {
                (
                    Segment::ArcTo {
                        cx,
                        cy,
                        rx,
                        ry,
                        rotation,
                        start_angle,
                        sweep_angle,
                    },
                    Segment::ArcTo {
                        cx: cx2,
                        cy: cy2,
                        rx: rx2,
                        ry: ry2,
                        rotation: rot2,
                        start_angle: start2,
                        sweep_angle: sweep2,
                    },
                ) => {
                    for (u, v) in [
                        (cx, cx2),
                        (cy, cy2),
                        (rx, rx2),
                        (ry, ry2),
                        (rotation, rot2),
                        (start_angle, start2),
                        (sweep_angle, sweep2),
                    ] {
                        assert!((u - v).abs() < 1e-3, "{u} vs {v} in {left:?} / {right:?}");
                    }
                }
                (l, r) => assert_eq!(l, r),
            }
        }
    }

    #[test]
    fn test_reparse_round_trip() {
        let path = parse("M0,0 L10,0 Q15,5 10,10 C5,15 0,15 0,10 Z").unwrap();
        let reparsed = parse(&path.to_path_data()).unwrap();
        assert_eq!(path, reparsed);
    }

    #[test]
    fn test_reparse_round_trip_with_arcs() {
        let path = parse("M0,0 A50,25 30 1 0 80,10 L90,90").unwrap();
        let reparsed = parse(&path.to_path_data()).unwrap();
        assert_paths_close(&path, &reparsed);

        // And the canonical form is a fixed point from then on.
        let again = parse(&reparsed.to_path_data()).unwrap();
        assert_paths_close(&reparsed, &again);
    }
}
