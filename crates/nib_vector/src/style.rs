//! Per-path drawing attributes.

use crate::color::Color;

/// How stroke ends are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// How stroke corners are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Which interior regions a fill covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Drawing attributes of one path element.
///
/// Defaults mirror the vector-drawable attribute defaults: no stroke, no
/// fill (both transparent), full alpha, untrimmed. A path whose stroke and
/// fill are both transparent draws nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStyle {
    pub name: Option<String>,
    pub stroke_width: f32,
    pub stroke_color: Color,
    pub stroke_alpha: f32,
    pub fill_color: Color,
    pub fill_alpha: f32,
    pub fill_rule: FillRule,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub miter_limit: f32,
    /// Fraction of the path length where drawing starts, in `[0, 1]`.
    pub trim_start: f32,
    /// Fraction of the path length where drawing ends, in `[0, 1]`.
    pub trim_end: f32,
    /// Offset applied to both trim fractions, wrapping around.
    pub trim_offset: f32,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            name: None,
            stroke_width: 0.0,
            stroke_color: Color::TRANSPARENT,
            stroke_alpha: 1.0,
            fill_color: Color::TRANSPARENT,
            fill_alpha: 1.0,
            fill_rule: FillRule::default(),
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            miter_limit: 4.0,
            trim_start: 0.0,
            trim_end: 1.0,
            trim_offset: 0.0,
        }
    }
}

impl PathStyle {
    /// Whether the path's outline is drawn.
    pub fn has_stroke(&self) -> bool {
        self.stroke_width > 0.0 && self.stroke_color.is_visible() && self.stroke_alpha > 0.0
    }

    /// Whether the path's interior is drawn.
    pub fn has_fill(&self) -> bool {
        self.fill_color.is_visible() && self.fill_alpha > 0.0
    }
}
