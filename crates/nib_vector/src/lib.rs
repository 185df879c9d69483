//! Vector image model on top of [`nib_path`].
//!
//! A vector image is a root element carrying canvas and viewport sizes plus
//! a list of styled paths. Path data is parsed eagerly and whole-or-nothing
//! when a path is constructed, so an element either holds fully normalized
//! geometry or the constructor's error surfaces to the caller.

pub mod color;
pub mod style;

use nib_path::{NormalizedPath, ParseError, ParseOptions};
use tracing::debug;

pub use color::Color;
pub use style::{FillRule, LineCap, LineJoin, PathStyle};

/// One styled path: parsed geometry plus its drawing attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorPath {
    style: PathStyle,
    data: NormalizedPath,
    source: String,
}

impl VectorPath {
    /// Parse `data` and attach `style`. Fails without constructing anything
    /// if any part of the path data is invalid.
    pub fn new(data: &str, style: PathStyle) -> Result<Self, ParseError> {
        Self::with_options(data, style, ParseOptions::default())
    }

    pub fn with_options(
        data: &str,
        style: PathStyle,
        options: ParseOptions,
    ) -> Result<Self, ParseError> {
        let parsed = nib_path::parse_with(data, options)?;
        debug!(segments = parsed.len(), "parsed path element data");
        Ok(Self {
            style,
            data: parsed,
            source: data.to_owned(),
        })
    }

    pub fn style(&self) -> &PathStyle {
        &self.style
    }

    pub fn data(&self) -> &NormalizedPath {
        &self.data
    }

    /// The path data exactly as it was given to the constructor.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Root of a vector image: canvas geometry and the path list.
///
/// `width`/`height` size the image on the output canvas;
/// `viewport_width`/`viewport_height` define the coordinate space the path
/// data is authored in. The two are independent, so rendering scales the
/// viewport onto the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorElement {
    pub name: Option<String>,
    pub width: f32,
    pub height: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Whole-image alpha; multiplies with per-path alphas.
    pub alpha: f32,
    /// Whole-image recoloring, applied over every path's own colors.
    pub tint: Option<Color>,
    /// Mirror horizontally in right-to-left layouts.
    pub auto_mirrored: bool,
    pub paths: Vec<VectorPath>,
}

impl Default for VectorElement {
    fn default() -> Self {
        Self {
            name: None,
            width: 0.0,
            height: 0.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            alpha: 1.0,
            tint: None,
            auto_mirrored: false,
            paths: Vec::new(),
        }
    }
}

impl VectorElement {
    /// Scale factors from viewport coordinates to canvas coordinates.
    /// Zero viewport dimensions yield a zero scale, never a NaN.
    pub fn content_scale(&self) -> (f32, f32) {
        let sx = if self.viewport_width > 0.0 {
            self.width / self.viewport_width
        } else {
            0.0
        };
        let sy = if self.viewport_height > 0.0 {
            self.height / self.viewport_height
        } else {
            0.0
        };
        (sx, sy)
    }

    /// The alpha a path is drawn with: element alpha combined with the
    /// path's own stroke or fill alpha.
    pub fn effective_alpha(&self, path_alpha: f32) -> f32 {
        (self.alpha * path_alpha).clamp(0.0, 1.0)
    }
}
