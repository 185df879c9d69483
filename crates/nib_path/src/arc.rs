//! Elliptical arc endpoint-to-center conversion.
//!
//! Path data describes an arc by its two endpoints, radii, x-axis rotation
//! and two choice flags; rasterizers want a center, a start angle and a
//! sweep. This module implements the standard conversion (SVG
//! implementation notes F.6.5, with the F.6.6 out-of-range radius
//! correction). All arithmetic is in `f64`; the rest of the engine works
//! in `f32` and converts at the boundary.

use std::f64::consts::{PI, TAU};

use thiserror::Error;

/// Endpoint parameterization, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParameters {
    pub x1: f64,
    pub y1: f64,
    pub rx: f64,
    pub ry: f64,
    /// X-axis rotation in radians.
    pub phi: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub x2: f64,
    pub y2: f64,
}

/// Center parameterization produced by the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCenterForm {
    pub cx: f64,
    pub cy: f64,
    /// Radii after out-of-range correction; may exceed the input radii.
    pub rx: f64,
    pub ry: f64,
    /// X-axis rotation in radians, unchanged from the input.
    pub phi: f64,
    pub start_angle: f64,
    /// Signed sweep: positive clockwise, negative counter-clockwise,
    /// in `(-2π, 2π)`.
    pub sweep_angle: f64,
    /// `start_angle + sweep_angle`, normalized into `[0, 2π)`.
    pub end_angle: f64,
}

impl ArcCenterForm {
    /// Evaluate the arc's ellipse at `angle` (center parameterization,
    /// radians), yielding an absolute point.
    pub fn point_at(&self, angle: f64) -> (f64, f64) {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_a, cos_a) = angle.sin_cos();
        (
            self.cx + self.rx * cos_a * cos_phi - self.ry * sin_a * sin_phi,
            self.cy + self.rx * cos_a * sin_phi + self.ry * sin_a * cos_phi,
        )
    }
}

/// What the solver decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcSolution {
    Center(ArcCenterForm),
    /// A zero radius collapses the arc; the caller draws a straight line
    /// to the endpoint instead. This is a designed fallback, not an error.
    Line,
}

/// The arc's endpoints coincide, so no unique center exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("arc endpoints coincide; no unique center exists")]
pub struct ZeroLengthChord;

/// Convert an endpoint-parameterized arc to center form.
pub fn endpoint_to_center(p: &ArcParameters) -> Result<ArcSolution, ZeroLengthChord> {
    if p.rx == 0.0 || p.ry == 0.0 {
        return Ok(ArcSolution::Line);
    }
    let mut rx = p.rx.abs();
    let mut ry = p.ry.abs();

    let (sin_phi, cos_phi) = p.phi.sin_cos();
    let hd_x = (p.x1 - p.x2) / 2.0;
    let hd_y = (p.y1 - p.y2) / 2.0;
    let hs_x = (p.x1 + p.x2) / 2.0;
    let hs_y = (p.y1 + p.y2) / 2.0;

    // F.6.5.1: half-chord rotated into the ellipse's own frame.
    let x1p = cos_phi * hd_x + sin_phi * hd_y;
    let y1p = cos_phi * hd_y - sin_phi * hd_x;

    // F.6.6: radii too small to span the endpoints are scaled up until
    // they just fit.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let scale = lambda.sqrt();
        rx *= scale;
        ry *= scale;
    }

    let rxy1 = rx * y1p;
    let ryx1 = ry * x1p;
    let sum_sq = rxy1 * rxy1 + ryx1 * ryx1;
    if sum_sq == 0.0 {
        return Err(ZeroLengthChord);
    }

    // Floating error can push the radicand slightly negative when the
    // radii exactly fit; clamp instead of propagating NaN.
    let radicand = ((rx * ry) * (rx * ry) - sum_sq) / sum_sq;
    let mut coe = radicand.max(0.0).sqrt();
    if p.large_arc == p.sweep {
        coe = -coe;
    }

    // F.6.5.2/3: center in the ellipse frame, then rotated back out.
    let cxp = coe * rxy1 / ry;
    let cyp = -coe * ryx1 / rx;
    let cx = cos_phi * cxp - sin_phi * cyp + hs_x;
    let cy = sin_phi * cxp + cos_phi * cyp + hs_y;

    // F.6.5.5/6: start angle from the unit x-axis, sweep between the two
    // endpoint vectors.
    let ux = (x1p - cxp) / rx;
    let uy = (y1p - cyp) / ry;
    let vx = (-x1p - cxp) / rx;
    let vy = (-y1p - cyp) / ry;

    let start_angle = vector_angle(1.0, 0.0, ux, uy);
    let mut sweep_angle = vector_angle(ux, uy, vx, vy).rem_euclid(TAU);
    if !p.sweep {
        sweep_angle -= TAU;
    }
    let end_angle = (start_angle + sweep_angle).rem_euclid(TAU);

    Ok(ArcSolution::Center(ArcCenterForm {
        cx,
        cy,
        rx,
        ry,
        phi: p.phi,
        start_angle,
        sweep_angle,
        end_angle,
    }))
}

/// Signed angle from vector `u` to vector `v`, in `(-π, π]`.
fn vector_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let dot = ux * vx + uy * vy;
    let len = ((ux * ux + uy * uy) * (vx * vx + vy * vy)).sqrt();
    // Clamp: rounding can push |dot/len| past 1 and acos to NaN.
    let mut angle = (dot / len).clamp(-1.0, 1.0).acos();
    if ux * vy - uy * vx < 0.0 {
        angle = -angle;
    }
    angle
}
