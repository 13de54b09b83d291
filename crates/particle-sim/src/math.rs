//! Vector and matrix helpers for the 2D simulation
//!
//! Positions and velocities are `glam::Vec2`. Transforms are `glam::Mat4`
//! in glam's column-major, column-vector convention, so a particle transform
//! carries its translation in `w_axis`.

use glam::{Mat4, Vec2};

/// Unit vector pointing from the emitter origin to `position`
///
/// A particle sitting exactly on the origin has no radial direction and gets
/// a zero vector instead of NaN.
#[inline]
pub fn radial_unit(position: Vec2) -> Vec2 {
    position.normalize_or_zero()
}

/// Counter-clockwise perpendicular: `(x, y) -> (-y, x)`
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    v.perp()
}

/// Unit vector for an angle given in degrees
#[inline]
pub fn unit_from_degrees(degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(cos, sin)
}

/// Uniform-scale, rotate and translate a unit sprite in the XY plane
///
/// Columns are `(c*s, s*s, 0, 0)`, `(-s*s, c*s, 0, 0)`, `(0, 0, 1, 0)` and
/// `(x, y, 0, 1)`.
pub fn similarity_transform(rotation_degrees: f32, size: f32, position: Vec2) -> Mat4 {
    let (sin, cos) = rotation_degrees.to_radians().sin_cos();
    let c = cos * size;
    let s = sin * size;

    #[rustfmt::skip]
    let cols = [
        c,          s,          0.0, 0.0,
        -s,         c,          0.0, 0.0,
        0.0,        0.0,        1.0, 0.0,
        position.x, position.y, 0.0, 1.0,
    ];
    Mat4::from_cols_array(&cols)
}

/// Per-second rate of change across a lifetime
///
/// A zero lifetime yields no change rather than an infinity.
#[inline]
pub fn rate_over(delta: f32, lifetime: f32) -> f32 {
    if lifetime == 0.0 {
        0.0
    } else {
        delta / lifetime
    }
}

/// Seconds between spawns for an emission rate
///
/// Returns `None` when the emitter cannot spawn at all.
#[inline]
pub fn emission_period(emission_rate: f32) -> Option<f32> {
    if emission_rate > 0.0 && emission_rate.is_finite() {
        Some(1.0 / emission_rate)
    } else {
        None
    }
}
