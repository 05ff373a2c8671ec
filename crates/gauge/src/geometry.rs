//! Dial geometry: angle mapping and point placement.

use std::f64::consts::PI;

/// Output image width in pixels.
pub const WIDTH: u32 = 700;
/// Output image height in pixels.
pub const HEIGHT: u32 = 400;

/// Lower end of the gauge domain.
pub const MIN_BMI: f64 = 10.0;
/// Upper end of the gauge domain.
pub const MAX_BMI: f64 = 40.0;

/// Dial center. Sits near the bottom edge so the half circle fills
/// the frame, leaving headroom for the title.
pub(crate) const CENTER_X: f64 = 350.0;
pub(crate) const CENTER_Y: f64 = 350.0;

/// Ring radii. The band ring occupies the outer quarter of the dial,
/// the needle reaches the outer edge.
pub(crate) const OUTER_RADIUS: f64 = 270.0;
pub(crate) const INNER_RADIUS: f64 = 200.0;

/// Maps a BMI value linearly from [`MIN_BMI`, `MAX_BMI`] onto [0, π].
///
/// Deliberately not clamped: out-of-domain values extrapolate past the
/// visible arc, matching the needle falling off the dial.
pub fn needle_angle(bmi: f64) -> f64 {
    (bmi - MIN_BMI) / (MAX_BMI - MIN_BMI) * PI
}

/// Converts a dial angle and radius to pixel coordinates.
///
/// Angle 0 points at the left end of the half circle, π at the right,
/// sweeping over the top.
pub(crate) fn point_at(angle: f64, radius: f64) -> (f32, f32) {
    let x = CENTER_X - radius * angle.cos();
    let y = CENTER_Y - radius * angle.sin();
    (x as f32, y as f32)
}
