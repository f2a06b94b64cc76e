//! Gradient noise generation.
//!
//! - [`ImprovedNoise`] - Improved Perlin noise generator with a grid populator
//!
//! The shared kernel math lives here: the gradient coefficient tables, the
//! quintic fade curve and linear interpolation. Everything is pure and
//! process-wide read-only; all per-seed state is owned by the generator value.

mod improved_noise;

pub use improved_noise::{ImprovedNoise, PopulateError};

/// X coefficients of the 16 canonical 3-D gradient directions.
///
/// The improved-noise formulation uses 12 directions (edge midpoints of a
/// cube), padded to 16 so a 4-bit hash can index them without a modulo.
pub(crate) const GRAD_X: [f64; 16] = [
    1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0,
];
/// Y coefficients of the 16 canonical 3-D gradient directions.
pub(crate) const GRAD_Y: [f64; 16] = [
    1.0, 1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0,
];
/// Z coefficients of the 16 canonical 3-D gradient directions.
pub(crate) const GRAD_Z: [f64; 16] = [
    0.0, 0.0, 0.0, 0.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 0.0, 1.0, 0.0, -1.0,
];
/// X coefficients used by the flat-slice path (y component dropped).
pub(crate) const GRAD_2D_X: [f64; 16] = [
    1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0,
];
/// Z coefficients used by the flat-slice path.
pub(crate) const GRAD_2D_Z: [f64; 16] = [
    0.0, 0.0, 0.0, 0.0, 1.0, 1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 0.0, 1.0, 0.0, -1.0,
];

/// Quintic smoothstep `t³(t(6t − 15) + 10)`.
///
/// Blends lattice-corner contributions without first- or second-derivative
/// discontinuities at integer coordinates.
#[inline]
#[must_use]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation `a + t(b − a)`; exact at `t = 0` and `t = 1`.
#[inline]
#[must_use]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Project a 2-D offset onto the gradient direction selected by `hash & 15`.
#[inline]
pub(crate) fn grad2(hash: i32, x: f64, z: f64) -> f64 {
    let index = (hash & 15) as usize;
    GRAD_2D_X[index] * x + GRAD_2D_Z[index] * z
}

/// Project a 3-D offset onto the gradient direction selected by `hash & 15`.
#[inline]
pub(crate) fn grad3(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let index = (hash & 15) as usize;
    GRAD_X[index] * x + GRAD_Y[index] * y + GRAD_Z[index] * z
}
