//! Improved Perlin noise kernel for terrain and volume generation.
//!
//! The crate provides a single deterministic, seed-driven generator,
//! [`noise::ImprovedNoise`], which fills caller-provided buffers with
//! smoothly-varying gradient noise sampled on a regular 3-D grid. It exists
//! so alternative noise kernels can be benchmarked against a known-good
//! reference with reproducible seeds.
//!
//! - [`random`] - Seeded random sources (`java.util.Random`-compatible LCG)
//! - [`noise`] - The gradient tables, noise math and grid populator
//! - [`math`] - Shared lattice math helpers

pub mod math;
pub mod noise;
pub mod random;
