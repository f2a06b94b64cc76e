//! Improved Perlin noise generator and grid populator.
//!
//! Deterministic, seed-driven gradient noise. A generator owns a 512-entry
//! permutation table and three offset coordinates, all fixed at construction;
//! [`ImprovedNoise::populate`] then accumulates noise samples into a
//! caller-owned buffer over a regular 3-D (or flat 2-D) grid.

// Noise code uses mathematical single-letter variables (a, b, x0, x1)
#![allow(clippy::many_single_char_names)]

use glam::{DVec3, UVec3};
use thiserror::Error;

use crate::math::floor;
use crate::noise::{fade, grad2, grad3, lerp};
use crate::random::{LegacyRandom, Random};

/// Precondition violation reported by [`ImprovedNoise::populate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PopulateError {
    /// Buffer length does not equal the grid size product.
    #[error("buffer holds {actual} samples but the grid needs {expected}")]
    BufferLengthMismatch {
        /// Required length, `size.x * size.y * size.z`.
        expected: usize,
        /// Length of the buffer the caller passed.
        actual: usize,
    },
    /// The reciprocal of `noise_scale` is not a finite number, so every
    /// written sample would be infinite or NaN.
    #[error("noise scale {noise_scale} has no finite reciprocal")]
    NonFiniteNoiseScale {
        /// The rejected scale value.
        noise_scale: f64,
    },
}

/// Gradient hashes at the eight corners of one lattice cell.
///
/// Pure integers derived from the permutation table, so they depend only on
/// the (x, y, z) lattice cell and can be reused while the vertical cell is
/// unchanged without affecting any output value.
#[derive(Debug, Clone, Copy, Default)]
struct CellCorners {
    h000: i32,
    h100: i32,
    h010: i32,
    h110: i32,
    h001: i32,
    h101: i32,
    h011: i32,
    h111: i32,
}

/// Improved Perlin noise generator.
///
/// Immutable after construction and therefore safe to share across threads
/// for concurrent read-only sampling, provided each caller supplies its own
/// buffer.
#[derive(Debug, Clone)]
pub struct ImprovedNoise {
    /// Permutation table: a shuffle of `0..=255` mirrored at offset 256
    /// (`p[i + 256] == p[i]`), so the chained lookups in the populator never
    /// need a wrap-around branch.
    p: [i32; 512],
    /// X offset decorrelating generators built from the same seed sequence.
    pub xo: f64,
    /// Y offset for the noise coordinates.
    pub yo: f64,
    /// Z offset for the noise coordinates.
    pub zo: f64,
}

impl ImprovedNoise {
    /// Create a generator from a random source.
    ///
    /// Draw order is part of the seed-compatibility contract: three doubles
    /// for the offsets first, then exactly 256 bounded draws (bound
    /// `256 - i`) for the forward Fisher-Yates shuffle.
    pub fn new<R: Random>(random: &mut R) -> Self {
        let xo = random.next_f64() * 256.0;
        let yo = random.next_f64() * 256.0;
        let zo = random.next_f64() * 256.0;

        let mut p = [0_i32; 512];
        for (i, value) in p.iter_mut().enumerate().take(256) {
            *value = i as i32;
        }

        // Position i is final once visited, so the mirror entry can be
        // written inside the shuffle loop
        for i in 0..256 {
            let j = i + random.next_i32_bounded((256 - i) as i32) as usize;
            p.swap(i, j);
            p[i + 256] = p[i];
        }

        Self { p, xo, yo, zo }
    }

    /// Create a generator from a seed via [`LegacyRandom`].
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut random = LegacyRandom::from_seed(seed);
        let noise = Self::new(&mut random);
        tracing::debug!(
            seed,
            xo = noise.xo,
            yo = noise.yo,
            zo = noise.zo,
            "seeded improved noise generator"
        );
        noise
    }

    /// Accumulate noise samples into `buffer` over a regular grid.
    ///
    /// The grid is iterated x-outer, z-middle, y-inner, writing flat index
    /// `(xi * size.z + zi) * size.y + yi`. Each sample is taken at
    /// `origin + index * scale` plus the generator's offset coordinates,
    /// multiplied by `1 / noise_scale`, and **added** to the existing entry;
    /// callers wanting a fresh result must zero the buffer first.
    ///
    /// `size.y == 1` selects a flat-slice fast path that ignores the y origin
    /// and offset entirely; it is a distinct numerical contract, not a
    /// degenerate case of the 3-D path.
    ///
    /// # Errors
    ///
    /// [`PopulateError::BufferLengthMismatch`] if `buffer.len()` is not the
    /// size product, [`PopulateError::NonFiniteNoiseScale`] if
    /// `1.0 / noise_scale` is not finite. Neither touches the buffer.
    pub fn populate(
        &self,
        buffer: &mut [f64],
        origin: DVec3,
        size: UVec3,
        scale: DVec3,
        noise_scale: f64,
    ) -> Result<(), PopulateError> {
        let expected = size.x as usize * size.y as usize * size.z as usize;
        if buffer.len() != expected {
            return Err(PopulateError::BufferLengthMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        let inv_scale = noise_scale.recip();
        if !inv_scale.is_finite() {
            return Err(PopulateError::NonFiniteNoiseScale { noise_scale });
        }

        if size.y == 1 {
            self.populate_slice(buffer, origin, size, scale, inv_scale);
        } else {
            self.populate_volume(buffer, origin, size, scale, inv_scale);
        }
        Ok(())
    }

    /// Permutation lookup for a masked lattice cell.
    #[inline]
    const fn p(&self, index: i32) -> i32 {
        self.p[index as usize]
    }

    /// Flat-slice path: bilinear blend of four corner contributions per
    /// (x, z) cell, along x then z. The first corner projects through the
    /// 2-D gradient table; the rest use the 3-D table with y = 0.
    fn populate_slice(
        &self,
        buffer: &mut [f64],
        origin: DVec3,
        size: UVec3,
        scale: DVec3,
        inv_scale: f64,
    ) {
        let mut cursor = 0_usize;
        for xi in 0..size.x {
            let sample_x = origin.x + f64::from(xi) * scale.x + self.xo;
            let cell_x = floor(sample_x);
            let hx = cell_x & 255;
            let frac_x = sample_x - f64::from(cell_x);
            let fade_x = fade(frac_x);

            for zi in 0..size.z {
                let sample_z = origin.z + f64::from(zi) * scale.z + self.zo;
                let cell_z = floor(sample_z);
                let hz = cell_z & 255;
                let frac_z = sample_z - f64::from(cell_z);
                let fade_z = fade(frac_z);

                let a = self.p(hx);
                let aa = self.p(a) + hz;
                let b = self.p(hx + 1);
                let ba = self.p(b) + hz;

                let x0 = lerp(
                    fade_x,
                    grad2(self.p(aa), frac_x, frac_z),
                    grad3(self.p(ba), frac_x - 1.0, 0.0, frac_z),
                );
                let x1 = lerp(
                    fade_x,
                    grad3(self.p(aa + 1), frac_x, 0.0, frac_z - 1.0),
                    grad3(self.p(ba + 1), frac_x - 1.0, 0.0, frac_z - 1.0),
                );

                buffer[cursor] += lerp(fade_z, x0, x1) * inv_scale;
                cursor += 1;
            }
        }
    }

    /// General 3-D path: trilinear blend along x, then y, then z, with the
    /// corner hashes cached per vertical lattice cell.
    fn populate_volume(
        &self,
        buffer: &mut [f64],
        origin: DVec3,
        size: UVec3,
        scale: DVec3,
        inv_scale: f64,
    ) {
        let mut cursor = 0_usize;
        for xi in 0..size.x {
            let sample_x = origin.x + f64::from(xi) * scale.x + self.xo;
            let cell_x = floor(sample_x);
            let hx = cell_x & 255;
            let frac_x = sample_x - f64::from(cell_x);
            let fade_x = fade(frac_x);

            for zi in 0..size.z {
                let sample_z = origin.z + f64::from(zi) * scale.z + self.zo;
                let cell_z = floor(sample_z);
                let hz = cell_z & 255;
                let frac_z = sample_z - f64::from(cell_z);
                let fade_z = fade(frac_z);

                // Corner hashes are reused while the y lattice cell is
                // unchanged; `None` forces recomputation on the first y of
                // every (x, z) pair
                let mut cached_cell: Option<i32> = None;
                let mut corners = CellCorners::default();

                for yi in 0..size.y {
                    let sample_y = origin.y + f64::from(yi) * scale.y + self.yo;
                    let cell_y = floor(sample_y);
                    let hy = cell_y & 255;
                    let frac_y = sample_y - f64::from(cell_y);
                    let fade_y = fade(frac_y);

                    if cached_cell != Some(hy) {
                        cached_cell = Some(hy);
                        corners = self.cell_corners(hx, hy, hz);
                    }

                    let x00 = lerp(
                        fade_x,
                        grad3(corners.h000, frac_x, frac_y, frac_z),
                        grad3(corners.h100, frac_x - 1.0, frac_y, frac_z),
                    );
                    let x10 = lerp(
                        fade_x,
                        grad3(corners.h010, frac_x, frac_y - 1.0, frac_z),
                        grad3(corners.h110, frac_x - 1.0, frac_y - 1.0, frac_z),
                    );
                    let x01 = lerp(
                        fade_x,
                        grad3(corners.h001, frac_x, frac_y, frac_z - 1.0),
                        grad3(corners.h101, frac_x - 1.0, frac_y, frac_z - 1.0),
                    );
                    let x11 = lerp(
                        fade_x,
                        grad3(corners.h011, frac_x, frac_y - 1.0, frac_z - 1.0),
                        grad3(corners.h111, frac_x - 1.0, frac_y - 1.0, frac_z - 1.0),
                    );

                    let y0 = lerp(fade_y, x00, x10);
                    let y1 = lerp(fade_y, x01, x11);

                    buffer[cursor] += lerp(fade_z, y0, y1) * inv_scale;
                    cursor += 1;
                }
            }
        }
    }

    /// Chain the permutation lookups for the eight corners of one cell.
    ///
    /// Intermediate sums never exceed 511 (`p[...] <= 255` plus a masked
    /// cell plus one), which is exactly why the table is mirrored to 512
    /// entries.
    fn cell_corners(&self, hx: i32, hy: i32, hz: i32) -> CellCorners {
        let a = self.p(hx) + hy;
        let aa = self.p(a) + hz;
        let ab = self.p(a + 1) + hz;
        let b = self.p(hx + 1) + hy;
        let ba = self.p(b) + hz;
        let bb = self.p(b + 1) + hz;

        CellCorners {
            h000: self.p(aa),
            h100: self.p(ba),
            h010: self.p(ab),
            h110: self.p(bb),
            h001: self.p(aa + 1),
            h101: self.p(ba + 1),
            h011: self.p(ab + 1),
            h111: self.p(bb + 1),
        }
    }
}
