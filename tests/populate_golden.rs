//! Golden-master regression tests for the noise populator.
//!
//! Reference buffers live in `test_assets/golden_1337.json`, captured once
//! from a bit-exact oracle of the reference algorithm (`java.util.Random`
//! seeding plus the populate math in IEEE-754 doubles). They pin the seed
//! contract, both population paths, and the flat-index axis ordering.

use cursor_noise::noise::ImprovedNoise;
use glam::{DVec3, UVec3};
use serde::Deserialize;

/// Absolute tolerance for buffer comparison; the captured values should in
/// practice match bit for bit.
const TOLERANCE: f64 = 1e-12;

#[derive(Deserialize)]
struct GoldenFile {
    seed: u64,
    offsets: [f64; 3],
    grid_8x8x8: GoldenGrid,
    slice_16x16: GoldenGrid,
    grid_4x5x6: GoldenGrid,
}

/// One captured `populate` call and its expected buffer.
#[derive(Deserialize)]
struct GoldenGrid {
    origin: [f64; 3],
    size: [u32; 3],
    scale: [f64; 3],
    noise_scale: f64,
    values: Vec<f64>,
}

fn load_golden() -> GoldenFile {
    let json_str = include_str!("../test_assets/golden_1337.json");
    serde_json::from_str(json_str).expect("Failed to parse golden_1337.json")
}

fn check_grid(noise: &ImprovedNoise, grid: &GoldenGrid, label: &str) {
    let size = UVec3::from_array(grid.size);
    let mut buffer = vec![0.0; grid.values.len()];
    noise
        .populate(
            &mut buffer,
            DVec3::from_array(grid.origin),
            size,
            DVec3::from_array(grid.scale),
            grid.noise_scale,
        )
        .expect("golden populate call must be valid");

    for (index, (got, want)) in buffer.iter().zip(&grid.values).enumerate() {
        let error = (got - want).abs();
        assert!(
            error <= TOLERANCE,
            "{label}: mismatch at flat index {index}: got {got}, want {want} (|err| = {error:e})"
        );
    }
}

#[test]
fn test_seed_offsets_match_reference() {
    let golden = load_golden();
    let noise = ImprovedNoise::from_seed(golden.seed);
    assert_eq!(noise.xo.to_bits(), golden.offsets[0].to_bits());
    assert_eq!(noise.yo.to_bits(), golden.offsets[1].to_bits());
    assert_eq!(noise.zo.to_bits(), golden.offsets[2].to_bits());
}

/// The concrete scenario from the kernel's contract: seed 1337, origin
/// (0,0,0), size (8,8,8), scale (0.1,0.1,0.1), noise scale 1.1.
#[test]
fn test_golden_volume_8x8x8() {
    let golden = load_golden();
    let noise = ImprovedNoise::from_seed(golden.seed);
    check_grid(&noise, &golden.grid_8x8x8, "grid_8x8x8");
}

/// Flat-slice fast path with a negative x origin.
#[test]
fn test_golden_slice_16x16() {
    let golden = load_golden();
    let noise = ImprovedNoise::from_seed(golden.seed);
    check_grid(&noise, &golden.slice_16x16, "slice_16x16");
}

/// Distinct per-axis sizes, so any deviation from the
/// `(xi * size.z + zi) * size.y + yi` flattening shows up immediately.
#[test]
fn test_golden_asymmetric_grid_4x5x6() {
    let golden = load_golden();
    let noise = ImprovedNoise::from_seed(golden.seed);
    check_grid(&noise, &golden.grid_4x5x6, "grid_4x5x6");
}

/// Two full construct-and-populate runs from the same seed must agree bit
/// for bit, independent of the golden capture.
#[test]
fn test_independent_constructions_bit_identical() {
    let golden = load_golden();
    let grid = &golden.grid_8x8x8;
    let mut first = vec![0.0; grid.values.len()];
    let mut second = vec![0.0; grid.values.len()];

    for buffer in [&mut first, &mut second] {
        let noise = ImprovedNoise::from_seed(golden.seed);
        noise
            .populate(
                buffer,
                DVec3::from_array(grid.origin),
                UVec3::from_array(grid.size),
                DVec3::from_array(grid.scale),
                grid.noise_scale,
            )
            .expect("populate");
    }

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
