//! Scalar field generators for contour tests and benchmarks.
//!
//! Every generator returns a row-major `Vec<f32>` of `rows * cols` samples,
//! ready for `ScalarGrid::from_field`.

/// Constant field.
pub fn create_uniform_field(rows: usize, cols: usize, value: f32) -> Vec<f32> {
    vec![value; rows * cols]
}

/// Field that grows linearly from 0 at the left column to `max` at the right.
pub fn create_ramp_field(rows: usize, cols: usize, max: f32) -> Vec<f32> {
    let mut data = Vec::with_capacity(rows * cols);
    for _ in 0..rows {
        for col in 0..cols {
            data.push(col as f32 / (cols.max(2) - 1) as f32 * max);
        }
    }
    data
}

/// Alternating `high` / `low` samples, `high` at (0, 0).
pub fn create_checkerboard_field(rows: usize, cols: usize, high: f32, low: f32) -> Vec<f32> {
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            data.push(if (row + col) % 2 == 0 { high } else { low });
        }
    }
    data
}

/// Inverse-square bump centred on (`center_row`, `center_col`).
///
/// Matches the metaball falloff `radius² / (distance² + 1e-4)`.
pub fn create_bump_field(
    rows: usize,
    cols: usize,
    center_row: f32,
    center_col: f32,
    radius: f32,
) -> Vec<f32> {
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let dy = row as f32 - center_row;
            let dx = col as f32 - center_col;
            data.push(radius * radius / (dx * dx + dy * dy + 1e-4));
        }
    }
    data
}

/// Smooth field of overlapping sine waves, values roughly in [10, 90].
pub fn create_wave_field(rows: usize, cols: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let fx = col as f32 / cols as f32;
            let fy = row as f32 / rows as f32;
            let v1 = (fx * std::f32::consts::PI * 4.0).sin() * 20.0;
            let v2 = (fy * std::f32::consts::PI * 4.0).sin() * 20.0;
            let v3 = ((fx + fy) * std::f32::consts::PI * 2.0).sin() * 10.0;
            data.push(50.0 + v1 + v2 + v3);
        }
    }
    data
}

/// Deterministic noise in `[0, max)`.
///
/// The same seed always produces the same field.
pub fn create_noise_field(rows: usize, cols: usize, max: f32, seed: u32) -> Vec<f32> {
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let hash = simple_hash(col as u32, row as u32, seed);
            data.push((hash % 10_000) as f32 / 10_000.0 * max);
        }
    }
    data
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}
