//! Random field fill.

use isoline_common::ScalarGrid;
use rand::Rng;
use tracing::debug;

/// Fill every sample with a random whole number in `[0, floor(max_threshold))`.
///
/// Grids whose `max_threshold` is below 1 are filled with zeros.
pub fn fill_random<R: Rng + ?Sized>(grid: &mut ScalarGrid, rng: &mut R) {
    let upper = grid.max_threshold().floor() as u32;

    for sample in grid.field_mut() {
        *sample = if upper == 0 {
            0.0
        } else {
            rng.gen_range(0..upper) as f32
        };
    }

    debug!(rows = grid.rows(), cols = grid.cols(), upper = upper, "filled grid with random samples");
}
