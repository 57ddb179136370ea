//! Small hand-checked fields with known contours.

/// 3x3 field with a single peak in the middle: `[[0,0,0],[0,10,0],[0,0,0]]`.
///
/// At threshold 5 every cell has exactly one corner above the threshold and
/// every crossing sits at an edge midpoint.
pub const PEAK_3X3: [f32; 9] = [
    0.0, 0.0, 0.0, //
    0.0, 10.0, 0.0, //
    0.0, 0.0, 0.0,
];

/// 2x2 checkerboard `[[10,0],[0,10]]`: one saddle cell whose corner average
/// equals 5.
pub const CHECKERBOARD_2X2: [f32; 4] = [10.0, 0.0, 0.0, 10.0];

/// 2x2 anti-checkerboard `[[0,10],[10,0]]`.
pub const ANTI_CHECKERBOARD_2X2: [f32; 4] = [0.0, 10.0, 10.0, 0.0];

/// Threshold used with the fixtures above.
pub const FIXTURE_THRESHOLD: f32 = 5.0;

/// Upper bound used with the fixtures above.
pub const FIXTURE_MAX_THRESHOLD: f32 = 16.0;

/// The four corner values of a single 2x2 cell for a given code, using 10 for
/// corners above [`FIXTURE_THRESHOLD`] and 0 for corners below.
///
/// Returned row-major: `[top_left, top_right, bottom_left, bottom_right]`.
pub fn single_cell_for_code(code: u8) -> [f32; 4] {
    let level = |bit: u8| if code & bit != 0 { 10.0 } else { 0.0 };
    [level(0b1000), level(0b0100), level(0b0001), level(0b0010)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_for_code() {
        assert_eq!(single_cell_for_code(0), [0.0; 4]);
        assert_eq!(single_cell_for_code(15), [10.0; 4]);
        assert_eq!(single_cell_for_code(0b1000), [10.0, 0.0, 0.0, 0.0]);
        assert_eq!(single_cell_for_code(0b0010), [0.0, 0.0, 0.0, 10.0]);
        assert_eq!(single_cell_for_code(10), CHECKERBOARD_2X2);
        assert_eq!(single_cell_for_code(5), ANTI_CHECKERBOARD_2X2);
    }
}
