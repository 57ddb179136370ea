//! Linear placement of contour vertices along cell edges.

/// Position between `pos_a` and `pos_b` where a value varying linearly from
/// `value_a` to `value_b` reaches `threshold`.
///
/// Values are normalised by the threshold before solving. When the edge is
/// flat (`value_a == value_b`) or the threshold is zero there is no finite
/// solution and `pos_a` is returned.
#[inline]
pub fn interpolate(threshold: f32, pos_a: f32, pos_b: f32, value_a: f32, value_b: f32) -> f32 {
    let a = value_a / threshold;
    let b = value_b / threshold;
    let pos = pos_a + (pos_b - pos_a) * (1.0 - a) / (b - a);

    if pos.is_finite() {
        pos
    } else {
        pos_a
    }
}

/// Midpoint of an edge, used when interpolation is disabled.
///
/// This is the exact half of the edge, so an odd pixel spacing puts the
/// vertex on a half pixel rather than truncating toward `pos_a`. The unit
/// layout depends on this: truncating a spacing of 1 would collapse every
/// midpoint onto a corner.
#[inline]
pub fn midpoint(pos_a: f32, pos_b: f32) -> f32 {
    pos_a + (pos_b - pos_a) * 0.5
}
