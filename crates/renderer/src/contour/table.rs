//! Contour lookup table.
//!
//! Each cell code maps to an 8-bit mask of vertex slots around the cell
//! boundary. Slots run clockwise starting at the right edge:
//!
//! ```text
//! 4 -- 5 -- 6        top-left    -- top edge    -- top-right
//! |         |           |                              |
//! 3         7        left edge                    right edge
//! |         |           |                              |
//! 2 -- 1 -- 0        bottom-left -- bottom edge -- bottom-right
//! ```
//!
//! Bit `n` of the mask set means slot `n` carries a contour vertex. Only the
//! edge slots are ever used by the table; corner slots exist so the mask
//! covers the whole boundary.

/// Vertex-presence mask for each 4-bit cell code.
///
/// Complementary codes share a mask. Codes 5 and 10 are the saddle cases and
/// set all four edge slots.
pub const CONTOUR_TABLE: [u8; 16] = [
    0b00000000,
    0b00001010,
    0b10000010,
    0b10001000,
    0b10100000,
    0b10101010,
    0b00100010,
    0b00101000,
    0b00101000,
    0b00100010,
    0b10101010,
    0b10100000,
    0b10001000,
    0b10000010,
    0b00001010,
    0b00000000,
];

/// A candidate vertex position on the cell boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexSlot {
    RightEdge,
    TopRight,
    TopEdge,
    TopLeft,
    LeftEdge,
    BottomLeft,
    BottomEdge,
    BottomRight,
}

impl VertexSlot {
    /// All slots in mask order, most significant bit first.
    pub const ALL: [VertexSlot; 8] = [
        VertexSlot::RightEdge,
        VertexSlot::TopRight,
        VertexSlot::TopEdge,
        VertexSlot::TopLeft,
        VertexSlot::LeftEdge,
        VertexSlot::BottomLeft,
        VertexSlot::BottomEdge,
        VertexSlot::BottomRight,
    ];

    /// Mask bit for this slot.
    pub const fn bit(self) -> u8 {
        match self {
            VertexSlot::RightEdge => 0b1000_0000,
            VertexSlot::TopRight => 0b0100_0000,
            VertexSlot::TopEdge => 0b0010_0000,
            VertexSlot::TopLeft => 0b0001_0000,
            VertexSlot::LeftEdge => 0b0000_1000,
            VertexSlot::BottomLeft => 0b0000_0100,
            VertexSlot::BottomEdge => 0b0000_0010,
            VertexSlot::BottomRight => 0b0000_0001,
        }
    }

    /// Whether the slot lies on an edge (interpolated) rather than a corner.
    pub const fn is_edge(self) -> bool {
        matches!(
            self,
            VertexSlot::RightEdge | VertexSlot::TopEdge | VertexSlot::LeftEdge | VertexSlot::BottomEdge
        )
    }
}

/// Vertex mask for a cell code. Panics if `code > 15`.
#[inline]
pub fn vertex_mask(code: u8) -> u8 {
    CONTOUR_TABLE[code as usize]
}

/// Slots present for a cell code, in mask order.
pub fn vertex_slots(code: u8) -> impl Iterator<Item = VertexSlot> {
    let mask = vertex_mask(code);
    VertexSlot::ALL
        .into_iter()
        .filter(move |slot| mask & slot.bit() != 0)
}

/// Saddle codes: diagonal corners on the same side of the threshold.
#[inline]
pub fn is_saddle(code: u8) -> bool {
    code == 5 || code == 10
}
