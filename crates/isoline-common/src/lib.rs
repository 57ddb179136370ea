//! Common types shared across the isolines workspace.
//!
//! The scalar grid owns the sampled field and the per-cell classification
//! codes that the marcher in the `renderer` crate consumes.

pub mod cell;
pub mod color;
pub mod error;
pub mod grid;

pub use cell::{classify, CellCorners};
pub use color::Color;
pub use error::{IsolineError, IsolineResult};
pub use grid::ScalarGrid;
