//! Scalar field sources.
//!
//! - [`Metaballs`]: circles bouncing inside the grid whose inverse-square
//!   falloffs are summed into the field every frame
//! - [`fill_random`]: independent integer samples, useful for eyeballing the
//!   contour table on noisy input
//!
//! Both write straight into an [`isoline_common::ScalarGrid`], which marks the
//! grid's classification stale.

pub mod metaballs;
pub mod random;

pub use metaballs::{Metaball, MetaballConfig, Metaballs, FIELD_EPSILON};
pub use random::fill_random;
