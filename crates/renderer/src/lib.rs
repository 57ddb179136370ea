//! Isoline extraction and rendering.
//!
//! - Marching squares over a classified [`ScalarGrid`](isoline_common::ScalarGrid)
//! - Rendering surfaces (tiny-skia raster, call recorder)
//! - Grid overlay and layered scenes
//! - PNG encoding

pub mod contour;
pub mod overlay;
pub mod png;
pub mod scene;
pub mod style;
pub mod surface;

pub use contour::{CellLayout, Marcher, Point, Segment, VertexPlacement};
pub use surface::{PixmapSurface, RecordingSurface, RenderSurface};
pub use scene::{render_scene, SceneStats};
pub use style::{ContourLayer, SceneStyle};
