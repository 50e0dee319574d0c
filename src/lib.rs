//! shapeview is an image view that masks its bitmap into a circle, a rounded rectangle, or an
//! arbitrary vector shape.
//!
//! # Pipeline overview
//!
//! On every draw the view checks its composited cache. On a miss it:
//!
//! 1. **Rasterizes the source** into a bounds-sized buffer (cover-fit for rounded rectangles,
//!    shorter-edge fit for circles and vector shapes), anchored top-left.
//! 2. **Builds the mask** (cached separately): an opaque shape on transparent, filled with
//!    `vello_cpu`, or an SVG rendered with `resvg`.
//! 3. **Composites** with destination-in: the mask decides visibility, the image keeps its
//!    colors.
//! 4. **Blits** the result to the host surface and caches it until the view is invalidated,
//!    resized, or trimmed under memory pressure.
//!
//! The host runtime is modelled by the [`View`] trait (`measure` / `layout` / `draw` /
//! `invalidate`), so everything can be driven synchronously from tests or the CLI.
//!
//! Constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Premultiplied RGBA8** end-to-end.
//! - **Draws never fail**: problems degrade to "draw nothing" or an empty mask and are logged
//!   through `tracing`.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod render;
mod view;

pub use assets::decode::{decode_image, parse_svg};
pub use assets::resources::{
    FileResources, InMemoryResources, NoResources, ResourceHandle, VectorResources,
};
pub use assets::source::SourceImage;
pub use assets::svg_raster::rasterize_svg_to_premul_rgba8;
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgba8Premul, Size};
pub use foundation::error::{ShapeViewError, ShapeViewResult};
pub use render::cache::CacheSlot;
pub use render::compose::{PremulRgba8, copy_rect, dst_in, dst_in_in_place};
pub use render::mask::{MaskBuffer, generate_mask, shape_path};
pub use render::raster::Raster;
pub use render::source::{rasterize_source, scaled_extent, source_scale};
pub use render::surface::{FrameSurface, RenderSurface};
pub use view::config::{Dimension, ShapeKind, ViewAttributes, ViewConfig};
pub use view::measure::{MeasureMode, MeasureSpec, measure_shape};
pub use view::shape_image_view::{DrawOutcome, DrawStats, ShapeImageView, View};
