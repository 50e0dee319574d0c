use kurbo::Shape;

use crate::assets::decode::parse_svg;
use crate::assets::resources::{ResourceHandle, VectorResources};
use crate::assets::svg_raster::rasterize_svg_to_premul_rgba8;
use crate::foundation::core::{BezPath, Size};
use crate::foundation::error::ShapeViewResult;
use crate::render::raster::{Raster, bezpath_to_cpu, pixmap_dims};
use crate::view::config::{ShapeKind, ViewConfig};

const PATH_TOLERANCE: f64 = 0.1;

/// Rasterized mask: opaque black shape on a transparent background.
///
/// Only the alpha channel is meaningful when compositing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskBuffer {
    raster: Raster,
}

impl MaskBuffer {
    /// Underlying raster.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Mask dimensions.
    pub fn size(&self) -> Size {
        self.raster.size()
    }

    /// Coverage (alpha) at `(x, y)`; 0 outside the mask.
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        self.raster.pixel(x, y).a
    }

    /// Return `true` when nothing is covered.
    pub fn is_empty(&self) -> bool {
        self.raster.is_fully_transparent()
    }
}

/// Outline of a built-in shape in pixel space, or `None` for [`ShapeKind::VectorPath`].
///
/// The circle uses `min(width, height) / 2` as radius and sits in the top-left square, which
/// matches the square bounds the view measures itself to and stays inside transient non-square
/// bounds.
pub fn shape_path(shape: ShapeKind, size: Size, corner_radius: f64) -> Option<BezPath> {
    let w = f64::from(size.width);
    let h = f64::from(size.height);
    match shape {
        ShapeKind::Circle => {
            let r = w.min(h) / 2.0;
            let circle = kurbo::Circle::new((r, r), r);
            Some(circle.path_elements(PATH_TOLERANCE).collect())
        }
        ShapeKind::RoundedRect => {
            let rr = kurbo::RoundedRect::new(0.0, 0.0, w, h, corner_radius.max(0.0));
            Some(rr.path_elements(PATH_TOLERANCE).collect())
        }
        ShapeKind::VectorPath => None,
    }
}

/// Build the mask for `config` at `size`.
///
/// Vector masks never fail the draw: an unset handle gives an empty mask, and missing or
/// malformed resources are logged and also give an empty mask. Errors are only returned when the
/// buffer itself cannot be allocated.
#[tracing::instrument(skip(config, resources), fields(shape = config.shape().name()))]
pub fn generate_mask(
    config: &ViewConfig,
    size: Size,
    resources: &dyn VectorResources,
) -> ShapeViewResult<MaskBuffer> {
    let (w, h) = pixmap_dims(size)?;

    let raster = match shape_path(config.shape(), size, config.corner_radius()) {
        Some(path) => fill_path_opaque(&path, w, h),
        None => {
            let handle = config.vector_resource();
            if !handle.is_set() {
                Raster::new(size)?
            } else {
                match rasterize_vector(handle, size, resources) {
                    Ok(r) => r,
                    Err(e) => {
                        tracing::warn!(
                            handle = handle.0,
                            error = %e,
                            "vector mask unavailable, using empty mask"
                        );
                        Raster::new(size)?
                    }
                }
            }
        }
    };

    Ok(MaskBuffer { raster })
}

fn fill_path_opaque(path: &BezPath, width: u16, height: u16) -> Raster {
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));
    ctx.fill_path(&bezpath_to_cpu(path));
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);
    Raster::from_pixmap(&pixmap)
}

fn rasterize_vector(
    handle: ResourceHandle,
    size: Size,
    resources: &dyn VectorResources,
) -> ShapeViewResult<Raster> {
    let bytes = resources.open(handle)?;
    let tree = parse_svg(&bytes)?;
    let rgba = rasterize_svg_to_premul_rgba8(&tree, size)?;
    Raster::from_premul(size.width, size.height, rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
