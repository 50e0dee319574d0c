use crate::assets::source::SourceImage;
use crate::foundation::core::{Affine, Size};
use crate::foundation::error::ShapeViewResult;
use crate::render::raster::{
    Raster, affine_to_cpu, image_paint, pixmap_dims, pixmap_from_premul_bytes,
};
use crate::view::config::ShapeKind;

/// Uniform scale applied to a `src`-sized image drawn into `bounds`.
///
/// Rounded rectangles cover the bounds (`max` of both axis ratios, may crop). Circles and vector
/// shapes fit the image's shorter edge to the bounds width.
pub fn source_scale(shape: ShapeKind, bounds: Size, src: Size) -> f64 {
    let w = f64::from(bounds.width);
    let h = f64::from(bounds.height);
    let sw = f64::from(src.width.max(1));
    let sh = f64::from(src.height.max(1));
    match shape {
        ShapeKind::RoundedRect => (w / sw).max(h / sh),
        ShapeKind::Circle | ShapeKind::VectorPath => w / sw.min(sh),
    }
}

// Absorbs f64 error in products like 15/11 * 11 before truncating.
const EXTENT_SNAP: f64 = 1e-6;

/// Pixel extent of the scaled image, truncated to whole pixels.
pub fn scaled_extent(src: Size, scale: f64) -> Size {
    let scaled = |v: u32| -> u32 {
        let s = (f64::from(v) * scale + EXTENT_SNAP).floor();
        if s.is_finite() && s > 0.0 {
            s.min(f64::from(u32::MAX)) as u32
        } else {
            0
        }
    };
    Size::new(scaled(src.width), scaled(src.height))
}

/// Draw `image` into a fresh `bounds`-sized raster, anchored at the top-left corner.
///
/// Whatever overflows the bounds is clipped; uncovered pixels stay transparent.
#[tracing::instrument(skip(image), fields(src_w = image.width(), src_h = image.height()))]
pub fn rasterize_source(
    image: &SourceImage,
    bounds: Size,
    shape: ShapeKind,
) -> ShapeViewResult<Raster> {
    let (w, h) = pixmap_dims(bounds)?;
    let src = image.intrinsic_size();
    let extent = scaled_extent(src, source_scale(shape, bounds, src));
    if extent.is_empty() {
        return Raster::new(bounds);
    }

    let pixmap = pixmap_from_premul_bytes(image.pixels(), src.width, src.height)?;
    let sx = f64::from(extent.width) / f64::from(src.width);
    let sy = f64::from(extent.height) / f64::from(src.height);

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_transform(affine_to_cpu(Affine::scale_non_uniform(sx, sy)));
    ctx.set_paint(image_paint(pixmap));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(src.width),
        f64::from(src.height),
    ));
    ctx.flush();

    let mut out = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut out);
    Ok(Raster::from_pixmap(&out))
}

#[cfg(test)]
#[path = "../../tests/unit/render/source.rs"]
mod tests;
