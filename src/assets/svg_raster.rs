use crate::foundation::core::Size;
use crate::foundation::error::{ShapeViewError, ShapeViewResult};

// Avoid pathological allocations from a bogus layout pass.
const MAX_DIM: u32 = 16_384;

/// Render an SVG tree stretched to exactly `size`, returning premultiplied RGBA8 bytes.
///
/// The SVG's own viewport is scaled non-uniformly onto the target, so its aspect ratio is not
/// preserved. Colors are kept as authored; mask users only read the alpha channel.
pub fn rasterize_svg_to_premul_rgba8(tree: &usvg::Tree, size: Size) -> ShapeViewResult<Vec<u8>> {
    if size.width > MAX_DIM || size.height > MAX_DIM {
        return Err(ShapeViewError::raster(format!(
            "svg raster size too large: {}x{} (max {MAX_DIM}x{MAX_DIM})",
            size.width, size.height
        )));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width, size.height)
        .ok_or_else(|| ShapeViewError::raster("failed to allocate svg pixmap"))?;

    let sx = (size.width as f32) / tree.size().width();
    let sy = (size.height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(pixmap.take())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg_raster.rs"]
mod tests;
