use std::sync::Arc;

use anyhow::Context;

use crate::assets::source::SourceImage;
use crate::foundation::error::ShapeViewResult;

/// Decode encoded image bytes (PNG, JPEG, ...) into a premultiplied [`SourceImage`].
pub fn decode_image(bytes: &[u8]) -> ShapeViewResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    SourceImage::from_straight_rgba(width, height, rgba.into_raw())
}

/// Parse SVG bytes into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> ShapeViewResult<Arc<usvg::Tree>> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(Arc::new(tree))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
