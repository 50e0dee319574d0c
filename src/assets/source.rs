use std::sync::Arc;

use crate::foundation::core::{Rgba8Premul, Size};
use crate::foundation::error::{ShapeViewError, ShapeViewResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Host-provided image drawn by a view.
///
/// Pixels are premultiplied RGBA8 and shared behind an `Arc`, so cloning is cheap and the host
/// can hand the same image to several views. Both intrinsic dimensions are non-zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl SourceImage {
    /// Wrap premultiplied RGBA8 pixels.
    pub fn from_premul(width: u32, height: u32, rgba8_premul: Vec<u8>) -> ShapeViewResult<Self> {
        let size = Size::new(width, height);
        if size.is_empty() {
            return Err(ShapeViewError::validation(
                "source image must have non-zero width and height",
            ));
        }
        if rgba8_premul.len() != size.rgba8_len() {
            return Err(ShapeViewError::validation(format!(
                "source image byte len mismatch: expected {}, got {}",
                size.rgba8_len(),
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Premultiply straight-alpha RGBA8 pixels and wrap them.
    pub fn from_straight_rgba(
        width: u32,
        height: u32,
        mut rgba8: Vec<u8>,
    ) -> ShapeViewResult<Self> {
        premultiply_rgba8_in_place(&mut rgba8);
        Self::from_premul(width, height, rgba8)
    }

    /// Image of one uniform color.
    pub fn solid(width: u32, height: u32, color: Rgba8Premul) -> ShapeViewResult<Self> {
        let px = color.to_array();
        let len = Size::new(width, height).rgba8_len();
        let data = px.iter().copied().cycle().take(len).collect();
        Self::from_premul(width, height, data)
    }

    /// Intrinsic width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Intrinsic dimensions.
    pub fn intrinsic_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Premultiplied RGBA8 pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.rgba8_premul
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
