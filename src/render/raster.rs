use std::sync::Arc;

use crate::foundation::core::{Rgba8Premul, Size};
use crate::foundation::error::{ShapeViewError, ShapeViewResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;

/// An offscreen buffer as RGBA8 pixels.
///
/// Pixels are **premultiplied alpha**, tightly packed and row-major. Both the mask and the
/// composited output of a view are rasters sized to the view bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes.
    pub data: Vec<u8>,
}

impl Raster {
    /// Allocate a fully transparent raster.
    pub fn new(size: Size) -> ShapeViewResult<Self> {
        if size.is_empty() {
            return Err(ShapeViewError::raster(format!(
                "cannot allocate an empty raster ({}x{})",
                size.width, size.height
            )));
        }
        Ok(Self {
            width: size.width,
            height: size.height,
            data: vec![0; size.rgba8_len()],
        })
    }

    /// Wrap premultiplied RGBA8 bytes.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> ShapeViewResult<Self> {
        if data.len() != Size::new(width, height).rgba8_len() {
            return Err(ShapeViewError::raster(format!(
                "raster byte len mismatch: expected {}x{}x4, got {}",
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Raster dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Pixel at `(x, y)`. Out-of-range coordinates read as transparent.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8Premul {
        if x >= self.width || y >= self.height {
            return Rgba8Premul::transparent();
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Rgba8Premul {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        }
    }

    /// Return `true` when every pixel has zero alpha.
    pub fn is_fully_transparent(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Fill every pixel with one color.
    pub fn fill(&mut self, color: Rgba8Premul) {
        let px = color.to_array();
        for c in self.data.chunks_exact_mut(4) {
            c.copy_from_slice(&px);
        }
    }

    /// Convert to a straight-alpha `image` buffer, e.g. for PNG output.
    pub fn to_rgba_image(&self) -> ShapeViewResult<image::RgbaImage> {
        let mut straight = self.data.clone();
        unpremultiply_rgba8_in_place(&mut straight);
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| ShapeViewError::raster("raster does not fit an rgba image buffer"))
    }

    pub(crate) fn from_pixmap(pixmap: &vello_cpu::Pixmap) -> Self {
        Self {
            width: u32::from(pixmap.width()),
            height: u32::from(pixmap.height()),
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

pub(crate) fn pixmap_dims(size: Size) -> ShapeViewResult<(u16, u16)> {
    if size.is_empty() {
        return Err(ShapeViewError::raster("pixmap bounds are empty"));
    }
    let w: u16 = size
        .width
        .try_into()
        .map_err(|_| ShapeViewError::raster("pixmap width exceeds u16"))?;
    let h: u16 = size
        .height
        .try_into()
        .map_err(|_| ShapeViewError::raster("pixmap height exceeds u16"))?;
    Ok((w, h))
}

pub(crate) fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> ShapeViewResult<vello_cpu::Pixmap> {
    let (w, h) = pixmap_dims(Size::new(width, height))?;
    if bytes.len() != Size::new(width, height).rgba8_len() {
        return Err(ShapeViewError::raster("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let opaque = bytes.chunks_exact(4).all(|px| px[3] == 255);
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, !opaque,
    ))
}

pub(crate) fn image_paint(pixmap: vello_cpu::Pixmap) -> vello_cpu::Image {
    vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    }
}

pub(crate) fn bezpath_to_cpu(path: &crate::foundation::core::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

pub(crate) fn affine_to_cpu(a: crate::foundation::core::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
