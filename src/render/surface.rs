use crate::foundation::core::{Rgba8Premul, Size};
use crate::foundation::error::ShapeViewResult;
use crate::render::compose::copy_rect;
use crate::render::raster::Raster;

/// Host canvas a view draws into.
///
/// Views only ever blit finished rasters; all shape and blend work happens offscreen.
pub trait RenderSurface {
    /// Surface dimensions in pixels.
    fn size(&self) -> Size;

    /// Copy `raster` onto the surface with its top-left corner at `(x, y)`, clipped to the
    /// surface. No blending is applied.
    fn draw_raster(&mut self, raster: &Raster, x: i32, y: i32);
}

/// In-memory surface backed by a [`Raster`].
#[derive(Clone, Debug)]
pub struct FrameSurface {
    frame: Raster,
}

impl FrameSurface {
    /// Create a transparent surface.
    pub fn new(size: Size) -> ShapeViewResult<Self> {
        Ok(Self {
            frame: Raster::new(size)?,
        })
    }

    /// Fill the whole surface with one color.
    pub fn clear(&mut self, color: Rgba8Premul) {
        self.frame.fill(color);
    }

    /// Current contents.
    pub fn frame(&self) -> &Raster {
        &self.frame
    }

    /// Consume the surface and return its contents.
    pub fn into_raster(self) -> Raster {
        self.frame
    }
}

impl RenderSurface for FrameSurface {
    fn size(&self) -> Size {
        self.frame.size()
    }

    fn draw_raster(&mut self, raster: &Raster, x: i32, y: i32) {
        copy_rect(&mut self.frame, raster, x, y);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
