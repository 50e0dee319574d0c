use std::sync::Arc;

use crate::assets::resources::{NoResources, VectorResources};
use crate::assets::source::SourceImage;
use crate::foundation::core::Size;
use crate::foundation::error::{ShapeViewError, ShapeViewResult};
use crate::render::cache::CacheSlot;
use crate::render::compose::dst_in_in_place;
use crate::render::mask::{MaskBuffer, generate_mask};
use crate::render::raster::Raster;
use crate::render::source::rasterize_source;
use crate::render::surface::RenderSurface;
use crate::view::config::ViewConfig;
use crate::view::measure::{MeasureSpec, measure_shape};

/// Callbacks a host UI runtime drives on a view, synchronously and on one thread.
pub trait View {
    /// Compute the desired size under the parent's constraints.
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size;

    /// Assign the final bounds.
    fn layout(&mut self, size: Size);

    /// Draw the current contents onto `surface`.
    fn draw(&mut self, surface: &mut dyn RenderSurface) -> DrawOutcome;

    /// Drop cached drawing state; the next draw recomputes everything.
    fn invalidate(&mut self);
}

/// What a single [`View::draw`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Nothing was drawn (no source image, empty bounds, or a raster failure).
    Skipped,
    /// The cached composited raster was reused.
    Hit,
    /// The composited raster was rebuilt and cached.
    Miss,
}

/// Counters describing the cache behavior of a view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Total draw calls.
    pub draws: u64,
    /// Draws served from the composited cache.
    pub hits: u64,
    /// Draws that rebuilt the composited raster.
    pub misses: u64,
    /// Draws that drew nothing.
    pub skipped: u64,
    /// Mask rebuilds.
    pub mask_builds: u64,
    /// Cache entries dropped by invalidation, memory trimming or bounds changes.
    pub evictions: u64,
}

/// Image view that masks its source into a circle, rounded rectangle or vector shape.
///
/// On a cache miss the source is rasterized to the bounds, the mask (cached separately) is
/// composited onto it with destination-in, and the result is cached for later frames. Both
/// caches are keyed by the bounds, so a resize never reuses stale buffers.
pub struct ShapeImageView {
    config: ViewConfig,
    resources: Arc<dyn VectorResources>,
    source: Option<SourceImage>,
    measured: Size,
    bounds: Size,
    mask: CacheSlot<MaskBuffer>,
    composited: CacheSlot<Raster>,
    stats: DrawStats,
}

impl std::fmt::Debug for ShapeImageView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeImageView")
            .field("config", &self.config)
            .field("has_source", &self.source.is_some())
            .field("measured", &self.measured)
            .field("bounds", &self.bounds)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl ShapeImageView {
    /// Create a view without vector resources.
    pub fn new(config: ViewConfig) -> Self {
        Self::with_resources(config, Arc::new(NoResources))
    }

    /// Create a view that resolves vector masks through `resources`.
    pub fn with_resources(config: ViewConfig, resources: Arc<dyn VectorResources>) -> Self {
        Self {
            config,
            resources,
            source: None,
            measured: Size::ZERO,
            bounds: Size::ZERO,
            mask: CacheSlot::new(),
            composited: CacheSlot::new(),
            stats: DrawStats::default(),
        }
    }

    /// Configuration fixed at construction.
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Replace the source image. Invalidates cached drawing state.
    pub fn set_source(&mut self, source: Option<SourceImage>) {
        self.source = source;
        self.invalidate();
    }

    /// Current source image.
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// Size computed by the last [`View::measure`].
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Bounds assigned by the last [`View::layout`].
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Cache counters.
    pub fn stats(&self) -> DrawStats {
        self.stats
    }

    /// Cached composited raster for the current bounds, if any.
    pub fn cached_output(&self) -> Option<&Raster> {
        self.composited.get(self.bounds)
    }

    /// Cached mask for the current bounds, if any.
    pub fn cached_mask(&self) -> Option<&MaskBuffer> {
        self.mask.get(self.bounds)
    }

    /// Release the composited raster under memory pressure.
    ///
    /// The mask is kept; the next draw recomputes only the composite.
    pub fn trim_memory(&mut self) {
        if self.composited.evict() {
            self.stats.evictions += 1;
            tracing::debug!("composited raster reclaimed");
        }
    }

    fn evict_all(&mut self) {
        let dropped = u64::from(self.composited.evict()) + u64::from(self.mask.evict());
        self.stats.evictions += dropped;
        if dropped > 0 {
            tracing::debug!(dropped, "shape view caches cleared");
        }
    }

    fn ensure_mask(&mut self, bounds: Size) -> ShapeViewResult<&MaskBuffer> {
        if !self.mask.is_valid(bounds) {
            let mask = generate_mask(&self.config, bounds, self.resources.as_ref())?;
            self.stats.mask_builds += 1;
            return Ok(self.mask.store(bounds, mask));
        }
        self.mask
            .get(bounds)
            .ok_or_else(|| ShapeViewError::raster("mask cache lost its entry"))
    }

    #[tracing::instrument(skip(self, source), fields(shape = self.config.shape().name()))]
    fn compose(&mut self, source: &SourceImage, bounds: Size) -> ShapeViewResult<Raster> {
        let mut out = rasterize_source(source, bounds, self.config.shape())?;
        let mask = self.ensure_mask(bounds)?;
        dst_in_in_place(&mut out.data, &mask.raster().data)?;
        Ok(out)
    }
}

impl View for ShapeImageView {
    fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let desired = self
            .source
            .as_ref()
            .map(SourceImage::intrinsic_size)
            .unwrap_or(Size::ZERO);
        self.measured = measure_shape(self.config.shape(), desired, width_spec, height_spec);
        self.measured
    }

    fn layout(&mut self, size: Size) {
        if size != self.bounds {
            self.bounds = size;
            self.evict_all();
        }
    }

    fn draw(&mut self, surface: &mut dyn RenderSurface) -> DrawOutcome {
        self.stats.draws += 1;
        let bounds = self.bounds;
        let source = match &self.source {
            Some(s) if !bounds.is_empty() => s.clone(),
            _ => {
                self.stats.skipped += 1;
                return DrawOutcome::Skipped;
            }
        };

        if let Some(cached) = self.composited.get(bounds) {
            surface.draw_raster(cached, 0, 0);
            self.stats.hits += 1;
            return DrawOutcome::Hit;
        }

        match self.compose(&source, bounds) {
            Ok(out) => {
                surface.draw_raster(&out, 0, 0);
                self.composited.store(bounds, out);
                self.stats.misses += 1;
                tracing::debug!(
                    width = bounds.width,
                    height = bounds.height,
                    "composited raster rebuilt"
                );
                DrawOutcome::Miss
            }
            Err(e) => {
                tracing::error!(error = %e, "shape view draw failed, nothing drawn");
                self.stats.skipped += 1;
                DrawOutcome::Skipped
            }
        }
    }

    fn invalidate(&mut self) {
        self.evict_all();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/shape_image_view.rs"]
mod tests;
