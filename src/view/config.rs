use std::str::FromStr;

use crate::assets::resources::ResourceHandle;
use crate::foundation::error::{ShapeViewError, ShapeViewResult};

/// Which shape the view masks its image into.
///
/// Serialized as a snake_case name; deserialization also accepts the numeric attribute codes
/// (`0` circle, `1` rounded rect, `2` vector path).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", try_from = "ShapeKindRepr")]
pub enum ShapeKind {
    /// Disc inscribed in the (square) bounds.
    #[default]
    Circle,
    /// Rectangle spanning the bounds with rounded corners.
    RoundedRect,
    /// Externally stored vector shape, scaled to the bounds.
    VectorPath,
}

impl ShapeKind {
    /// Map a numeric attribute code to a shape.
    pub fn from_code(code: i64) -> ShapeViewResult<Self> {
        match code {
            0 => Ok(Self::Circle),
            1 => Ok(Self::RoundedRect),
            2 => Ok(Self::VectorPath),
            other => Err(ShapeViewError::validation(format!(
                "unknown shape code {other} (expected 0, 1 or 2)"
            ))),
        }
    }

    /// Numeric attribute code of this shape.
    pub fn code(self) -> i64 {
        match self {
            Self::Circle => 0,
            Self::RoundedRect => 1,
            Self::VectorPath => 2,
        }
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::RoundedRect => "rounded_rect",
            Self::VectorPath => "vector_path",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "circle" => Ok(Self::Circle),
            "round" | "rounded_rect" => Ok(Self::RoundedRect),
            "svg" | "vector_path" => Ok(Self::VectorPath),
            other => match other.parse::<i64>() {
                Ok(code) => Self::from_code(code),
                Err(_) => Err(ShapeViewError::validation(format!("unknown shape '{s}'"))),
            },
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ShapeKindRepr {
    Code(i64),
    Name(String),
}

impl TryFrom<ShapeKindRepr> for ShapeKind {
    type Error = ShapeViewError;

    fn try_from(value: ShapeKindRepr) -> Result<Self, Self::Error> {
        match value {
            ShapeKindRepr::Code(code) => Self::from_code(code),
            ShapeKindRepr::Name(name) => name.parse(),
        }
    }
}

/// Immutable view configuration.
///
/// `corner_radius` only matters for [`ShapeKind::RoundedRect`], `vector_resource` only for
/// [`ShapeKind::VectorPath`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    shape: ShapeKind,
    corner_radius: f64,
    vector_resource: ResourceHandle,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::circle()
    }
}

impl ViewConfig {
    /// Create a validated configuration.
    pub fn new(
        shape: ShapeKind,
        corner_radius: f64,
        vector_resource: ResourceHandle,
    ) -> ShapeViewResult<Self> {
        if !corner_radius.is_finite() || corner_radius < 0.0 {
            return Err(ShapeViewError::validation(format!(
                "corner radius must be finite and >= 0, got {corner_radius}"
            )));
        }
        Ok(Self {
            shape,
            corner_radius,
            vector_resource,
        })
    }

    /// Circle mask.
    pub fn circle() -> Self {
        Self {
            shape: ShapeKind::Circle,
            corner_radius: 0.0,
            vector_resource: ResourceHandle::NONE,
        }
    }

    /// Rounded rectangle mask with `corner_radius` pixels.
    pub fn rounded_rect(corner_radius: f64) -> ShapeViewResult<Self> {
        Self::new(ShapeKind::RoundedRect, corner_radius, ResourceHandle::NONE)
    }

    /// Vector mask loaded from `handle`.
    pub fn vector_path(handle: ResourceHandle) -> Self {
        Self {
            shape: ShapeKind::VectorPath,
            corner_radius: 0.0,
            vector_resource: handle,
        }
    }

    /// Mask shape.
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Corner radius in pixels.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Vector resource handle (may be unset).
    pub fn vector_resource(&self) -> ResourceHandle {
        self.vector_resource
    }
}

/// A length as written in layout attributes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Physical pixels.
    Px(f64),
    /// Density-independent pixels, scaled by the display density.
    Dp(f64),
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Dp(0.0)
    }
}

impl Dimension {
    /// Resolve to whole pixels.
    ///
    /// Rounds to nearest, but a non-zero positive length never collapses to 0 px.
    pub fn to_px(self, density: f64) -> ShapeViewResult<f64> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ShapeViewError::validation(format!(
                "display density must be finite and > 0, got {density}"
            )));
        }
        let v = match self {
            Self::Px(v) => v,
            Self::Dp(v) => v * density,
        };
        if !v.is_finite() || v < 0.0 {
            return Err(ShapeViewError::validation(format!(
                "dimension must be finite and >= 0, got {v}"
            )));
        }
        let px = (v + 0.5).floor();
        if px == 0.0 && v > 0.0 {
            return Ok(1.0);
        }
        Ok(px)
    }
}

/// Raw construction-time attributes, as carried by a layout or config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewAttributes {
    /// Mask shape.
    pub shape: ShapeKind,
    /// Corner radius for rounded rectangles.
    pub border_radius: Dimension,
    /// Vector resource for vector-path masks.
    pub svg_resource: ResourceHandle,
}

impl ViewAttributes {
    /// Parse attributes from JSON.
    pub fn from_json(s: &str) -> ShapeViewResult<Self> {
        serde_json::from_str(s).map_err(|e| ShapeViewError::serde(e.to_string()))
    }

    /// Resolve attributes against a display density into a [`ViewConfig`].
    pub fn resolve(&self, density: f64) -> ShapeViewResult<ViewConfig> {
        let corner_radius = self.border_radius.to_px(density)?;
        let cfg = ViewConfig::new(self.shape, corner_radius, self.svg_resource)?;
        tracing::debug!(
            shape = cfg.shape.name(),
            corner_radius,
            svg_resource = cfg.vector_resource.0,
            "resolved view attributes"
        );
        Ok(cfg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/config.rs"]
mod tests;
