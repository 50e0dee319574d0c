use crate::foundation::core::Size;
use crate::view::config::ShapeKind;

/// How a parent constrains one axis of a child during measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureMode {
    /// The child gets exactly `size`.
    Exactly,
    /// The child may be as large as it wants up to `size`.
    AtMost,
    /// No constraint; `size` is ignored.
    Unspecified,
}

/// One-axis measurement constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MeasureSpec {
    /// Constraint kind.
    pub mode: MeasureMode,
    /// Constraint size in pixels.
    pub size: u32,
}

impl MeasureSpec {
    /// `Exactly(size)`.
    pub fn exactly(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    /// `AtMost(size)`.
    pub fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// No constraint.
    pub fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0,
        }
    }

    /// Reconcile a desired size with this constraint.
    pub fn resolve(self, desired: u32) -> u32 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }
}

/// Measure a shape view whose content wants `desired` pixels.
///
/// Circles are forced square at `min(width, height)`; other shapes keep the resolved size.
pub fn measure_shape(
    shape: ShapeKind,
    desired: Size,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> Size {
    let width = width_spec.resolve(desired.width);
    let height = height_spec.resolve(desired.height);
    match shape {
        ShapeKind::Circle => {
            let side = width.min(height);
            Size::new(side, side)
        }
        ShapeKind::RoundedRect | ShapeKind::VectorPath => Size::new(width, height),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/measure.rs"]
mod tests;
