/// Convenience result type used across shapeview.
pub type ShapeViewResult<T> = Result<T, ShapeViewError>;

/// Top-level error taxonomy used by the library APIs.
///
/// Drawing never surfaces these to the host; they are returned from construction and
/// configuration paths, and logged when a draw pass has to degrade.
#[derive(thiserror::Error, Debug)]
pub enum ShapeViewError {
    /// Invalid user-provided configuration or image data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or unreadable vector resources.
    #[error("resource error: {0}")]
    Resource(String),

    /// Errors while allocating or filling offscreen rasters.
    #[error("raster error: {0}")]
    Raster(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShapeViewError {
    /// Build a [`ShapeViewError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShapeViewError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    /// Build a [`ShapeViewError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// Build a [`ShapeViewError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
