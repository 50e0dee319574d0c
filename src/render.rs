pub mod cache;
pub mod compose;
pub mod mask;
pub mod raster;
pub mod source;
pub mod surface;
