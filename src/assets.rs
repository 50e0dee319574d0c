pub mod decode;
pub mod resources;
pub mod source;
pub mod svg_raster;
