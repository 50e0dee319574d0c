pub mod config;
pub mod measure;
pub mod shape_image_view;
