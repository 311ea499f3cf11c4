pub mod config;
pub mod overlay;
pub mod pose;
pub mod render;
