pub mod color;
pub mod makeup_configuration;
pub mod overlay_renderer;
