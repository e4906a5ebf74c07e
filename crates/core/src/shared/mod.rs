pub mod constants;
pub mod frame;
pub mod image_io;
pub mod landmark_set;
pub mod point;
pub mod polygon;

#[cfg(test)]
pub(crate) mod synthetic_face;
