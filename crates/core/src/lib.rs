pub mod classification;
pub mod detection;
pub mod makeup;
pub mod mapping;
pub mod pipeline;
pub mod shared;
