pub mod facial_classifier;
pub mod facial_measurements;
pub mod facial_traits;
pub mod skin_tone;
pub mod thresholds;
