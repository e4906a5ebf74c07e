use crate::shared::frame::Frame;
use crate::shared::landmark_set::LandmarkSet;

/// Domain interface for per-frame face landmark detection.
///
/// `Ok(None)` means no face in the frame, which is a normal outcome.
/// Implementations may be stateful (e.g. replaying a recording), hence `&mut self`.
pub trait LandmarkDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Option<LandmarkSet>, Box<dyn std::error::Error>>;
}
