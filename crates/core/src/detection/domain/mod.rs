pub mod face_presence;
pub mod landmark_detector;
