pub mod recorded_landmark_detector;
