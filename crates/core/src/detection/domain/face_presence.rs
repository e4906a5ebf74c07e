/// Consecutive frames required before the presence flag flips.
pub const DEFAULT_PRESENCE_FRAMES: usize = 3;

/// Debounced "face detected" flag.
///
/// Flips to present after `required_frames` consecutive detections and back
/// to absent after the same number of consecutive misses. Single detector
/// glitches in either direction are ignored.
#[derive(Debug, Clone)]
pub struct FacePresenceTracker {
    required_frames: usize,
    present: bool,
    /// Consecutive frames disagreeing with `present`.
    streak: usize,
}

impl FacePresenceTracker {
    /// `required_frames` of 0 behaves like 1 (no debounce).
    pub fn new(required_frames: usize) -> Self {
        Self {
            required_frames: required_frames.max(1),
            present: false,
            streak: 0,
        }
    }

    pub fn required_frames(&self) -> usize {
        self.required_frames
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Feeds one frame's raw detection outcome; returns the debounced flag.
    pub fn update(&mut self, detected: bool) -> bool {
        if detected == self.present {
            self.streak = 0;
            return self.present;
        }

        self.streak += 1;
        if self.streak >= self.required_frames {
            self.present = detected;
            self.streak = 0;
            log::debug!(
                "Face presence changed to {} after {} frames",
                self.present,
                self.required_frames
            );
        }
        self.present
    }

    pub fn reset(&mut self) {
        self.present = false;
        self.streak = 0;
    }
}

impl Default for FacePresenceTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PRESENCE_FRAMES)
    }
}
