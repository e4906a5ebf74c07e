use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detection::domain::landmark_detector::LandmarkDetector;
use crate::shared::frame::Frame;
use crate::shared::landmark_set::LandmarkSet;

#[derive(Error, Debug)]
pub enum RecordingError {
    #[error("failed to read recording {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid recording {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("recording frame {index} has a landmark with fewer than two coordinates")]
    ShortLandmark { index: usize },
    #[error("recording frame {index} appears more than once")]
    DuplicateFrame { index: usize },
}

/// One captured frame: detector output or `null` when no face was found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    pub index: usize,
    #[serde(default)]
    pub landmarks: Option<Vec<Vec<f64>>>,
}

/// Landmark detector output captured from a live session, as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkRecording {
    pub width: u32,
    pub height: u32,
    pub frames: Vec<RecordedFrame>,
}

impl LandmarkRecording {
    pub fn load(path: &Path) -> Result<Self, RecordingError> {
        let json = fs::read_to_string(path).map_err(|source| RecordingError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| RecordingError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Frame indices in recording order.
    pub fn frame_indices(&self) -> Vec<usize> {
        self.frames.iter().map(|f| f.index).collect()
    }
}

/// Replays a [`LandmarkRecording`], keyed by [`Frame::index`].
///
/// Frames absent from the recording detect no face. Pixel data is ignored.
pub struct RecordedLandmarkDetector {
    by_index: HashMap<usize, Option<LandmarkSet>>,
}

impl RecordedLandmarkDetector {
    pub fn new(recording: &LandmarkRecording) -> Result<Self, RecordingError> {
        let mut by_index = HashMap::with_capacity(recording.frames.len());
        for frame in &recording.frames {
            let landmarks = match &frame.landmarks {
                None => None,
                Some(rows) => Some(
                    LandmarkSet::from_rows(rows)
                        .ok_or(RecordingError::ShortLandmark { index: frame.index })?,
                ),
            };
            if by_index.insert(frame.index, landmarks).is_some() {
                return Err(RecordingError::DuplicateFrame { index: frame.index });
            }
        }
        log::info!("Loaded landmark recording with {} frames", by_index.len());
        Ok(Self { by_index })
    }
}

impl LandmarkDetector for RecordedLandmarkDetector {
    fn detect(
        &mut self,
        frame: &Frame,
    ) -> Result<Option<LandmarkSet>, Box<dyn std::error::Error>> {
        Ok(self.by_index.get(&frame.index()).cloned().flatten())
    }
}
