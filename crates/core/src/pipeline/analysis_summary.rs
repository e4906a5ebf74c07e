use std::collections::BTreeMap;

use serde::Serialize;

use crate::classification::domain::facial_traits::{
    EyeShape, FaceShape, JawlineType, LipShape, SkinTone,
};

use super::analyze_frame_use_case::FrameAnalysis;

/// Label tallies over a session of analysed frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub frames: usize,
    pub frames_with_face: usize,
    pub face_shapes: BTreeMap<FaceShape, usize>,
    pub eye_shapes: BTreeMap<EyeShape, usize>,
    pub lip_shapes: BTreeMap<LipShape, usize>,
    pub jawline_types: BTreeMap<JawlineType, usize>,
    pub skin_tones: BTreeMap<SkinTone, usize>,
}

impl AnalysisSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, analysis: &FrameAnalysis) {
        self.frames += 1;
        let Some(c) = &analysis.classification else {
            return;
        };
        self.frames_with_face += 1;
        *self.face_shapes.entry(c.face_shape).or_default() += 1;
        *self.eye_shapes.entry(c.eye_shape).or_default() += 1;
        *self.lip_shapes.entry(c.lip_shape).or_default() += 1;
        *self.jawline_types.entry(c.jawline_type).or_default() += 1;
        if let Some(tone) = c.skin_tone {
            *self.skin_tones.entry(tone).or_default() += 1;
        }
    }

    pub fn most_common_face_shape(&self) -> Option<FaceShape> {
        most_common(&self.face_shapes)
    }

    pub fn most_common_eye_shape(&self) -> Option<EyeShape> {
        most_common(&self.eye_shapes)
    }

    pub fn most_common_lip_shape(&self) -> Option<LipShape> {
        most_common(&self.lip_shapes)
    }

    pub fn most_common_jawline_type(&self) -> Option<JawlineType> {
        most_common(&self.jawline_types)
    }

    pub fn most_common_skin_tone(&self) -> Option<SkinTone> {
        most_common(&self.skin_tones)
    }

    /// One-line verdict, or `None` if no frame was classified.
    pub fn summary_string(&self) -> Option<String> {
        let face = self.most_common_face_shape()?;
        let eyes = self.most_common_eye_shape()?;
        let lips = self.most_common_lip_shape()?;
        let jaw = self.most_common_jawline_type()?;
        let mut line = format!(
            "{face} face, {eyes} eyes, {lips} lips, {jaw} jawline ({}/{} frames)",
            self.frames_with_face, self.frames
        );
        if let Some(tone) = self.most_common_skin_tone() {
            line.push_str(&format!(", {tone} skin"));
        }
        Some(line)
    }
}

/// Highest count wins; ties go to the earliest label in declaration order.
fn most_common<T: Copy + Ord>(counts: &BTreeMap<T, usize>) -> Option<T> {
    counts
        .iter()
        .rev()
        .max_by_key(|(_, &n)| n)
        .map(|(&label, _)| label)
}
