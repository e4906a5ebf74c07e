use serde::Serialize;

use crate::classification::domain::facial_classifier::{FacialClassification, FacialClassifier};
use crate::classification::domain::skin_tone::estimate_skin_tone;
use crate::detection::domain::face_presence::FacePresenceTracker;
use crate::detection::domain::landmark_detector::LandmarkDetector;
use crate::makeup::domain::makeup_configuration::{MakeupConfiguration, Overlay};
use crate::makeup::domain::overlay_renderer::OverlayRenderer;
use crate::mapping::domain::makeup_region::{MakeupRegion, RegionKind};
use crate::mapping::domain::region_mapper::MakeupRegionMapper;
use crate::shared::frame::Frame;
use crate::shared::landmark_set::MESH_LANDMARK_COUNT;

use super::analysis_settings::AnalysisSettings;

/// Result of one detection cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameAnalysis {
    pub frame_index: usize,
    /// Debounced presence flag, not the raw detector output.
    pub face_present: bool,
    pub classification: Option<FacialClassification>,
    pub regions: Vec<MakeupRegion>,
    pub overlays: Vec<Overlay>,
}

impl FrameAnalysis {
    fn absent(frame_index: usize, face_present: bool) -> Self {
        Self {
            frame_index,
            face_present,
            classification: None,
            regions: Vec::new(),
            overlays: Vec::new(),
        }
    }
}

/// Per-frame pipeline: detect → debounce → classify → map → plan overlays → render.
///
/// Frames must be fed in capture order; the presence debounce is the only
/// state carried between calls.
pub struct AnalyzeFrameUseCase {
    detector: Box<dyn LandmarkDetector>,
    classifier: FacialClassifier,
    mapper: MakeupRegionMapper,
    presence: FacePresenceTracker,
    makeup: MakeupConfiguration,
    renderer: Option<Box<dyn OverlayRenderer>>,
    sample_skin_tone: bool,
}

impl AnalyzeFrameUseCase {
    pub fn new(detector: Box<dyn LandmarkDetector>, settings: &AnalysisSettings) -> Self {
        Self {
            detector,
            classifier: FacialClassifier::new(settings.thresholds),
            mapper: MakeupRegionMapper::new(),
            presence: FacePresenceTracker::new(settings.presence_frames),
            makeup: settings.makeup.clone(),
            renderer: None,
            sample_skin_tone: false,
        }
    }

    /// Draw planned overlays into each frame.
    pub fn with_renderer(mut self, renderer: Box<dyn OverlayRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Estimate skin tone from cheek pixels. Only meaningful for real frames.
    pub fn with_skin_tone_sampling(mut self, enabled: bool) -> Self {
        self.sample_skin_tone = enabled;
        self
    }

    pub fn execute(
        &mut self,
        frame: &mut Frame,
    ) -> Result<FrameAnalysis, Box<dyn std::error::Error>> {
        let landmarks = self
            .detector
            .detect(frame)?
            .filter(|l| l.covers(MESH_LANDMARK_COUNT));
        let present = self.presence.update(landmarks.is_some());

        let Some(landmarks) = landmarks.filter(|_| present) else {
            log::debug!("Frame {}: no classifiable face", frame.index());
            return Ok(FrameAnalysis::absent(frame.index(), present));
        };

        let mut classification = self.classifier.classify(&landmarks);
        let regions = self.mapper.map(&landmarks).unwrap_or_default();

        if self.sample_skin_tone {
            if let Some(c) = classification.as_mut() {
                let cheeks: Vec<_> = regions
                    .iter()
                    .filter(|r| matches!(r.kind, RegionKind::LeftCheek | RegionKind::RightCheek))
                    .map(|r| &r.polygon)
                    .collect();
                c.skin_tone =
                    estimate_skin_tone(frame, &cheeks, &self.classifier.thresholds().skin_tone);
            }
        }

        let overlays = self.makeup.plan_overlays(&regions);
        if let Some(renderer) = &self.renderer {
            renderer.render(frame, &overlays)?;
        }

        if let Some(c) = &classification {
            log::debug!(
                "Frame {}: face={} eyes={} lips={} jaw={} ({} overlays)",
                frame.index(),
                c.face_shape,
                c.eye_shape,
                c.lip_shape,
                c.jawline_type,
                overlays.len()
            );
        }

        Ok(FrameAnalysis {
            frame_index: frame.index(),
            face_present: present,
            classification,
            regions,
            overlays,
        })
    }
}
