use serde::Serialize;

use crate::shared::landmark_set::LandmarkSet;

use super::facial_measurements::FacialMeasurements;
use super::facial_traits::{EyeShape, FaceShape, JawlineType, LipShape, SkinTone};
use super::thresholds::ClassificationThresholds;

/// Per-frame classification labels. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FacialClassification {
    pub face_shape: FaceShape,
    pub eye_shape: EyeShape,
    pub lip_shape: LipShape,
    pub jawline_type: JawlineType,
    /// Present only when frame pixels were sampled.
    pub skin_tone: Option<SkinTone>,
}

/// Stateless threshold-band classifier over landmark geometry.
#[derive(Debug, Clone, Default)]
pub struct FacialClassifier {
    thresholds: ClassificationThresholds,
}

impl FacialClassifier {
    pub fn new(thresholds: ClassificationThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ClassificationThresholds {
        &self.thresholds
    }

    /// Classifies geometry only; `skin_tone` is left empty.
    ///
    /// Returns `None` when the set is shorter than a full mesh or its
    /// geometry is degenerate. Callers treat that as "no face".
    pub fn classify(&self, landmarks: &LandmarkSet) -> Option<FacialClassification> {
        let m = FacialMeasurements::from_landmarks(landmarks)?;
        Some(self.classify_measurements(&m))
    }

    pub fn classify_measurements(&self, m: &FacialMeasurements) -> FacialClassification {
        let t = &self.thresholds;
        FacialClassification {
            face_shape: classify_face_shape(m.height_width_ratio, m.jaw_width_ratio, t),
            eye_shape: classify_eye_shape(m.eye_ratio, t),
            lip_shape: classify_lip_shape(m.lip_ratio, t),
            jawline_type: classify_jawline(m.jaw_angle_deg, t),
            skin_tone: None,
        }
    }
}

pub fn classify_face_shape(
    height_width_ratio: f64,
    jaw_width_ratio: f64,
    t: &ClassificationThresholds,
) -> FaceShape {
    if height_width_ratio > t.oblong_min_ratio {
        FaceShape::Oblong
    } else if height_width_ratio < t.round_max_ratio {
        FaceShape::Round
    } else if jaw_width_ratio > t.square_min_jaw_ratio {
        FaceShape::Square
    } else if jaw_width_ratio < t.heart_max_jaw_ratio {
        FaceShape::Heart
    } else {
        FaceShape::Oval
    }
}

pub fn classify_lip_shape(ratio: f64, t: &ClassificationThresholds) -> LipShape {
    if ratio > t.wide_lip_min_ratio {
        LipShape::Wide
    } else if ratio < t.full_lip_max_ratio {
        LipShape::Full
    } else {
        LipShape::Average
    }
}

pub fn classify_eye_shape(ratio: f64, t: &ClassificationThresholds) -> EyeShape {
    if ratio > t.wide_eye_min_ratio {
        EyeShape::Wide
    } else if ratio < t.round_eye_max_ratio {
        EyeShape::Round
    } else {
        EyeShape::Almond
    }
}

pub fn classify_jawline(mean_angle_deg: f64, t: &ClassificationThresholds) -> JawlineType {
    if mean_angle_deg > t.angular_jaw_min_deg {
        JawlineType::Angular
    } else if mean_angle_deg < t.soft_jaw_max_deg {
        JawlineType::Soft
    } else {
        JawlineType::Average
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::landmark_set::MESH_LANDMARK_COUNT;
    use crate::shared::point::Point;
    use crate::shared::synthetic_face::FaceProportions;
    use rstest::rstest;

    fn classify(face: FaceProportions) -> FacialClassification {
        FacialClassifier::default().classify(&face.build()).unwrap()
    }

    // ── Face shape ──────────────────────────────────────────────────

    #[test]
    fn test_tall_face_is_oblong() {
        let face = FaceProportions {
            height_ratio: 1.6,
            ..FaceProportions::default()
        };
        assert_eq!(classify(face).face_shape, FaceShape::Oblong);
    }

    #[test]
    fn test_short_face_is_round() {
        let face = FaceProportions {
            height_ratio: 1.1,
            ..FaceProportions::default()
        };
        assert_eq!(classify(face).face_shape, FaceShape::Round);
    }

    #[rstest]
    #[case::square(0.95, FaceShape::Square)]
    #[case::heart(0.75, FaceShape::Heart)]
    #[case::oval(0.85, FaceShape::Oval)]
    fn test_mid_ratio_uses_jaw_width(#[case] jaw_ratio: f64, #[case] expected: FaceShape) {
        let face = FaceProportions {
            height_ratio: 1.35,
            jaw_ratio,
            ..FaceProportions::default()
        };
        assert_eq!(classify(face).face_shape, expected);
    }

    #[rstest]
    #[case::at_oblong_edge(1.5, 0.85, FaceShape::Oval)]
    #[case::at_round_edge(1.2, 0.85, FaceShape::Oval)]
    #[case::at_square_edge(1.35, 0.9, FaceShape::Oval)]
    #[case::at_heart_edge(1.35, 0.8, FaceShape::Oval)]
    #[case::tall_ignores_jaw(1.7, 0.5, FaceShape::Oblong)]
    #[case::short_ignores_jaw(1.0, 1.2, FaceShape::Round)]
    fn test_face_shape_band_edges(
        #[case] ratio: f64,
        #[case] jaw: f64,
        #[case] expected: FaceShape,
    ) {
        let t = ClassificationThresholds::default();
        assert_eq!(classify_face_shape(ratio, jaw, &t), expected);
    }

    // ── Lips and eyes ───────────────────────────────────────────────

    #[rstest]
    #[case::wide(4.5, LipShape::Wide)]
    #[case::full(2.5, LipShape::Full)]
    #[case::average(3.5, LipShape::Average)]
    #[case::upper_edge(4.0, LipShape::Average)]
    #[case::lower_edge(3.0, LipShape::Average)]
    fn test_lip_shape(#[case] ratio: f64, #[case] expected: LipShape) {
        let t = ClassificationThresholds::default();
        assert_eq!(classify_lip_shape(ratio, &t), expected);
    }

    #[rstest]
    #[case::wide(4.5, LipShape::Wide)]
    #[case::full(2.5, LipShape::Full)]
    #[case::average(3.5, LipShape::Average)]
    fn test_lip_shape_from_landmarks(#[case] lip_ratio: f64, #[case] expected: LipShape) {
        let face = FaceProportions {
            lip_ratio,
            ..FaceProportions::default()
        };
        assert_eq!(classify(face).lip_shape, expected);
    }

    #[rstest]
    #[case::wide(3.5, EyeShape::Wide)]
    #[case::round(1.5, EyeShape::Round)]
    #[case::almond(2.5, EyeShape::Almond)]
    #[case::upper_edge(3.0, EyeShape::Almond)]
    #[case::lower_edge(2.0, EyeShape::Almond)]
    fn test_eye_shape(#[case] ratio: f64, #[case] expected: EyeShape) {
        let t = ClassificationThresholds::default();
        assert_eq!(classify_eye_shape(ratio, &t), expected);
    }

    #[test]
    fn test_eye_shape_from_landmarks() {
        let face = FaceProportions {
            eye_ratio: 3.4,
            ..FaceProportions::default()
        };
        assert_eq!(classify(face).eye_shape, EyeShape::Wide);
    }

    // ── Jawline ─────────────────────────────────────────────────────

    #[rstest]
    #[case::angular(170.0, JawlineType::Angular)]
    #[case::soft(120.0, JawlineType::Soft)]
    #[case::average(150.0, JawlineType::Average)]
    #[case::upper_edge(160.0, JawlineType::Average)]
    #[case::lower_edge(140.0, JawlineType::Average)]
    fn test_jawline(#[case] angle: f64, #[case] expected: JawlineType) {
        let t = ClassificationThresholds::default();
        assert_eq!(classify_jawline(angle, &t), expected);
    }

    #[rstest]
    #[case::smooth_curve(0.0, JawlineType::Angular)]
    #[case::slight_zigzag(0.03, JawlineType::Average)]
    #[case::sharp_zigzag(0.08, JawlineType::Soft)]
    fn test_jawline_from_landmarks(#[case] jaw_zigzag: f64, #[case] expected: JawlineType) {
        let face = FaceProportions {
            jaw_zigzag,
            ..FaceProportions::default()
        };
        assert_eq!(classify(face).jawline_type, expected);
    }

    #[rstest]
    #[case::translation(0.0, Point::new(315.0, -42.0))]
    #[case::rotation(0.7, Point::new(0.0, 0.0))]
    #[case::both(-2.1, Point::new(-80.0, 1200.0))]
    fn test_classification_invariant_under_rigid_motion(
        #[case] radians: f64,
        #[case] offset: Point,
    ) {
        let classifier = FacialClassifier::default();
        let base = FaceProportions::default().build();
        let moved = base.map_points(|p| p.rotated(radians) + offset);

        let a = classifier.classify(&base).unwrap();
        let b = classifier.classify(&moved).unwrap();
        assert_eq!(a, b);

        let ma = FacialMeasurements::from_landmarks(&base).unwrap();
        let mb = FacialMeasurements::from_landmarks(&moved).unwrap();
        approx::assert_relative_eq!(ma.jaw_angle_deg, mb.jaw_angle_deg, epsilon = 1e-6);
    }

    // ── Absent results ──────────────────────────────────────────────

    #[rstest]
    #[case::empty(0)]
    #[case::five_point(5)]
    #[case::dlib(68)]
    #[case::one_short(MESH_LANDMARK_COUNT - 1)]
    fn test_insufficient_landmarks_is_none(#[case] count: usize) {
        let set = LandmarkSet::new(vec![Point::new(1.0, 2.0); count]);
        assert!(FacialClassifier::default().classify(&set).is_none());
    }

    #[test]
    fn test_geometry_leaves_skin_tone_empty() {
        assert!(classify(FaceProportions::default()).skin_tone.is_none());
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = ClassificationThresholds {
            oblong_min_ratio: 1.3,
            ..ClassificationThresholds::default()
        };
        let c = FacialClassifier::new(thresholds);
        let result = c.classify(&FaceProportions::default().build()).unwrap();
        assert_eq!(result.face_shape, FaceShape::Oblong);
    }
}
