use crate::shared::constants::{
    EyeIndices, CHIN, FOREHEAD_CENTER, JAW_POLYLINE, LEFT_EYE, LEFT_JAW, LEFT_TEMPLE,
    LIP_LEFT_CORNER, LIP_RIGHT_CORNER, LOWER_LIP_CENTER, RIGHT_EYE, RIGHT_JAW, RIGHT_TEMPLE,
    UPPER_LIP_CENTER,
};
use crate::shared::landmark_set::{LandmarkSet, MESH_LANDMARK_COUNT};
use crate::shared::point::{interior_angle_deg, Point};

/// Lengths below this are treated as collapsed geometry.
const MIN_LENGTH: f64 = 1e-9;

/// Ratios derived from a landmark set, the inputs to every classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacialMeasurements {
    /// Forehead-to-chin over temple-to-temple.
    pub height_width_ratio: f64,
    /// Jaw width over temple width.
    pub jaw_width_ratio: f64,
    pub lip_ratio: f64,
    /// Mean of both eyes' width/height.
    pub eye_ratio: f64,
    /// Mean interior angle along the jaw contour, in degrees.
    pub jaw_angle_deg: f64,
}

impl FacialMeasurements {
    /// Returns `None` for a short set or degenerate geometry.
    pub fn from_landmarks(landmarks: &LandmarkSet) -> Option<Self> {
        if !landmarks.covers(MESH_LANDMARK_COUNT) {
            return None;
        }
        if !landmarks.points().iter().all(Point::is_finite) {
            return None;
        }

        let pt = |i: usize| landmarks.get(i);

        let face_height = pt(FOREHEAD_CENTER)?.distance(&pt(CHIN)?);
        let face_width = pt(LEFT_TEMPLE)?.distance(&pt(RIGHT_TEMPLE)?);
        let jaw_width = pt(LEFT_JAW)?.distance(&pt(RIGHT_JAW)?);
        let lip_width = pt(LIP_LEFT_CORNER)?.distance(&pt(LIP_RIGHT_CORNER)?);
        let lip_height = pt(UPPER_LIP_CENTER)?.distance(&pt(LOWER_LIP_CENTER)?);

        let left_eye = eye_ratio(landmarks, LEFT_EYE)?;
        let right_eye = eye_ratio(landmarks, RIGHT_EYE)?;

        let jaw = landmarks.select(JAW_POLYLINE)?;
        let jaw_angle_deg = mean_interior_angle(&jaw)?;

        Some(Self {
            height_width_ratio: checked_ratio(face_height, face_width)?,
            jaw_width_ratio: checked_ratio(jaw_width, face_width)?,
            lip_ratio: checked_ratio(lip_width, lip_height)?,
            eye_ratio: (left_eye + right_eye) / 2.0,
            jaw_angle_deg,
        })
    }
}

/// Mean interior angle over every inner vertex of an open polyline.
///
/// `None` for fewer than three points or when consecutive points coincide.
pub fn mean_interior_angle(polyline: &[Point]) -> Option<f64> {
    if polyline.len() < 3 {
        return None;
    }
    let angles = polyline
        .windows(3)
        .map(|w| interior_angle_deg(w[0], w[1], w[2]))
        .collect::<Option<Vec<f64>>>()?;
    Some(angles.iter().sum::<f64>() / angles.len() as f64)
}

fn eye_ratio(landmarks: &LandmarkSet, (a, b, top, bottom): EyeIndices) -> Option<f64> {
    let width = landmarks.get(a)?.distance(&landmarks.get(b)?);
    let height = landmarks.get(top)?.distance(&landmarks.get(bottom)?);
    checked_ratio(width, height)
}

fn checked_ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator < MIN_LENGTH {
        return None;
    }
    Some(numerator / denominator)
}
