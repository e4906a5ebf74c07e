//! Synthetic 468-point faces with controllable proportions, for tests.

use super::constants::*;
use super::landmark_set::{LandmarkSet, MESH_LANDMARK_COUNT};
use super::point::Point;

/// Proportions of a synthetic face centered on the origin, y pointing down.
#[derive(Clone, Copy, Debug)]
pub struct FaceProportions {
    pub width: f64,
    /// Face height divided by temple width.
    pub height_ratio: f64,
    /// Jaw width divided by temple width.
    pub jaw_ratio: f64,
    /// Lip width divided by lip height.
    pub lip_ratio: f64,
    /// Eye width divided by eye height.
    pub eye_ratio: f64,
    /// Fraction by which every other jaw contour point is pulled toward the
    /// center. Zero gives a smooth curve; larger values sharpen the interior
    /// angles along the jaw.
    pub jaw_zigzag: f64,
}

impl Default for FaceProportions {
    fn default() -> Self {
        Self {
            width: 200.0,
            height_ratio: 1.35,
            jaw_ratio: 0.85,
            lip_ratio: 3.5,
            eye_ratio: 2.5,
            jaw_zigzag: 0.0,
        }
    }
}

impl FaceProportions {
    pub fn build(&self) -> LandmarkSet {
        let w = self.width;
        let h = w * self.height_ratio;

        // Filler positions keep every point finite and distinct.
        let mut points: Vec<Point> = (0..MESH_LANDMARK_COUNT)
            .map(|i| {
                let t = i as f64 * 0.37;
                Point::new(w * 0.2 * t.cos(), h * 0.2 * t.sin())
            })
            .collect();

        // Lower half-ellipse for the jaw contour.
        let segments = (JAW_POLYLINE.len() - 1) as f64;
        for (k, &idx) in JAW_POLYLINE.iter().enumerate() {
            let theta = std::f64::consts::PI * (1.0 - k as f64 / segments);
            let scale = if k % 2 == 1 { 1.0 - self.jaw_zigzag } else { 1.0 };
            points[idx] = Point::new(
                w / 2.0 * theta.cos() * scale,
                h / 2.0 * theta.sin() * scale,
            );
        }

        points[FOREHEAD_CENTER] = Point::new(0.0, -h / 2.0);
        points[CHIN] = Point::new(0.0, h / 2.0);
        points[LEFT_TEMPLE] = Point::new(-w / 2.0, -h * 0.1);
        points[RIGHT_TEMPLE] = Point::new(w / 2.0, -h * 0.1);

        let jaw = w * self.jaw_ratio;
        points[LEFT_JAW] = Point::new(-jaw / 2.0, h * 0.3);
        points[RIGHT_JAW] = Point::new(jaw / 2.0, h * 0.3);

        let lip_w = w * 0.4;
        let lip_h = lip_w / self.lip_ratio;
        let lip_y = h * 0.25;
        points[LIP_LEFT_CORNER] = Point::new(-lip_w / 2.0, lip_y);
        points[LIP_RIGHT_CORNER] = Point::new(lip_w / 2.0, lip_y);
        points[UPPER_LIP_CENTER] = Point::new(0.0, lip_y - lip_h / 2.0);
        points[LOWER_LIP_CENTER] = Point::new(0.0, lip_y + lip_h / 2.0);

        let eye_w = w * 0.2;
        let eye_h = eye_w / self.eye_ratio;
        for (eye, cx) in [(LEFT_EYE, -w / 4.0), (RIGHT_EYE, w / 4.0)] {
            let (a, b, top, bottom) = eye;
            let cy = -h * 0.05;
            points[a] = Point::new(cx - eye_w / 2.0, cy);
            points[b] = Point::new(cx + eye_w / 2.0, cy);
            points[top] = Point::new(cx, cy - eye_h / 2.0);
            points[bottom] = Point::new(cx, cy + eye_h / 2.0);
        }

        LandmarkSet::new(points)
    }
}
