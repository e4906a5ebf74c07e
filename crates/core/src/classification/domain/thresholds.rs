//! Classification band edges.
//!
//! Every default here is an uncalibrated heuristic. They need tuning against
//! labelled faces; the settings file can override any of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ThresholdsError {
    #[error("threshold {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("threshold {low} ({low_value}) must not exceed {high} ({high_value})")]
    Unordered {
        low: &'static str,
        low_value: f64,
        high: &'static str,
        high_value: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    /// Height/width above this is Oblong.
    pub oblong_min_ratio: f64,
    /// Height/width below this is Round.
    pub round_max_ratio: f64,
    /// Jaw/face width above this is Square.
    pub square_min_jaw_ratio: f64,
    /// Jaw/face width below this is Heart.
    pub heart_max_jaw_ratio: f64,
    pub wide_lip_min_ratio: f64,
    pub full_lip_max_ratio: f64,
    pub wide_eye_min_ratio: f64,
    pub round_eye_max_ratio: f64,
    /// Mean jaw interior angle (degrees) above this is Angular.
    pub angular_jaw_min_deg: f64,
    /// Mean jaw interior angle (degrees) below this is Soft.
    pub soft_jaw_max_deg: f64,
    pub skin_tone: SkinToneBands,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            oblong_min_ratio: 1.5,
            round_max_ratio: 1.2,
            square_min_jaw_ratio: 0.9,
            heart_max_jaw_ratio: 0.8,
            wide_lip_min_ratio: 4.0,
            full_lip_max_ratio: 3.0,
            wide_eye_min_ratio: 3.0,
            round_eye_max_ratio: 2.0,
            angular_jaw_min_deg: 160.0,
            soft_jaw_max_deg: 140.0,
            skin_tone: SkinToneBands::default(),
        }
    }
}

impl ClassificationThresholds {
    /// Each lower band edge must not exceed its upper edge, otherwise the
    /// middle label can never be produced.
    pub fn validate(&self) -> Result<(), ThresholdsError> {
        ordered(
            ("round_max_ratio", self.round_max_ratio),
            ("oblong_min_ratio", self.oblong_min_ratio),
        )?;
        ordered(
            ("heart_max_jaw_ratio", self.heart_max_jaw_ratio),
            ("square_min_jaw_ratio", self.square_min_jaw_ratio),
        )?;
        ordered(
            ("full_lip_max_ratio", self.full_lip_max_ratio),
            ("wide_lip_min_ratio", self.wide_lip_min_ratio),
        )?;
        ordered(
            ("round_eye_max_ratio", self.round_eye_max_ratio),
            ("wide_eye_min_ratio", self.wide_eye_min_ratio),
        )?;
        ordered(
            ("soft_jaw_max_deg", self.soft_jaw_max_deg),
            ("angular_jaw_min_deg", self.angular_jaw_min_deg),
        )?;
        self.skin_tone.validate()
    }
}

/// Lower luma bound (0-255, Rec.601) of each skin tone class.
/// Anything below `tan_min` is Deep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinToneBands {
    pub fair_min: f64,
    pub light_min: f64,
    pub medium_min: f64,
    pub tan_min: f64,
}

impl Default for SkinToneBands {
    fn default() -> Self {
        Self {
            fair_min: 200.0,
            light_min: 170.0,
            medium_min: 130.0,
            tan_min: 90.0,
        }
    }
}

impl SkinToneBands {
    pub fn validate(&self) -> Result<(), ThresholdsError> {
        let tan = ("skin_tone.tan_min", self.tan_min);
        let medium = ("skin_tone.medium_min", self.medium_min);
        let light = ("skin_tone.light_min", self.light_min);
        let fair = ("skin_tone.fair_min", self.fair_min);
        ordered(tan, medium)?;
        ordered(medium, light)?;
        ordered(light, fair)
    }
}

fn ordered(
    (low, low_value): (&'static str, f64),
    (high, high_value): (&'static str, f64),
) -> Result<(), ThresholdsError> {
    for (name, value) in [(low, low_value), (high, high_value)] {
        if !value.is_finite() {
            return Err(ThresholdsError::NonFinite { name, value });
        }
    }
    if low_value > high_value {
        return Err(ThresholdsError::Unordered {
            low,
            low_value,
            high,
            high_value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(ClassificationThresholds::default().validate(), Ok(()));
    }

    #[test]
    fn test_equal_edges_are_valid() {
        let t = ClassificationThresholds {
            soft_jaw_max_deg: 150.0,
            angular_jaw_min_deg: 150.0,
            ..ClassificationThresholds::default()
        };
        assert!(t.validate().is_ok());
    }

    #[rstest]
    #[case::face_ratio(r#"{"round_max_ratio": 1.6}"#, "round_max_ratio")]
    #[case::jaw_ratio(r#"{"heart_max_jaw_ratio": 0.95}"#, "heart_max_jaw_ratio")]
    #[case::lips(r#"{"full_lip_max_ratio": 5.0}"#, "full_lip_max_ratio")]
    #[case::eyes(r#"{"wide_eye_min_ratio": 1.0}"#, "round_eye_max_ratio")]
    #[case::jaw_angle(r#"{"soft_jaw_max_deg": 170.0}"#, "soft_jaw_max_deg")]
    #[case::skin_tone(r#"{"skin_tone": {"light_min": 210}}"#, "skin_tone.light_min")]
    fn test_unordered_edges_rejected(#[case] json: &str, #[case] low_name: &str) {
        let t: ClassificationThresholds = serde_json::from_str(json).unwrap();
        match t.validate() {
            Err(ThresholdsError::Unordered { low, .. }) => assert_eq!(low, low_name),
            other => panic!("expected unordered error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_edge_rejected() {
        let t = ClassificationThresholds {
            oblong_min_ratio: f64::INFINITY,
            ..ClassificationThresholds::default()
        };
        assert!(matches!(
            t.validate(),
            Err(ThresholdsError::NonFinite {
                name: "oblong_min_ratio",
                ..
            })
        ));
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let t: ClassificationThresholds =
            serde_json::from_str(r#"{"oblong_min_ratio": 1.6, "skin_tone": {"tan_min": 80}}"#)
                .unwrap();
        assert_relative_eq!(t.oblong_min_ratio, 1.6);
        assert_relative_eq!(t.round_max_ratio, 1.2);
        assert_relative_eq!(t.skin_tone.tan_min, 80.0);
        assert_relative_eq!(t.skin_tone.fair_min, 200.0);
    }
}
