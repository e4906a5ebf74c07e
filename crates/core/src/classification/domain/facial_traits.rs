use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    Oval,
    Oblong,
    Round,
    Square,
    Heart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeShape {
    Almond,
    Wide,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LipShape {
    Average,
    Wide,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JawlineType {
    Average,
    Angular,
    Soft,
}

/// Coarse skin lightness class from sampled cheek pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinTone {
    Fair,
    Light,
    Medium,
    Tan,
    Deep,
}

impl FaceShape {
    pub const ALL: &[FaceShape] = &[
        FaceShape::Oval,
        FaceShape::Oblong,
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Heart,
    ];
}

impl std::fmt::Display for FaceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceShape::Oval => write!(f, "Oval"),
            FaceShape::Oblong => write!(f, "Oblong"),
            FaceShape::Round => write!(f, "Round"),
            FaceShape::Square => write!(f, "Square"),
            FaceShape::Heart => write!(f, "Heart"),
        }
    }
}

impl std::fmt::Display for EyeShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EyeShape::Almond => write!(f, "Almond"),
            EyeShape::Wide => write!(f, "Wide"),
            EyeShape::Round => write!(f, "Round"),
        }
    }
}

impl std::fmt::Display for LipShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LipShape::Average => write!(f, "Average"),
            LipShape::Wide => write!(f, "Wide"),
            LipShape::Full => write!(f, "Full"),
        }
    }
}

impl std::fmt::Display for JawlineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JawlineType::Average => write!(f, "Average"),
            JawlineType::Angular => write!(f, "Angular"),
            JawlineType::Soft => write!(f, "Soft"),
        }
    }
}

impl std::fmt::Display for SkinTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinTone::Fair => write!(f, "Fair"),
            SkinTone::Light => write!(f, "Light"),
            SkinTone::Medium => write!(f, "Medium"),
            SkinTone::Tan => write!(f, "Tan"),
            SkinTone::Deep => write!(f, "Deep"),
        }
    }
}
