use serde::{Deserialize, Serialize};

use crate::shared::point::Point;
use crate::shared::polygon::Polygon;

/// Named facial areas that overlays are drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    FaceOval,
    Forehead,
    LeftCheek,
    RightCheek,
    LeftEyelid,
    RightEyelid,
    Lips,
}

impl RegionKind {
    pub const ALL: &[RegionKind] = &[
        RegionKind::FaceOval,
        RegionKind::Forehead,
        RegionKind::LeftCheek,
        RegionKind::RightCheek,
        RegionKind::LeftEyelid,
        RegionKind::RightEyelid,
        RegionKind::Lips,
    ];
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionKind::FaceOval => write!(f, "face oval"),
            RegionKind::Forehead => write!(f, "forehead"),
            RegionKind::LeftCheek => write!(f, "left cheek"),
            RegionKind::RightCheek => write!(f, "right cheek"),
            RegionKind::LeftEyelid => write!(f, "left eyelid"),
            RegionKind::RightEyelid => write!(f, "right eyelid"),
            RegionKind::Lips => write!(f, "lips"),
        }
    }
}

/// A region polygon with its precomputed center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MakeupRegion {
    pub kind: RegionKind,
    pub polygon: Polygon,
    pub center: Point,
}

impl MakeupRegion {
    /// `None` for an empty polygon.
    pub fn new(kind: RegionKind, polygon: Polygon) -> Option<Self> {
        let center = polygon.center()?;
        Some(Self {
            kind,
            polygon,
            center,
        })
    }
}
