use crate::shared::constants::{
    FACE_OVAL, FOREHEAD, LEFT_CHEEK, LEFT_EYELID, LIPS, RIGHT_CHEEK, RIGHT_EYELID,
};
use crate::shared::landmark_set::{LandmarkSet, MESH_LANDMARK_COUNT};
use crate::shared::polygon::Polygon;

use super::makeup_region::{MakeupRegion, RegionKind};

/// Maps a full landmark set to the fixed set of overlay regions.
///
/// Pure index lookup: no classification, no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeupRegionMapper;

impl MakeupRegionMapper {
    pub fn new() -> Self {
        Self
    }

    /// All regions in [`RegionKind::ALL`] order, or `None` for a short set.
    pub fn map(&self, landmarks: &LandmarkSet) -> Option<Vec<MakeupRegion>> {
        if !landmarks.covers(MESH_LANDMARK_COUNT) {
            return None;
        }
        RegionKind::ALL
            .iter()
            .map(|&kind| self.map_region(landmarks, kind))
            .collect()
    }

    pub fn map_region(&self, landmarks: &LandmarkSet, kind: RegionKind) -> Option<MakeupRegion> {
        let vertices = landmarks.select(region_indices(kind))?;
        MakeupRegion::new(kind, Polygon::new(vertices))
    }
}

pub fn region_indices(kind: RegionKind) -> &'static [usize] {
    match kind {
        RegionKind::FaceOval => FACE_OVAL,
        RegionKind::Forehead => FOREHEAD,
        RegionKind::LeftCheek => LEFT_CHEEK,
        RegionKind::RightCheek => RIGHT_CHEEK,
        RegionKind::LeftEyelid => LEFT_EYELID,
        RegionKind::RightEyelid => RIGHT_EYELID,
        RegionKind::Lips => LIPS,
    }
}
