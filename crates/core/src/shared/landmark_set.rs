use super::point::Point;

/// Point count of a full MediaPipe Face Mesh (without iris refinement).
pub const MESH_LANDMARK_COUNT: usize = 468;

/// Fixed-topology facial keypoints for one frame.
///
/// Indices follow the detector's convention; this type does not validate
/// topology, only length. Depth is dropped on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds from raw detector rows of `[x, y]` or `[x, y, z]`.
    ///
    /// Returns `None` if any row has fewer than two coordinates.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        rows.iter()
            .map(|row| match row.as_slice() {
                [x, y, ..] => Some(Point::new(*x, *y)),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// True when every index below `required` is present.
    pub fn covers(&self, required: usize) -> bool {
        self.points.len() >= required
    }

    /// Looks up a list of indices, failing if any is out of range.
    pub fn select(&self, indices: &[usize]) -> Option<Vec<Point>> {
        indices.iter().map(|&i| self.get(i)).collect()
    }

    /// Applies `f` to every point, keeping topology.
    pub fn map_points<F>(&self, f: F) -> Self
    where
        F: Fn(Point) -> Point,
    {
        Self::new(self.points.iter().map(|p| f(*p)).collect())
    }
}
