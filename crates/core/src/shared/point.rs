use serde::{Deserialize, Serialize};

/// A 2D image-space coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (*self - *other).length()
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Rotates around the origin by `radians` (counter-clockwise in a y-up frame).
    pub fn rotated(&self, radians: f64) -> Point {
        let (sin, cos) = radians.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Interior angle at `vertex` between the edges to `prev` and `next`, in degrees.
///
/// Returns `None` when either edge has zero length.
pub fn interior_angle_deg(prev: Point, vertex: Point, next: Point) -> Option<f64> {
    let a = prev - vertex;
    let b = next - vertex;
    let denom = a.length() * b.length();
    if denom <= f64::EPSILON {
        return None;
    }
    // Rounding can push the cosine just outside [-1, 1].
    let cos = (a.dot(&b) / denom).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}
