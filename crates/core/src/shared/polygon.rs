use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::point::Point;

/// Axis-aligned bounds as (min_x, min_y, max_x, max_y).
pub type Bounds = (f64, f64, f64, f64);

/// Closed polygon; the last vertex implicitly connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Vertex mean. `None` for an empty polygon.
    pub fn center(&self) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Point::default(), |acc, p| acc + *p);
        Some(sum * (1.0 / self.vertices.len() as f64))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.vertices.first()?;
        Some(self.vertices.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(x0, y0, x1, y1), p| (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y)),
        ))
    }

    /// Shoelace area; 0 for fewer than three vertices.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        (twice / 2.0).abs()
    }

    /// Even-odd ray casting test.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// Pixel indices along one axis whose centers may lie in `[lo, hi]`,
/// clipped to `0..limit`. Clamping happens in `f64` so any finite or
/// infinite bound is safe.
pub fn pixel_span(lo: f64, hi: f64, limit: u32) -> Range<usize> {
    let limit = limit as f64;
    let start = lo.floor().clamp(0.0, limit) as usize;
    let end = (hi.ceil() + 1.0).clamp(0.0, limit) as usize;
    start..end
}
