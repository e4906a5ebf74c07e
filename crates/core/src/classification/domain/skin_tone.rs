use crate::shared::frame::Frame;
use crate::shared::point::Point;
use crate::shared::polygon::{pixel_span, Polygon};

use super::facial_traits::SkinTone;
use super::thresholds::SkinToneBands;

/// Estimates skin tone from the pixels inside `areas` (typically both cheeks).
///
/// Returns `None` when no pixel center falls inside any area.
pub fn estimate_skin_tone(
    frame: &Frame,
    areas: &[&Polygon],
    bands: &SkinToneBands,
) -> Option<SkinTone> {
    let rgb = mean_rgb_inside(frame, areas)?;
    Some(classify_skin_tone(luma(rgb), bands))
}

pub fn classify_skin_tone(luma: f64, bands: &SkinToneBands) -> SkinTone {
    if luma >= bands.fair_min {
        SkinTone::Fair
    } else if luma >= bands.light_min {
        SkinTone::Light
    } else if luma >= bands.medium_min {
        SkinTone::Medium
    } else if luma >= bands.tan_min {
        SkinTone::Tan
    } else {
        SkinTone::Deep
    }
}

/// Rec.601 luma on 0-255 channels.
pub fn luma([r, g, b]: [f64; 3]) -> f64 {
    0.299 * r + 0.587 * g + 0.114 * b
}

/// Mean color of pixels whose centers lie inside any of `areas`.
/// A pixel covered by two areas is counted once.
pub fn mean_rgb_inside(frame: &Frame, areas: &[&Polygon]) -> Option<[f64; 3]> {
    let view = frame.as_ndarray();
    let (x0, y0, x1, y1) = union_bounds(areas)?;
    let cols = pixel_span(x0, x1, frame.width());
    let rows = pixel_span(y0, y1, frame.height());

    let mut sum = [0.0f64; 3];
    let mut count = 0usize;
    for row in rows {
        for col in cols.clone() {
            let center = Point::new(col as f64 + 0.5, row as f64 + 0.5);
            if !areas.iter().any(|a| a.contains(center)) {
                continue;
            }
            for (c, acc) in sum.iter_mut().enumerate() {
                *acc += view[[row, col, c]] as f64;
            }
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    Some(sum.map(|s| s / count as f64))
}

fn union_bounds(areas: &[&Polygon]) -> Option<(f64, f64, f64, f64)> {
    areas
        .iter()
        .filter_map(|a| a.bounds())
        .reduce(|(ax0, ay0, ax1, ay1), (bx0, by0, bx1, by1)| {
            (ax0.min(bx0), ay0.min(by0), ax1.max(bx1), ay1.max(by1))
        })
}
