use crate::makeup::domain::makeup_configuration::Overlay;
use crate::makeup::domain::overlay_renderer::OverlayRenderer;
use crate::shared::frame::Frame;
use crate::shared::point::Point;
use crate::shared::polygon::pixel_span;

/// CPU renderer that alpha-blends every pixel whose center lies
/// inside the overlay polygon.
///
/// Good enough for preview images; no anti-aliasing or feathering.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuOverlayRenderer;

impl CpuOverlayRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl OverlayRenderer for CpuOverlayRenderer {
    fn render(
        &self,
        frame: &mut Frame,
        overlays: &[Overlay],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (fw, fh) = (frame.width(), frame.height());
        let mut view = frame.as_ndarray_mut();

        for overlay in overlays {
            let alpha = overlay.opacity.clamp(0.0, 1.0);
            if alpha == 0.0 {
                continue;
            }
            let Some((x0, y0, x1, y1)) = overlay.polygon.bounds() else {
                continue;
            };

            let cols = pixel_span(x0, x1, fw);
            let rows = pixel_span(y0, y1, fh);
            let src = overlay.color.channels();

            for row in rows {
                for col in cols.clone() {
                    let center = Point::new(col as f64 + 0.5, row as f64 + 0.5);
                    if !overlay.polygon.contains(center) {
                        continue;
                    }
                    for (c, &s) in src.iter().enumerate() {
                        let px = &mut view[[row, col, c]];
                        *px = blend(*px, s, alpha);
                    }
                }
            }
        }

        Ok(())
    }
}

fn blend(dst: u8, src: u8, alpha: f64) -> u8 {
    (dst as f64 * (1.0 - alpha) + src as f64 * alpha)
        .round()
        .clamp(0.0, 255.0) as u8
}
