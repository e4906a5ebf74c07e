use crate::shared::frame::Frame;

use super::makeup_configuration::Overlay;

/// Domain interface for drawing makeup overlays onto a frame.
///
/// Implementations modify the frame in place and draw overlays in slice order.
pub trait OverlayRenderer: Send {
    fn render(&self, frame: &mut Frame, overlays: &[Overlay])
        -> Result<(), Box<dyn std::error::Error>>;
}
