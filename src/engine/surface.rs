//! Seam between the playback engine and whatever draws the words.

use crate::engine::frame::WordFrame;

/// Receives every observable playback effect: a decomposed unit plus the
/// progress fraction on each position change, or the no-content state when a
/// session has nothing to show.
pub trait DisplaySurface {
    fn show_unit(&mut self, frame: &WordFrame, progress: f64);
    fn show_empty(&mut self);
}
