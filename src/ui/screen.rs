//! Latest engine output, buffered for the next draw.

use crate::engine::frame::WordFrame;
use crate::engine::surface::DisplaySurface;

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenContent {
    Empty,
    Word { frame: WordFrame, progress: f64 },
}

/// The TUI's display surface. The engine pushes position changes in; the
/// draw loop reads the most recent one out.
pub struct Screen {
    content: ScreenContent,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            content: ScreenContent::Empty,
        }
    }

    pub fn content(&self) -> &ScreenContent {
        &self.content
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for Screen {
    fn show_unit(&mut self, frame: &WordFrame, progress: f64) {
        self.content = ScreenContent::Word {
            frame: frame.clone(),
            progress,
        };
    }

    fn show_empty(&mut self) {
        self.content = ScreenContent::Empty;
    }
}
