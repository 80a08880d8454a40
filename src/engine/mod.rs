pub mod frame;
pub mod orp;
pub mod pacing;
pub mod playback;
pub mod surface;
pub mod tokenize;

pub use frame::{decompose, WordFrame};
pub use orp::alignment_index;
pub use pacing::wpm_to_milliseconds;
pub use playback::Playback;
pub use surface::DisplaySurface;
pub use tokenize::segment;
