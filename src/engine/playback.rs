//! Playback controller: the timed state machine that walks the unit stream.

use std::time::Instant;

use crate::engine::frame::decompose;
use crate::engine::orp::alignment_index;
use crate::engine::pacing::unit_delay;
use crate::engine::surface::DisplaySurface;
use crate::settings::PacingSettings;

/// One reading session: the unit sequence, the cursor into it, and the timer
/// that advances the cursor while playing.
///
/// The controller never sleeps itself. The event loop reads
/// [`next_deadline`](Playback::next_deadline) to know how long it may block,
/// then calls [`tick`](Playback::tick); everything in between is plain
/// synchronous state mutation.
pub struct Playback {
    units: Vec<String>,
    position: usize,
    playing: bool,
    settings: PacingSettings,
    /// Single-slot armed advance. Cleared or overwritten before a new one is
    /// armed; two live deadlines would double-advance the stream.
    next_advance: Option<Instant>,
}

impl Playback {
    pub fn new(settings: PacingSettings) -> Self {
        Self {
            units: Vec::new(),
            position: 0,
            playing: false,
            settings,
            next_advance: None,
        }
    }

    /// Replaces the session wholesale: new units, position zero, paused. An
    /// empty sequence is a valid session that shows the no-content state.
    pub fn load(&mut self, units: Vec<String>, surface: &mut dyn DisplaySurface) {
        self.units = units;
        self.position = 0;
        self.playing = false;
        self.next_advance = None;
        self.emit(surface);
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current_unit(&self) -> Option<&str> {
        self.units.get(self.position).map(String::as_str)
    }

    pub fn settings(&self) -> &PacingSettings {
        &self.settings
    }

    /// Fraction of the stream already shown; a single-unit stream is always
    /// at zero.
    pub fn progress(&self) -> f64 {
        if self.units.len() <= 1 {
            0.0
        } else {
            self.position as f64 / (self.units.len() - 1) as f64
        }
    }

    pub fn toggle_play(&mut self, now: Instant) {
        if self.units.is_empty() {
            return;
        }
        if self.playing {
            self.playing = false;
            self.next_advance = None;
        } else {
            self.playing = true;
            self.arm(now);
        }
    }

    /// Manual navigation is a paused-only operation; at the far end it is a
    /// no-op.
    pub fn step_forward(&mut self, surface: &mut dyn DisplaySurface) {
        if self.playing {
            return;
        }
        if self.position + 1 < self.units.len() {
            self.position += 1;
            self.emit(surface);
        }
    }

    pub fn step_backward(&mut self, surface: &mut dyn DisplaySurface) {
        if self.playing {
            return;
        }
        if self.position > 0 {
            self.position -= 1;
            self.emit(surface);
        }
    }

    /// Back to the first unit. While playing, the armed advance is dropped
    /// and a fresh one armed from the new position.
    pub fn restart(&mut self, now: Instant, surface: &mut dyn DisplaySurface) {
        if self.units.is_empty() {
            return;
        }
        self.position = 0;
        self.emit(surface);
        if self.playing {
            self.next_advance = None;
            self.arm(now);
        }
    }

    pub fn set_rate(&mut self, wpm: u32) {
        self.settings.set_rate(wpm);
    }

    pub fn adjust_rate(&mut self, delta: i32) {
        self.settings.adjust_rate(delta);
    }

    pub fn set_pause_on_punctuation(&mut self, on: bool) {
        self.settings.pause_on_punctuation = on;
    }

    pub fn set_punctuation_delay_multiplier(&mut self, value: f64) {
        self.settings.set_punctuation_delay_multiplier(value);
    }

    pub fn adjust_punctuation_delay_multiplier(&mut self, delta: f64) {
        self.settings.adjust_punctuation_delay_multiplier(delta);
    }

    /// Deadline of the armed advance, if any. The event loop sleeps no
    /// longer than this.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_advance
    }

    /// Fires the armed advance once its deadline has passed. Returns true
    /// when the call changed playback state (advanced, or finished the pass).
    pub fn tick(&mut self, now: Instant, surface: &mut dyn DisplaySurface) -> bool {
        if !self.playing {
            return false;
        }
        let deadline = match self.next_advance {
            Some(deadline) => deadline,
            None => return false,
        };
        if now < deadline {
            return false;
        }

        if self.position + 1 < self.units.len() {
            self.position += 1;
            self.emit(surface);
            self.arm(now);
            true
        } else {
            // End of the stream: back to a restartable paused state.
            self.playing = false;
            self.next_advance = None;
            true
        }
    }

    /// Arms the advance for the unit currently on display. Settings are read
    /// here, at arm time, so a rate change applies from the next delay
    /// onward and never reshapes an already-armed deadline.
    fn arm(&mut self, now: Instant) {
        if let Some(unit) = self.units.get(self.position) {
            self.next_advance = Some(now + unit_delay(unit, &self.settings));
        }
    }

    fn emit(&self, surface: &mut dyn DisplaySurface) {
        match self.units.get(self.position) {
            Some(unit) => {
                let frame = decompose(unit, alignment_index(unit));
                surface.show_unit(&frame, self.progress());
            }
            None => surface.show_empty(),
        }
    }
}
