//! Application core: one reading session, its settings, and key handling.

pub mod command;

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::engine::playback::Playback;
use crate::engine::tokenize::segment;
use crate::settings::SettingsStore;
use crate::source;
use crate::ui::screen::Screen;

use command::Command;

const RATE_STEP_WPM: i32 = 25;
const MULTIPLIER_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Reader,
    Command,
    Quit,
}

pub struct App {
    pub mode: Mode,
    pub playback: Playback,
    pub screen: Screen,
    pub command_line: String,
    pub status: Option<String>,
    store: SettingsStore,
}

impl App {
    pub fn new(store: SettingsStore) -> Self {
        let settings = store.load();
        Self {
            mode: Mode::Reader,
            playback: Playback::new(settings),
            screen: Screen::new(),
            command_line: String::new(),
            status: None,
            store,
        }
    }

    /// Starts a fresh session from raw text. Empty text is a valid session
    /// with nothing to show.
    pub fn load_text(&mut self, text: &str, origin: &str) {
        let units = segment(text);
        let count = units.len();
        self.playback.load(units, &mut self.screen);

        if count == 0 {
            log::info!("no readable text in {origin}");
            self.status = Some(format!("No text found in {origin}."));
        } else {
            log::info!("loaded {count} units from {origin}");
            self.status = Some(format!("Loaded {count} words from {origin}."));
        }
    }

    pub fn load_file(&mut self, path: &str) {
        match source::file::load(path) {
            Ok(text) => self.load_text(&text, path),
            Err(err) => self.source_failed(err),
        }
    }

    pub fn load_clipboard(&mut self) {
        match source::clipboard::load() {
            Ok(text) => self.load_text(&text, "clipboard"),
            Err(err) => self.source_failed(err),
        }
    }

    /// A failed source degrades to an empty session, never a crash.
    fn source_failed(&mut self, err: source::SourceError) {
        log::warn!("text source failed: {err}");
        self.playback.load(Vec::new(), &mut self.screen);
        self.status = Some(err.to_string());
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match self.mode {
            Mode::Reader => self.handle_reader_key(key, now),
            Mode::Command => self.handle_command_key(key),
            Mode::Quit => {}
        }
    }

    fn handle_reader_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(' ') => self.playback.toggle_play(now),
            KeyCode::Right => self.playback.step_forward(&mut self.screen),
            KeyCode::Left => self.playback.step_backward(&mut self.screen),
            KeyCode::Char('r') => self.playback.restart(now, &mut self.screen),
            KeyCode::Up | KeyCode::Char('+') => {
                self.playback.adjust_rate(RATE_STEP_WPM);
                self.save_settings();
            }
            KeyCode::Down | KeyCode::Char('-') => {
                self.playback.adjust_rate(-RATE_STEP_WPM);
                self.save_settings();
            }
            KeyCode::Char('p') => {
                let on = !self.playback.settings().pause_on_punctuation;
                self.playback.set_pause_on_punctuation(on);
                self.save_settings();
            }
            KeyCode::Char(']') => {
                self.playback.adjust_punctuation_delay_multiplier(MULTIPLIER_STEP);
                self.save_settings();
            }
            KeyCode::Char('[') => {
                self.playback.adjust_punctuation_delay_multiplier(-MULTIPLIER_STEP);
                self.save_settings();
            }
            KeyCode::Char(c @ (':' | '@')) => {
                self.mode = Mode::Command;
                self.command_line.clear();
                self.command_line.push(c);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.mode = Mode::Quit,
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.command_line.clear();
                self.mode = Mode::Reader;
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.command_line);
                self.mode = Mode::Reader;
                self.run_command(command::parse(&input));
            }
            KeyCode::Backspace => {
                self.command_line.pop();
                if self.command_line.is_empty() {
                    self.mode = Mode::Reader;
                }
            }
            KeyCode::Char(c) => self.command_line.push(c),
            _ => {}
        }
    }

    fn run_command(&mut self, cmd: Command) {
        match cmd {
            Command::Quit => self.mode = Mode::Quit,
            Command::Help => {
                self.status = Some(
                    "space play/pause · arrows step/speed · r restart · p punctuation pause \
                     · [/] pause length · @file load · @@ clipboard · :q quit"
                        .to_string(),
                );
            }
            Command::LoadFile(path) => self.load_file(&path),
            Command::LoadClipboard => self.load_clipboard(),
            Command::Unknown(input) => {
                self.status = Some(format!("Unknown command: {input}"));
            }
        }
    }

    /// Every user-initiated settings change is written straight back to the
    /// store; a failed write is a logged warning, not a hard stop.
    fn save_settings(&mut self) {
        if let Err(err) = self.store.save(self.playback.settings()) {
            log::warn!("could not save settings: {err}");
        }
    }
}
