//! Pacing settings and their flat key-value persistence.

use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const WPM_RANGE: RangeInclusive<u32> = 50..=1000;
pub const MULTIPLIER_RANGE: RangeInclusive<f64> = 1.0..=10.0;

/// User-tunable pacing knobs. The serde renames are the on-disk key names of
/// the settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingSettings {
    #[serde(rename = "rateWordsPerMinute")]
    pub rate_wpm: u32,

    #[serde(rename = "pauseOnPunctuation")]
    pub pause_on_punctuation: bool,

    #[serde(rename = "punctuationDelayMultiplier")]
    pub punctuation_delay_multiplier: f64,
}

impl Default for PacingSettings {
    fn default() -> Self {
        Self {
            rate_wpm: 300,
            pause_on_punctuation: true,
            punctuation_delay_multiplier: 2.0,
        }
    }
}

impl PacingSettings {
    pub fn set_rate(&mut self, wpm: u32) {
        self.rate_wpm = wpm.clamp(*WPM_RANGE.start(), *WPM_RANGE.end());
    }

    pub fn adjust_rate(&mut self, delta: i32) {
        let wpm = (self.rate_wpm as i32 + delta)
            .clamp(*WPM_RANGE.start() as i32, *WPM_RANGE.end() as i32);
        self.rate_wpm = wpm as u32;
    }

    /// Non-finite input keeps the last-known-good value; finite input is
    /// clamped into range.
    pub fn set_punctuation_delay_multiplier(&mut self, value: f64) {
        if value.is_finite() {
            self.punctuation_delay_multiplier =
                value.clamp(*MULTIPLIER_RANGE.start(), *MULTIPLIER_RANGE.end());
        }
    }

    pub fn adjust_punctuation_delay_multiplier(&mut self, delta: f64) {
        self.set_punctuation_delay_multiplier(self.punctuation_delay_multiplier + delta);
    }

    /// Re-applies the range rules after deserialization; a hand-edited file
    /// may carry values the setters would have rejected.
    fn sanitized(mut self) -> Self {
        let rate = self.rate_wpm;
        self.set_rate(rate);

        if self.punctuation_delay_multiplier.is_finite() {
            let multiplier = self.punctuation_delay_multiplier;
            self.set_punctuation_delay_multiplier(multiplier);
        } else {
            self.punctuation_delay_multiplier = Self::default().punctuation_delay_multiplier;
        }
        self
    }
}

/// Flat key-value store backing the pacing settings. Reading never fails:
/// missing or malformed files degrade to defaults.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Per-user settings location, falling back to the working directory when
    /// the platform reports no config directory.
    pub fn open_default() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("presto").join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the settings document. Absent keys fall back field-by-field via
    /// `#[serde(default)]`; unknown keys are ignored.
    pub fn load(&self) -> PacingSettings {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return PacingSettings::default(),
        };

        match serde_json::from_str::<PacingSettings>(&raw) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                log::warn!(
                    "ignoring malformed settings file {}: {}",
                    self.path.display(),
                    err
                );
                PacingSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &PacingSettings) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let doc = serde_json::to_string_pretty(settings)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(&self.path, doc)
    }
}
