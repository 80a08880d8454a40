//! Delay computation for the playback cadence.

use std::time::Duration;

use crate::settings::PacingSettings;

/// Lower bound on any computed delay; a corrupt rate must never arm a
/// zero-length timer.
const MIN_DELAY_MS: u64 = 10;

/// Milliseconds per unit at the given words-per-minute rate.
pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / wpm.max(1) as f64).round() as u64
}

/// Only sentence-final marks slow the cadence. Narrower on purpose than the
/// folding set in `tokenize`: a unit ending in `,` or `:` reads at full
/// speed.
fn ends_with_pause_mark(unit: &str) -> bool {
    unit.ends_with(['.', '!', '?'])
}

/// Display duration for `unit` under the current pacing settings.
pub fn unit_delay(unit: &str, settings: &PacingSettings) -> Duration {
    let mut delay_ms = wpm_to_milliseconds(settings.rate_wpm) as f64;

    if settings.pause_on_punctuation && ends_with_pause_mark(unit) {
        delay_ms *= settings.punctuation_delay_multiplier;
    }

    Duration::from_millis((delay_ms.round() as u64).max(MIN_DELAY_MS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wpm_to_milliseconds_300() {
        assert_eq!(wpm_to_milliseconds(300), 200);
    }

    #[test]
    fn test_wpm_to_milliseconds_600() {
        assert_eq!(wpm_to_milliseconds(600), 100);
    }

    #[test]
    fn test_wpm_to_milliseconds_rounds() {
        // 60,000 / 165 = 363.63..., truncation would give 363.
        assert_eq!(wpm_to_milliseconds(165), 364);
    }

    #[test]
    fn test_wpm_to_milliseconds_zero_rate_does_not_divide_by_zero() {
        assert_eq!(wpm_to_milliseconds(0), 60_000);
    }

    #[test]
    fn test_unit_delay_plain_word() {
        let settings = PacingSettings::default();
        assert_eq!(unit_delay("hello", &settings), Duration::from_millis(200));
    }

    #[test]
    fn test_unit_delay_sentence_final_mark_doubles() {
        let settings = PacingSettings::default();
        assert_eq!(unit_delay("end.", &settings), Duration::from_millis(400));
        assert_eq!(unit_delay("end!", &settings), Duration::from_millis(400));
        assert_eq!(unit_delay("va ?", &settings), Duration::from_millis(400));
    }

    #[test]
    fn test_unit_delay_comma_reads_at_full_speed() {
        // Folding recognizes `,` and `:`, pacing does not.
        let settings = PacingSettings::default();
        assert_eq!(unit_delay("end,", &settings), Duration::from_millis(200));
        assert_eq!(unit_delay("note :", &settings), Duration::from_millis(200));
    }

    #[test]
    fn test_unit_delay_respects_pause_toggle() {
        let settings = PacingSettings {
            pause_on_punctuation: false,
            ..PacingSettings::default()
        };
        assert_eq!(unit_delay("end.", &settings), Duration::from_millis(200));
    }

    #[test]
    fn test_unit_delay_custom_multiplier() {
        let mut settings = PacingSettings::default();
        settings.set_punctuation_delay_multiplier(3.0);
        assert_eq!(unit_delay("end.", &settings), Duration::from_millis(600));
    }

    #[test]
    fn test_unit_delay_enforces_floor() {
        // The settings type clamps rates, but the floor must hold even for a
        // raw out-of-range value.
        let settings = PacingSettings {
            rate_wpm: 60_000_000,
            ..PacingSettings::default()
        };
        assert_eq!(unit_delay("hello", &settings), Duration::from_millis(10));
    }
}
