//! Text segmentation: raw text to display units.

/// Characters a token may consist of entirely to count as isolated
/// punctuation. Broader than the set that slows the cadence in `pacing`.
const FOLDABLE: [char; 6] = ['!', '?', ';', ':', ',', '.'];

fn is_isolated_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| FOLDABLE.contains(&c))
}

/// Splits text into display units: whitespace-separated words, with isolated
/// punctuation tokens folded onto the preceding unit. French typography puts
/// a space before `!` and `?`, so `Salut !` arrives as two tokens but reads
/// as one unit.
pub fn segment(text: &str) -> Vec<String> {
    let mut units: Vec<String> = Vec::new();

    for token in text.split_whitespace() {
        if is_isolated_punctuation(token) {
            // The first token has nothing to fold onto and stands alone.
            if let Some(last) = units.last_mut() {
                last.push(' ');
                last.push_str(token);
                continue;
            }
        }
        units.push(token.to_string());
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_empty_input() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_segment_whitespace_only_input() {
        assert!(segment("   ").is_empty());
        assert!(segment(" \t\n ").is_empty());
    }

    #[test]
    fn test_segment_two_words() {
        assert_eq!(segment("Hello world"), vec!["Hello", "world"]);
    }

    #[test]
    fn test_segment_collapses_whitespace_runs() {
        assert_eq!(segment("  Hello \n\t world  "), vec!["Hello", "world"]);
    }

    #[test]
    fn test_segment_folds_isolated_punctuation() {
        assert_eq!(segment("Salut ! Ça va ?"), vec!["Salut !", "Ça", "va ?"]);
    }

    #[test]
    fn test_segment_folds_ellipsis() {
        assert_eq!(segment("Wait ..."), vec!["Wait ..."]);
    }

    #[test]
    fn test_segment_folds_colon_and_semicolon() {
        assert_eq!(segment("note : this ; that"), vec!["note :", "this ;", "that"]);
    }

    #[test]
    fn test_segment_folds_mixed_punctuation_token() {
        assert_eq!(segment("quoi ?!"), vec!["quoi ?!"]);
    }

    #[test]
    fn test_segment_folds_repeatedly_onto_same_unit() {
        assert_eq!(segment("Hé ! ?"), vec!["Hé ! ?"]);
    }

    #[test]
    fn test_segment_leading_punctuation_stands_alone() {
        assert_eq!(segment("! Hello"), vec!["!", "Hello"]);
    }

    #[test]
    fn test_segment_attached_punctuation_stays_attached() {
        assert_eq!(segment("Hello, world."), vec!["Hello,", "world."]);
    }

    #[test]
    fn test_segment_units_never_carry_outer_whitespace() {
        for unit in segment("  one two !  three.  ") {
            assert_eq!(unit, unit.trim());
            assert!(!unit.is_empty());
        }
    }
}
