/// Three-part visual decomposition of a display unit around its focus
/// character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrame {
    pub prefix: String,
    pub focus: String,
    pub suffix: String,
}

/// Splits `unit` at `index` (a character position, not a byte offset) into
/// prefix, focus character, and suffix. Indexes past the end clamp to the
/// last character; an empty unit yields an empty frame.
pub fn decompose(unit: &str, index: usize) -> WordFrame {
    let chars: Vec<char> = unit.chars().collect();
    if chars.is_empty() {
        return WordFrame {
            prefix: String::new(),
            focus: String::new(),
            suffix: String::new(),
        };
    }

    let index = index.min(chars.len() - 1);
    WordFrame {
        prefix: chars[..index].iter().collect(),
        focus: chars[index].to_string(),
        suffix: chars[index + 1..].iter().collect(),
    }
}
