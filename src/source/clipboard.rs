use arboard::Clipboard;

use super::SourceError;

/// The user's current selection, as mirrored by the system clipboard. An
/// empty or non-text clipboard is "nothing to read", not a failure.
pub fn load() -> Result<String, SourceError> {
    let mut clipboard = Clipboard::new().map_err(|err| SourceError::Clipboard(err.to_string()))?;

    match clipboard.get_text() {
        Ok(text) => Ok(text),
        Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
        Err(err) => Err(SourceError::Clipboard(err.to_string())),
    }
}
