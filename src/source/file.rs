use std::fs;
use std::path::Path;

use super::SourceError;

/// Reads a document's text by extension: `.pdf` and `.epub` get their text
/// extracted, anything else is treated as plain UTF-8 text.
pub fn load(path: &str) -> Result<String, SourceError> {
    let path = Path::new(path);
    if !path.exists() {
        return Err(SourceError::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => load_pdf(path),
        Some("epub") => load_epub(path),
        _ => Ok(fs::read_to_string(path)?),
    }
}

fn load_pdf(path: &Path) -> Result<String, SourceError> {
    pdf_extract::extract_text(path).map_err(|err| SourceError::PdfExtract(err.to_string()))
}

fn load_epub(path: &Path) -> Result<String, SourceError> {
    let mut doc =
        epub::doc::EpubDoc::new(path).map_err(|err| SourceError::EpubExtract(err.to_string()))?;

    let mut text = String::new();
    for chapter in 0..doc.get_num_chapters() {
        if !doc.set_current_chapter(chapter) {
            continue;
        }
        if let Some((markup, _mime)) = doc.get_current_str() {
            let chapter_text = strip_markup(&markup);
            if !chapter_text.is_empty() {
                if !text.is_empty() {
                    text.push_str("\n\n");
                }
                text.push_str(&chapter_text);
            }
        }
    }

    Ok(text)
}

/// Drops tags from chapter markup, keeping the text between them with blank
/// lines collapsed.
fn strip_markup(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file() {
        let result = load("/nonexistent/path/document.txt");
        assert!(matches!(result, Err(SourceError::FileNotFound(_))));
    }

    #[test]
    fn test_load_plain_text() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Hello from disk.").unwrap();

        let text = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "Hello from disk.");
    }

    #[test]
    fn test_load_unknown_extension_reads_as_text() {
        let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
        write!(file, "# Heading").unwrap();

        let text = load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "# Heading");
    }

    #[test]
    fn test_strip_markup_drops_tags() {
        let markup = "<html><body><p>Hello World</p><p>Again</p></body></html>";
        let text = strip_markup(markup);
        assert!(text.contains("Hello World"));
        assert!(text.contains("Again"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_strip_markup_collapses_blank_lines() {
        let markup = "<div>\n\n  one  \n\n\n</div>\n<div>two</div>";
        assert_eq!(strip_markup(markup), "one\ntwo");
    }
}
