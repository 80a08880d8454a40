//! Text acquisition: where a reading session's raw text comes from.
//!
//! Sources return the raw text only; segmentation is the engine's job. An
//! empty result is a valid "nothing to read", not an error.

use std::path::PathBuf;

use thiserror::Error;

pub mod clipboard;
pub mod file;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    PdfExtract(String),

    #[error("EPUB extraction failed: {0}")]
    EpubExtract(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}
