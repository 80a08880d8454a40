//! presto: an RSVP speed reader for the terminal.
//!
//! Text comes in from the clipboard or a document file, gets segmented into
//! display units, and is flashed one unit at a time with the focus character
//! held at a fixed column so the eye never has to travel.

pub mod app;
pub mod engine;
pub mod settings;
pub mod source;
pub mod ui;
